#![allow(dead_code)]

mod prober;

pub use prober::*;
