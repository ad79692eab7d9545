//! Transport layer: fetching date headers from the target
//!
//! - prober.rs: Prober trait, DateHeaders, ProbeError
//! - http.rs: reqwest implementation

pub mod http;
pub mod prober;

pub use http::HttpProber;
#[cfg(test)]
pub use prober::MockProber;
pub use prober::{DateHeaders, ProbeError, Prober};
