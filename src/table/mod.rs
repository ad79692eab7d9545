//! Version table layer
//! - types.rs: VersionEntry and the immutable VersionTable
//! - loader.rs: version-table.txt parser

pub mod loader;
pub mod types;

pub use loader::{ParseError, load_version_table, parse_version_table};
pub use types::{VersionEntry, VersionTable};
