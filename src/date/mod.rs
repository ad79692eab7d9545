//! Header date normalization
//!
//! Turns the cache-validation headers of a probed resource into calendar
//! dates that can be correlated against the version table.
//!
//! # Modules
//!
//! - [`header`]: Recognized date headers and the observations built from them
//! - [`normalize`]: `ETag` and `Last-Modified` decoders

pub mod header;
pub mod normalize;

pub use header::{HeaderKind, ObservedTimestamp};
pub use normalize::{FormatError, etag_to_date, etag_to_date_in, last_modified_to_date};
