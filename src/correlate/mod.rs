//! Correlation of observed dates with known releases
//!
//! # Modules
//!
//! - [`matcher`]: Exact/approximate matching of one date against the version table
//! - [`aggregate`]: Deduplicated collection of matches across resources

pub mod aggregate;
pub mod matcher;

pub use aggregate::MatchSet;
pub use matcher::{
    ApproximateStrategy, DAY_OFFSETS, DateMatches, MatchResult, Precision, check_date,
    check_date_with,
};
