//! Determine the software version of a remote PAN-OS target.
//!
//! Static resources served by the appliance carry `ETag` and `Last-Modified`
//! headers that track the build date of the installed release. Matching those
//! dates against a table of release dates narrows the target down to a few
//! candidate versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Probe    │────▶│    Date     │────▶│  Correlate  │────▶│  MatchSet   │
//! │  (headers)  │     │ (normalize) │     │ (±2 days)   │     │  (dedup)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                ▲
//!                                         ┌─────────────┐
//!                                         │    Table    │
//!                                         │ (versions)  │
//!                                         └─────────────┘
//! ```

pub mod config;
pub mod correlate;
pub mod date;
pub mod logging;
pub mod probe;
pub mod scanner;
pub mod table;
