//! Temperature scans: equilibrate, sample, and reduce to `(T, statistic, error)` triples.

/// Scan configuration and the serial (and optionally parallel) drivers.
pub mod driver;
/// Comma separated result files.
pub mod output;

#[cfg(feature = "parallel")]
pub use driver::parallel_scan::*;
pub use driver::*;
pub use output::*;
