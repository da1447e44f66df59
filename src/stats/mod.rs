//! Fluctuation statistics of sample series and their resampled errors.

/// Susceptibility and heat capacity.
pub mod estimators;
/// Bootstrap and jackknife error estimates.
pub mod resample;

pub use estimators::*;
pub use resample::*;
