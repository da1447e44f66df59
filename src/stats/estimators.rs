use crate::error::{require_samples, Result};
use crate::lattice::SpinLattice;
use crate::util::vec_help::shifted_variance;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Magnetic susceptibility per spin, `(<M^2> - <M>^2) / (L^2 T)`.
///
/// Fails for an empty sample. A single sample gives exactly zero.
pub fn susceptibility(samples: &[f64], temperature: f64, linear_size: usize) -> Result<f64> {
    require_samples(1, samples.len())?;
    let variance = shifted_variance(samples);
    Ok(variance / ((linear_size as f64).powi(2) * temperature))
}

/// Heat capacity, `(<E^2> - <E>^2) / T^2`. Not normalized by system size.
///
/// Fails for an empty sample. A single sample gives exactly zero.
pub fn heat_capacity(samples: &[f64], temperature: f64) -> Result<f64> {
    require_samples(1, samples.len())?;
    let variance = shifted_variance(samples);
    Ok(variance / (temperature * temperature))
}

/// A quantity sampled from the lattice, paired with the statistic derived from its fluctuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Observable {
    /// Sample the magnetisation and derive the susceptibility.
    Magnetisation,
    /// Sample the energy and derive the heat capacity.
    Energy,
}

impl Observable {
    /// Read the observable off the lattice.
    pub fn measure(self, lattice: &SpinLattice) -> f64 {
        match self {
            Observable::Magnetisation => lattice.system_magnetisation(),
            Observable::Energy => lattice.system_energy(),
        }
    }

    /// Statistic of a series of measurements at `temperature` on an `L x L` lattice.
    pub fn statistic(self, samples: &[f64], temperature: f64, linear_size: usize) -> Result<f64> {
        match self {
            Observable::Magnetisation => susceptibility(samples, temperature, linear_size),
            Observable::Energy => heat_capacity(samples, temperature),
        }
    }
}
