use crate::error::{require_samples, Result};
use crate::stats::estimators::{heat_capacity, susceptibility};
use crate::util::vec_help::{mean, mean_sq, without_index};
use rand::Rng;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Number of bootstrap replicates, including the unresampled one.
pub const BOOTSTRAP_REPLICATES: usize = 256;

/// Evaluate `estimator` on the original sample and on `BOOTSTRAP_REPLICATES - 1` resamples.
///
/// Entry 0 is the estimator on the untouched sample. Every other entry is the estimator on a
/// sample of the same length drawn uniformly with replacement from the original.
pub fn bootstrap_replicates<R, F>(samples: &[f64], rng: &mut R, estimator: F) -> Result<Vec<f64>>
where
    R: Rng,
    F: Fn(&[f64]) -> Result<f64>,
{
    require_samples(1, samples.len())?;
    let n = samples.len();
    let mut replicates = Vec::with_capacity(BOOTSTRAP_REPLICATES);
    replicates.push(estimator(samples)?);

    let mut resampled = vec![0.0; n];
    for _ in 1..BOOTSTRAP_REPLICATES {
        resampled
            .iter_mut()
            .for_each(|x| *x = samples[rng.gen_range(0..n)]);
        replicates.push(estimator(&resampled)?);
    }
    Ok(replicates)
}

/// Bootstrap standard error, `sqrt(<r^2> - <r>^2)` over the replicates.
pub fn bootstrap<R, F>(samples: &[f64], rng: &mut R, estimator: F) -> Result<f64>
where
    R: Rng,
    F: Fn(&[f64]) -> Result<f64>,
{
    let replicates = bootstrap_replicates(samples, rng, estimator)?;
    let r = mean(&replicates);
    // Rounding can leave a tiny negative variance when all replicates agree.
    Ok((mean_sq(&replicates) - r * r).max(0.0).sqrt())
}

/// Evaluate `estimator` on each leave-one-out subsample, in order.
pub fn jackknife_replicates<F>(samples: &[f64], estimator: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> Result<f64>,
{
    require_samples(2, samples.len())?;
    (0..samples.len())
        .map(|i| estimator(&without_index(samples, i)))
        .collect()
}

/// Jackknife error, `sqrt(sum_i (r_i - <r>)^2)`.
///
/// This is the plain root of the summed squared deviations, without the usual `(n-1)/n`
/// factor.
pub fn jackknife<F>(samples: &[f64], estimator: F) -> Result<f64>
where
    F: Fn(&[f64]) -> Result<f64>,
{
    let replicates = jackknife_replicates(samples, estimator)?;
    let r = mean(&replicates);
    Ok(replicates
        .iter()
        .map(|x| (x - r) * (x - r))
        .sum::<f64>()
        .sqrt())
}

/// Bootstrap error of the susceptibility of a magnetisation series.
pub fn susceptibility_bootstrap<R: Rng>(
    magnetisations: &[f64],
    temperature: f64,
    linear_size: usize,
    rng: &mut R,
) -> Result<f64> {
    bootstrap(magnetisations, rng, |s| {
        susceptibility(s, temperature, linear_size)
    })
}

/// Jackknife error of the susceptibility of a magnetisation series.
pub fn susceptibility_jackknife(
    magnetisations: &[f64],
    temperature: f64,
    linear_size: usize,
) -> Result<f64> {
    jackknife(magnetisations, |s| susceptibility(s, temperature, linear_size))
}

/// Bootstrap error of the heat capacity of an energy series.
pub fn heat_capacity_bootstrap<R: Rng>(
    energies: &[f64],
    temperature: f64,
    rng: &mut R,
) -> Result<f64> {
    bootstrap(energies, rng, |s| heat_capacity(s, temperature))
}

/// Jackknife error of the heat capacity of an energy series.
pub fn heat_capacity_jackknife(energies: &[f64], temperature: f64) -> Result<f64> {
    jackknife(energies, |s| heat_capacity(s, temperature))
}

/// Which resampling procedure produces an error bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ErrorMethod {
    /// See [`bootstrap`].
    Bootstrap,
    /// See [`jackknife`].
    Jackknife,
}

impl ErrorMethod {
    /// Fewest samples the method accepts.
    pub fn min_samples(self) -> usize {
        match self {
            ErrorMethod::Bootstrap => 1,
            ErrorMethod::Jackknife => 2,
        }
    }

    /// Error of `estimator` on `samples`. The rng is only drawn from by the bootstrap.
    pub fn estimate<R, F>(self, samples: &[f64], rng: &mut R, estimator: F) -> Result<f64>
    where
        R: Rng,
        F: Fn(&[f64]) -> Result<f64>,
    {
        match self {
            ErrorMethod::Bootstrap => bootstrap(samples, rng, estimator),
            ErrorMethod::Jackknife => jackknife(samples, estimator),
        }
    }
}
