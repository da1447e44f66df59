use crate::dynamics::{DynamicsEngine, MoveKind};
use crate::error::{require_samples, IsingError, Result};
use crate::lattice::{InitialState, SpinLattice};
use crate::stats::{ErrorMethod, Observable};
use rand::Rng;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Parameters of a temperature scan. Sweep counts are in units of `L^2` moves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Linear size `L` of the `L x L` lattice.
    pub linear_size: usize,
    /// First temperature.
    pub t_start: f64,
    /// Temperature the scan steps towards, exclusive.
    pub t_end: f64,
    /// Number of temperature points.
    pub n_points: usize,
    /// Sweeps run at each temperature before sampling.
    pub equilibration_sweeps: usize,
    /// Sweeps run before each sample.
    pub decorrelation_sweeps: usize,
    /// Samples taken at each temperature.
    pub n_samples: usize,
    /// Dynamics used for every move.
    pub move_kind: MoveKind,
    /// How the lattice is filled at the start.
    pub initial_state: InitialState,
    /// Whether to also equilibrate once before the first temperature point.
    pub pre_equilibrate: bool,
    /// What is sampled, and so which statistic is derived.
    pub observable: Observable,
    /// How error bars are made.
    pub error_method: ErrorMethod,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            linear_size: 50,
            t_start: 1.5,
            t_end: 4.0,
            n_points: 80,
            equilibration_sweeps: 100,
            decorrelation_sweeps: 16,
            n_samples: 512,
            move_kind: MoveKind::Glauber,
            initial_state: InitialState::AllUp,
            pre_equilibrate: false,
            observable: Observable::Magnetisation,
            error_method: ErrorMethod::Bootstrap,
        }
    }
}

impl ScanConfig {
    /// Check the lattice size, that the move counts fit in a `usize`, and that enough samples
    /// are taken for the error method.
    pub fn validate(&self) -> Result<()> {
        if self.linear_size == 0 {
            return Err(IsingError::InvalidLatticeSize(self.linear_size));
        }
        let l = self.linear_size;
        for sweeps in [self.equilibration_sweeps, self.decorrelation_sweeps] {
            l.checked_mul(l)
                .and_then(|moves| moves.checked_mul(sweeps))
                .ok_or(IsingError::MoveCountOverflow {
                    sweeps,
                    linear_size: l,
                })?;
        }
        require_samples(self.error_method.min_samples(), self.n_samples)
    }

    /// Moves in one sweep.
    pub fn sweep_moves(&self) -> usize {
        self.linear_size.saturating_mul(self.linear_size)
    }

    /// Moves run at each temperature before sampling.
    pub fn equilibration_moves(&self) -> usize {
        self.equilibration_sweeps.saturating_mul(self.sweep_moves())
    }

    /// Moves run before each sample.
    pub fn decorrelation_moves(&self) -> usize {
        self.decorrelation_sweeps.saturating_mul(self.sweep_moves())
    }

    /// The temperatures visited, stepping by `(t_end - t_start) / n_points` from `t_start`.
    pub fn temperatures(&self) -> Vec<f64> {
        let increment = (self.t_end - self.t_start) / self.n_points as f64;
        let mut t = self.t_start;
        (0..self.n_points)
            .map(|_| {
                let here = t;
                t += increment;
                here
            })
            .collect()
    }
}

/// A statistic and its error at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DataPoint {
    /// Temperature of the point.
    pub temperature: f64,
    /// Susceptibility or heat capacity.
    pub value: f64,
    /// Resampled error of `value`.
    pub error: f64,
}

/// Ordered results of a scan.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ScanResults {
    points: Vec<DataPoint>,
}

impl ScanResults {
    /// Wrap a list of points.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Get a ref of the points.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Take the points.
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }

    /// The temperature of each point, in order.
    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    /// The statistic of each point, in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// The error of each point, in order.
    pub fn errors(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.error).collect()
    }
}

/// Equilibrate at the lattice's current temperature, then sample and reduce to a data point.
pub fn measure_point<R: Rng>(
    engine: &mut DynamicsEngine<R>,
    config: &ScanConfig,
) -> Result<DataPoint> {
    let temperature = engine.lattice_ref().temperature();
    let equilibration = engine.run_sweeps(config.equilibration_moves(), config.move_kind);

    let samples = (0..config.n_samples)
        .map(|_| {
            engine.run_sweeps(config.decorrelation_moves(), config.move_kind);
            config.observable.measure(engine.lattice_ref())
        })
        .collect::<Vec<_>>();

    let observable = config.observable;
    let l = config.linear_size;
    let value = observable.statistic(&samples, temperature, l)?;
    let error = config
        .error_method
        .estimate(&samples, engine.rng_mut(), |s| {
            observable.statistic(s, temperature, l)
        })?;
    log::debug!(
        "T={}: {:?} statistic {} +- {} (equilibration acceptance {:.3})",
        temperature,
        observable,
        value,
        error,
        equilibration.acceptance_ratio()
    );
    Ok(DataPoint {
        temperature,
        value,
        error,
    })
}

/// Run a scan on a single lattice, carrying its state from each temperature to the next.
pub fn run_scan<R: Rng>(config: &ScanConfig, mut rng: R) -> Result<ScanResults> {
    config.validate()?;
    log::info!(
        "Starting {:?} scan of {} points on a {}x{} lattice",
        config.observable,
        config.n_points,
        config.linear_size,
        config.linear_size
    );
    let lattice = SpinLattice::new_with_initial_state(
        config.initial_state,
        config.linear_size,
        config.t_start,
        &mut rng,
    )?;
    let mut engine = DynamicsEngine::new_with_rng(lattice, rng);
    if config.pre_equilibrate {
        engine.run_sweeps(config.equilibration_moves(), config.move_kind);
    }

    let points = config
        .temperatures()
        .into_iter()
        .map(|t| {
            engine.lattice_mut().set_temperature(t);
            measure_point(&mut engine, config)
        })
        .collect::<Result<Vec<_>>>()?;
    log::info!("Finished scan with {} points", points.len());
    Ok(ScanResults::new(points))
}

/// Scans whose temperature points run independently on a rayon pool.
#[cfg(feature = "parallel")]
pub mod parallel_scan {
    use super::*;
    use rand::SeedableRng;
    use rayon::prelude::*;

    /// Run each temperature point on its own fresh lattice and rng, seeded `seed + index`.
    ///
    /// Unlike [`run_scan`] no state is carried between temperatures, so every point starts
    /// from `config.initial_state`.
    pub fn run_scan_parallel<R>(config: &ScanConfig, seed: u64) -> Result<ScanResults>
    where
        R: Rng + SeedableRng + Send,
    {
        config.validate()?;
        log::info!(
            "Starting parallel {:?} scan of {} points on a {}x{} lattice",
            config.observable,
            config.n_points,
            config.linear_size,
            config.linear_size
        );
        let points = config
            .temperatures()
            .into_par_iter()
            .enumerate()
            .map(|(indx, t)| {
                let mut rng = R::seed_from_u64(seed.wrapping_add(indx as u64));
                let lattice = SpinLattice::new_with_initial_state(
                    config.initial_state,
                    config.linear_size,
                    t,
                    &mut rng,
                )?;
                let mut engine = DynamicsEngine::new_with_rng(lattice, rng);
                if config.pre_equilibrate {
                    engine.run_sweeps(config.equilibration_moves(), config.move_kind);
                }
                measure_point(&mut engine, config)
            })
            .collect::<Result<Vec<_>>>()?;
        log::info!("Finished parallel scan with {} points", points.len());
        Ok(ScanResults::new(points))
    }
}
