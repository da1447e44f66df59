use crate::error::{IsingError, Result};
use crate::lattice::SpinLattice;
use rand::prelude::ThreadRng;
use rand::Rng;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

/// Which trial move a sweep applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Single site spin flip, token `"g"`.
    Glauber,
    /// Two site spin exchange, token `"k"`.
    Kawasaki,
}

impl MoveKind {
    /// The single letter token for this move kind.
    pub fn token(self) -> &'static str {
        match self {
            MoveKind::Glauber => "g",
            MoveKind::Kawasaki => "k",
        }
    }
}

impl FromStr for MoveKind {
    type Err = IsingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "g" => Ok(MoveKind::Glauber),
            "k" => Ok(MoveKind::Kawasaki),
            _ => Err(IsingError::UnknownMoveKind(s.to_string())),
        }
    }
}

/// Whether a trial move was kept or undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The trial lowered or kept the energy, or passed the boltzmann test.
    Accepted,
    /// The trial raised the energy, failed the boltzmann test and was undone.
    Reverted,
}

/// Counts from a run of moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Moves attempted.
    pub attempted: usize,
    /// Moves left in place.
    pub accepted: usize,
}

impl SweepSummary {
    /// Fraction of attempted moves which were accepted, `0` if none were attempted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempted as f64
        }
    }
}

// Keep the trial unless it raised the energy and fails the boltzmann test.
fn settle<R: Rng, F: FnOnce(&mut SpinLattice)>(
    lattice: &mut SpinLattice,
    rng: &mut R,
    delta_e: f64,
    undo: F,
) -> MoveOutcome {
    if delta_e > 0.0 && !lattice.accept_by_probability(rng, delta_e) {
        undo(lattice);
        MoveOutcome::Reverted
    } else {
        MoveOutcome::Accepted
    }
}

/// Attempt a glauber flip of the spin at `(i, j)`.
pub fn glauber_trial<R: Rng>(
    lattice: &mut SpinLattice,
    rng: &mut R,
    i: usize,
    j: usize,
) -> MoveOutcome {
    let before = lattice.local_energy(i, j);
    lattice.flip(i, j);
    let delta_e = lattice.local_energy(i, j) - before;
    settle(lattice, rng, delta_e, |l| l.flip(i, j))
}

/// Attempt a kawasaki exchange of the spins at `a` and `b`.
///
/// When the sites are diagonal neighbors (both raw index differences exactly one) the energy
/// change is raised by `4J` before the acceptance decision. Orthogonal neighbors and sites
/// which are only adjacent through the periodic wrap get no correction.
pub fn kawasaki_trial<R: Rng>(
    lattice: &mut SpinLattice,
    rng: &mut R,
    a: (usize, usize),
    b: (usize, usize),
) -> MoveOutcome {
    let ((i1, j1), (i2, j2)) = (a, b);
    let before = lattice.local_energy(i1, j1) + lattice.local_energy(i2, j2);
    lattice.swap(i1, j1, i2, j2);
    let after = lattice.local_energy(i1, j1) + lattice.local_energy(i2, j2);
    let mut delta_e = after - before;
    if i1.abs_diff(i2) == 1 && j1.abs_diff(j2) == 1 {
        delta_e += 4.0 * lattice.coupling();
    }
    settle(lattice, rng, delta_e, |l| l.swap(i1, j1, i2, j2))
}

/// Runs glauber or kawasaki dynamics on a lattice it owns, drawing from its own rng.
pub struct DynamicsEngine<R: Rng> {
    lattice: SpinLattice,
    rng: R,
}

impl<R: Rng> Debug for DynamicsEngine<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicsEngine")
            .field("lattice", &self.lattice)
            .finish()
    }
}

/// Make an engine using the thread local rng.
pub fn new_thread_rng(lattice: SpinLattice) -> DynamicsEngine<ThreadRng> {
    DynamicsEngine::new_with_rng(lattice, rand::thread_rng())
}

impl<R: Rng> DynamicsEngine<R> {
    /// Make a new engine around `lattice`, drawing all randomness from `rng`.
    pub fn new_with_rng(lattice: SpinLattice, rng: R) -> Self {
        Self { lattice, rng }
    }

    /// Flip a uniformly chosen site.
    pub fn glauber_move(&mut self) -> MoveOutcome {
        let n = self.lattice.linear_size();
        let i = self.rng.gen_range(0..n);
        let j = self.rng.gen_range(0..n);
        glauber_trial(&mut self.lattice, &mut self.rng, i, j)
    }

    /// Exchange two independently and uniformly chosen sites, which may coincide.
    pub fn kawasaki_move(&mut self) -> MoveOutcome {
        let n = self.lattice.linear_size();
        let i1 = self.rng.gen_range(0..n);
        let j1 = self.rng.gen_range(0..n);
        let i2 = self.rng.gen_range(0..n);
        let j2 = self.rng.gen_range(0..n);
        kawasaki_trial(&mut self.lattice, &mut self.rng, (i1, j1), (i2, j2))
    }

    /// Perform a single move of the given kind.
    pub fn do_move(&mut self, kind: MoveKind) -> MoveOutcome {
        match kind {
            MoveKind::Glauber => self.glauber_move(),
            MoveKind::Kawasaki => self.kawasaki_move(),
        }
    }

    /// Perform exactly `count` moves of the given kind.
    pub fn run_sweeps(&mut self, count: usize, kind: MoveKind) -> SweepSummary {
        let accepted = (0..count)
            .filter(|_| self.do_move(kind) == MoveOutcome::Accepted)
            .count();
        let summary = SweepSummary {
            attempted: count,
            accepted,
        };
        log::trace!(
            "{:?}: {} of {} moves accepted at T={}",
            kind,
            summary.accepted,
            summary.attempted,
            self.lattice.temperature()
        );
        summary
    }

    /// Like [`Self::run_sweeps`] with the move kind given as `"g"` or `"k"`.
    ///
    /// Any other token is an error and no moves are made.
    pub fn run_sweeps_by_token(&mut self, count: usize, token: &str) -> Result<SweepSummary> {
        let kind = token.parse::<MoveKind>()?;
        Ok(self.run_sweeps(count, kind))
    }

    /// Get a ref of the lattice.
    pub fn lattice_ref(&self) -> &SpinLattice {
        &self.lattice
    }

    /// Get a mutable ref of the lattice, e.g. to change its temperature.
    pub fn lattice_mut(&mut self) -> &mut SpinLattice {
        &mut self.lattice
    }

    /// Get a mutable ref of the rng, to share it with resampling.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Take the lattice and rng back out.
    pub fn into_parts(self) -> (SpinLattice, R) {
        (self.lattice, self.rng)
    }
}
