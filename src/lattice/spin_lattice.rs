use crate::error::{IsingError, Result};
use itertools::Itertools;
use rand::Rng;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single ising spin, either +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Spin {
    /// +1
    Up,
    /// -1
    Down,
}

impl Spin {
    /// Make a spin from a boolean, `true` being up.
    pub fn from_bool(up: bool) -> Self {
        if up {
            Spin::Up
        } else {
            Spin::Down
        }
    }

    /// The signed value of the spin.
    pub fn value(self) -> i8 {
        match self {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }

    /// The opposite spin.
    pub fn flipped(self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

impl From<Spin> for f64 {
    fn from(s: Spin) -> f64 {
        f64::from(s.value())
    }
}

/// How to fill a freshly made lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum InitialState {
    /// Every spin +1.
    AllUp,
    /// Each spin independently +1 or -1 with equal probability.
    Random,
}

/// A square grid of spins with periodic boundaries and a temperature.
///
/// Sites are addressed by `(row, column)`, both in `[0, N)`. Row `N-1` is the northern
/// neighbor of row `0` and column `0` the eastern neighbor of column `N-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinLattice {
    spins: Vec<Spin>,
    size: usize,
    temperature: f64,
    coupling: f64,
    boltzmann: f64,
}

impl SpinLattice {
    /// Make an `size x size` lattice with all spins up.
    pub fn new_all_up(size: usize, temperature: f64) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self::from_spins(vec![Spin::Up; size * size], size, temperature))
    }

    /// Make an `size x size` lattice with independently randomized spins.
    pub fn new_random<R: Rng>(size: usize, temperature: f64, rng: &mut R) -> Result<Self> {
        Self::check_size(size)?;
        let spins = make_random_spin_state(size * size, rng);
        Ok(Self::from_spins(spins, size, temperature))
    }

    /// Make a lattice according to `initial`. The rng is only drawn from for random states.
    pub fn new_with_initial_state<R: Rng>(
        initial: InitialState,
        size: usize,
        temperature: f64,
        rng: &mut R,
    ) -> Result<Self> {
        match initial {
            InitialState::AllUp => Self::new_all_up(size, temperature),
            InitialState::Random => Self::new_random(size, temperature, rng),
        }
    }

    /// Make a lattice from an explicit square grid of rows.
    pub fn new_with_state(grid: Vec<Vec<Spin>>, temperature: f64) -> Result<Self> {
        let size = grid.len();
        Self::check_size(size)?;
        if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(IsingError::NonSquareGrid {
                rows: size,
                row,
                len: r.len(),
            });
        }
        let spins = grid.into_iter().flatten().collect();
        Ok(Self::from_spins(spins, size, temperature))
    }

    fn from_spins(spins: Vec<Spin>, size: usize, temperature: f64) -> Self {
        Self {
            spins,
            size,
            temperature,
            coupling: 1.0,
            boltzmann: 1.0,
        }
    }

    fn check_size(size: usize) -> Result<()> {
        if size == 0 {
            Err(IsingError::InvalidLatticeSize(size))
        } else {
            Ok(())
        }
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.size && j < self.size);
        i * self.size + j
    }

    /// Linear size `N` of the lattice.
    pub fn linear_size(&self) -> usize {
        self.size
    }

    /// Number of sites, `N^2`.
    pub fn n_sites(&self) -> usize {
        self.spins.len()
    }

    /// Temperature of the lattice.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Reassign the temperature. Not validated.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature
    }

    /// Coupling constant `J`.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Boltzmann constant `kB`.
    pub fn boltzmann_constant(&self) -> f64 {
        self.boltzmann
    }

    /// Spin at `(i, j)`.
    #[inline]
    pub fn spin(&self, i: usize, j: usize) -> Spin {
        self.spins[self.index(i, j)]
    }

    /// Overwrite the spin at `(i, j)`.
    pub fn set_spin(&mut self, i: usize, j: usize, spin: Spin) {
        let indx = self.index(i, j);
        self.spins[indx] = spin;
    }

    /// Invert the spin at `(i, j)`.
    pub fn flip(&mut self, i: usize, j: usize) {
        let indx = self.index(i, j);
        self.spins[indx] = self.spins[indx].flipped();
    }

    /// Exchange the spins at `(i1, j1)` and `(i2, j2)`.
    pub fn swap(&mut self, i1: usize, j1: usize, i2: usize, j2: usize) {
        let a = self.index(i1, j1);
        let b = self.index(i2, j2);
        self.spins.swap(a, b);
    }

    /// Row above `i`, wrapping row 0 to `N-1`.
    #[inline]
    pub fn north(&self, i: usize) -> usize {
        (i + self.size - 1) % self.size
    }

    /// Row below `i`, wrapping row `N-1` to 0.
    #[inline]
    pub fn south(&self, i: usize) -> usize {
        (i + 1) % self.size
    }

    /// Column right of `j`, wrapping column `N-1` to 0.
    #[inline]
    pub fn east(&self, j: usize) -> usize {
        (j + 1) % self.size
    }

    /// Column left of `j`, wrapping column 0 to `N-1`.
    #[inline]
    pub fn west(&self, j: usize) -> usize {
        (j + self.size - 1) % self.size
    }

    /// The four periodic nearest neighbors of `(i, j)`: north, east, south, west.
    pub fn neighbors(&self, i: usize, j: usize) -> [(usize, usize); 4] {
        [
            (self.north(i), j),
            (i, self.east(j)),
            (self.south(i), j),
            (i, self.west(j)),
        ]
    }

    /// Iterate over rows of the lattice.
    pub fn rows(&self) -> impl Iterator<Item = &[Spin]> {
        self.spins.chunks(self.size)
    }

    /// Get a ref of the flattened, row-major spin state.
    pub fn state_ref(&self) -> &[Spin] {
        &self.spins
    }

    /// Copy out the lattice as rows of signed spin values.
    pub fn to_grid(&self) -> Vec<Vec<i8>> {
        self.rows()
            .map(|r| r.iter().map(|s| s.value()).collect())
            .collect()
    }
}

impl Display for SpinLattice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self
            .rows()
            .map(|r| r.iter().map(|s| format!("[{}]", s.value())).join(""))
            .join("\n");
        f.write_str(&s)
    }
}

/// Randomly build a spin state.
pub fn make_random_spin_state<R: Rng>(n: usize, rng: &mut R) -> Vec<Spin> {
    (0..n).map(|_| Spin::from_bool(rng.gen())).collect()
}
