//! The spin lattice and its energy model.

/// Local and total energies and the magnetisation of a lattice.
pub mod energy;
/// Square periodic grid of spins.
pub mod spin_lattice;

pub use spin_lattice::*;
