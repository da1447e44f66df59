//! Monte carlo moves on a spin lattice.

/// Boltzmann weights and the probabilistic acceptance test.
pub mod acceptance;
/// Glauber and kawasaki trial moves, and an engine which repeats them.
pub mod engine;

pub use acceptance::*;
pub use engine::*;
