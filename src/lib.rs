#![deny(
    missing_docs,
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

//! `ising_lattice` simulates the classical 2D ising model on a periodic square lattice using
//! glauber (spin flip) or kawasaki (spin exchange) monte carlo dynamics.
//!
//! Sampled magnetisations and energies are reduced to a susceptibility or heat capacity, with
//! error bars from bootstrap or jackknife resampling.
//!
//! It also offers a few feature gated extras:
//! - temperature points of a scan run in parallel with the `parallel` feature.
//! - config and result serialization using serde with the `serialize` feature.
//!
//! # Basic Example
//! ```
//! use ising_lattice::dynamics::*;
//! use ising_lattice::lattice::*;
//! use ising_lattice::stats::*;
//! use rand::prelude::*;
//!
//! let temperature = 2.5;
//! let lattice = SpinLattice::new_all_up(8, temperature).unwrap();
//! let rng = StdRng::seed_from_u64(1234);
//! let mut engine = DynamicsEngine::new_with_rng(lattice, rng);
//!
//! // Equilibrate for 100 sweeps of 8x8 moves.
//! engine.run_sweeps(100 * 64, MoveKind::Glauber);
//!
//! // Sample the magnetisation, decorrelating between samples.
//! let mut magnetisations = vec![];
//! for _ in 0..64 {
//!     engine.run_sweeps(4 * 64, MoveKind::Glauber);
//!     magnetisations.push(engine.lattice_ref().system_magnetisation());
//! }
//!
//! let chi = susceptibility(&magnetisations, temperature, 8).unwrap();
//! let err = susceptibility_bootstrap(&magnetisations, temperature, 8, engine.rng_mut()).unwrap();
//! assert!(chi >= 0.0 && err >= 0.0);
//! ```

/// Glauber and kawasaki moves, and the boltzmann acceptance test.
pub mod dynamics;
/// Errors raised by the library.
pub mod error;
/// The periodic spin lattice and its energies.
pub mod lattice;
/// Temperature scans and their result files.
pub mod scan;
/// Susceptibility, heat capacity, and resampled errors.
pub mod stats;
pub(crate) mod util;

pub use error::{IsingError, Result};
