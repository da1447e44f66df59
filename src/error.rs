use thiserror::Error;

/// Errors raised by lattice construction, dynamics configuration, statistics and result io.
#[derive(Debug, Error)]
pub enum IsingError {
    /// A move kind token other than `"g"` or `"k"` was supplied.
    #[error("unknown move kind {0:?}, expected \"g\" (glauber) or \"k\" (kawasaki)")]
    UnknownMoveKind(String),
    /// Too few samples for the requested estimator or resampling method.
    #[error("need at least {required} samples, found {found}")]
    InsufficientSamples {
        /// Minimum number of samples required.
        required: usize,
        /// Number of samples supplied.
        found: usize,
    },
    /// Lattices must have a linear size of at least one.
    #[error("invalid lattice size {0}, must be at least 1")]
    InvalidLatticeSize(usize),
    /// An explicit initial grid was not square.
    #[error("grid with {rows} rows has row {row} of length {len}")]
    NonSquareGrid {
        /// Number of rows in the grid.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// A scan asked for more moves than fit in a `usize`.
    #[error("{sweeps} sweeps of an {linear_size}x{linear_size} lattice overflow the move count")]
    MoveCountOverflow {
        /// Requested number of sweeps.
        sweeps: usize,
        /// Linear size of the lattice.
        linear_size: usize,
    },
    /// A result file line could not be parsed.
    #[error("malformed result record on line {line}: {content:?}")]
    MalformedRecord {
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// Underlying io failure while reading or writing results.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IsingError>;

/// Fails with [`IsingError::InsufficientSamples`] unless `found >= required`.
pub(crate) fn require_samples(required: usize, found: usize) -> Result<()> {
    if found < required {
        Err(IsingError::InsufficientSamples { required, found })
    } else {
        Ok(())
    }
}
