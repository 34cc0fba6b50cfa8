//! Error types.
//!
//! Every error here is raised before any tour storage is allocated. A
//! degenerate instance (too few nodes for the move operators) is not an
//! error: the solver returns the nearest-neighbour tour instead.

use thiserror::Error;

/// Invalid annealing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SaConfigError {
    /// The initial temperature is zero, negative, or not finite.
    #[error("initial_temperature must be positive and finite, got {0}")]
    NonPositiveTemperature(f64),
    /// The cooling factor lies outside the open interval `(0, 1)`.
    #[error("cooling_factor must be in (0, 1), got {0}")]
    CoolingFactorOutOfRange(f64),
    /// A reheat interval of zero was supplied.
    #[error("reheat_interval must be at least 1")]
    ZeroReheatInterval,
    /// A cost history sampling interval of zero was supplied.
    #[error("history_interval must be at least 1")]
    ZeroHistoryInterval,
}

/// Invalid cost matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The matrix has no rows.
    #[error("cost matrix is empty")]
    Empty,
    /// A row does not have as many entries as there are rows.
    #[error("cost matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
    /// An entry is NaN or infinite.
    #[error("cost matrix entry ({row}, {col}) is not finite")]
    NonFinite {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
}

/// Failure to read a TSPLIB instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TsplibError {
    /// No `DIMENSION` header, or one that is not a positive integer.
    #[error("missing or invalid DIMENSION header")]
    MissingDimension,
    /// The instance uses an edge weight type other than `EUC_2D`.
    #[error("unsupported EDGE_WEIGHT_TYPE {0:?}, only EUC_2D is supported")]
    UnsupportedEdgeWeightType(String),
    /// No `NODE_COORD_SECTION` was found.
    #[error("missing NODE_COORD_SECTION")]
    MissingCoordSection,
    /// A coordinate line could not be parsed.
    #[error("invalid coordinate on line {line}")]
    InvalidCoordinate {
        /// One-based line number.
        line: usize,
    },
    /// The number of coordinates does not match `DIMENSION`.
    #[error("DIMENSION is {expected} but {found} coordinates were read")]
    DimensionMismatch {
        /// Declared dimension.
        expected: usize,
        /// Coordinates actually read.
        found: usize,
    },
    /// Coordinates too far apart to yield finite distances.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Error returned by the top-level solve functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Invalid annealing parameters.
    #[error(transparent)]
    Config(#[from] SaConfigError),
    /// Invalid cost matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
