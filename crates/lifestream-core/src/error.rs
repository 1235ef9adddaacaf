//! Error types for grid construction and cell-state decoding.
//!
//! Construction errors are fatal to the construction call and never
//! leave a partially built grid behind. Decode errors affect only the
//! token being decoded.

use std::error::Error;
use std::fmt;

use crate::id::Position;

/// Errors from building a grid out of a size and an initial cell list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Grid size is zero or negative.
    InvalidSize {
        /// The rejected size.
        size: i32,
    },
    /// More initial cells were supplied than the grid has positions.
    InvalidCellCount {
        /// Number of cells supplied.
        count: usize,
        /// Number of positions in the grid (`size * size`).
        capacity: u64,
    },
    /// An initial cell lies outside `[0, size)` on some axis.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// The grid size it was checked against.
        size: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(f, "malformed grid size: {size}"),
            Self::InvalidCellCount { count, capacity } => write!(
                f,
                "{count} initial cells exceed the {capacity} positions of the grid"
            ),
            Self::OutOfBounds { position, size } => write!(
                f,
                "cell position {position} is outside [0, {size}) x [0, {size})"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from decoding a [`CellState`](crate::CellState) token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The token is neither `+` nor `-`.
    InvalidState {
        /// The token that failed to decode.
        token: String,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { token } => write!(f, "invalid cell state token {token:?}"),
        }
    }
}

impl Error for StateError {}
