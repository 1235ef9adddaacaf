//! Error types for pattern generation.

use std::fmt;

/// Errors arising from pattern lookup or random soup generation.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// No built-in pattern has this name.
    UnknownPattern {
        /// The name that failed to match.
        name: String,
    },
    /// Soup density is not a probability.
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
    /// Grid size is zero or negative.
    InvalidSize {
        /// The rejected size.
        size: i32,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPattern { name } => write!(f, "unknown pattern: {name:?}"),
            Self::InvalidDensity { density } => {
                write!(f, "density must be within [0, 1], got {density}")
            }
            Self::InvalidSize { size } => write!(f, "malformed grid size: {size}"),
        }
    }
}

impl std::error::Error for PatternError {}
