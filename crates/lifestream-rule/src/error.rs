//! Errors from parsing birth/survival rule notation.

use std::error::Error;
use std::fmt;

/// Errors detected while parsing notation such as `B3/S23`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The notation is not one `B` and one `S` section separated by `/`.
    Malformed {
        /// The notation as given.
        notation: String,
    },
    /// A character in a section is not a neighbour count `0`..=`8`.
    InvalidCount {
        /// The offending character.
        token: char,
    },
    /// A count is listed twice in the same section.
    DuplicateCount {
        /// `'B'` or `'S'`.
        section: char,
        /// The repeated count.
        count: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { notation } => {
                write!(f, "malformed rule {notation:?}: expected B<counts>/S<counts>")
            }
            Self::InvalidCount { token } => {
                write!(f, "invalid neighbour count {token:?}: expected 0-8")
            }
            Self::DuplicateCount { section, count } => {
                write!(f, "count {count} repeated in {section} section")
            }
        }
    }
}

impl Error for RuleError {}
