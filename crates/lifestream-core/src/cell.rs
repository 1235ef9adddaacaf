//! The binary [`CellState`] and the [`Cell`] value type.

use std::fmt;
use std::str::FromStr;

use crate::error::StateError;
use crate::id::Position;

/// Live/dead state of a single cell.
///
/// Serializes to a single-character token: `+` for [`Alive`](Self::Alive),
/// `-` for [`Dead`](Self::Dead). Decoding any other token fails with
/// [`StateError::InvalidState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell is alive.
    Alive,
    /// The cell is dead. Absence from a grid's alive-set means dead.
    #[default]
    Dead,
}

impl CellState {
    /// Token for an alive cell.
    pub const ALIVE_TOKEN: char = '+';
    /// Token for a dead cell.
    pub const DEAD_TOKEN: char = '-';

    /// The single-character token for this state.
    pub const fn token(self) -> char {
        match self {
            Self::Alive => Self::ALIVE_TOKEN,
            Self::Dead => Self::DEAD_TOKEN,
        }
    }

    /// Returns `true` for [`CellState::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl TryFrom<char> for CellState {
    type Error = StateError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            Self::ALIVE_TOKEN => Ok(Self::Alive),
            Self::DEAD_TOKEN => Ok(Self::Dead),
            other => Err(StateError::InvalidState {
                token: other.to_string(),
            }),
        }
    }
}

impl FromStr for CellState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(StateError::InvalidState {
                token: s.to_string(),
            }),
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.token())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// A grid position paired with its state.
///
/// Cells are plain values: two cells with equal position and state are
/// interchangeable, and they are always passed by copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Where the cell sits on the grid.
    pub position: Position,
    /// Its live/dead state.
    pub state: CellState,
}

impl Cell {
    /// Create a cell at `position` with `state`.
    pub const fn new(position: Position, state: CellState) -> Self {
        Self { position, state }
    }

    /// An alive cell at `(x, y)`.
    pub const fn alive(x: i32, y: i32) -> Self {
        Self::new(Position::new(x, y), CellState::Alive)
    }

    /// A dead cell at `(x, y)`.
    pub const fn dead(x: i32, y: i32) -> Self {
        Self::new(Position::new(x, y), CellState::Dead)
    }

    /// The same position with a different state.
    pub const fn with_state(self, state: CellState) -> Self {
        Self::new(self.position, state)
    }

    /// Returns `true` if the cell is alive.
    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.state, self.position)
    }
}
