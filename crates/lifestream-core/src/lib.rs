//! Core value types for the lifestream cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid coordinate ([`Position`]), the binary [`CellState`], the
//! [`Cell`] value pairing the two, the [`Generation`] counter, and the
//! construction/decoding error taxonomy shared by the rest of the
//! workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::{Cell, CellState};
pub use error::{GridError, StateError};
pub use id::{Generation, Position};
