//! Sparse toroidal grid storage for lifestream.
//!
//! This crate holds the simulation state: the [`Grid`] keeps only the
//! alive cells of a square torus, answers neighbour queries with
//! wraparound, and builds the [`Frontier`] of positions that have to be
//! re-evaluated after a step.
//!
//! # Modules
//!
//! - [`grid`]: the [`Grid`] and its [`AliveSet`]
//! - [`frontier`]: the deduplicated per-step [`Frontier`]
//! - [`torus`]: wraparound arithmetic and neighbour offsets
//! - [`patterns`]: built-in seed [`Pattern`]s and [`random_soup`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod grid;
pub mod patterns;
pub mod torus;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::PatternError;
pub use frontier::Frontier;
pub use grid::{AliveSet, Grid};
pub use patterns::{random_soup, Pattern};
