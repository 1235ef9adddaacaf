//! Cell update rules for lifestream.
//!
//! A [`Rule`] maps a cell's state and live-neighbour count to its next
//! state. [`RuleSet`] implements it as an ordered list of [`Clause`]s
//! where the first clause that fires wins; Conway's Game of Life is
//! [`RuleSet::conway()`], and other birth/survival automata parse from
//! notation such as `"B36/S23"`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clause;
pub mod error;
pub mod rule;
pub mod ruleset;

pub use clause::{Clause, NeighbourMask};
pub use error::RuleError;
pub use rule::Rule;
pub use ruleset::RuleSet;
