//! The generic transition-resolution engine.
//!
//! This module knows nothing about any particular domain. It provides:
//!
//! - **Transition table**: immutable `(state, command)` index of ordered candidates
//! - **Resolution**: pure selection of the first candidate whose guard holds
//! - **Machine**: a table bound to one entity, writing the chosen state back
//!
//! # Resolution order
//!
//! Candidates for a pair are tried in the order they were declared. An
//! unconditional candidate therefore acts as a fallback and must come last;
//! the builder rejects tables where it does not.
//!
//! The engine never logs, retries or panics on a refused command. Callers
//! get a [`TransitionError`] and decide what to do with it.

mod descriptor;
mod error;
mod machine;
mod rule;
mod table;

pub use descriptor::{RuleDescriptor, TableDescriptor};
pub use error::TransitionError;
pub use machine::Machine;
pub use rule::{Candidate, Fired, Rule};
pub use table::TransitionTable;
