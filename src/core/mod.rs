//! Core contracts of the engine.
//!
//! This module contains the pieces every domain binding implements or uses:
//! - State and command identifiers via the `State` and `Command` traits
//! - The entity adapter via the `Stateful` trait
//! - Guard predicates over the entity
//!
//! Nothing in here mutates anything; the only write the engine ever performs
//! goes through `Stateful::set_state`.

mod entity;
mod guard;
mod state;

pub use entity::Stateful;
pub use guard::Guard;
pub use state::{Command, State};
