//! Builder API for declaring transition tables.
//!
//! This module provides fluent builders and macros for declaring a domain's
//! states, commands and rules with minimal boilerplate. Tables are validated
//! as a whole when built, so authoring mistakes surface at construction time
//! rather than when a command is first resolved.

pub mod error;
pub mod macros;
pub mod table;
pub mod transition;

pub use error::{BuildError, TableDefect};
pub use table::TableBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Command, Guard, Stateful};
use crate::engine::Rule;

/// Create an unconditional rule.
///
/// # Example
///
/// ```
/// use waypoint::builder::{rule, TableBuilder};
/// use waypoint::core::Stateful;
/// use waypoint::{command_enum, state_enum};
///
/// state_enum! {
///     enum Phase {
///         Start,
///         End,
///     }
/// }
///
/// command_enum! {
///     enum Step {
///         Next,
///     }
/// }
///
/// struct Task(Phase);
///
/// impl Stateful for Task {
///     type State = Phase;
///     fn current_state(&self) -> Phase { self.0 }
///     fn set_state(&mut self, state: Phase) { self.0 = state; }
/// }
///
/// let table = TableBuilder::<Task, Step>::new()
///     .add_rule(rule(Phase::Start, Step::Next, Phase::End))
///     .build()
///     .unwrap();
/// assert!(table.is_terminal(&Phase::End));
/// ```
pub fn rule<E, C>(from: E::State, command: C, to: E::State) -> Rule<E, C>
where
    E: Stateful,
    C: Command,
{
    Rule {
        from,
        command,
        to,
        guard: None,
    }
}

/// Create a rule with a guard predicate.
pub fn guarded_rule<E, C, F>(from: E::State, command: C, to: E::State, guard: F) -> Rule<E, C>
where
    E: Stateful,
    C: Command,
    F: Fn(&E) -> bool + Send + Sync + 'static,
{
    Rule {
        from,
        command,
        to,
        guard: Some(Guard::new(guard)),
    }
}
