//! Identifier traits for states and commands.
//!
//! States and commands are small closed enumerations compared by equality.
//! Both are used as lookup keys in a transition table, so they must be
//! hashable as well as comparable.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is an opaque label. Whether it is terminal is not a property of the
/// state itself but of the table it is used with: a state with no outgoing
/// rules accepts no command.
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Done,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for commands a caller may issue against an entity.
///
/// Commands carry no payload. Anything a guard needs to decide lives on the
/// entity.
pub trait Command:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the command's name for display/logging.
    fn name(&self) -> &str;
}
