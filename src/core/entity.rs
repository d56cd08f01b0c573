//! Entity adapter contract.

use super::state::State;

/// Read/write access to the lifecycle state held by an entity.
///
/// The engine knows nothing else about the entity. `set_state` is an
/// unconditional overwrite; deciding whether a move is legal is the
/// transition table's job, never the entity's.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{State, Stateful};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// struct Door {
///     state: DoorState,
///     locked: bool,
/// }
///
/// impl Stateful for Door {
///     type State = DoorState;
///
///     fn current_state(&self) -> DoorState {
///         self.state
///     }
///
///     fn set_state(&mut self, state: DoorState) {
///         self.state = state;
///     }
/// }
///
/// let mut door = Door { state: DoorState::Open, locked: false };
/// door.set_state(DoorState::Closed);
/// assert_eq!(door.current_state(), DoorState::Closed);
/// assert!(!door.locked);
/// ```
pub trait Stateful {
    type State: State;

    /// Current lifecycle state.
    fn current_state(&self) -> Self::State;

    /// Overwrite the lifecycle state.
    fn set_state(&mut self, state: Self::State);
}
