//! Waypoint: a guarded finite state machine engine
//!
//! Waypoint splits a lifecycle into a pure decision and a single write. An
//! immutable transition table decides, from an entity's current state and an
//! incoming command, which destination applies; the machine then writes that
//! state back to the entity. Nothing else is touched.
//!
//! # Core Concepts
//!
//! - **State / Command**: closed enumerations compared by equality
//! - **Stateful**: the entity adapter, reading and overwriting one state field
//! - **Guards**: pure predicates over the entity, tried in declaration order
//! - **Transition table**: `(state, command)` to ordered candidates, validated once
//! - **Machine**: a table bound to one entity, the only place state changes
//!
//! # Example
//!
//! ```rust
//! use waypoint::core::{Guard, Stateful};
//! use waypoint::engine::TransitionTable;
//! use waypoint::{command_enum, state_enum};
//!
//! state_enum! {
//!     enum OrderState {
//!         Placed,
//!         Review,
//!         Shipped,
//!     }
//! }
//!
//! command_enum! {
//!     enum OrderCommand {
//!         Ship,
//!     }
//! }
//!
//! struct Order {
//!     state: OrderState,
//!     total: u32,
//! }
//!
//! impl Stateful for Order {
//!     type State = OrderState;
//!
//!     fn current_state(&self) -> OrderState {
//!         self.state
//!     }
//!
//!     fn set_state(&mut self, state: OrderState) {
//!         self.state = state;
//!     }
//! }
//!
//! let table = TransitionTable::<Order, OrderCommand>::builder()
//!     .permit_if(
//!         OrderState::Placed,
//!         OrderCommand::Ship,
//!         OrderState::Review,
//!         Guard::named("large_order", |o: &Order| o.total > 10_000),
//!     )
//!     .permit(OrderState::Placed, OrderCommand::Ship, OrderState::Shipped)
//!     .build()
//!     .unwrap();
//!
//! let mut order = Order { state: OrderState::Placed, total: 50_000 };
//! table.bind(&mut order).execute(&OrderCommand::Ship).unwrap();
//! assert_eq!(order.state, OrderState::Review);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod invoice;

// Re-export commonly used types
pub use crate::builder::{BuildError, TableBuilder, TransitionBuilder};
pub use crate::core::{Command, Guard, State, Stateful};
pub use crate::engine::{Fired, Machine, TransitionError, TransitionTable};
