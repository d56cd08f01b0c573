//! A transition table bound to one live entity.

use crate::core::{Command, Stateful};
use crate::engine::error::TransitionError;
use crate::engine::rule::Fired;
use crate::engine::table::TransitionTable;

/// Executes commands against a single entity.
///
/// The machine holds a shared borrow of the table and an exclusive borrow of
/// the entity. It has no state of its own: the current state always lives on
/// the entity, and dropping the machine loses nothing.
pub struct Machine<'a, E: Stateful, C: Command> {
    table: &'a TransitionTable<E, C>,
    entity: &'a mut E,
}

impl<'a, E: Stateful, C: Command> Machine<'a, E, C> {
    /// Bind `table` to `entity`. The entity keeps whatever state it holds.
    pub fn new(table: &'a TransitionTable<E, C>, entity: &'a mut E) -> Self {
        Self { table, entity }
    }

    /// Current state of the bound entity (pure)
    pub fn current_state(&self) -> E::State {
        self.entity.current_state()
    }

    /// Check if the entity sits in a state no rule leaves (pure)
    pub fn is_terminal(&self) -> bool {
        self.table.is_terminal(&self.entity.current_state())
    }

    /// Would `command` succeed right now? Evaluates guards, changes nothing.
    pub fn can_execute(&self, command: &C) -> bool {
        self.table.resolve(&*self.entity, command).is_ok()
    }

    /// Commands that would succeed right now, in declaration order.
    pub fn permitted_commands(&self) -> Vec<C> {
        self.table
            .commands_from(&self.entity.current_state())
            .into_iter()
            .filter(|c| self.can_execute(c))
            .collect()
    }

    /// Apply `command` to the entity.
    ///
    /// On success the entity's state is written exactly once and a receipt
    /// of the move is returned. On failure the entity is left untouched.
    pub fn execute(&mut self, command: &C) -> Result<Fired<E::State, C>, TransitionError> {
        let fired = self.table.resolve(&*self.entity, command)?;
        self.entity.set_state(fired.to.clone());
        Ok(fired)
    }

    pub fn entity(&self) -> &E {
        &*self.entity
    }

    pub fn table(&self) -> &'a TransitionTable<E, C> {
        self.table
    }
}
