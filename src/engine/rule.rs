//! Transition rules and the candidates they compile into.

use crate::core::{Command, Guard, State, Stateful};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single declared rule: from `from`, on `command`, go to `to` if `guard`
/// holds (or unconditionally when there is no guard).
pub struct Rule<E: Stateful, C: Command> {
    pub from: E::State,
    pub command: C,
    pub to: E::State,
    pub guard: Option<Guard<E>>,
}

impl<E: Stateful, C: Command> Rule<E, C> {
    /// True when the rule has no guard and acts as the fallback for its pair.
    pub fn is_unconditional(&self) -> bool {
        self.guard.is_none()
    }

    pub(crate) fn into_candidate(self) -> Candidate<E> {
        Candidate {
            guard: self.guard,
            to: self.to,
        }
    }
}

impl<E: Stateful, C: Command> Clone for Rule<E, C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            command: self.command.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<E: Stateful, C: Command> fmt::Debug for Rule<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("from", &self.from)
            .field("command", &self.command)
            .field("to", &self.to)
            .field("guard", &self.guard)
            .finish()
    }
}

/// One possible outcome for a `(state, command)` pair.
pub struct Candidate<E: Stateful> {
    guard: Option<Guard<E>>,
    to: E::State,
}

impl<E: Stateful> Candidate<E> {
    /// Destination state if this candidate is selected.
    pub fn to(&self) -> &E::State {
        &self.to
    }

    pub fn guard(&self) -> Option<&Guard<E>> {
        self.guard.as_ref()
    }

    /// Check whether this candidate applies to the entity right now.
    pub fn applies(&self, entity: &E) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(entity))
    }
}

impl<E: Stateful> Clone for Candidate<E> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            to: self.to.clone(),
        }
    }
}

impl<E: Stateful> fmt::Debug for Candidate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("guard", &self.guard)
            .field("to", &self.to)
            .finish()
    }
}

/// Receipt for an applied transition.
///
/// Returned to the caller of `execute`; the engine keeps no copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Fired<S: State, C: Command> {
    pub from: S,
    pub command: C,
    pub to: S,
}

impl<S: State, C: Command> Fired<S, C> {
    /// True when the command was accepted without changing state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
