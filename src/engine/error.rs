//! Errors returned when a command cannot be applied.

use thiserror::Error;

/// Why a command was refused. The entity is left untouched in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// No rule is declared for this `(state, command)` pair.
    #[error("Command '{command}' is not allowed from state '{state}'")]
    IllegalTransition { state: String, command: String },

    /// Rules exist but every one of them is guarded and none holds.
    #[error(
        "Command '{command}' from state '{state}' blocked: no guard satisfied [{}]",
        .guards.join(", ")
    )]
    GuardNotSatisfied {
        state: String,
        command: String,
        guards: Vec<String>,
    },
}

impl TransitionError {
    /// The command is never valid from this state.
    pub fn is_illegal(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }

    /// The command is valid here, but the entity's current attributes block it.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::GuardNotSatisfied { .. })
    }

    pub fn state(&self) -> &str {
        match self {
            Self::IllegalTransition { state, .. } | Self::GuardNotSatisfied { state, .. } => state,
        }
    }

    pub fn command(&self) -> &str {
        match self {
            Self::IllegalTransition { command, .. } | Self::GuardNotSatisfied { command, .. } => {
                command
            }
        }
    }
}
