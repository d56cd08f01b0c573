//! Build errors for transition tables and rules.

use thiserror::Error;

/// A single authoring mistake found while validating a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableDefect {
    #[error("State '{state}' is used by a rule but was not declared")]
    UndeclaredState { state: String },

    #[error("Command '{command}' is used by a rule but was not declared")]
    UndeclaredCommand { command: String },

    #[error("More than one unconditional rule for '{command}' from '{state}'")]
    DuplicateFallback { state: String, command: String },

    #[error(
        "Guarded rule '{state}' --{command}--> '{to}' is declared after an unconditional one and can never fire"
    )]
    ShadowedCandidate {
        state: String,
        command: String,
        to: String,
    },
}

/// Errors that can occur when building transition tables and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one rule")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition command not specified. Call .on(command)")]
    MissingCommand,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Invalid transition table ({} defects): {}", .defects.len(), join_defects(.defects))]
    InvalidTable { defects: Vec<TableDefect> },
}

fn join_defects(defects: &[TableDefect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
