//! Serializable view of a transition table.
//!
//! Guards are closures and cannot be serialized, so a descriptor reports
//! each guard by its label only.

use crate::core::{Command, State};
use serde::{Deserialize, Serialize};

/// One declared rule. Rules are grouped by source state; the candidate
/// order within each `(state, command)` pair is the declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RuleDescriptor<S: State, C: Command> {
    pub from: S,
    pub command: C,
    pub to: S,
    /// Guard label, `None` for an unconditional rule.
    pub guard: Option<String>,
}

/// Shape of a whole table: its states, commands and rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TableDescriptor<S: State, C: Command> {
    pub states: Vec<S>,
    pub commands: Vec<C>,
    pub terminal: Vec<S>,
    pub rules: Vec<RuleDescriptor<S, C>>,
}
