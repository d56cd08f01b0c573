//! Builder for constructing transition tables.

use crate::builder::error::{BuildError, TableDefect};
use crate::builder::transition::TransitionBuilder;
use crate::core::{Command, Guard, State, Stateful};
use crate::engine::{Rule, TransitionTable};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for declaring a table with a fluent API.
///
/// Rules are kept in the order they are added; that order is the order in
/// which guards are tried at resolution time.
pub struct TableBuilder<E: Stateful, C: Command> {
    states: Option<Vec<E::State>>,
    commands: Option<Vec<C>>,
    rules: Vec<Rule<E, C>>,
}

impl<E: Stateful, C: Command> TableBuilder<E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: None,
            commands: None,
            rules: Vec::new(),
        }
    }

    /// Declare the domain's states (optional). When set, every rule must
    /// stay inside this set.
    pub fn states(mut self, states: impl IntoIterator<Item = E::State>) -> Self {
        self.states = Some(states.into_iter().collect());
        self
    }

    /// Declare the domain's commands (optional). When set, every rule must
    /// use one of them.
    pub fn commands(mut self, commands: impl IntoIterator<Item = C>) -> Self {
        self.commands = Some(commands.into_iter().collect());
        self
    }

    /// Add an unconditional rule.
    pub fn permit(self, from: E::State, command: C, to: E::State) -> Self {
        self.add_rule(Rule {
            from,
            command,
            to,
            guard: None,
        })
    }

    /// Add a rule that only applies while `guard` holds.
    pub fn permit_if(self, from: E::State, command: C, to: E::State, guard: Guard<E>) -> Self {
        self.add_rule(Rule {
            from,
            command,
            to,
            guard: Some(guard),
        })
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<E, C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<E, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<Rule<E, C>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the table.
    ///
    /// Every defect is reported at once rather than stopping at the first.
    pub fn build(self) -> Result<TransitionTable<E, C>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        match validate(&self.rules, self.states.as_deref(), self.commands.as_deref()) {
            Validation::Success(_) => Ok(TransitionTable::from_rules(
                self.rules,
                self.states,
                self.commands,
            )),
            Validation::Failure(defects) => Err(BuildError::InvalidTable {
                defects: defects.iter().cloned().collect(),
            }),
        }
    }
}

impl<E: Stateful, C: Command> Default for TableBuilder<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

fn declared<T: PartialEq>(
    known: Option<&[T]>,
    value: &T,
    defect: impl FnOnce() -> TableDefect,
) -> Validation<(), NonEmptyVec<TableDefect>> {
    match known {
        Some(set) if !set.contains(value) => Validation::fail(defect()),
        _ => Validation::success(()),
    }
}

/// Check every rule, accumulating ALL defects.
fn validate<E: Stateful, C: Command>(
    rules: &[Rule<E, C>],
    states: Option<&[E::State]>,
    commands: Option<&[C]>,
) -> Validation<(), NonEmptyVec<TableDefect>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<TableDefect>>> = Vec::new();
    let mut fallbacks: HashSet<(E::State, C)> = HashSet::new();

    for rule in rules {
        for state in [&rule.from, &rule.to] {
            checks.push(declared(states, state, || TableDefect::UndeclaredState {
                state: state.name().to_string(),
            }));
        }
        checks.push(declared(commands, &rule.command, || {
            TableDefect::UndeclaredCommand {
                command: rule.command.name().to_string(),
            }
        }));

        // Anything after an unconditional rule for the same pair is dead.
        let key = (rule.from.clone(), rule.command.clone());
        let ordering = if !fallbacks.contains(&key) {
            Validation::success(())
        } else if rule.is_unconditional() {
            Validation::fail(TableDefect::DuplicateFallback {
                state: rule.from.name().to_string(),
                command: rule.command.name().to_string(),
            })
        } else {
            Validation::fail(TableDefect::ShadowedCandidate {
                state: rule.from.name().to_string(),
                command: rule.command.name().to_string(),
                to: rule.to.name().to_string(),
            })
        };
        checks.push(ordering);

        if rule.is_unconditional() {
            fallbacks.insert(key);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
