//! Immutable transition table and the resolution logic over it.

use crate::builder::TableBuilder;
use crate::core::{Command, State, Stateful};
use crate::engine::descriptor::{RuleDescriptor, TableDescriptor};
use crate::engine::error::TransitionError;
use crate::engine::machine::Machine;
use crate::engine::rule::{Candidate, Fired, Rule};
use std::collections::HashMap;
use std::fmt;

/// Candidates for one command, in declaration order.
type CommandEntry<E, C> = (C, Vec<Candidate<E>>);

/// Legal moves of a domain, indexed by `(state, command)`.
///
/// A table is built once through [`TableBuilder`] and only read afterwards.
/// It holds no entity state, so a single table can be shared by reference
/// (or `Arc`) across any number of entities and threads.
pub struct TransitionTable<E: Stateful, C: Command> {
    rules: HashMap<E::State, Vec<CommandEntry<E, C>>>,
    states: Vec<E::State>,
    commands: Vec<C>,
}

impl<E: Stateful, C: Command> TransitionTable<E, C> {
    /// Start declaring a table.
    pub fn builder() -> TableBuilder<E, C> {
        TableBuilder::new()
    }

    /// Index validated rules. Declaration order is kept per `(state, command)`.
    pub(crate) fn from_rules(
        rules: Vec<Rule<E, C>>,
        states: Option<Vec<E::State>>,
        commands: Option<Vec<C>>,
    ) -> Self {
        let states = states.unwrap_or_else(|| {
            let mut seen = Vec::new();
            for rule in &rules {
                for state in [&rule.from, &rule.to] {
                    if !seen.contains(state) {
                        seen.push(state.clone());
                    }
                }
            }
            seen
        });
        let commands = commands.unwrap_or_else(|| {
            let mut seen: Vec<C> = Vec::new();
            for rule in &rules {
                if !seen.contains(&rule.command) {
                    seen.push(rule.command.clone());
                }
            }
            seen
        });

        let mut index: HashMap<E::State, Vec<CommandEntry<E, C>>> = HashMap::new();
        for rule in rules {
            let entries = index.entry(rule.from.clone()).or_default();
            match entries.iter().position(|(c, _)| *c == rule.command) {
                Some(i) => entries[i].1.push(rule.into_candidate()),
                None => {
                    let command = rule.command.clone();
                    entries.push((command, vec![rule.into_candidate()]));
                }
            }
        }

        Self {
            rules: index,
            states,
            commands,
        }
    }

    /// Ordered candidates for `(state, command)`; empty if the pair is not
    /// declared.
    pub fn lookup(&self, state: &E::State, command: &C) -> &[Candidate<E>] {
        self.rules
            .get(state)
            .and_then(|entries| entries.iter().find(|(c, _)| c == command))
            .map(|(_, candidates)| candidates.as_slice())
            .unwrap_or(&[])
    }

    /// Decide where `command` takes the entity, without touching it.
    ///
    /// Guards are evaluated in declaration order against the live entity and
    /// the first candidate whose guard holds (or that has none) wins.
    pub fn resolve(&self, entity: &E, command: &C) -> Result<Fired<E::State, C>, TransitionError> {
        let from = entity.current_state();
        let candidates = self.lookup(&from, command);

        if candidates.is_empty() {
            return Err(TransitionError::IllegalTransition {
                state: from.name().to_string(),
                command: command.name().to_string(),
            });
        }

        match candidates.iter().find(|c| c.applies(entity)) {
            Some(candidate) => Ok(Fired {
                to: candidate.to().clone(),
                command: command.clone(),
                from,
            }),
            None => Err(TransitionError::GuardNotSatisfied {
                state: from.name().to_string(),
                command: command.name().to_string(),
                guards: candidates
                    .iter()
                    .filter_map(Candidate::guard)
                    .map(|g| g.label().to_string())
                    .collect(),
            }),
        }
    }

    /// Bind this table to one entity.
    pub fn bind<'a>(&'a self, entity: &'a mut E) -> Machine<'a, E, C> {
        Machine::new(self, entity)
    }

    /// Commands with at least one declared rule from `state`, in declaration
    /// order. Guards are not consulted.
    pub fn commands_from(&self, state: &E::State) -> Vec<C> {
        self.rules
            .get(state)
            .map(|entries| entries.iter().map(|(c, _)| c.clone()).collect())
            .unwrap_or_default()
    }

    /// A state is terminal when no rule leaves it.
    pub fn is_terminal(&self, state: &E::State) -> bool {
        self.rules.get(state).is_none_or(|entries| entries.is_empty())
    }

    pub fn states(&self) -> &[E::State] {
        &self.states
    }

    pub fn commands(&self) -> &[C] {
        &self.commands
    }

    /// Known states with no outgoing rule.
    pub fn terminal_states(&self) -> Vec<E::State> {
        self.states
            .iter()
            .filter(|s| self.is_terminal(s))
            .cloned()
            .collect()
    }

    /// Number of declared rules (candidates across all pairs).
    pub fn rule_count(&self) -> usize {
        self.rules
            .values()
            .flat_map(|entries| entries.iter())
            .map(|(_, candidates)| candidates.len())
            .sum()
    }

    /// Serializable description of the table, rules grouped by source state
    /// in state order.
    pub fn describe(&self) -> TableDescriptor<E::State, C> {
        let mut rules = Vec::new();
        for state in &self.states {
            let Some(entries) = self.rules.get(state) else {
                continue;
            };
            for (command, candidates) in entries {
                for candidate in candidates {
                    rules.push(RuleDescriptor {
                        from: state.clone(),
                        command: command.clone(),
                        to: candidate.to().clone(),
                        guard: candidate.guard().map(|g| g.label().to_string()),
                    });
                }
            }
        }

        TableDescriptor {
            states: self.states.clone(),
            commands: self.commands.clone(),
            terminal: self.terminal_states(),
            rules,
        }
    }
}

impl<E: Stateful, C: Command> fmt::Debug for TransitionTable<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.states)
            .field("commands", &self.commands)
            .field("rules", &self.rule_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;

    crate::state_enum! {
        enum Door {
            Open,
            Closed,
            Locked,
            Broken,
        }
    }

    crate::command_enum! {
        enum Action {
            Close,
            Open,
            Lock,
            Unlock,
            Kick,
        }
    }

    struct House {
        door: Door,
        has_key: bool,
        alarmed: bool,
    }

    impl House {
        fn new(door: Door) -> Self {
            Self {
                door,
                has_key: false,
                alarmed: false,
            }
        }
    }

    impl Stateful for House {
        type State = Door;

        fn current_state(&self) -> Door {
            self.door
        }

        fn set_state(&mut self, state: Door) {
            self.door = state;
        }
    }

    fn door_table() -> TransitionTable<House, Action> {
        TransitionTable::<House, Action>::builder()
            .states(Door::ALL.iter().copied())
            .commands(Action::ALL.iter().copied())
            .permit(Door::Open, Action::Close, Door::Closed)
            .permit(Door::Closed, Action::Open, Door::Open)
            .permit_if(
                Door::Closed,
                Action::Lock,
                Door::Locked,
                Guard::named("has_key", |h: &House| h.has_key),
            )
            .permit_if(
                Door::Locked,
                Action::Unlock,
                Door::Closed,
                Guard::named("has_key", |h: &House| h.has_key),
            )
            .permit_if(
                Door::Locked,
                Action::Kick,
                Door::Locked,
                Guard::named("alarmed", |h: &House| h.alarmed),
            )
            .permit(Door::Locked, Action::Kick, Door::Broken)
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_returns_declared_candidates_in_order() {
        let table = door_table();

        let candidates = table.lookup(&Door::Locked, &Action::Kick);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].to(), &Door::Locked);
        assert_eq!(candidates[1].to(), &Door::Broken);
        assert!(candidates[1].guard().is_none());
    }

    #[test]
    fn lookup_of_undeclared_pair_is_empty() {
        let table = door_table();

        assert!(table.lookup(&Door::Open, &Action::Lock).is_empty());
        assert!(table.lookup(&Door::Broken, &Action::Open).is_empty());
    }

    #[test]
    fn resolve_picks_unconditional_rule() {
        let table = door_table();
        let house = House::new(Door::Open);

        let fired = table.resolve(&house, &Action::Close).unwrap();
        assert_eq!(fired.from, Door::Open);
        assert_eq!(fired.command, Action::Close);
        assert_eq!(fired.to, Door::Closed);
    }

    #[test]
    fn resolve_does_not_mutate_entity() {
        let table = door_table();
        let house = House::new(Door::Open);

        let _ = table.resolve(&house, &Action::Close);
        assert_eq!(house.door, Door::Open);
    }

    #[test]
    fn resolve_reports_illegal_transition() {
        let table = door_table();
        let house = House::new(Door::Open);

        let err = table.resolve(&house, &Action::Lock).unwrap_err();
        assert_eq!(
            err,
            TransitionError::IllegalTransition {
                state: "Open".to_string(),
                command: "Lock".to_string(),
            }
        );
    }

    #[test]
    fn resolve_reports_guard_not_satisfied() {
        let table = door_table();
        let house = House::new(Door::Closed);

        let err = table.resolve(&house, &Action::Lock).unwrap_err();
        assert_eq!(
            err,
            TransitionError::GuardNotSatisfied {
                state: "Closed".to_string(),
                command: "Lock".to_string(),
                guards: vec!["has_key".to_string()],
            }
        );
    }

    #[test]
    fn guarded_candidate_wins_when_guard_holds() {
        let table = door_table();
        let mut house = House::new(Door::Locked);
        house.alarmed = true;

        let fired = table.resolve(&house, &Action::Kick).unwrap();
        assert_eq!(fired.to, Door::Locked);
        assert!(fired.is_self_loop());
    }

    #[test]
    fn fallback_applies_when_guard_fails() {
        let table = door_table();
        let house = House::new(Door::Locked);

        let fired = table.resolve(&house, &Action::Kick).unwrap();
        assert_eq!(fired.to, Door::Broken);
    }

    #[test]
    fn terminal_states_have_no_outgoing_rules() {
        let table = door_table();

        assert!(table.is_terminal(&Door::Broken));
        assert!(!table.is_terminal(&Door::Open));
        assert_eq!(table.terminal_states(), vec![Door::Broken]);
    }

    #[test]
    fn commands_from_keeps_declaration_order() {
        let table = door_table();

        assert_eq!(
            table.commands_from(&Door::Locked),
            vec![Action::Unlock, Action::Kick]
        );
        assert!(table.commands_from(&Door::Broken).is_empty());
    }

    #[test]
    fn rule_count_counts_every_candidate() {
        assert_eq!(door_table().rule_count(), 6);
    }

    #[test]
    fn undeclared_sets_are_derived_from_rules() {
        let table = TransitionTable::<House, Action>::builder()
            .permit(Door::Closed, Action::Open, Door::Open)
            .permit(Door::Open, Action::Close, Door::Closed)
            .build()
            .unwrap();

        assert_eq!(table.states(), &[Door::Closed, Door::Open]);
        assert_eq!(table.commands(), &[Action::Open, Action::Close]);
        assert!(table.terminal_states().is_empty());
    }

    #[test]
    fn describe_lists_rules_with_guard_labels() {
        let table = door_table();
        let descriptor = table.describe();

        assert_eq!(descriptor.states.len(), 4);
        assert_eq!(descriptor.commands.len(), 5);
        assert_eq!(descriptor.terminal, vec![Door::Broken]);
        assert_eq!(descriptor.rules.len(), 6);
        assert_eq!(
            descriptor.rules[0],
            RuleDescriptor {
                from: Door::Open,
                command: Action::Close,
                to: Door::Closed,
                guard: None,
            }
        );

        let kicks: Vec<_> = descriptor
            .rules
            .iter()
            .filter(|r| r.command == Action::Kick)
            .map(|r| r.guard.clone())
            .collect();
        assert_eq!(kicks, vec![Some("alarmed".to_string()), None]);
    }

    #[test]
    fn describe_groups_rules_by_source_state() {
        let table = TransitionTable::<House, Action>::builder()
            .permit(Door::Open, Action::Close, Door::Closed)
            .permit(Door::Closed, Action::Lock, Door::Locked)
            .permit_if(
                Door::Open,
                Action::Kick,
                Door::Broken,
                Guard::named("alarmed", |h: &House| h.alarmed),
            )
            .permit(Door::Open, Action::Kick, Door::Open)
            .build()
            .unwrap();

        let order: Vec<_> = table
            .describe()
            .rules
            .iter()
            .map(|r| (r.from, r.command, r.to))
            .collect();
        assert_eq!(
            order,
            vec![
                (Door::Open, Action::Close, Door::Closed),
                (Door::Open, Action::Kick, Door::Broken),
                (Door::Open, Action::Kick, Door::Open),
                (Door::Closed, Action::Lock, Door::Locked),
            ]
        );
    }

    #[test]
    fn descriptor_serializes_to_json() {
        let descriptor = door_table().describe();

        let json = serde_json::to_string(&descriptor).unwrap();
        let restored: TableDescriptor<Door, Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, descriptor);
    }

    #[test]
    fn table_can_be_shared_across_threads() {
        let table = std::sync::Arc::new(door_table());

        std::thread::scope(|scope| {
            for door in [Door::Open, Door::Closed] {
                let table = std::sync::Arc::clone(&table);
                scope.spawn(move || {
                    let mut house = House::new(door);
                    let mut machine = table.bind(&mut house);
                    let command = if door == Door::Open {
                        Action::Close
                    } else {
                        Action::Open
                    };
                    assert!(machine.execute(&command).is_ok());
                });
            }
        });
    }
}
