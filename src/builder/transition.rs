//! Builder for declaring a single transition rule.

use crate::builder::error::BuildError;
use crate::core::{Command, Guard, Stateful};
use crate::engine::Rule;

/// Builder for constructing rules with a fluent API.
pub struct TransitionBuilder<E: Stateful, C: Command> {
    from: Option<E::State>,
    command: Option<C>,
    to: Option<E::State>,
    guard: Option<Guard<E>>,
}

impl<E: Stateful, C: Command> TransitionBuilder<E, C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            command: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: E::State) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering command (required).
    pub fn on(mut self, command: C) -> Self {
        self.command = Some(command);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: E::State) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<E, C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let command = self.command.ok_or(BuildError::MissingCommand)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Rule {
            from,
            command,
            to,
            guard: self.guard,
        })
    }
}

impl<E: Stateful, C: Command> Default for TransitionBuilder<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Light {
            Red,
            Green,
        }
    }

    crate::command_enum! {
        enum Signal {
            Go,
        }
    }

    struct Crossing {
        light: Light,
        pedestrians: u32,
    }

    impl Stateful for Crossing {
        type State = Light;

        fn current_state(&self) -> Light {
            self.light
        }

        fn set_state(&mut self, state: Light) {
            self.light = state;
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<Crossing, Signal>::new()
            .from(Light::Red)
            .on(Signal::Go)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn builder_validates_missing_command() {
        let result = TransitionBuilder::<Crossing, Signal>::new()
            .from(Light::Red)
            .to(Light::Green)
            .build();

        assert!(matches!(result, Err(BuildError::MissingCommand)));
    }

    #[test]
    fn builder_validates_missing_source() {
        let result = TransitionBuilder::<Crossing, Signal>::new()
            .on(Signal::Go)
            .to(Light::Green)
            .build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn transition_builder_with_guard() {
        let rule: Rule<Crossing, Signal> = TransitionBuilder::<Crossing, Signal>::new()
            .from(Light::Red)
            .on(Signal::Go)
            .to(Light::Green)
            .when(|c: &Crossing| c.pedestrians == 0)
            .build()
            .unwrap();

        let guard = rule.guard.as_ref().unwrap();
        assert!(guard.check(&Crossing {
            light: Light::Red,
            pedestrians: 0
        }));
        assert!(!guard.check(&Crossing {
            light: Light::Red,
            pedestrians: 3
        }));
        assert!(!rule.is_unconditional());
    }

    #[test]
    fn fluent_api_builds_rule() {
        let rule: Result<Rule<Crossing, Signal>, _> = TransitionBuilder::<Crossing, Signal>::new()
            .from(Light::Red)
            .on(Signal::Go)
            .to(Light::Green)
            .build();

        assert!(rule.is_ok());
        let rule = rule.unwrap();
        assert_eq!(rule.from, Light::Red);
        assert_eq!(rule.command, Signal::Go);
        assert_eq!(rule.to, Light::Green);
        assert!(rule.is_unconditional());
    }
}
