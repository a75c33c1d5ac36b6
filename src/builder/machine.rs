//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Rule, State, Symbol};
use crate::engine::Machine;
use std::convert::Infallible;
use std::fmt::{Debug, Display};

/// Builder for constructing machines with a fluent API.
///
/// Rules are applied in the order they were added, so a later rule for
/// the same key wins, exactly as with repeated `add_transition` calls.
pub struct MachineBuilder<Y, S, P, E = Infallible> {
    initial: Option<S>,
    payload: Option<P>,
    rules: Vec<Rule<Y, S, P, E>>,
}

impl<Y, S, P, E> MachineBuilder<Y, S, P, E>
where
    Y: Symbol,
    S: State,
    E: Debug + Display,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            payload: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the payload (required; use `()` for none).
    pub fn payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<Y, S, P, E>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: Rule<Y, S, P, E>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<Y, S, P, E>>,
    {
        self.rules.extend(rules);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<Y, S, P, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let payload = self.payload.ok_or(BuildError::MissingPayload)?;

        let mut machine = Machine::new(initial, payload);
        for rule in self.rules {
            machine.add_rule(rule);
        }

        Ok(machine)
    }
}

impl<Y, S, P, E> Default for MachineBuilder<Y, S, P, E>
where
    Y: Symbol,
    S: State,
    E: Debug + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{any_symbol, on};
    use crate::core::Transition;

    type Builder = MachineBuilder<char, &'static str, u32>;

    #[test]
    fn builder_validates_required_fields() {
        let result = Builder::new().payload(0).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_payload() {
        let result = Builder::new().initial("START").build();

        assert!(matches!(result, Err(BuildError::MissingPayload)));
    }

    #[test]
    fn empty_table_is_allowed() {
        let machine = Builder::new().initial("START").payload(0).build().unwrap();

        assert!(machine.table().is_empty());
        assert_eq!(machine.current_state(), &"START");
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = Builder::new()
            .initial("START")
            .payload(0)
            .transition(
                TransitionBuilder::new()
                    .on_each(['a', 'b'])
                    .from("START")
                    .to("START")
                    .update(|_: &char, count: &mut u32| *count += 1),
            )
            .unwrap()
            .transition(TransitionBuilder::new().on('.').from("START").to("END"))
            .unwrap()
            .build()
            .unwrap();

        machine.process_text("abba.").unwrap();

        assert_eq!(machine.current_state(), &"END");
        assert_eq!(machine.payload(), &4);
    }

    #[test]
    fn invalid_transition_builder_is_reported() {
        let result = Builder::new()
            .initial("START")
            .transition(TransitionBuilder::new().from("START").to("END"));

        assert!(matches!(result, Err(BuildError::MissingSymbol)));
    }

    #[test]
    fn later_rules_overwrite_earlier_ones() {
        let machine = Builder::new()
            .initial("S")
            .payload(0)
            .rules(vec![on('x', "S", "FIRST"), on('x', "S", "SECOND")])
            .rule(any_symbol("S", "ANY"))
            .rule(Rule::Default(Transition::to("ERROR")))
            .build()
            .unwrap();

        assert_eq!(machine.transition_for(&'x').unwrap().next, "SECOND");
        assert_eq!(machine.transition_for(&'y').unwrap().next, "ANY");
        assert_eq!(machine.table().default_transition().unwrap().next, "ERROR");
    }
}
