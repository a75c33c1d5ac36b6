//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Action, Rule, Transition};
use std::convert::Infallible;

/// Builder for constructing transition rules with a fluent API.
///
/// The scope of the rule is chosen with exactly one of
/// [`on`](Self::on)/[`on_each`](Self::on_each), [`on_any`](Self::on_any)
/// or [`otherwise`](Self::otherwise).
pub struct TransitionBuilder<Y, S, P, E = Infallible> {
    symbols: Vec<Y>,
    any: bool,
    fallback: bool,
    from: Option<S>,
    to: Option<S>,
    action: Option<Action<Y, S, P, E>>,
}

impl<Y, S, P, E> TransitionBuilder<Y, S, P, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            any: false,
            fallback: false,
            from: None,
            to: None,
            action: None,
        }
    }

    /// Match a single symbol. May be called repeatedly.
    pub fn on(mut self, symbol: Y) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Match every symbol in `symbols`.
    pub fn on_each<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = Y>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Match any symbol without an exact entry (wildcard).
    pub fn on_any(mut self) -> Self {
        self.any = true;
        self
    }

    /// Make this the machine-wide default transition.
    pub fn otherwise(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Set the source state (required unless `otherwise`).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Attach an action (optional).
    pub fn action(mut self, action: Action<Y, S, P, E>) -> Self {
        self.action = Some(action);
        self
    }

    /// Attach a payload-only action built from a closure.
    pub fn update<F>(self, f: F) -> Self
    where
        F: Fn(&Y, &mut P) + Send + Sync + 'static,
    {
        self.action(Action::update(f))
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<Y, S, P, E>, BuildError> {
        let next = self.to.ok_or(BuildError::MissingToState)?;
        let transition = Transition {
            next,
            action: self.action,
        };

        if self.fallback {
            if self.from.is_some() || self.any || !self.symbols.is_empty() {
                return Err(BuildError::ConflictingScope(
                    "otherwise() applies to every state and symbol",
                ));
            }
            return Ok(Rule::Default(transition));
        }

        let state = self.from.ok_or(BuildError::MissingFromState)?;

        match (self.any, self.symbols.is_empty()) {
            (true, true) => Ok(Rule::Wildcard { state, transition }),
            (false, false) => Ok(Rule::Exact {
                symbols: self.symbols,
                state,
                transition,
            }),
            (true, false) => Err(BuildError::ConflictingScope(
                "on_any() cannot be combined with explicit symbols",
            )),
            (false, true) => Err(BuildError::MissingSymbol),
        }
    }
}

impl<Y, S, P, E> Default for TransitionBuilder<Y, S, P, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Builder = TransitionBuilder<char, &'static str, Vec<char>>;

    #[test]
    fn builder_validates_required_fields() {
        let result = Builder::new().on('a').from("START").build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn builder_requires_source_state() {
        let result = Builder::new().on('a').to("END").build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_requires_symbol_scope() {
        let result = Builder::new().from("START").to("END").build();

        assert!(matches!(result, Err(BuildError::MissingSymbol)));
    }

    #[test]
    fn on_any_with_symbols_is_rejected() {
        let result = Builder::new().on('a').on_any().from("S").to("T").build();

        assert!(matches!(result, Err(BuildError::ConflictingScope(_))));
    }

    #[test]
    fn otherwise_with_source_is_rejected() {
        let result = Builder::new().otherwise().from("S").to("T").build();

        assert!(matches!(result, Err(BuildError::ConflictingScope(_))));
    }

    #[test]
    fn fluent_api_builds_exact_rule() {
        let rule = Builder::new()
            .on('0')
            .on_each(['1', '2'])
            .from("BEFORE_X")
            .to("BEFORE_Y")
            .update(|c: &char, seen: &mut Vec<char>| seen.push(*c))
            .build()
            .unwrap();

        let Rule::Exact {
            symbols,
            state,
            transition,
        } = rule
        else {
            panic!("expected an exact rule");
        };
        assert_eq!(symbols, vec!['0', '1', '2']);
        assert_eq!(state, "BEFORE_X");
        assert_eq!(transition.next, "BEFORE_Y");
        assert!(transition.has_action());
    }

    #[test]
    fn fluent_api_builds_wildcard_and_default() {
        let wildcard = Builder::new().on_any().from("INIT").to("INIT").build().unwrap();
        assert!(matches!(wildcard, Rule::Wildcard { state: "INIT", .. }));

        let default = Builder::new()
            .otherwise()
            .to("ERROR")
            .action(Action::goto("ERROR"))
            .build()
            .unwrap();
        assert!(matches!(default, Rule::Default(_)));
        assert_eq!(default.next(), &"ERROR");
    }
}
