//! Transition table and resolver.

use crate::core::{MatchKind, Resolution, State, Symbol, Transition};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;

/// Exact, wildcard and default transitions of a machine.
///
/// Every insertion overwrites whatever was registered under the same key,
/// so registration order only matters between writes to the same key.
pub struct TransitionTable<Y, S, P, E = Infallible> {
    exact: HashMap<(Y, S), Transition<Y, S, P, E>>,
    wildcard: HashMap<S, Transition<Y, S, P, E>>,
    default: Option<Transition<Y, S, P, E>>,
}

impl<Y: Symbol, S: State, P, E> TransitionTable<Y, S, P, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            exact: HashMap::new(),
            wildcard: HashMap::new(),
            default: None,
        }
    }

    /// Insert or overwrite the exact entry for `(symbol, state)`.
    pub fn insert(&mut self, symbol: Y, state: S, transition: Transition<Y, S, P, E>) {
        self.exact.insert((symbol, state), transition);
    }

    /// Insert or overwrite the wildcard entry for `state`.
    pub fn insert_any(&mut self, state: S, transition: Transition<Y, S, P, E>) {
        self.wildcard.insert(state, transition);
    }

    /// Set the default transition. `None` removes it.
    pub fn set_default(&mut self, transition: Option<Transition<Y, S, P, E>>) {
        self.default = transition;
    }

    /// Look up the transition for `symbol` in `state`.
    ///
    /// Precedence is exact entry, then the state's wildcard, then the
    /// default. This is a pure lookup.
    pub fn resolve(&self, state: &S, symbol: &Y) -> Option<Resolution<'_, Y, S, P, E>> {
        // Tuple keys cannot be borrowed piecewise, so the probe key is owned.
        let key = (symbol.clone(), state.clone());
        if let Some(transition) = self.exact.get(&key) {
            return Some(Resolution {
                kind: MatchKind::Exact,
                transition,
            });
        }

        if let Some(transition) = self.wildcard.get(state) {
            return Some(Resolution {
                kind: MatchKind::Wildcard,
                transition,
            });
        }

        self.default.as_ref().map(|transition| Resolution {
            kind: MatchKind::Default,
            transition,
        })
    }

    /// Exact entry for `(symbol, state)`, ignoring wildcards and default.
    pub fn exact(&self, symbol: &Y, state: &S) -> Option<&Transition<Y, S, P, E>> {
        self.exact.get(&(symbol.clone(), state.clone()))
    }

    /// Wildcard entry for `state`.
    pub fn wildcard(&self, state: &S) -> Option<&Transition<Y, S, P, E>> {
        self.wildcard.get(state)
    }

    /// The default transition, if set.
    pub fn default_transition(&self) -> Option<&Transition<Y, S, P, E>> {
        self.default.as_ref()
    }

    /// Number of exact entries.
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    /// True when no exact, wildcard or default transition is registered.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wildcard.is_empty() && self.default.is_none()
    }

    /// Number of wildcard entries.
    pub fn wildcard_len(&self) -> usize {
        self.wildcard.len()
    }
}

impl<Y: Symbol, S: State, P, E> Default for TransitionTable<Y, S, P, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Y: Symbol, S: State, P, E> Clone for TransitionTable<Y, S, P, E> {
    fn clone(&self) -> Self {
        Self {
            exact: self.exact.clone(),
            wildcard: self.wildcard.clone(),
            default: self.default.clone(),
        }
    }
}

impl<Y: fmt::Debug, S: fmt::Debug, P, E> fmt::Debug for TransitionTable<Y, S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("exact", &self.exact)
            .field("wildcard", &self.wildcard)
            .field("default", &self.default)
            .finish()
    }
}
