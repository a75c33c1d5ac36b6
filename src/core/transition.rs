//! Transition values and resolution results.

use super::action::Action;
use std::convert::Infallible;
use std::fmt;

/// Where a transition leads and what runs when it fires.
pub struct Transition<Y, S, P, E = Infallible> {
    /// State the machine moves to before the action runs
    pub next: S,
    /// Optional action invoked with the symbol and the payload
    pub action: Option<Action<Y, S, P, E>>,
}

impl<Y, S, P, E> Transition<Y, S, P, E> {
    /// Transition to `next` without an action.
    pub fn to(next: S) -> Self {
        Self { next, action: None }
    }

    /// Transition to `next`, then run `action`.
    pub fn with_action(next: S, action: Action<Y, S, P, E>) -> Self {
        Self {
            next,
            action: Some(action),
        }
    }

    /// Check whether an action is attached.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl<Y, S: Clone, P, E> Clone for Transition<Y, S, P, E> {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
            action: self.action.clone(),
        }
    }
}

impl<Y, S: fmt::Debug, P, E> fmt::Debug for Transition<Y, S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("next", &self.next)
            .field("action", &self.action)
            .finish()
    }
}

/// Which rule of the precedence order produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Exact `(symbol, state)` entry
    Exact,

    /// Wildcard entry for the state, any symbol
    Wildcard,

    /// Machine-wide default
    Default,
}

/// A resolved transition together with the rule that matched.
pub struct Resolution<'a, Y, S, P, E = Infallible> {
    pub kind: MatchKind,
    pub transition: &'a Transition<Y, S, P, E>,
}

impl<Y, S, P, E> Clone for Resolution<'_, Y, S, P, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Y, S, P, E> Copy for Resolution<'_, Y, S, P, E> {}

impl<Y, S: fmt::Debug, P, E> fmt::Debug for Resolution<'_, Y, S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("kind", &self.kind)
            .field("transition", self.transition)
            .finish()
    }
}
