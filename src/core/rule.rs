//! Registrable transition rules.

use super::transition::Transition;
use std::convert::Infallible;
use std::fmt;

/// One unit of table configuration.
///
/// Rules are what [`TransitionBuilder`](crate::builder::TransitionBuilder)
/// produces and what [`Machine::add_rule`](crate::Machine::add_rule) consumes.
pub enum Rule<Y, S, P, E = Infallible> {
    /// Exact entries for every symbol in `symbols`, all sharing one transition
    Exact {
        symbols: Vec<Y>,
        state: S,
        transition: Transition<Y, S, P, E>,
    },

    /// Wildcard entry for `state`
    Wildcard {
        state: S,
        transition: Transition<Y, S, P, E>,
    },

    /// Machine-wide default
    Default(Transition<Y, S, P, E>),
}

impl<Y, S, P, E> Rule<Y, S, P, E> {
    /// Target state of the rule's transition.
    pub fn next(&self) -> &S {
        match self {
            Self::Exact { transition, .. }
            | Self::Wildcard { transition, .. }
            | Self::Default(transition) => &transition.next,
        }
    }
}

impl<Y: fmt::Debug, S: fmt::Debug, P, E> fmt::Debug for Rule<Y, S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact {
                symbols,
                state,
                transition,
            } => f
                .debug_struct("Exact")
                .field("symbols", symbols)
                .field("state", state)
                .field("transition", transition)
                .finish(),
            Self::Wildcard { state, transition } => f
                .debug_struct("Wildcard")
                .field("state", state)
                .field("transition", transition)
                .finish(),
            Self::Default(transition) => f.debug_tuple("Default").field(transition).finish(),
        }
    }
}
