//! Errors raised while processing symbols.

use std::convert::Infallible;
use std::fmt::{Debug, Display};
use thiserror::Error;

/// Errors that can occur in [`Machine::process`](crate::Machine::process).
///
/// `E` is the error type of the machine's actions. Action failures are
/// carried as-is; the engine never inspects them.
#[derive(Debug, Error)]
pub enum MachineError<Y: Debug, S: Debug, E: Debug + Display = Infallible> {
    /// No exact, wildcard or default transition applies.
    /// The machine is left in `state`.
    #[error("invalid transition: no transition for symbol {symbol:?} in state {state:?}")]
    InvalidTransition { state: S, symbol: Y },

    /// The action of the resolved transition failed.
    /// `state` is the state the machine was in before the symbol.
    #[error("action failed on symbol {symbol:?} from state {state:?}: {error}")]
    Action { state: S, symbol: Y, error: E },
}

impl<Y: Debug, S: Debug, E: Debug + Display> MachineError<Y, S, E> {
    /// State the machine was in when the symbol arrived.
    pub fn state(&self) -> &S {
        match self {
            Self::InvalidTransition { state, .. } | Self::Action { state, .. } => state,
        }
    }

    /// Symbol being processed when the error occurred.
    pub fn symbol(&self) -> &Y {
        match self {
            Self::InvalidTransition { symbol, .. } | Self::Action { symbol, .. } => symbol,
        }
    }

    /// Check if this is an unresolved transition rather than an action failure.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Recover the action's own error, if that is what this is.
    pub fn into_action_error(self) -> Option<E> {
        match self {
            Self::Action { error, .. } => Some(error),
            Self::InvalidTransition { .. } => None,
        }
    }
}
