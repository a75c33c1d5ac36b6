//! Build errors for machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building machines and transition rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Payload not specified. Call .payload(value) before .build()")]
    MissingPayload,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition symbol not specified. Call .on(symbol), .on_each(symbols) or .on_any()")]
    MissingSymbol,

    #[error("Transition scope is ambiguous: {0}")]
    ConflictingScope(&'static str),
}
