//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders, rule helpers and a macro for
//! declaring state enums, as an alternative to calling the `add_*`
//! methods of [`Machine`](crate::Machine) one by one.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Rule, Transition};

/// Create an exact rule `(symbol, from) -> to` without an action.
///
/// # Example
///
/// ```
/// use switchyard::builder::{on, MachineBuilder};
///
/// let mut machine = MachineBuilder::<char, &str, ()>::new()
///     .initial("START")
///     .payload(())
///     .rule(on('(', "START", "OPEN"))
///     .build()
///     .unwrap();
///
/// machine.process('(').unwrap();
/// assert_eq!(machine.current_state(), &"OPEN");
/// ```
pub fn on<Y, S, P, E>(symbol: Y, from: S, to: S) -> Rule<Y, S, P, E> {
    Rule::Exact {
        symbols: vec![symbol],
        state: from,
        transition: Transition::to(to),
    }
}

/// Create a wildcard rule `from -> to` without an action.
///
/// # Example
///
/// ```
/// use switchyard::builder::{any_symbol, MachineBuilder};
///
/// let mut machine = MachineBuilder::<char, &str, ()>::new()
///     .initial("SKIP")
///     .payload(())
///     .rule(any_symbol("SKIP", "SKIP"))
///     .build()
///     .unwrap();
///
/// machine.process_text("anything at all").unwrap();
/// assert_eq!(machine.current_state(), &"SKIP");
/// ```
pub fn any_symbol<Y, S, P, E>(from: S, to: S) -> Rule<Y, S, P, E> {
    Rule::Wildcard {
        state: from,
        transition: Transition::to(to),
    }
}
