//! Identity traits for states and symbols.
//!
//! The engine never looks inside a state or a symbol. It only needs to
//! clone them, compare them and hash them so they can act as table keys.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is an opaque identifier. Anything that can be cloned,
/// compared, hashed and debug-printed qualifies: `&'static str`,
/// `String`, `char`, or an enum declared with [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&"START");
/// assert_state(&String::from("END"));
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> State for T {}

/// Trait for input symbols.
///
/// One symbol is one unit of input fed to [`Machine::process`](crate::Machine::process).
/// Like states, symbols are compared structurally and never interpreted.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}
