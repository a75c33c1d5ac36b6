//! Core value types of the engine.
//!
//! This module holds the vocabulary shared by the table, the machine and
//! the builders:
//! - `State` and `Symbol` identity traits
//! - `Action`, the callable attached to a transition
//! - `Transition` and the `Resolution` produced by a lookup
//! - `Rule`, a unit of table configuration
//!
//! Nothing in here mutates a machine.

mod action;
mod rule;
mod state;
mod transition;

pub use action::{Action, ActionResult};
pub use rule::Rule;
pub use state::{State, Symbol};
pub use transition::{MatchKind, Resolution, Transition};
