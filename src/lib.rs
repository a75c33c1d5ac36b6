//! Switchyard: a symbol-driven finite state machine with an attached payload
//!
//! Switchyard executes a transition table supplied by the caller. Each
//! input symbol is resolved against the current state, the machine moves
//! to the resolved next state, and an optional action runs with the
//! symbol and a mutable borrow of the payload. Parsers, protocol decoders
//! and small interpreters can all be expressed this way.
//!
//! # Core Concepts
//!
//! - **States and symbols**: any `Clone + Eq + Hash + Debug` value
//! - **Transition table**: exact `(symbol, state)` entries, per-state
//!   wildcards and one optional default, resolved in that order
//! - **Actions**: shared callables that may mutate the payload, redirect
//!   the machine to another state, or fail
//! - **Payload**: owned by the machine, lent to each action for one call
//!
//! # Example
//!
//! ```rust
//! use std::collections::VecDeque;
//! use switchyard::{Action, Machine};
//!
//! fn enqueue(c: &char, queue: &mut VecDeque<u32>) {
//!     if let Some(d) = c.to_digit(10) {
//!         queue.push_back(d);
//!     }
//! }
//!
//! let mut machine: Machine<char, &str, VecDeque<u32>> = Machine::new("START", VecDeque::new());
//! machine.add_transition('(', "START", "BEFORE_X", None);
//! machine.add_transitions(['0', '1', '2'], "BEFORE_X", "BEFORE_Y", Some(Action::update(enqueue)));
//! machine.add_transitions([',', ' '], "BEFORE_Y", "BEFORE_Y", None);
//! machine.add_transitions(['0', '1', '2'], "BEFORE_Y", "Y", Some(Action::update(enqueue)));
//! machine.add_transition(')', "Y", "END", None);
//!
//! machine.process_text("(2, 1)").unwrap();
//!
//! assert_eq!(machine.current_state(), &"END");
//! assert_eq!(machine.payload(), &VecDeque::from([2, 1]));
//! ```
//!
//! Processing is synchronous. `process` takes `&mut self`, so an action
//! can never drive the machine that invoked it.

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Action, ActionResult, MatchKind, Resolution, Rule, State, Symbol, Transition};
pub use builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use engine::{Machine, MachineError, TransitionTable};
