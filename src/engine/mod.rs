//! The transition engine.
//!
//! - **Table**: exact, wildcard and default transitions with a pure resolver
//! - **Machine**: owns state and payload, advances one symbol at a time
//! - **Errors**: unresolved symbols and failed actions
//!
//! Precedence when resolving a symbol in the current state is exact
//! entry, then the state's wildcard, then the default. Anything else is
//! a [`MachineError::InvalidTransition`].

mod error;
mod machine;
mod table;

pub use error::MachineError;
pub use machine::Machine;
pub use table::TransitionTable;
