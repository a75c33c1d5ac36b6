//! Machine that feeds symbols through a transition table.

use crate::core::{Action, Resolution, Rule, State, Symbol, Transition};
use crate::engine::error::MachineError;
use crate::engine::table::TransitionTable;
use std::convert::Infallible;
use std::fmt::{self, Debug, Display};

/// Finite state machine with an attached payload.
///
/// The machine owns the payload and lends it to each action as `&mut P`
/// for the duration of that call. `Y` is the symbol type, `S` the state
/// type and `E` the error type of actions.
pub struct Machine<Y, S, P, E = Infallible> {
    initial: S,
    current: S,
    payload: P,
    table: TransitionTable<Y, S, P, E>,
}

impl<Y, S, P, E> Machine<Y, S, P, E>
where
    Y: Symbol,
    S: State,
    E: Debug + Display,
{
    /// Create a machine in `initial` with an empty table.
    pub fn new(initial: S, payload: P) -> Self {
        Self::with_table(initial, payload, TransitionTable::new())
    }

    /// Create a machine around an existing table.
    pub fn with_table(initial: S, payload: P, table: TransitionTable<Y, S, P, E>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            payload,
            table,
        }
    }

    /// Register `(symbol, state) -> next`, replacing any previous entry.
    pub fn add_transition(
        &mut self,
        symbol: Y,
        state: S,
        next: S,
        action: Option<Action<Y, S, P, E>>,
    ) {
        self.table.insert(symbol, state, Transition { next, action });
    }

    /// Register the same transition for every symbol in `symbols`.
    pub fn add_transitions<I>(
        &mut self,
        symbols: I,
        state: S,
        next: S,
        action: Option<Action<Y, S, P, E>>,
    ) where
        I: IntoIterator<Item = Y>,
    {
        for symbol in symbols {
            self.add_transition(symbol, state.clone(), next.clone(), action.clone());
        }
    }

    /// Register a list of `(symbol, state, next, action)` entries.
    pub fn add_transitions_from<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Y, S, S, Option<Action<Y, S, P, E>>)>,
    {
        for (symbol, state, next, action) in entries {
            self.add_transition(symbol, state, next, action);
        }
    }

    /// Register the wildcard for `state`: any symbol without an exact
    /// entry moves to `next`.
    pub fn add_transition_any(&mut self, state: S, next: S, action: Option<Action<Y, S, P, E>>) {
        self.table.insert_any(state, Transition { next, action });
    }

    /// Set the transition used when nothing else matches.
    ///
    /// Passing `None` as `next` removes the default altogether; the action
    /// is dropped in that case.
    pub fn set_default_transition(&mut self, next: Option<S>, action: Option<Action<Y, S, P, E>>) {
        self.table
            .set_default(next.map(|next| Transition { next, action }));
    }

    /// Remove the default transition.
    pub fn clear_default_transition(&mut self) {
        self.table.set_default(None);
    }

    /// Register a rule produced by the builder API.
    pub fn add_rule(&mut self, rule: Rule<Y, S, P, E>) {
        match rule {
            Rule::Exact {
                symbols,
                state,
                transition,
            } => self.add_transitions(symbols, state, transition.next, transition.action),
            Rule::Wildcard { state, transition } => self.table.insert_any(state, transition),
            Rule::Default(transition) => self.table.set_default(Some(transition)),
        }
    }

    /// Advance the machine by one symbol.
    ///
    /// The machine first moves to the resolved transition's next state,
    /// then runs its action. A state returned by the action replaces the
    /// configured one. If the action fails the error is returned and the
    /// machine stays in the configured next state.
    ///
    /// When no transition applies the machine is left untouched and
    /// [`MachineError::InvalidTransition`] is returned.
    pub fn process(&mut self, symbol: Y) -> Result<&S, MachineError<Y, S, E>> {
        let Some(Resolution { kind, transition }) = self.table.resolve(&self.current, &symbol)
        else {
            tracing::debug!(state = ?self.current, symbol = ?symbol, "no transition for symbol");
            return Err(MachineError::InvalidTransition {
                state: self.current.clone(),
                symbol,
            });
        };

        tracing::trace!(
            state = ?self.current,
            symbol = ?symbol,
            next = ?transition.next,
            matched = ?kind,
            "resolved transition"
        );

        let from = std::mem::replace(&mut self.current, transition.next.clone());

        let Some(action) = &transition.action else {
            return Ok(&self.current);
        };

        match action.call(&symbol, &mut self.payload) {
            Ok(None) => {}
            Ok(Some(state)) => {
                tracing::debug!(
                    "action on {:?} redirected {:?} -> {:?} (configured {:?})",
                    symbol,
                    from,
                    state,
                    self.current
                );
                self.current = state;
            }
            Err(error) => {
                tracing::debug!(state = ?from, symbol = ?symbol, %error, "action failed");
                return Err(MachineError::Action {
                    state: from,
                    symbol,
                    error,
                });
            }
        }

        Ok(&self.current)
    }

    /// Process symbols in order, stopping at the first failure.
    pub fn process_sequence<I>(&mut self, symbols: I) -> Result<(), MachineError<Y, S, E>>
    where
        I: IntoIterator<Item = Y>,
    {
        for symbol in symbols {
            self.process(symbol)?;
        }
        Ok(())
    }

    /// Get current state
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine was created in
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check whether the machine is currently in `state`
    pub fn is_in(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Get the payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Get the payload mutably, e.g. to seed it between runs
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Swap in a new payload, returning the old one
    pub fn replace_payload(&mut self, payload: P) -> P {
        std::mem::replace(&mut self.payload, payload)
    }

    /// Consume the machine, keeping only the payload
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Transition `symbol` would take from the current state.
    pub fn transition_for(&self, symbol: &Y) -> Option<&Transition<Y, S, P, E>> {
        self.resolve(symbol).map(|resolution| resolution.transition)
    }

    /// Like [`transition_for`](Self::transition_for), also reporting which
    /// rule matched.
    pub fn resolve(&self, symbol: &Y) -> Option<Resolution<'_, Y, S, P, E>> {
        self.table.resolve(&self.current, symbol)
    }

    /// Return to the initial state. The table and the payload are kept.
    pub fn reset(&mut self) {
        tracing::debug!(from = ?self.current, to = ?self.initial, "reset");
        self.current = self.initial.clone();
    }

    /// Get the transition table
    pub fn table(&self) -> &TransitionTable<Y, S, P, E> {
        &self.table
    }
}

impl<S, P, E> Machine<char, S, P, E>
where
    S: State,
    E: Debug + Display,
{
    /// Process every `char` of `text` in order, stopping at the first failure.
    pub fn process_text(&mut self, text: &str) -> Result<(), MachineError<char, S, E>> {
        self.process_sequence(text.chars())
    }
}

impl<Y: Debug, S: Debug, P: Debug, E> fmt::Debug for Machine<Y, S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("payload", &self.payload)
            .field("table", &self.table)
            .finish()
    }
}
