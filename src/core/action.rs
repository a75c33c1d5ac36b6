//! Actions attached to transitions.
//!
//! An action runs after the machine has moved to the configured next
//! state. It sees the symbol that triggered the transition and a mutable
//! borrow of the payload, and it may name a different next state.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

/// What an action hands back to the processor.
///
/// `Ok(None)` keeps the configured next state, `Ok(Some(state))` replaces
/// it and `Err(error)` is passed through to the caller untouched.
pub type ActionResult<S, E> = Result<Option<S>, E>;

type ActionFn<Y, S, P, E> = dyn Fn(&Y, &mut P) -> ActionResult<S, E> + Send + Sync;

/// Callable invoked when a transition fires.
///
/// Actions are reference counted so the same action can be registered
/// under many symbols (see [`Machine::add_transitions`](crate::Machine::add_transitions))
/// without being rebuilt. Cloning an action is cheap.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Action;
///
/// let push_digit: Action<char, &str, Vec<u32>> = Action::update(|c: &char, stack: &mut Vec<u32>| {
///     if let Some(d) = c.to_digit(10) {
///         stack.push(d);
///     }
/// });
///
/// let mut stack = Vec::new();
/// assert_eq!(push_digit.call(&'7', &mut stack), Ok(None));
/// assert_eq!(stack, vec![7]);
/// ```
pub struct Action<Y, S, P, E = Infallible> {
    f: Arc<ActionFn<Y, S, P, E>>,
}

impl<Y, S, P, E> Action<Y, S, P, E> {
    /// Create an action from a function with the full signature.
    ///
    /// The function may mutate the payload, choose a new state, or fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Y, &mut P) -> ActionResult<S, E> + Send + Sync + 'static,
    {
        Action { f: Arc::new(f) }
    }

    /// Create an action that only mutates the payload.
    pub fn update<F>(f: F) -> Self
    where
        F: Fn(&Y, &mut P) + Send + Sync + 'static,
    {
        Self::new(move |symbol, payload| {
            f(symbol, payload);
            Ok(None)
        })
    }

    /// Create an action that mutates the payload and may fail.
    pub fn try_update<F>(f: F) -> Self
    where
        F: Fn(&Y, &mut P) -> Result<(), E> + Send + Sync + 'static,
    {
        Self::new(move |symbol, payload| f(symbol, payload).map(|()| None))
    }

    /// Create an action that always redirects the machine to `state`.
    pub fn goto(state: S) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        Self::new(move |_, _| Ok(Some(state.clone())))
    }

    /// Invoke the action.
    pub fn call(&self, symbol: &Y, payload: &mut P) -> ActionResult<S, E> {
        (self.f)(symbol, payload)
    }

    /// Whether two handles point at the same underlying function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl<Y, S, P, E> Clone for Action<Y, S, P, E> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<Y, S, P, E> fmt::Debug for Action<Y, S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Init,
        Done,
    }

    #[test]
    fn update_mutates_payload_and_keeps_state() {
        let action: Action<char, TestState, String> =
            Action::update(|c: &char, buf: &mut String| buf.push(*c));
        let mut buf = String::new();

        assert_eq!(action.call(&'a', &mut buf), Ok(None));
        assert_eq!(action.call(&'b', &mut buf), Ok(None));
        assert_eq!(buf, "ab");
    }

    #[test]
    fn goto_overrides_state() {
        let action: Action<char, TestState, ()> = Action::goto(TestState::Done);

        assert_eq!(action.call(&'=', &mut ()), Ok(Some(TestState::Done)));
    }

    #[test]
    fn try_update_passes_errors_through() {
        let action: Action<char, TestState, u32, String> =
            Action::try_update(|c: &char, total: &mut u32| {
                let d = c.to_digit(10).ok_or_else(|| format!("not a digit: {c}"))?;
                *total += d;
                Ok(())
            });
        let mut total = 0;

        assert_eq!(action.call(&'4', &mut total), Ok(None));
        assert_eq!(action.call(&'x', &mut total), Err("not a digit: x".to_string()));
        assert_eq!(total, 4);
    }

    #[test]
    fn new_can_branch_on_payload() {
        let action: Action<char, TestState, u32> = Action::new(|_: &char, count: &mut u32| {
            *count += 1;
            Ok((*count >= 2).then_some(TestState::Done))
        });
        let mut count = 0;

        assert_eq!(action.call(&'x', &mut count), Ok(None));
        assert_eq!(action.call(&'x', &mut count), Ok(Some(TestState::Done)));
        assert_ne!(TestState::Init, TestState::Done);
    }

    #[test]
    fn clones_share_the_function() {
        let action: Action<char, TestState, ()> = Action::goto(TestState::Init);
        let cloned = action.clone();
        let other: Action<char, TestState, ()> = Action::goto(TestState::Init);

        assert!(action.ptr_eq(&cloned));
        assert!(!action.ptr_eq(&other));
    }
}
