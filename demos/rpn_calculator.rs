//! RPN Calculator
//!
//! This example evaluates reverse Polish notation one character at a time.
//!
//! Key concepts:
//! - Wildcard transitions to skip whitespace
//! - A default transition with an error action
//! - Fallible actions whose errors reach the caller unchanged
//! - An action redirecting the machine to a terminal state
//!
//! Run with: RUST_LOG=switchyard=debug cargo run --example rpn_calculator

use switchyard::{state_enum, Action, Machine};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Rpn {
        Init,
        Number,
        Done,
    }
    final: [Done]
}

#[derive(Debug, Error)]
enum CalcError {
    #[error("unexpected symbol {0:?}")]
    UnexpectedSymbol(char),

    #[error("not enough operands")]
    StackUnderflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("number out of range: {0}")]
    Overflow(String),
}

#[derive(Debug, Default)]
struct Calculator {
    pending: String,
    stack: Vec<i64>,
}

impl Calculator {
    fn pop(&mut self) -> Result<i64, CalcError> {
        self.stack.pop().ok_or(CalcError::StackUnderflow)
    }
}

fn digit(c: &char, calc: &mut Calculator) {
    calc.pending.push(*c);
}

fn push_number(_: &char, calc: &mut Calculator) -> Result<(), CalcError> {
    let digits = std::mem::take(&mut calc.pending);
    // Only ASCII digits reach the buffer, so parsing fails on overflow alone.
    let n = digits.parse().map_err(|_| CalcError::Overflow(digits.clone()))?;
    calc.stack.push(n);
    Ok(())
}

fn operate(op: &char, calc: &mut Calculator) -> Result<(), CalcError> {
    let rhs = calc.pop()?;
    let lhs = calc.pop()?;
    let value = match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        _ if rhs == 0 => return Err(CalcError::DivisionByZero),
        _ => lhs / rhs,
    };
    calc.stack.push(value);
    Ok(())
}

fn calculator() -> Machine<char, Rpn, Calculator, CalcError> {
    let digits = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
    let mut machine = Machine::new(Rpn::Init, Calculator::default());

    machine.set_default_transition(
        Some(Rpn::Init),
        Some(Action::try_update(|c: &char, _: &mut Calculator| {
            Err(CalcError::UnexpectedSymbol(*c))
        })),
    );
    machine.add_transition_any(Rpn::Init, Rpn::Init, None);
    machine.add_transitions(digits, Rpn::Init, Rpn::Number, Some(Action::update(digit)));
    machine.add_transitions(digits, Rpn::Number, Rpn::Number, Some(Action::update(digit)));
    machine.add_transition(' ', Rpn::Number, Rpn::Init, Some(Action::try_update(push_number)));
    machine.add_transitions(
        ['+', '-', '*', '/'],
        Rpn::Init,
        Rpn::Init,
        Some(Action::try_update(operate)),
    );
    machine.add_transition('=', Rpn::Init, Rpn::Init, Some(Action::goto(Rpn::Done)));
    machine
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== RPN Calculator Example ===\n");

    let mut machine = calculator();

    for input in ["1 9 + 29 7 * * =", "8 2 / =", "4 0 / =", "1 + =", "2 3? ="] {
        machine.reset();
        machine.replace_payload(Calculator::default());

        match machine.process_text(input) {
            Ok(()) => println!(
                "{input:>18} -> {:?} ({})",
                machine.payload().stack.last(),
                machine.current_state()
            ),
            Err(err) => println!("{input:>18} -> error: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
