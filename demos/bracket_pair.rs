//! Bracket Pair Parser
//!
//! This example parses inputs like `(2, 1)` into a queue of digits.
//!
//! Key concepts:
//! - Exact transitions registered for groups of symbols
//! - One action shared by several transitions
//! - Unresolved symbols surface as `InvalidTransition`
//!
//! Run with: RUST_LOG=switchyard=trace cargo run --example bracket_pair

use std::collections::VecDeque;
use switchyard::{state_enum, Action, Machine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Pair {
        Start,
        BeforeX,
        BeforeY,
        Y,
        End,
    }
    final: [End]
}

fn enqueue_digit(c: &char, queue: &mut VecDeque<u32>) {
    if let Some(digit) = c.to_digit(10) {
        queue.push_back(digit);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bracket Pair Parser Example ===\n");

    let digits = ['0', '1', '2'];
    let enqueue = Action::update(enqueue_digit);

    let mut machine: Machine<char, Pair, VecDeque<u32>> = Machine::new(Pair::Start, VecDeque::new());
    machine.add_transition('(', Pair::Start, Pair::BeforeX, None);
    machine.add_transitions(digits, Pair::BeforeX, Pair::BeforeY, Some(enqueue.clone()));
    machine.add_transitions([',', ' '], Pair::BeforeY, Pair::BeforeY, None);
    machine.add_transitions(digits, Pair::BeforeY, Pair::Y, Some(enqueue));
    machine.add_transition(')', Pair::Y, Pair::End, None);

    for input in ["(2, 1)", "(0,2)", "(3, 1)"] {
        machine.reset();
        machine.payload_mut().clear();

        match machine.process_text(input) {
            Ok(()) => println!(
                "{input:>8} -> {} {:?}",
                machine.current_state(),
                machine.payload()
            ),
            Err(err) => println!("{input:>8} -> rejected: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
