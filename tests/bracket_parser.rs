//! End-to-end test: a parser for bracketed digit pairs such as `(2, 1)`.

use std::collections::VecDeque;
use switchyard::builder::{MachineBuilder, TransitionBuilder};
use switchyard::{state_enum, Action, Machine, MachineError};

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

type PairParser = Machine<char, Pair, VecDeque<u32>>;

const DIGITS: [char; 3] = ['0', '1', '2'];

fn enqueue_digit(c: &char, queue: &mut VecDeque<u32>) {
    if let Some(digit) = c.to_digit(10) {
        queue.push_back(digit);
    }
}

fn pair_parser() -> PairParser {
    let mut machine = Machine::new(Pair::Start, VecDeque::new());
    let enqueue = Action::update(enqueue_digit);

    machine.add_transition('(', Pair::Start, Pair::BeforeX, None);
    machine.add_transitions(DIGITS, Pair::BeforeX, Pair::BeforeY, Some(enqueue.clone()));
    machine.add_transitions([',', ' '], Pair::BeforeY, Pair::BeforeY, None);
    machine.add_transitions(DIGITS, Pair::BeforeY, Pair::Y, Some(enqueue));
    machine.add_transition(')', Pair::Y, Pair::End, None);
    machine
}

#[test]
fn parses_pair_into_queue() {
    let mut machine = pair_parser();

    machine.process_text("(2, 1)").unwrap();

    assert_eq!(machine.current_state(), &Pair::End);
    assert!(machine.current_state().is_final());
    assert_eq!(machine.payload(), &VecDeque::from([2, 1]));
}

#[test]
fn tolerates_missing_separator_padding() {
    let mut machine = pair_parser();

    machine.process_text("(0,2)").unwrap();

    assert_eq!(machine.current_state(), &Pair::End);
    assert_eq!(machine.payload(), &VecDeque::from([0, 2]));
}

#[test]
fn digit_outside_alphabet_is_rejected() {
    let mut machine = pair_parser();

    let err = machine.process_text("(3, 1)").unwrap_err();

    assert!(matches!(
        err,
        MachineError::InvalidTransition {
            state: Pair::BeforeX,
            symbol: '3'
        }
    ));
    assert_eq!(machine.current_state(), &Pair::BeforeX);
    assert!(machine.payload().is_empty());
}

#[test]
fn trailing_input_after_end_is_rejected() {
    let mut machine = pair_parser();

    let err = machine.process_text("(1, 1))").unwrap_err();

    assert_eq!(err.state(), &Pair::End);
    assert_eq!(err.symbol(), &')');
    assert_eq!(machine.payload(), &VecDeque::from([1, 1]));
}

#[test]
fn reset_allows_reuse_with_accumulated_payload() {
    let mut machine = pair_parser();
    machine.process_text("(2, 1)").unwrap();

    machine.reset();
    machine.process_text("(0, 0)").unwrap();

    assert_eq!(machine.current_state(), &Pair::End);
    assert_eq!(machine.payload(), &VecDeque::from([2, 1, 0, 0]));
}

#[test]
fn builder_produces_equivalent_parser() {
    let mut machine: PairParser = MachineBuilder::new()
        .initial(Pair::Start)
        .payload(VecDeque::new())
        .transition(TransitionBuilder::new().on('(').from(Pair::Start).to(Pair::BeforeX))
        .and_then(|b| {
            b.transition(
                TransitionBuilder::new()
                    .on_each(DIGITS)
                    .from(Pair::BeforeX)
                    .to(Pair::BeforeY)
                    .update(enqueue_digit),
            )
        })
        .and_then(|b| {
            b.transition(
                TransitionBuilder::new()
                    .on_each([',', ' '])
                    .from(Pair::BeforeY)
                    .to(Pair::BeforeY),
            )
        })
        .and_then(|b| {
            b.transition(
                TransitionBuilder::new()
                    .on_each(DIGITS)
                    .from(Pair::BeforeY)
                    .to(Pair::Y)
                    .update(enqueue_digit),
            )
        })
        .and_then(|b| b.transition(TransitionBuilder::new().on(')').from(Pair::Y).to(Pair::End)))
        .and_then(|b| b.build())
        .unwrap();

    machine.process_text("(1, 2)").unwrap();

    assert_eq!(machine.current_state(), &Pair::End);
    assert_eq!(machine.into_payload(), VecDeque::from([1, 2]));
}
