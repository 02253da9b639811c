// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use libpda::automaton::{AlphabetSymbol, InputSymbol, StackSymbol, State};
use libpda::sim::{ExecutionSpy, PdaSimulator};
use libpda::text;

const AN_BN: &str = r#"
# accepts { a^n b^n : n >= 0 } by empty stack
q0          # states
a b         # input alphabet
S Z         # stack alphabet
q0          # initial state
Z           # initial stack top
q0 a Z q0 S Z
q0 a S q0 S S
q0 b S q0 .
q0 . Z q0 .
"#;

// accepts even-length palindromes over {a, b}: push a marker per symbol,
// guess the middle with an epsilon-move, then match markers while popping
const EVEN_PALINDROMES: &str = r#"
q0 q1
a b
A B Z
q0
Z
q0 a Z q0 A Z
q0 b Z q0 B Z
q0 a A q0 A A
q0 a B q0 A B
q0 b A q0 B A
q0 b B q0 B B
q0 . Z q1 Z
q0 . A q1 A
q0 . B q1 B
q1 a A q1 .
q1 b B q1 .
q1 . Z q1 .
"#;

// accepts one or more `a`: the key (q0, Z, a) has two outcomes
const A_PLUS: &str = r#"
q0
a
Z
q0
Z
q0 a Z q0 Z
q0 a Z q0 .
"#;

#[test]
fn accepts_matched_as_and_bs() {
    let def = text::parse_str(AN_BN, Some("an_bn")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    assert!(sim.accepts(&text::parse_word_str(".")).unwrap());
    assert!(sim.accepts(&text::parse_word_str("a b")).unwrap());
    assert!(sim.accepts(&text::parse_word_str("a a b b")).unwrap());
    assert!(!sim.accepts(&text::parse_word_str("a a b")).unwrap());
    assert!(!sim.accepts(&text::parse_word_str("b")).unwrap());
    assert!(!sim.accepts(&text::parse_word_str("b a")).unwrap());
}

#[test]
fn backtracks_across_nondeterministic_outcomes() {
    let def = text::parse_str(A_PLUS, Some("a_plus")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    assert!(!sim.accepts(&text::parse_word_str(".")).unwrap());
    assert!(sim.accepts(&text::parse_word_str("a")).unwrap());
    assert!(sim.accepts(&text::parse_word_str("a a a")).unwrap());
}

#[test]
fn guesses_the_middle_of_palindromes() {
    let def = text::parse_str(EVEN_PALINDROMES, Some("palindromes")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    for accepted in [".", "a a", "b b", "a b b a", "b a a b", "a b b b b a"] {
        assert!(
            sim.accepts(&text::parse_word_str(accepted)).unwrap(),
            "should accept {accepted:?}"
        );
    }
    for rejected in ["a", "a b", "a a b", "a b a", "a b a b"] {
        assert!(
            !sim.accepts(&text::parse_word_str(rejected)).unwrap(),
            "should reject {rejected:?}"
        );
    }
}

#[test]
fn repeated_calls_are_independent() {
    let def = text::parse_str(AN_BN, Some("an_bn")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    let word = text::parse_word_str("a a b b");
    assert!(sim.accepts(&word).unwrap());
    assert!(sim.accepts(&word).unwrap());

    // stack and tape are back in their reset state
    assert_eq!(sim.stack().symbols().to_vec(), vec![StackSymbol::new("Z")]);
    assert_eq!(sim.tape().remaining().len(), 4);

    let rejected = text::parse_word_str("a a b");
    assert!(!sim.accepts(&rejected).unwrap());
    assert!(!sim.accepts(&rejected).unwrap());
    assert_eq!(sim.stack().symbols().to_vec(), vec![StackSymbol::new("Z")]);
}

#[test]
fn rejects_words_outside_the_input_alphabet_before_searching() {
    let def = text::parse_str(AN_BN, Some("an_bn")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    let err = sim.accepts(&text::parse_word_str("a c b")).unwrap_err();
    assert_eq!(err.symbol_name(), "c");
}

#[derive(Default)]
struct RecordingSpy {
    events: Vec<String>,
}

impl ExecutionSpy for RecordingSpy {
    fn explore(&mut self, state: &State, remaining: &[InputSymbol], stack: &[StackSymbol]) {
        let remaining = remaining
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        // report the top of the stack first
        let stack = stack
            .iter()
            .rev()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.events.push(format!("explore {state} [{remaining}] [{stack}]"));
    }

    fn path_finished(&mut self, accepted: bool) {
        self.events.push(format!("finished {accepted}"));
    }
}

#[test]
fn reports_configurations_in_depth_first_order() {
    let def = text::parse_str(AN_BN, Some("an_bn")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    let mut spy = RecordingSpy::default();
    assert!(sim
        .accepts_traced(&text::parse_word_str("a b"), &mut spy)
        .unwrap());
    assert_eq!(
        spy.events,
        vec![
            "explore q0 [a b] [Z]",
            "explore q0 [b] [S Z]",
            "explore q0 [] [Z]",
            "explore q0 [] []",
            "finished true",
        ]
    );
}

#[test]
fn reports_dead_ends() {
    let def = text::parse_str(AN_BN, Some("an_bn")).unwrap();
    let mut sim = PdaSimulator::new(&def);
    let mut spy = RecordingSpy::default();
    assert!(!sim.accepts_traced(&text::parse_word_str("b"), &mut spy).unwrap());
    assert_eq!(
        spy.events,
        vec![
            // consuming `b` on top of `Z` has no outcome; the only epsilon
            // move pops `Z` and strands the unread input
            "explore q0 [b] [Z]",
            "explore q0 [b] []",
            "finished false",
        ]
    );
}
