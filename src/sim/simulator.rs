// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use super::spy::ExecutionSpy;
use super::stack::PdaStack;
use super::tape::InputTape;
use super::AlphabetViolation;
use crate::automaton::{InputSymbol, PdaDefinition, StackSymbol, State, Word};

/// Decides acceptance by empty stack: a word is accepted iff some sequence
/// of moves consumes all of it and leaves the stack empty.
///
/// The search is a depth-first walk over the reachable configurations that
/// mutates one shared stack and tape in place and reverts them symmetrically
/// on backtrack, instead of cloning both at every branch. Every push has a
/// matching pop and every consume a matching unconsume on every path out of
/// a step, including the early return on acceptance, so the caller always
/// gets its configuration back unchanged.
pub struct PdaSimulator<'a> {
    def: &'a PdaDefinition,
    stack: PdaStack<'a>,
    tape: InputTape<'a>,
}

impl<'a> PdaSimulator<'a> {
    pub fn new(def: &'a PdaDefinition) -> Self {
        let stack = PdaStack::new(def.stack_alphabet(), def.initial_stack_top().clone());
        let tape = InputTape::new(def.input_alphabet());
        PdaSimulator { def, stack, tape }
    }

    /// Runs the acceptance search on `word`. Fails before searching if the
    /// word uses symbols outside the input alphabet. Repeated calls are
    /// independent: stack and tape are re-seeded on entry and restored on
    /// return.
    ///
    /// Termination is a property of the automaton, not of the search: no
    /// cycle detection is performed, so an epsilon-move cycle reachable from
    /// some (state, stack top) pair can make this run forever.
    pub fn accepts(&mut self, word: &Word) -> Result<bool, AlphabetViolation> {
        self.accepts_traced(word, &mut SilentSpy)
    }

    /// Like [`accepts`](Self::accepts), but reports every explored
    /// configuration and finished path to `spy`.
    pub fn accepts_traced(
        &mut self,
        word: &Word,
        spy: &mut dyn ExecutionSpy,
    ) -> Result<bool, AlphabetViolation> {
        self.stack.reset();
        self.tape.set_word(word)?;
        let def: &'a PdaDefinition = self.def;
        Ok(self.search(def.initial_state(), &[], spy))
    }

    /// The stack of the most recent run, restored to its seeded state.
    pub fn stack(&self) -> &PdaStack<'a> {
        &self.stack
    }

    /// The tape of the most recent run, rewound to the start of the word.
    pub fn tape(&self) -> &InputTape<'a> {
        &self.tape
    }

    /// One step of the backtracking search: pushes `pending`, explores every
    /// applicable move and restores stack and tape before returning.
    fn search(
        &mut self,
        current: &State,
        pending: &[StackSymbol],
        spy: &mut dyn ExecutionSpy,
    ) -> bool {
        if let Err(violation) = self.stack.push_sequence(pending) {
            panic!("transition pushed a symbol outside the stack alphabet: {violation}");
        }
        spy.explore(current, self.tape.remaining(), self.stack.symbols());

        let accepted = match self.stack.pop() {
            // Empty stack: no move can ever apply again, so this path
            // accepts exactly when the whole word has been read.
            None => {
                let accepted = self.tape.is_empty();
                spy.path_finished(accepted);
                accepted
            }
            Some(top) => {
                let def: &'a PdaDefinition = self.def;
                let mut accepted = false;
                let mut moves = 0usize;

                // Moves that consume the next input symbol. The symbol is
                // consumed tentatively and handed back below, whether or not
                // a branch accepted.
                if let Some(symbol) = self.tape.consume() {
                    for outcome in def.transitions().outcomes(current, &top, Some(&symbol)) {
                        moves += 1;
                        if self.search(&outcome.next_state, &outcome.push, spy) {
                            accepted = true;
                            break;
                        }
                    }
                    self.tape.unconsume();
                }

                // Epsilon-moves.
                if !accepted {
                    for outcome in def.transitions().outcomes(current, &top, None) {
                        moves += 1;
                        if self.search(&outcome.next_state, &outcome.push, spy) {
                            accepted = true;
                            break;
                        }
                    }
                }

                if moves == 0 {
                    spy.path_finished(false);
                }

                // undo the pop so the caller sees the stack it handed us
                self.stack
                    .push(top)
                    .expect("a symbol popped from the stack must belong to the stack alphabet");
                accepted
            }
        };

        self.stack.pop_n(pending.len());
        accepted
    }
}

/// Spy that ignores every notification.
struct SilentSpy;

impl ExecutionSpy for SilentSpy {
    fn explore(&mut self, _state: &State, _remaining: &[InputSymbol], _stack: &[StackSymbol]) {}

    fn path_finished(&mut self, _accepted: bool) {}
}
