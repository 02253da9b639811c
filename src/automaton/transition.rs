// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use super::symbol::{InputSymbol, StackSymbol, State};
use indexmap::{Equivalent, IndexMap, IndexSet};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// Stack symbols pushed by a single transition; short sequences stay inline.
pub type PushSequence = SmallVec<[StackSymbol; 4]>;

/// Input of the transition relation: the current state, the symbol on top of
/// the stack and the consumed input symbol, `None` for an epsilon-move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionKey {
    pub state: State,
    pub stack_top: StackSymbol,
    pub input: Option<InputSymbol>,
}

/// One nondeterministic alternative: the state to move to and the symbols to
/// push, with the first element of `push` ending up on top of the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub next_state: State,
    pub push: PushSequence,
}

/// Borrowed version of [`TransitionKey`] so that lookups on the hot path of
/// the search never clone symbols just to build a key.
struct KeyRef<'a> {
    state: &'a State,
    stack_top: &'a StackSymbol,
    input: Option<&'a InputSymbol>,
}

// `TransitionKey` and `KeyRef` must hash identically for the `Equivalent`
// based lookup to work, so both impls delegate here.
fn hash_key<H: Hasher>(
    state: &State,
    stack_top: &StackSymbol,
    input: Option<&InputSymbol>,
    hasher: &mut H,
) {
    state.hash(hasher);
    stack_top.hash(hasher);
    match input {
        None => hasher.write_u8(0),
        Some(symbol) => {
            hasher.write_u8(1);
            symbol.hash(hasher);
        }
    }
}

impl Hash for TransitionKey {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hash_key(&self.state, &self.stack_top, self.input.as_ref(), hasher);
    }
}

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hash_key(self.state, self.stack_top, self.input, hasher);
    }
}

impl Equivalent<TransitionKey> for KeyRef<'_> {
    fn equivalent(&self, key: &TransitionKey) -> bool {
        self.state == &key.state
            && self.stack_top == &key.stack_top
            && self.input == key.input.as_ref()
    }
}

/// The transition relation as a multimap. A key maps to a *set* of outcomes
/// (inserting the same outcome twice collapses to one entry), which is what
/// makes the automaton nondeterministic. Lookup is total: a key that was
/// never inserted yields no outcomes instead of an error, so "no applicable
/// move" stays ordinary control flow for the search.
#[derive(Debug, Clone, Default)]
pub struct TransitionFunction {
    map: IndexMap<TransitionKey, IndexSet<Outcome>>,
}

impl TransitionFunction {
    pub fn insert(&mut self, key: TransitionKey, outcome: Outcome) {
        self.map
            .entry(key)
            .or_insert_with(IndexSet::new)
            .insert(outcome);
    }

    /// All outcomes for `(state, stack_top, input)` in insertion order; pass
    /// `None` as `input` to query the epsilon-moves.
    pub fn outcomes<'a>(
        &'a self,
        state: &State,
        stack_top: &StackSymbol,
        input: Option<&InputSymbol>,
    ) -> impl Iterator<Item = &'a Outcome> {
        let key = KeyRef {
            state,
            stack_top,
            input,
        };
        self.map.get(&key).into_iter().flatten()
    }

    /// Number of distinct keys with at least one outcome.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Keys with their outcome sets, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey, &IndexSet<Outcome>)> {
        self.map.iter()
    }
}
