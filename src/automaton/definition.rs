// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use super::config::PdaConfig;
use super::error::DefinitionError;
use super::set::SymbolSet;
use super::symbol::{InputSymbol, StackSymbol, State, EMPTY_STRING_REPR};
use super::transition::{Outcome, PushSequence, TransitionFunction, TransitionKey};

/// A fully validated pushdown automaton: every name is unique within its
/// set, every reference resolves, and the transition relation only mentions
/// symbols from the three sets. Immutable once built; simulators borrow it.
#[derive(Debug, Clone)]
pub struct PdaDefinition {
    states: SymbolSet<State>,
    input_alphabet: SymbolSet<InputSymbol>,
    stack_alphabet: SymbolSet<StackSymbol>,
    initial_state: State,
    initial_stack_top: StackSymbol,
    /// Carried from the raw configuration for round-tripping. Empty-stack
    /// acceptance never reads these.
    accepting_states: Vec<State>,
    transitions: TransitionFunction,
}

impl PdaDefinition {
    /// Validates a raw configuration and builds the definition. This is the
    /// only way to turn unchecked names into something a simulator accepts.
    pub fn from_config(config: &PdaConfig) -> Result<Self, DefinitionError> {
        let states = SymbolSet::new(config.states.iter().map(String::as_str))?;
        let input_alphabet = SymbolSet::new(config.input_alphabet.iter().map(String::as_str))?;
        let stack_alphabet = SymbolSet::new(config.stack_alphabet.iter().map(String::as_str))?;
        let initial_state = states.resolve(&config.initial_state)?;
        let initial_stack_top = stack_alphabet.resolve(&config.initial_stack_top)?;
        let accepting_states = config
            .accepting_states
            .iter()
            .map(|name| states.resolve(name))
            .collect::<Result<_, _>>()?;

        let mut transitions = TransitionFunction::default();
        for row in &config.transitions {
            let (key, outcome) =
                parse_transition_row(row, &states, &input_alphabet, &stack_alphabet)?;
            transitions.insert(key, outcome);
        }

        Ok(PdaDefinition {
            states,
            input_alphabet,
            stack_alphabet,
            initial_state,
            initial_stack_top,
            accepting_states,
            transitions,
        })
    }

    pub(crate) fn from_parts(
        states: SymbolSet<State>,
        input_alphabet: SymbolSet<InputSymbol>,
        stack_alphabet: SymbolSet<StackSymbol>,
        initial_state: State,
        initial_stack_top: StackSymbol,
        accepting_states: Vec<State>,
        transitions: TransitionFunction,
    ) -> Self {
        PdaDefinition {
            states,
            input_alphabet,
            stack_alphabet,
            initial_state,
            initial_stack_top,
            accepting_states,
            transitions,
        }
    }

    pub fn states(&self) -> &SymbolSet<State> {
        &self.states
    }

    pub fn input_alphabet(&self) -> &SymbolSet<InputSymbol> {
        &self.input_alphabet
    }

    pub fn stack_alphabet(&self) -> &SymbolSet<StackSymbol> {
        &self.stack_alphabet
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn initial_stack_top(&self) -> &StackSymbol {
        &self.initial_stack_top
    }

    /// States listed as accepting by the definition source. The empty-stack
    /// acceptance search does not consult them.
    pub fn accepting_states(&self) -> &[State] {
        &self.accepting_states
    }

    pub fn transitions(&self) -> &TransitionFunction {
        &self.transitions
    }
}

/// Interprets one raw transition row
/// (`state, input-symbol-or-".", stack-top, next-state, push-symbols...`).
pub(crate) fn parse_transition_row<T: AsRef<str>>(
    row: &[T],
    states: &SymbolSet<State>,
    input_alphabet: &SymbolSet<InputSymbol>,
    stack_alphabet: &SymbolSet<StackSymbol>,
) -> Result<(TransitionKey, Outcome), DefinitionError> {
    let describe = || {
        row.iter()
            .map(|token| token.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
    };
    if row.len() < 5 {
        return Err(DefinitionError::MalformedTransition {
            transition: describe(),
            reason: format!("expected at least 5 symbols, found {}", row.len()),
        });
    }
    let state = states.resolve(row[0].as_ref())?;
    let input = match row[1].as_ref() {
        EMPTY_STRING_REPR => None,
        name => Some(input_alphabet.resolve(name)?),
    };
    let stack_top = stack_alphabet.resolve(row[2].as_ref())?;
    let next_state = states.resolve(row[3].as_ref())?;

    let push_part: Vec<&str> = row[4..].iter().map(|token| token.as_ref()).collect();
    let push: PushSequence = if push_part == [EMPTY_STRING_REPR] {
        PushSequence::new()
    } else if push_part.contains(&EMPTY_STRING_REPR) {
        return Err(DefinitionError::MalformedTransition {
            transition: describe(),
            reason: format!("the `{EMPTY_STRING_REPR}` marker must stand alone in the push part"),
        });
    } else {
        push_part
            .iter()
            .map(|name| stack_alphabet.resolve(name))
            .collect::<Result<_, _>>()?
    };

    Ok((
        TransitionKey {
            state,
            stack_top,
            input,
        },
        Outcome { next_state, push },
    ))
}
