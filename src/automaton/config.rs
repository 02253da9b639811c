// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

/// Raw, name-level definition of a pushdown automaton, as read from a file
/// or assembled in code. A plain data carrier: all validation happens in
/// [`PdaDefinition::from_config`](super::PdaDefinition::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdaConfig {
    pub states: Vec<String>,
    pub input_alphabet: Vec<String>,
    pub stack_alphabet: Vec<String>,
    pub initial_state: String,
    pub initial_stack_top: String,
    /// Accepting states as found in some definition sources. Empty-stack
    /// acceptance never consults them; the field is carried so that such
    /// definitions round-trip, not interpreted.
    pub accepting_states: Vec<String>,
    /// One row per transition:
    /// `state, input-symbol-or-".", stack-top, next-state, push-symbols...`,
    /// where the push part may be a single `"."` meaning "push nothing".
    pub transitions: Vec<Vec<String>>,
}
