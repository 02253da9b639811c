// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

//! Simulation of nondeterministic pushdown automata accepting by empty stack.

pub mod automaton;
pub mod sim;
pub mod text;
