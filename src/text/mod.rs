// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

//! Text formats for automaton definitions and input words.
//!
//! A definition file is line oriented; `#` starts a comment and blank lines
//! are skipped. The first five content lines are fixed:
//!
//! ```text
//! q0 q1          # state names
//! a b            # input alphabet
//! S Z            # stack alphabet
//! q0             # initial state
//! Z              # initial stack top
//! ```
//!
//! Every following line is one transition
//! `state input-symbol stack-top next-state push-symbols...`, with `.`
//! standing for the empty string on the input side and, alone, for an empty
//! push sequence. A word file is whitespace-separated symbol names with a
//! single `.` denoting the empty word.

mod parse;
mod serialize;
mod word;

pub use parse::{parse_file, parse_str};
pub use serialize::{serialize, serialize_to_str};
pub use word::{parse_word_file, parse_word_str};
