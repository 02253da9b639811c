// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use crate::automaton::Word;

/// Reads a word from whitespace-separated symbol names; a single `.` token
/// denotes the empty word.
pub fn parse_word_str(input: &str) -> Word {
    Word::from_names(input.split_whitespace())
}

/// Reads a word file. The whole file is one word; its symbols may be split
/// across lines.
pub fn parse_word_file(filename: &str) -> Word {
    let input = std::fs::read_to_string(filename).expect("Failed to open word file!");
    parse_word_str(&input)
}
