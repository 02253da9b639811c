// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use super::symbol::{AlphabetSymbol, InputSymbol, EMPTY_STRING_REPR};
use std::fmt;

/// An input word: an ordered sequence of input symbols. The symbols are not
/// checked against any alphabet here; that happens when the word is loaded
/// onto an [`InputTape`](crate::sim::InputTape).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    symbols: Vec<InputSymbol>,
}

impl Word {
    /// Builds a word from symbol names. A single reserved empty-string token
    /// denotes the empty word.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        if names.len() == 1 && names[0] == EMPTY_STRING_REPR {
            return Word::default();
        }
        Word {
            symbols: names.iter().map(|name| InputSymbol::new(name)).collect(),
        }
    }

    pub fn from_symbols(symbols: Vec<InputSymbol>) -> Self {
        Word { symbols }
    }

    pub fn symbols(&self) -> &[InputSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return write!(f, "{EMPTY_STRING_REPR}");
        }
        for (ii, symbol) in self.symbols.iter().enumerate() {
            if ii > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_empty_string_token_denotes_the_empty_word() {
        assert!(Word::from_names(["."]).is_empty());
        assert_eq!(Word::from_names(["."]), Word::default());
    }

    #[test]
    fn words_keep_symbol_order() {
        let word = Word::from_names(["a", "b", "a"]);
        assert_eq!(word.len(), 3);
        assert_eq!(word.symbols()[0], InputSymbol::new("a"));
        assert_eq!(word.symbols()[1], InputSymbol::new("b"));
        assert_eq!(word.to_string(), "a b a");
        assert_eq!(Word::default().to_string(), ".");
    }
}
