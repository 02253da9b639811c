// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use std::fmt;
use std::sync::Arc;

/// Textual stand-in for the empty string in definition files, transition
/// push sequences and words. Never a legal symbol name.
pub const EMPTY_STRING_REPR: &str = ".";

/// The three namespaces a definition draws names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    State,
    Input,
    Stack,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::State => write!(f, "state"),
            SymbolKind::Input => write!(f, "input symbol"),
            SymbolKind::Stack => write!(f, "stack symbol"),
        }
    }
}

/// Common interface of the three symbol newtypes. A symbol is an immutable
/// name that compares by value; its kind lives in the type, so states, input
/// symbols and stack symbols can never be mixed up at a call site.
pub trait AlphabetSymbol: Clone + Eq + std::hash::Hash + fmt::Debug + fmt::Display {
    const KIND: SymbolKind;

    fn new(name: &str) -> Self;
    fn name(&self) -> &str;
}

macro_rules! symbol_type {
    ($(#[$attr:meta])* $name:ident, $kind:expr) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(Arc<str>);

        impl AlphabetSymbol for $name {
            const KIND: SymbolKind = $kind;

            fn new(name: &str) -> Self {
                $name(Arc::from(name))
            }

            fn name(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

symbol_type!(
    /// A state of the automaton.
    State,
    SymbolKind::State
);

symbol_type!(
    /// A symbol of the input alphabet.
    InputSymbol,
    SymbolKind::Input
);

symbol_type!(
    /// A symbol of the stack alphabet.
    StackSymbol,
    SymbolKind::Stack
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_compare_by_name() {
        assert_eq!(State::new("q0"), State::new("q0"));
        assert_ne!(State::new("q0"), State::new("q1"));
        assert_eq!(InputSymbol::new("a").name(), "a");
    }

    #[test]
    fn display_is_the_plain_name() {
        assert_eq!(StackSymbol::new("Z").to_string(), "Z");
        assert_eq!(format!("{:?}", StackSymbol::new("Z")), "StackSymbol(Z)");
    }
}
