// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use super::error::DefinitionError;
use super::symbol::{AlphabetSymbol, EMPTY_STRING_REPR};
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexMap;

/// A finite, duplicate-free collection of symbols of one kind with name
/// lookup. Built while the definition is constructed, read-only afterwards.
/// Iteration follows insertion order so that serialization and error output
/// stay deterministic.
#[derive(Debug, Clone)]
pub struct SymbolSet<S> {
    symbols: IndexMap<String, S>,
}

impl<S> Default for SymbolSet<S> {
    fn default() -> Self {
        SymbolSet {
            symbols: IndexMap::new(),
        }
    }
}

impl<S: AlphabetSymbol> SymbolSet<S> {
    /// Builds a set from a sequence of names. Fails on the first duplicate or
    /// reserved name.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, DefinitionError> {
        let mut set = SymbolSet::default();
        for name in names {
            set.insert(name)?;
        }
        Ok(set)
    }

    pub(crate) fn insert(&mut self, name: &str) -> Result<S, DefinitionError> {
        if name == EMPTY_STRING_REPR {
            return Err(DefinitionError::ReservedName { kind: S::KIND });
        }
        if self.symbols.contains_key(name) {
            return Err(DefinitionError::DuplicateName {
                kind: S::KIND,
                name: name.to_string(),
            });
        }
        let symbol = S::new(name);
        self.symbols.insert(name.to_string(), symbol.clone());
        Ok(symbol)
    }

    /// Name to symbol lookup. Unknown names fail with ranked suggestions.
    pub fn resolve(&self, name: &str) -> Result<S, DefinitionError> {
        match self.symbols.get(name) {
            Some(symbol) => Ok(symbol.clone()),
            None => Err(DefinitionError::UnknownName {
                kind: S::KIND,
                name: name.to_string(),
                suggestions: self.suggestions(name),
            }),
        }
    }

    /// Membership test for an already constructed symbol.
    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains_key(symbol.name())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.symbols.values()
    }

    /// Closest names in the set, best match first.
    fn suggestions(&self, name: &str) -> Vec<String> {
        let matcher = fuzzy_matcher::skim::SkimMatcherV2::default();
        let mut matches: Vec<(&str, i64)> = self
            .symbols
            .keys()
            .flat_map(|other| matcher.fuzzy_match(other, name).map(|s| (other.as_str(), s)))
            .collect();
        matches.sort_by_key(|(_, s)| -(*s));
        let n_matches = std::cmp::min(matches.len(), 5);
        matches
            .iter()
            .take(n_matches)
            .map(|(n, _)| n.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::symbol::{State, SymbolKind};

    #[test]
    fn resolves_every_inserted_name() {
        let set: SymbolSet<State> = SymbolSet::new(["q0", "q1", "q2"]).unwrap();
        assert_eq!(set.len(), 3);
        for name in ["q0", "q1", "q2"] {
            assert_eq!(set.resolve(name).unwrap().name(), name);
        }
    }

    #[test]
    fn contains_only_member_symbols() {
        let set: SymbolSet<State> = SymbolSet::new(["q0", "q1"]).unwrap();
        assert!(set.contains(&State::new("q0")));
        assert!(set.contains(&State::new("q1")));
        assert!(!set.contains(&State::new("q2")));
        assert!(!set.contains(&State::new("")));
    }

    #[test]
    fn fails_on_duplicates_and_names_one() {
        let err = SymbolSet::<State>::new(["q0", "q1", "q2", "q1", "q3"]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::DuplicateName {
                kind: SymbolKind::State,
                name: "q1".to_string()
            }
        );
        assert!(err.to_string().contains("q1"));
    }

    #[test]
    fn rejects_the_reserved_empty_string_token() {
        let err = SymbolSet::<State>::new(["q0", "."]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::ReservedName {
                kind: SymbolKind::State
            }
        );
    }

    #[test]
    fn unknown_names_fail_with_suggestions() {
        let set: SymbolSet<State> = SymbolSet::new(["start", "stop", "idle"]).unwrap();
        match set.resolve("stat").unwrap_err() {
            DefinitionError::UnknownName {
                name, suggestions, ..
            } => {
                assert_eq!(name, "stat");
                assert!(suggestions.contains(&"start".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
