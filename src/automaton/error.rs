// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use super::symbol::{SymbolKind, EMPTY_STRING_REPR};
use std::fmt;

/// Errors raised while a [`PdaDefinition`](super::PdaDefinition) is built.
/// They are fatal to the construction attempt; no simulation ever runs
/// against a partially built definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Two entries of the same symbol set share a name.
    DuplicateName { kind: SymbolKind, name: String },
    /// The reserved empty-string token was used as a symbol name.
    ReservedName { kind: SymbolKind },
    /// A name does not resolve within its symbol set.
    UnknownName {
        kind: SymbolKind,
        name: String,
        /// Closest names from the set, best match first.
        suggestions: Vec<String>,
    },
    /// A transition row does not have the expected shape.
    MalformedTransition { transition: String, reason: String },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::DuplicateName { kind, name } => {
                write!(f, "duplicate {kind} name `{name}`")
            }
            DefinitionError::ReservedName { kind } => write!(
                f,
                "`{EMPTY_STRING_REPR}` is reserved for the empty string and cannot be used as a {kind} name"
            ),
            DefinitionError::UnknownName {
                kind,
                name,
                suggestions,
            } => {
                write!(f, "unknown {kind} name `{name}`")?;
                if !suggestions.is_empty() {
                    write!(f, ". Did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
            DefinitionError::MalformedTransition { transition, reason } => {
                write!(f, "malformed transition ({transition}): {reason}")
            }
        }
    }
}

impl std::error::Error for DefinitionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = DefinitionError::DuplicateName {
            kind: SymbolKind::State,
            name: "q0".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate state name `q0`");

        let err = DefinitionError::UnknownName {
            kind: SymbolKind::Stack,
            name: "X".to_string(),
            suggestions: vec!["Xs".to_string(), "XX".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown stack symbol name `X`. Did you mean: Xs, XX?"
        );
    }
}
