// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use crate::automaton::{AlphabetSymbol, PdaDefinition, EMPTY_STRING_REPR};
use std::io::Write;

/// Writes `def` in the definition text format. The output parses back to an
/// equivalent definition; sets and transitions keep their insertion order.
pub fn serialize(out: &mut impl Write, def: &PdaDefinition) -> std::io::Result<()> {
    writeln_symbols(out, def.states().iter())?;
    writeln_symbols(out, def.input_alphabet().iter())?;
    writeln_symbols(out, def.stack_alphabet().iter())?;
    writeln!(out, "{}", def.initial_state())?;
    writeln!(out, "{}", def.initial_stack_top())?;
    for (key, outcomes) in def.transitions().iter() {
        for outcome in outcomes {
            write!(out, "{} ", key.state)?;
            match &key.input {
                Some(symbol) => write!(out, "{symbol} ")?,
                None => write!(out, "{EMPTY_STRING_REPR} ")?,
            }
            write!(out, "{} {}", key.stack_top, outcome.next_state)?;
            if outcome.push.is_empty() {
                write!(out, " {EMPTY_STRING_REPR}")?;
            } else {
                for symbol in outcome.push.iter() {
                    write!(out, " {symbol}")?;
                }
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn serialize_to_str(def: &PdaDefinition) -> String {
    let mut buf = Vec::new();
    serialize(&mut buf, def).expect("Failed to write to string!");
    String::from_utf8(buf).expect("Failed to read string we wrote!")
}

fn writeln_symbols<'a, S: AlphabetSymbol + 'a>(
    out: &mut impl Write,
    symbols: impl Iterator<Item = &'a S>,
) -> std::io::Result<()> {
    for (ii, symbol) in symbols.enumerate() {
        if ii > 0 {
            write!(out, " ")?;
        }
        write!(out, "{symbol}")?;
    }
    writeln!(out)
}
