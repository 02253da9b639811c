// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use crate::automaton::{
    parse_transition_row, DefinitionError, InputSymbol, PdaDefinition, StackSymbol, State,
    SymbolSet, TransitionFunction,
};
use smallvec::SmallVec;

pub fn parse_str(input: &str, name: Option<&str>) -> Option<PdaDefinition> {
    match Parser::new().parse(input.as_bytes()) {
        Ok(def) => Some(def),
        Err(errors) => {
            report_errors(errors, name.unwrap_or("str"), input);
            None
        }
    }
}

pub fn parse_file(filename: &str) -> Option<PdaDefinition> {
    let path = std::path::Path::new(filename);
    let f = std::fs::File::open(path).expect("Failed to open automaton definition file!");
    let reader = std::io::BufReader::new(f);
    match Parser::new().parse(reader) {
        Ok(def) => Some(def),
        Err(errors) => {
            report_errors(
                errors,
                path.file_name().unwrap().to_str().unwrap(),
                &std::fs::read_to_string(path).unwrap(),
            );
            None
        }
    }
}

/// The definition sections in the order the format requires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    States,
    InputAlphabet,
    StackAlphabet,
    InitialState,
    InitialStackTop,
    Transitions,
}

impl Section {
    fn describe(&self) -> &'static str {
        match self {
            Section::States => "the set of states",
            Section::InputAlphabet => "the input alphabet",
            Section::StackAlphabet => "the stack alphabet",
            Section::InitialState => "the initial state",
            Section::InitialStackTop => "the initial stack top",
            Section::Transitions => "the transitions",
        }
    }
}

struct Parser {
    errors: Errors,
    /// offset of the current line inside the file
    offset: usize,
    section: Section,
    states: SymbolSet<State>,
    input_alphabet: SymbolSet<InputSymbol>,
    stack_alphabet: SymbolSet<StackSymbol>,
    initial_state: Option<State>,
    initial_stack_top: Option<StackSymbol>,
    transitions: TransitionFunction,
}

impl Parser {
    fn new() -> Self {
        Parser {
            errors: Errors::new(),
            offset: 0,
            section: Section::States,
            states: SymbolSet::default(),
            input_alphabet: SymbolSet::default(),
            stack_alphabet: SymbolSet::default(),
            initial_state: None,
            initial_stack_top: None,
            transitions: TransitionFunction::default(),
        }
    }

    fn parse(mut self, input: impl std::io::BufRead) -> Result<PdaDefinition, Errors> {
        for line_res in input.lines() {
            let line = line_res.expect("failed to read line");
            self.parse_line(&line);
            self.offset += line.len() + 1;
        }
        if self.section != Section::Transitions {
            // point at the start of the file, there is nothing else to label
            self.errors.push(ParserError {
                msg: format!(
                    "Found end of file before finding {}.",
                    self.section.describe()
                ),
                start: 0,
                end: 0,
            });
        }

        match (self.initial_state, self.initial_stack_top) {
            (Some(initial_state), Some(initial_stack_top)) if self.errors.is_empty() => {
                Ok(PdaDefinition::from_parts(
                    self.states,
                    self.input_alphabet,
                    self.stack_alphabet,
                    initial_state,
                    initial_stack_top,
                    Vec::new(),
                    self.transitions,
                ))
            }
            _ => Err(self.errors),
        }
    }

    fn parse_line(&mut self, line: &str) {
        let cont = tokenize_line(line);
        let tokens = &cont.tokens;
        // skip lines that are empty or pure comment
        if tokens.is_empty() {
            return;
        }

        match self.section {
            Section::States => {
                for token in tokens.iter() {
                    if let Err(e) = self.states.insert(token) {
                        self.add_error(line, token, e.to_string());
                    }
                }
                self.section = Section::InputAlphabet;
            }
            Section::InputAlphabet => {
                for token in tokens.iter() {
                    if let Err(e) = self.input_alphabet.insert(token) {
                        self.add_error(line, token, e.to_string());
                    }
                }
                self.section = Section::StackAlphabet;
            }
            Section::StackAlphabet => {
                for token in tokens.iter() {
                    if let Err(e) = self.stack_alphabet.insert(token) {
                        self.add_error(line, token, e.to_string());
                    }
                }
                self.section = Section::InitialState;
            }
            Section::InitialState => {
                if tokens.len() != 1 {
                    self.add_error(
                        line,
                        line,
                        format!(
                            "Invalid number of initial states, expected 1 but found {}.",
                            tokens.len()
                        ),
                    );
                } else {
                    match self.states.resolve(tokens[0]) {
                        Ok(state) => self.initial_state = Some(state),
                        Err(e) => self.add_error(line, tokens[0], e.to_string()),
                    }
                }
                self.section = Section::InitialStackTop;
            }
            Section::InitialStackTop => {
                if tokens.len() != 1 {
                    self.add_error(
                        line,
                        line,
                        format!(
                            "Invalid number of initial stack top symbols, expected 1 but found {}.",
                            tokens.len()
                        ),
                    );
                } else {
                    match self.stack_alphabet.resolve(tokens[0]) {
                        Ok(symbol) => self.initial_stack_top = Some(symbol),
                        Err(e) => self.add_error(line, tokens[0], e.to_string()),
                    }
                }
                self.section = Section::Transitions;
            }
            Section::Transitions => {
                match parse_transition_row(
                    tokens,
                    &self.states,
                    &self.input_alphabet,
                    &self.stack_alphabet,
                ) {
                    Ok((key, outcome)) => self.transitions.insert(key, outcome),
                    Err(e) => {
                        // try to label the offending token, otherwise the line
                        let token = match &e {
                            DefinitionError::UnknownName { name, .. } => {
                                tokens.iter().find(|token| **token == *name).copied()
                            }
                            _ => None,
                        };
                        self.add_error(line, token.unwrap_or(line), e.to_string());
                    }
                }
            }
        }
    }

    fn add_error(&mut self, line: &str, token: &str, msg: String) {
        let start = str_offset(token, line);
        let end = start + token.len();
        self.errors.push(ParserError {
            msg,
            start: start + self.offset,
            end: end + self.offset,
        });
    }
}

// Line Tokenizer
#[derive(Default, Debug)]
struct LineTokens<'a> {
    tokens: SmallVec<[&'a str; 8]>,
    comment: Option<&'a str>,
}

const NO_TOKEN: usize = usize::MAX;
fn tokenize_line(line: &str) -> LineTokens {
    if line.is_empty() {
        // special handling for empty lines
        return LineTokens::default();
    }
    let line_len = line.len();
    let mut out = LineTokens::default();
    let mut token_start: usize = NO_TOKEN;
    #[inline]
    fn finish_token<'a>(
        token_start: &mut usize,
        out: &mut LineTokens<'a>,
        line: &'a str,
        ii: usize,
    ) {
        if *token_start != NO_TOKEN {
            out.tokens.push(&line[*token_start..ii]);
            *token_start = NO_TOKEN;
        }
    }

    for (ii, cc) in line.char_indices() {
        match cc {
            // white space character
            ' ' | '\t' => finish_token(&mut token_start, &mut out, line, ii),
            // comment start
            '#' => {
                finish_token(&mut token_start, &mut out, line, ii);
                out.comment = Some(&line[ii + 1..line_len]);
                return out;
            }
            _ => {
                if token_start == NO_TOKEN {
                    token_start = ii
                }
            }
        }
    }
    finish_token(&mut token_start, &mut out, line, line_len);
    out
}

#[derive(Debug)]
struct ParserError {
    msg: String,
    start: usize,
    end: usize,
}

type Errors = Vec<ParserError>;

fn report_errors(errors: Errors, name: &str, source: &str) {
    let report_file = codespan_reporting::files::SimpleFile::new(name, source);
    for err in errors.into_iter() {
        report_error(err, &report_file);
    }
}

fn report_error(error: ParserError, file: &codespan_reporting::files::SimpleFile<&str, &str>) {
    let diagnostic = codespan_reporting::diagnostic::Diagnostic::error()
        .with_message(error.msg)
        .with_labels(vec![codespan_reporting::diagnostic::Label::primary(
            (),
            error.start..error.end,
        )]);
    let writer = codespan_reporting::term::termcolor::StandardStream::stderr(
        codespan_reporting::term::termcolor::ColorChoice::Auto,
    );
    let config = codespan_reporting::term::Config::default();
    codespan_reporting::term::emit(&mut writer.lock(), &config, file, &diagnostic).unwrap();
}

fn str_offset(needle: &str, haystack: &str) -> usize {
    let offset = (needle.as_ptr() as usize) - (haystack.as_ptr() as usize);
    assert!(
        offset <= haystack.len(),
        "{} is not fully contained in {}",
        needle,
        haystack
    );
    offset
}
