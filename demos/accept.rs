// Copyright 2023 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>

use clap::Parser;
use libpda::sim::{ConsoleSpy, PdaSimulator};
use libpda::text;

#[derive(Parser, Debug)]
#[command(name = "accept")]
#[command(author = "Kevin Laeufer <laeufer@berkeley.edu>")]
#[command(version)]
#[command(about = "Decides whether a pushdown automaton accepts a word by empty stack.", long_about = None)]
struct Args {
    #[arg(short, long)]
    verbose: bool,
    #[arg(long, help = "Print every explored configuration.")]
    trace: bool,
    #[arg(value_name = "DEFINITION", index = 1)]
    definition: String,
    #[arg(value_name = "WORD", index = 2)]
    word: String,
}

fn main() {
    let args = Args::parse();
    let def = text::parse_file(&args.definition).expect("Failed to load automaton definition!");
    if args.verbose {
        println!("Loaded: {}", args.definition);
        println!("{}", text::serialize_to_str(&def));
    }
    let word = text::parse_word_file(&args.word);

    let mut sim = PdaSimulator::new(&def);
    let result = if args.trace {
        let mut spy = ConsoleSpy;
        sim.accepts_traced(&word, &mut spy)
    } else {
        sim.accepts(&word)
    };
    match result {
        Ok(accepted) => println!("Accepted: {accepted}"),
        Err(violation) => {
            eprintln!("Invalid word: {violation}");
            std::process::exit(1);
        }
    }
}
