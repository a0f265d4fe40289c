//! olelo — collated dictionary of Hawaiian sayings with word search
//!
//! Loads the built-in sample sayings (plus an optional JSON dataset) into
//! an AVL tree under Hawaiian collation, indexes every saying by word,
//! prints a short walkthrough of the ordered dictionary, then drops into
//! the interactive search loop.

mod dataset;
mod format;
mod repl;
mod state;

use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use format::{render_optional, render_saying};
use state::Session;

fn main() {
    let matches = build_cli().get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new();
    if !matches.get_flag("no-builtin") {
        for saying in dataset::builtin() {
            session.insert(saying);
        }
    }
    if let Some(path) = matches.get_one::<String>("data") {
        match dataset::load(Path::new(path)) {
            Ok(sayings) => {
                for saying in sayings {
                    session.insert(saying);
                }
            }
            Err(err) => {
                eprintln!("(error) {err}");
                process::exit(1);
            }
        }
    }

    if !matches.get_flag("quiet") {
        print_walkthrough(&session);
    }

    if let Err(err) = repl::run(&session) {
        eprintln!("(error) {err}");
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("olelo")
        .about("Collated dictionary of Hawaiian sayings with word search")
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("FILE")
                .help("JSON array of sayings to load in addition to the built-in samples"),
        )
        .arg(
            Arg::new("no-builtin")
                .long("no-builtin")
                .help("Skip the built-in sample sayings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Skip the startup walkthrough")
                .action(ArgAction::SetTrue),
        )
}

/// Print the ordered-dictionary walkthrough: listing, extremes, neighbors
fn print_walkthrough(session: &Session) {
    println!("Loaded {} saying(s).", session.sayings.len());
    if session.sayings.is_empty() {
        return;
    }

    println!("\nIn-order iteration (Hawaiian collation):");
    for (_, saying) in &session.sayings {
        println!("{}", render_saying(saying));
    }

    println!("\nFirst (min key) →");
    println!("{}", render_optional(session.sayings.first()));
    println!("Last (max key) →");
    println!("{}", render_optional(session.sayings.last()));

    let keys: Vec<&str> = session.sayings.iter().map(|(key, _)| key).collect();
    let mid_key = keys[keys.len() / 2];
    println!("\nPredecessor of \u{201c}{mid_key}\u{201d} →");
    println!("{}", render_optional(session.sayings.predecessor(mid_key)));
    println!("Successor of \u{201c}{mid_key}\u{201d} →");
    println!("{}", render_optional(session.sayings.successor(mid_key)));
}
