//! Interactive search loop
//!
//! One command per line: a mode selector and, for the search modes, a
//! term. `mehua` looks a word up on the Hawaiian side, `withword` on the
//! English side; the rest of the commands walk the collated tree. Unknown
//! modes print the usage hint and re-prompt. `quit`, `exit`, or Ctrl-D end
//! the loop; Ctrl-C re-prompts.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::{render_optional, render_results, render_saying};
use crate::state::Session;

const USAGE: &str = "\
Modes:
  mehua <word>      sayings containing a Hawaiian word
  withword <word>   sayings containing an English word
  list              all sayings in Hawaiian collation order
  first | last      the saying under the least / greatest key
  before <key>      the saying preceding a key
  after <key>       the saying following a key
  help              show this hint
  quit              exit search mode";

/// Run the interactive loop until quit or EOF
pub fn run(session: &Session) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("--- Search Mode ---");
    println!("{USAGE}");

    loop {
        match rl.readline("olelo> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if !dispatch(session, trimmed) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {err:?}");
                break;
            }
        }
    }
    Ok(())
}

/// Execute one line; returns false when the loop should end
fn dispatch(session: &Session, line: &str) -> bool {
    let (mode, rest) = match line.split_once(char::is_whitespace) {
        Some((mode, rest)) => (mode, rest.trim()),
        None => (line, ""),
    };

    match mode {
        "quit" | "exit" => {
            println!("Exiting search mode.");
            return false;
        }
        "help" => println!("{USAGE}"),
        "mehua" => {
            if let Some(word) = require_term(rest, "mehua <word>") {
                println!("{}", render_results(&session.index.lookup_hawaiian(word)));
            }
        }
        "withword" => {
            if let Some(word) = require_term(rest, "withword <word>") {
                println!("{}", render_results(&session.index.lookup_english(word)));
            }
        }
        "list" => {
            for (_, saying) in &session.sayings {
                println!("{}", render_saying(saying));
            }
        }
        "first" => println!("{}", render_optional(session.sayings.first())),
        "last" => println!("{}", render_optional(session.sayings.last())),
        "before" => {
            if let Some(key) = require_term(rest, "before <key>") {
                println!("{}", render_optional(session.sayings.predecessor(key)));
            }
        }
        "after" => {
            if let Some(key) = require_term(rest, "after <key>") {
                println!("{}", render_optional(session.sayings.successor(key)));
            }
        }
        other => {
            println!("Invalid mode {other:?}.");
            println!("{USAGE}");
        }
    }
    true
}

fn require_term<'a>(rest: &'a str, usage: &str) -> Option<&'a str> {
    if rest.is_empty() {
        println!("usage: {usage}");
        None
    } else {
        Some(rest)
    }
}
