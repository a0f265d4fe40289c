//! Result rendering for the walkthrough and the REPL

use std::sync::Arc;

use olelo_core::Saying;

/// Render one saying as an indented bullet
pub fn render_saying(saying: &Saying) -> String {
    format!(" • ʻŌlelo: {}\n   English: {}", saying.hawaiian, saying.english)
}

/// Render a lookup result list, or a miss message
pub fn render_results(results: &[Arc<Saying>]) -> String {
    if results.is_empty() {
        return "No sayings found with that word.".to_string();
    }
    let mut out = format!("Found {} result(s):", results.len());
    for saying in results {
        out.push('\n');
        out.push_str(&render_saying(saying));
    }
    out
}

/// Render an optional single saying, `(none)` when absent
pub fn render_optional(saying: Option<&Arc<Saying>>) -> String {
    match saying {
        Some(s) => render_saying(s),
        None => " (none)".to_string(),
    }
}
