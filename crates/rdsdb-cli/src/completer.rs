//! Tab completion for the REPL.

use rdsdb_core::Status;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// REPL helper completing commands and catalog identifiers.
pub struct RdsdbHelper {
    /// Identifiers in the loaded catalog.
    pub identifiers: Vec<String>,
}

impl RdsdbHelper {
    /// Create a new helper with empty identifier list.
    pub fn new() -> Self {
        Self {
            identifiers: Vec::new(),
        }
    }

    /// Update the identifier list.
    pub fn set_identifiers(&mut self, identifiers: Vec<String>) {
        self.identifiers = identifiers;
    }

    fn candidates(&self, line_to_cursor: &str) -> (usize, Vec<Pair>) {
        let trimmed = line_to_cursor.trim_start();

        // Dot commands at start of line
        if trimmed.starts_with('.') && !trimmed.contains(char::is_whitespace) {
            let offset = line_to_cursor.len() - trimmed.len();
            return (offset, pairs(DOT_COMMANDS.iter().copied(), trimmed));
        }

        let word_start = line_to_cursor
            .char_indices()
            .rfind(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = &line_to_cursor[word_start..];

        if trimmed.starts_with(".list") {
            let labels = Status::ALL.map(|s| s.label());
            return (word_start, pairs(labels.into_iter(), word));
        }

        let ids = self.identifiers.iter().map(String::as_str);
        (word_start, pairs(ids, word))
    }
}

impl Default for RdsdbHelper {
    fn default() -> Self {
        Self::new()
    }
}

/// Dot-commands for completion.
const DOT_COMMANDS: &[&str] = &[
    ".get", ".table", ".list", ".stats", ".format", ".history", ".clear", ".help", ".exit",
    ".quit",
];

fn pairs<'a>(options: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
    let prefix = prefix.to_lowercase();
    options
        .filter(|o| o.to_lowercase().starts_with(&prefix))
        .map(|o| Pair {
            display: o.to_string(),
            replacement: o.to_string(),
        })
        .collect()
}

impl Completer for RdsdbHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Hinter for RdsdbHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for RdsdbHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: rustyline::highlight::CmdKind) -> bool {
        false
    }
}

impl Validator for RdsdbHelper {}

impl Helper for RdsdbHelper {}
