//! REPL dot-command handling.

use crate::formatter::OutputFormat;

/// Result of handling a REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Exit the REPL.
    Exit,
    /// Output to display.
    Output(String),
    /// Change the output format.
    SetFormat(OutputFormat),
    /// Show history.
    ShowHistory,
    /// Clear screen.
    Clear,
    /// Not a REPL command; run it as a statement.
    Execute(String),
}

/// Handle REPL-only dot-commands. Everything else is passed through as a
/// statement.
pub fn handle_command(line: &str, format: OutputFormat) -> CommandResult {
    let line = line.trim();
    let parts: Vec<&str> = line.splitn(2, ' ').collect();
    let command = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match command.as_str() {
        ".exit" | ".quit" | ".q" => CommandResult::Exit,

        ".help" | ".h" | ".?" => CommandResult::Output(get_help()),

        ".clear" | ".cls" => CommandResult::Clear,

        ".format" => {
            if let Some(fmt) = arg {
                match fmt.to_lowercase().as_str() {
                    "table" => CommandResult::SetFormat(OutputFormat::Table),
                    "json" => CommandResult::SetFormat(OutputFormat::Json),
                    "csv" => CommandResult::SetFormat(OutputFormat::Csv),
                    _ => CommandResult::Output(format!(
                        "Unknown format '{}'. Use: table, json, csv",
                        fmt
                    )),
                }
            } else {
                CommandResult::Output(format!("Current format: {}", format))
            }
        }

        ".history" => CommandResult::ShowHistory,

        _ => CommandResult::Execute(line.to_string()),
    }
}

/// Check if a line is a dot-command.
pub fn is_command(line: &str) -> bool {
    line.trim().starts_with('.')
}

/// Get help text for REPL commands.
fn get_help() -> String {
    r#"Queries
=======

RDS(m,n,k,lambda)                 Existence report for a parameter tuple
.get <identifier> <i>             The i-th stored set (also: .get m n k lambda i)
.table <identifier> ...           Table of stored sets for several tuples
.list [All|Yes|Open|No]           List catalog entries, optionally by status
.stats                            Entry counts per status

REPL Commands
=============

.format [type]        Get or set output format (table, json, csv)
.history              Show query history
.clear                Clear the screen
.help                 Show this help message
.exit / .quit         Exit the REPL

Examples:
  RDS(4,2,3,1)
  .get RDS(4,2,3,1) 1
  .table RDS(6,4,5,1) RDS(4,2,3,1)
  .list Open
"#
    .to_string()
}
