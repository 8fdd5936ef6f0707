//! Interactive REPL implementation.

use crate::commands::{self, CommandResult};
use crate::completer::RdsdbHelper;
use crate::executor;
use crate::formatter::{self, OutputFormat};
use rdsdb_core::Catalog;
use rustyline::error::ReadlineError;
use rustyline::history::{DefaultHistory, History};
use rustyline::{Config, Editor};
use std::path::PathBuf;

/// Get the history file path.
fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rdsdb_history")
}

/// Run the interactive REPL.
pub fn run(catalog: &Catalog, initial_format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut format = initial_format;

    // Set up rustyline
    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();

    let mut helper = RdsdbHelper::new();
    helper.set_identifiers(catalog.identifiers().map(String::from).collect());
    let mut rl: Editor<RdsdbHelper, DefaultHistory> = Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));

    // Load history
    let hist_path = history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    println!(
        "RDSDB - {} entries loaded. Type .help for commands, .exit to quit\n",
        catalog.len()
    );

    loop {
        match rl.readline("rdsdb> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let statement = if commands::is_command(line) {
                    match commands::handle_command(line, format) {
                        CommandResult::Exit => {
                            println!("Goodbye!");
                            break;
                        }
                        CommandResult::Output(msg) => {
                            println!("{}", msg);
                            continue;
                        }
                        CommandResult::SetFormat(fmt) => {
                            format = fmt;
                            println!("Output format set to {}", format);
                            continue;
                        }
                        CommandResult::ShowHistory => {
                            let history = rl.history();
                            let len = history.len();
                            let start = len.saturating_sub(20);
                            for (i, entry) in history.iter().skip(start).enumerate() {
                                println!("{:4}  {}", start + i + 1, entry);
                            }
                            continue;
                        }
                        CommandResult::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                            continue;
                        }
                        CommandResult::Execute(statement) => statement,
                    }
                } else {
                    line.to_string()
                };

                let formatter = formatter::create_formatter(format);
                match executor::execute(catalog, &statement, &*formatter) {
                    Ok(output) => {
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    }
                    Err(e) => {
                        println!("{}", formatter.format_error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    let _ = rl.save_history(&hist_path);

    Ok(())
}
