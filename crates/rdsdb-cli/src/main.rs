//! RDSDB Command-Line Client
//!
//! Existence reports, stored sets and tables from the catalog of cyclic
//! relative difference sets.

mod commands;
mod completer;
mod config;
mod executor;
mod formatter;
mod repl;

use clap::Parser;
use config::{Args, CliConfig, Mode};
use formatter::OutputFormat;
use rdsdb_core::Catalog;
use std::path::Path;
use tracing::info;

fn main() {
    // Initialize tracing; stdout is reserved for results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rdsdb_cli=info,rdsdb_core=info")),
        )
        .init();

    let args = Args::parse();
    let config = CliConfig::from(&args);

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::open(&config.catalog)?;
    info!("catalog ready: {} entries", catalog.len());

    match &config.mode {
        Mode::Command(command) => run_command_mode(&catalog, command, config.format),
        Mode::Script(file) => run_script_mode(&catalog, file, config.format),
        Mode::Repl => repl::run(&catalog, config.format),
    }
}

/// Execute a single statement and exit.
fn run_command_mode(
    catalog: &Catalog,
    command: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = formatter::create_formatter(format);

    match executor::execute(catalog, command, &*formatter) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(1);
        }
    }
}

/// Execute statements from a file.
fn run_script_mode(
    catalog: &Catalog,
    file: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)?;
    let formatter = formatter::create_formatter(format);

    // Split by lines, filter empty lines and comments
    let statements: Vec<&str> = content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with("//") && !l.starts_with('#'))
        .collect();

    for statement in statements {
        match executor::execute(catalog, statement, &*formatter) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(e) => {
                eprintln!("Error executing '{}': {}", statement, e);
                // Continue with next statement
            }
        }
    }

    Ok(())
}
