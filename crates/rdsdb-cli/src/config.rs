//! CLI configuration.

use crate::formatter::OutputFormat;
use clap::Parser;
use rdsdb_core::{CatalogConfig, DEFAULT_CATALOG_PATH};
use std::path::PathBuf;

/// RDS catalog command-line client
#[derive(Parser, Debug)]
#[command(name = "rdsdb")]
#[command(version, about = "Query the catalog of cyclic relative difference sets")]
pub struct Args {
    /// Path of the JSON catalog
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Execute a single statement and exit
    #[arg(short = 'c', long)]
    pub command: Option<String>,

    /// Execute statements from file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Reject catalog keys that are not canonical identifiers
    #[arg(long)]
    pub strict: bool,
}

/// How the CLI runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Execute one statement and exit.
    Command(String),
    /// Execute each line of a file.
    Script(PathBuf),
    /// Interactive shell.
    Repl,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog file and load options.
    pub catalog: CatalogConfig,
    /// Output format.
    pub format: OutputFormat,
    /// Run mode.
    pub mode: Mode,
}

impl From<&Args> for CliConfig {
    fn from(args: &Args) -> Self {
        let mode = if let Some(command) = &args.command {
            Mode::Command(command.clone())
        } else if let Some(file) = &args.file {
            Mode::Script(file.clone())
        } else {
            Mode::Repl
        };

        Self {
            catalog: CatalogConfig::new(&args.catalog).with_strict(args.strict),
            format: args.format,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["rdsdb"]);
        let config = CliConfig::from(&args);
        assert_eq!(config.catalog.path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert!(!config.catalog.strict);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.mode, Mode::Repl);
    }

    #[test]
    fn test_command_mode() {
        let args = Args::parse_from([
            "rdsdb",
            "--catalog",
            "data/rds.json",
            "--strict",
            "--format",
            "json",
            "-c",
            "RDS(4,2,3,1)",
        ]);
        let config = CliConfig::from(&args);
        assert_eq!(config.catalog.path, PathBuf::from("data/rds.json"));
        assert!(config.catalog.strict);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.mode, Mode::Command("RDS(4,2,3,1)".to_string()));
    }

    #[test]
    fn test_command_wins_over_file() {
        let args = Args::parse_from(["rdsdb", "-f", "queries.txt", "-c", ".stats"]);
        assert_eq!(CliConfig::from(&args).mode, Mode::Command(".stats".to_string()));

        let args = Args::parse_from(["rdsdb", "-f", "queries.txt"]);
        assert_eq!(
            CliConfig::from(&args).mode,
            Mode::Script(PathBuf::from("queries.txt"))
        );
    }
}
