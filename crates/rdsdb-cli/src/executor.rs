//! Statement parsing and execution against a loaded catalog.

use crate::formatter::{Formatter, ListingRow};
use rdsdb_core::ident::{self, ParameterTuple};
use rdsdb_core::{build_table, Catalog, Status, UnknownStatus};
use thiserror::Error;
use tracing::debug;

/// Execution errors.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Identifier did not parse; rendered with a caret under the problem.
    #[error("{0}")]
    Identifier(String),

    /// Lookup failure from the catalog.
    #[error("{0}")]
    Catalog(rdsdb_core::Error),

    /// Negative set index.
    #[error("no such set: index {index} is out of range for {identifier}")]
    NegativeIndex { identifier: String, index: i64 },

    /// Set index that is not an integer.
    #[error("invalid set index '{0}'")]
    InvalidIndex(String),

    /// Status filter that is not a catalog label.
    #[error(transparent)]
    Status(#[from] UnknownStatus),

    /// Dot-command that is not a statement.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Statement used incorrectly.
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl From<rdsdb_core::Error> for ExecuteError {
    fn from(e: rdsdb_core::Error) -> Self {
        match e {
            rdsdb_core::Error::MalformedIdentifier(p) => {
                ExecuteError::Identifier(p.format_with_source())
            }
            other => ExecuteError::Catalog(other),
        }
    }
}

impl From<ident::ParseError> for ExecuteError {
    fn from(e: ident::ParseError) -> Self {
        ExecuteError::Identifier(e.format_with_source())
    }
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `RDS(m,n,k,lambda)`: existence report.
    Describe(ParameterTuple),
    /// `.get <identifier> <i>` or `.get m n k lambda i`: one stored set.
    Get { tuple: ParameterTuple, index: i64 },
    /// `.table <identifier> ...`: table rows, in the order given.
    Table(Vec<ParameterTuple>),
    /// `.list [status]`: catalog listing, optionally filtered.
    List(Option<Status>),
    /// `.stats`: summary counts.
    Stats,
}

const GET_USAGE: &str = ".get <identifier> <index> | .get <m> <n> <k> <lambda> <index>";
const TABLE_USAGE: &str = ".table <identifier> [<identifier> ...]";

/// Parse one input line into a statement.
pub fn parse_statement(input: &str) -> Result<Statement, ExecuteError> {
    let input = input.trim();
    let (command, arg) = match input.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (input, ""),
    };

    match command.to_lowercase().as_str() {
        ".get" => parse_get(arg),
        ".table" => {
            let tuples = split_identifiers(arg)
                .into_iter()
                .map(ident::parse_lenient)
                .collect::<Result<Vec<_>, _>>()?;
            if tuples.is_empty() {
                return Err(ExecuteError::Usage(TABLE_USAGE));
            }
            Ok(Statement::Table(tuples))
        }
        ".list" => match arg {
            "" => Ok(Statement::List(None)),
            label => Ok(Statement::List(Some(label.parse::<Status>()?))),
        },
        ".stats" => Ok(Statement::Stats),
        other if other.starts_with('.') => Err(ExecuteError::UnknownCommand(other.to_string())),
        _ => Ok(Statement::Describe(ident::parse_lenient(input)?)),
    }
}

fn parse_get(arg: &str) -> Result<Statement, ExecuteError> {
    let parts: Vec<&str> = arg.split_whitespace().collect();

    // .get m n k lambda i
    if parts.len() == 5 {
        let params: Option<Vec<u64>> = parts[..4].iter().map(|p| p.parse().ok()).collect();
        if let Some(p) = params {
            let tuple = ParameterTuple::new(p[0], p[1], p[2], p[3]);
            let index = parse_index(parts[4])?;
            return Ok(Statement::Get { tuple, index });
        }
    }

    // Bare numbers that did not form `m n k lambda i`.
    if parts.iter().all(|p| p.parse::<i64>().is_ok()) {
        return Err(ExecuteError::Usage(GET_USAGE));
    }

    let (identifier, index) = arg
        .rsplit_once(char::is_whitespace)
        .ok_or(ExecuteError::Usage(GET_USAGE))?;
    let tuple = ident::parse_lenient(identifier)?;
    let index = parse_index(index.trim())?;
    Ok(Statement::Get { tuple, index })
}

fn parse_index(text: &str) -> Result<i64, ExecuteError> {
    text.parse()
        .map_err(|_| ExecuteError::InvalidIndex(text.to_string()))
}

/// Split `RDS(..) RDS(..), RDS(..)` into one piece per identifier.
fn split_identifiers(arg: &str) -> Vec<&str> {
    arg.split_inclusive(')')
        .map(|piece| piece.trim_matches(|c: char| c == ',' || c.is_whitespace()))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Execute a statement and return formatted output.
pub fn execute(
    catalog: &Catalog,
    input: &str,
    formatter: &dyn Formatter,
) -> Result<String, ExecuteError> {
    debug!("execute {}", input);

    match parse_statement(input)? {
        Statement::Describe(tuple) => {
            let lines = catalog.describe(&tuple)?;
            Ok(formatter.format_report(&tuple, &lines))
        }
        Statement::Get { tuple, index } => {
            // An absent tuple is reported before the index is looked at.
            catalog.entry(&tuple)?;
            let index = usize::try_from(index).map_err(|_| ExecuteError::NegativeIndex {
                identifier: tuple.to_string(),
                index,
            })?;
            let (tuple, set) = catalog.get_rds(tuple.m, tuple.n, tuple.k, tuple.lambda, index)?;
            Ok(formatter.format_set(&tuple, index, set))
        }
        Statement::Table(tuples) => {
            let identifiers: Vec<String> = tuples.iter().map(ident::format).collect();
            let rows = build_table(catalog, &identifiers)?;
            Ok(formatter.format_rows(&rows))
        }
        Statement::List(status) => {
            let tuples = match status {
                Some(status) => catalog.filter_by_status(Some(status)),
                None => catalog.tuples(),
            };
            let rows = listing(catalog, &tuples)?;
            Ok(formatter.format_listing(&rows))
        }
        Statement::Stats => Ok(formatter.format_stats(&catalog.stats())),
    }
}

fn listing(catalog: &Catalog, tuples: &[ParameterTuple]) -> Result<Vec<ListingRow>, ExecuteError> {
    tuples
        .iter()
        .map(|tuple| -> Result<ListingRow, ExecuteError> {
            let entry = catalog.entry(tuple)?;
            Ok(ListingRow {
                identifier: tuple.to_string(),
                status: entry.status(),
                sets: entry.set_count(),
            })
        })
        .collect()
}
