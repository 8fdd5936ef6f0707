//! Output formatters for reports, sets and tables.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use rdsdb_core::{
    describe_set, CatalogStats, DifferenceSet, ParameterTuple, Status, TableRow, COLUMNS,
};
use serde::Serialize;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// One line of a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub identifier: String,
    pub status: Option<Status>,
    pub sets: usize,
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format an existence report.
    fn format_report(&self, tuple: &ParameterTuple, lines: &[String]) -> String;

    /// Format one stored set.
    fn format_set(&self, tuple: &ParameterTuple, index: usize, set: &DifferenceSet) -> String;

    /// Format table rows.
    fn format_rows(&self, rows: &[TableRow]) -> String;

    /// Format a catalog listing.
    fn format_listing(&self, rows: &[ListingRow]) -> String;

    /// Format catalog summary counts.
    fn format_stats(&self, stats: &CatalogStats) -> String;

    /// Format an error message.
    fn format_error(&self, error: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

fn status_text(status: Option<Status>) -> String {
    status.map(|s| s.to_string()).unwrap_or_default()
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, tuple: &ParameterTuple, lines: &[String]) -> String {
        if lines.is_empty() {
            format!("Nothing recorded for {}", tuple)
        } else {
            lines.join("\n")
        }
    }

    fn format_set(&self, tuple: &ParameterTuple, _index: usize, set: &DifferenceSet) -> String {
        describe_set(tuple, set).join("\n")
    }

    fn format_rows(&self, rows: &[TableRow]) -> String {
        let mut table = Table::new();
        table.set_header(COLUMNS.iter().map(Cell::new).collect::<Vec<_>>());

        for row in rows {
            table.add_row(row.cells().into_iter().map(Cell::new).collect::<Vec<_>>());
        }

        format!("{}\n{} row(s)", table, rows.len())
    }

    fn format_listing(&self, rows: &[ListingRow]) -> String {
        if rows.is_empty() {
            return "No entries".to_string();
        }

        let mut table = Table::new();
        table.set_header(vec!["identifier", "status", "sets"]);

        for row in rows {
            table.add_row(vec![
                Cell::new(&row.identifier),
                Cell::new(status_text(row.status)),
                Cell::new(row.sets),
            ]);
        }

        format!("{}\n{} entr{}", table, rows.len(), if rows.len() == 1 { "y" } else { "ies" })
    }

    fn format_stats(&self, stats: &CatalogStats) -> String {
        let mut table = Table::new();
        table.set_header(vec!["status", "entries"]);

        for status in Status::ALL {
            let count = stats.by_status.get(&status).copied().unwrap_or(0);
            table.add_row(vec![Cell::new(status), Cell::new(count)]);
        }
        if stats.unknown_status > 0 {
            table.add_row(vec![Cell::new("(none)"), Cell::new(stats.unknown_status)]);
        }

        format!(
            "{}\n{} entries, {} stored set(s)",
            table, stats.entries, stats.sets
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &impl Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    }
}

impl Formatter for JsonFormatter {
    fn format_report(&self, tuple: &ParameterTuple, lines: &[String]) -> String {
        Self::pretty(&serde_json::json!({
            "identifier": tuple.to_string(),
            "lines": lines,
        }))
    }

    fn format_set(&self, tuple: &ParameterTuple, index: usize, set: &DifferenceSet) -> String {
        Self::pretty(&serde_json::json!({
            "identifier": tuple.to_string(),
            "index": index,
            "set": set,
        }))
    }

    fn format_rows(&self, rows: &[TableRow]) -> String {
        Self::pretty(&rows)
    }

    fn format_listing(&self, rows: &[ListingRow]) -> String {
        Self::pretty(&rows)
    }

    fn format_stats(&self, stats: &CatalogStats) -> String {
        let by_status: serde_json::Map<String, serde_json::Value> = stats
            .by_status
            .iter()
            .map(|(status, count)| (status.to_string(), (*count).into()))
            .collect();

        Self::pretty(&serde_json::json!({
            "entries": stats.entries,
            "sets": stats.sets,
            "by_status": by_status,
            "unknown_status": stats.unknown_status,
        }))
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({
            "error": error
        })
        .to_string()
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_report(&self, _tuple: &ParameterTuple, lines: &[String]) -> String {
        let mut output = String::from("line\n");
        for line in lines {
            output.push_str(&format!("\"{}\"\n", escape_csv(line)));
        }
        output
    }

    fn format_set(&self, tuple: &ParameterTuple, index: usize, set: &DifferenceSet) -> String {
        format!("identifier,index,set\n{},{},\"{}\"\n", quote(&tuple.to_string()), index, set)
    }

    fn format_rows(&self, rows: &[TableRow]) -> String {
        let mut output = COLUMNS.join(",");
        output.push('\n');

        for row in rows {
            let [m, n, k, lambda, status, comment, set] = row.cells();
            let cells = [m, n, k, lambda, status, quote(&comment), quote(&set)];
            output.push_str(&cells.join(","));
            output.push('\n');
        }

        output
    }

    fn format_listing(&self, rows: &[ListingRow]) -> String {
        let mut output = String::from("identifier,status,sets\n");
        for row in rows {
            output.push_str(&format!(
                "{},{},{}\n",
                quote(&row.identifier),
                status_text(row.status),
                row.sets
            ));
        }
        output
    }

    fn format_stats(&self, stats: &CatalogStats) -> String {
        let mut output = String::from("status,entries\n");
        for status in Status::ALL {
            let count = stats.by_status.get(&status).copied().unwrap_or(0);
            output.push_str(&format!("{},{}\n", status, count));
        }
        if stats.unknown_status > 0 {
            output.push_str(&format!(",{}\n", stats.unknown_status));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("error\n\"{}\"", escape_csv(error))
    }
}

/// Quote a CSV field.
fn quote(s: &str) -> String {
    format!("\"{}\"", escape_csv(s))
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdsdb_core::{build_table, Catalog, CatalogEntry, NOT_IN_DATABASE};

    fn rows() -> Vec<TableRow> {
        let catalog = Catalog::from_entries([
            CatalogEntry::new("RDS(4,2,3,1)")
                .with_status(Status::AtLeastOneKnown)
                .with_comment("Bose, \"affine\"")
                .with_set([0, 1, 3]),
            CatalogEntry::new("RDS(6,4,5,1)").with_status(Status::AtLeastOneKnown),
        ]);
        build_table(&catalog, ["RDS(4,2,3,1)", "RDS(6,4,5,1)"]).unwrap()
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("hello"), "hello");
        assert_eq!(escape_csv("hello, world"), "hello, world");
        assert_eq!(escape_csv("say \"hi\""), "say \"\"hi\"\"");
    }

    #[test]
    fn test_table_rows() {
        let output = TableFormatter.format_rows(&rows());
        assert!(output.contains("lambda"));
        assert!(output.contains("[0, 1, 3]"));
        assert!(output.contains(NOT_IN_DATABASE));
        assert!(output.ends_with("2 row(s)"));
    }

    #[test]
    fn test_csv_rows() {
        let output = CsvFormatter.format_rows(&rows());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "m,n,k,lambda,status,comment,set");
        assert_eq!(lines[1], "4,2,3,1,Yes,\"Bose, \"\"affine\"\"\",\"[0, 1, 3]\"");
        assert_eq!(
            lines[2],
            format!("6,4,5,1,Yes,\"\",\"{}\"", NOT_IN_DATABASE)
        );
    }

    #[test]
    fn test_json_rows() {
        let output = JsonFormatter.format_rows(&rows());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["m"], 4);
        assert_eq!(value[1]["comment"], serde_json::Value::Null);
    }

    #[test]
    fn test_table_report() {
        let tuple = ParameterTuple::new(12, 2, 12, 6);
        assert_eq!(
            TableFormatter.format_report(&tuple, &[]),
            "Nothing recorded for RDS(12,2,12,6)"
        );
        let lines = vec!["No RDS(6,6,6,1) exists".to_string()];
        assert_eq!(
            TableFormatter.format_report(&ParameterTuple::new(6, 6, 6, 1), &lines),
            "No RDS(6,6,6,1) exists"
        );
    }

    #[test]
    fn test_json_set() {
        let output = JsonFormatter.format_set(
            &ParameterTuple::new(4, 2, 3, 1),
            1,
            &DifferenceSet::from([0, 2, 3]),
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["identifier"], "RDS(4,2,3,1)");
        assert_eq!(value["index"], 1);
        assert_eq!(value["set"], serde_json::json!([0, 2, 3]));
    }

    #[test]
    fn test_listing() {
        let rows = vec![ListingRow {
            identifier: "RDS(3,1,2,1)".to_string(),
            status: Some(Status::AllKnown),
            sets: 1,
        }];
        assert!(TableFormatter.format_listing(&rows).ends_with("1 entry"));
        assert_eq!(
            CsvFormatter.format_listing(&rows),
            "identifier,status,sets\n\"RDS(3,1,2,1)\",All,1\n"
        );
        assert_eq!(TableFormatter.format_listing(&[]), "No entries");
    }
}
