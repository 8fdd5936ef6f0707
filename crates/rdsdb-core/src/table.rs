//! Row-oriented tables over many catalog entries.

use crate::catalog::{Catalog, Status};
use crate::error::Result;
use crate::ident::{self, ParameterTuple};
use serde::Serialize;
use tracing::debug;

/// Column names, in row order.
pub const COLUMNS: [&str; 7] = ["m", "n", "k", "lambda", "status", "comment", "set"];

/// Set text for an entry that stores no sets.
pub const NOT_IN_DATABASE: &str = "RDS known to exist but not in database";

/// One table row: an entry and one of its sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub m: u64,
    pub n: u64,
    pub k: u64,
    pub lambda: u64,
    pub status: Option<Status>,
    pub comment: Option<String>,
    pub set: String,
}

impl TableRow {
    /// Column text, in [`COLUMNS`] order. Absent fields are empty.
    pub fn cells(&self) -> [String; 7] {
        [
            self.m.to_string(),
            self.n.to_string(),
            self.k.to_string(),
            self.lambda.to_string(),
            self.status.map(|s| s.to_string()).unwrap_or_default(),
            self.comment.clone().unwrap_or_default(),
            self.set.clone(),
        ]
    }

    pub fn tuple(&self) -> ParameterTuple {
        ParameterTuple::new(self.m, self.n, self.k, self.lambda)
    }
}

/// Accumulates rows entry by entry.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    rows: Vec<TableRow>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the rows for `identifier`: one per stored set, or a single
    /// placeholder row when none are stored.
    pub fn add_entry(&mut self, catalog: &Catalog, identifier: &str) -> Result<()> {
        let tuple = ident::parse(identifier)?;
        let entry = catalog.get(identifier)?;
        debug!("table: {} ({} sets)", identifier, entry.set_count());

        let row = |set: String| TableRow {
            m: tuple.m,
            n: tuple.n,
            k: tuple.k,
            lambda: tuple.lambda,
            status: entry.status(),
            comment: entry.comment().map(String::from),
            set,
        };

        if entry.set_count() == 0 {
            self.rows.push(row(NOT_IN_DATABASE.to_string()));
        } else {
            self.rows
                .extend(entry.sets().iter().map(|set| row(set.to_string())));
        }
        Ok(())
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<TableRow> {
        self.rows
    }
}

/// Build the table for `identifiers`, in the order given.
///
/// Fails on the first malformed or missing identifier.
pub fn build_table<I, S>(catalog: &Catalog, identifiers: I) -> Result<Vec<TableRow>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = ReportTable::new();
    for identifier in identifiers {
        table.add_entry(catalog, identifier.as_ref())?;
    }
    Ok(table.into_rows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::error::Error;

    fn sample() -> Catalog {
        Catalog::from_entries([
            CatalogEntry::new("RDS(10,2,10,5)")
                .with_status(Status::AtLeastOneKnown)
                .with_comment("Pott"),
            CatalogEntry::new("RDS(4,2,4,2)")
                .with_status(Status::AllKnown)
                .with_set([0, 1, 2, 7])
                .with_set([0, 1, 5, 6]),
        ])
    }

    #[test]
    fn test_rows_per_set_and_placeholder() {
        let rows = build_table(&sample(), ["RDS(10,2,10,5)", "RDS(4,2,4,2)"]).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].tuple(), ParameterTuple::new(10, 2, 10, 5));
        assert_eq!(rows[0].set, NOT_IN_DATABASE);
        assert_eq!(rows[0].comment.as_deref(), Some("Pott"));

        assert_eq!(rows[1].set, "[0, 1, 2, 7]");
        assert_eq!(rows[2].set, "[0, 1, 5, 6]");
        assert_eq!(rows[1].status, Some(Status::AllKnown));
        assert_eq!(rows[2].tuple(), ParameterTuple::new(4, 2, 4, 2));
    }

    #[test]
    fn test_caller_order_preserved() {
        let rows = build_table(&sample(), ["RDS(4,2,4,2)", "RDS(10,2,10,5)"]).unwrap();
        let ms: Vec<u64> = rows.iter().map(|r| r.m).collect();
        assert_eq!(ms, vec![4, 4, 10]);
    }

    #[test]
    fn test_errors_abort() {
        assert!(matches!(
            build_table(&sample(), ["RDS(4,2,4,2)", "RDS(1,1,1,1)"]),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            build_table(&sample(), ["RDS(4,2,4)"]),
            Err(Error::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn test_cells() {
        let rows = build_table(&sample(), ["RDS(4,2,4,2)"]).unwrap();
        assert_eq!(
            rows[0].cells(),
            ["4", "2", "4", "2", "All", "", "[0, 1, 2, 7]"].map(String::from)
        );
    }

    #[test]
    fn test_accumulate() {
        let catalog = sample();
        let mut table = ReportTable::new();
        assert!(table.is_empty());
        table.add_entry(&catalog, "RDS(4,2,4,2)").unwrap();
        assert!(table.add_entry(&catalog, "RDS(9,9,9,9)").is_err());
        table.add_entry(&catalog, "RDS(10,2,10,5)").unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_serialize_row() {
        let rows = build_table(&sample(), ["RDS(10,2,10,5)"]).unwrap();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["status"], "Yes");
        assert_eq!(json["lambda"], 5);
        assert_eq!(json["set"], NOT_IN_DATABASE);
    }
}
