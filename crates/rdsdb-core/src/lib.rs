//! RDSDB Core - catalog of cyclic relative difference sets.
//!
//! A read-only query and report layer over a hand-curated catalog keyed by
//! `RDS(m,n,k,lambda)`. For each parameter tuple the catalog records an
//! existence status, a bibliographic comment and zero or more explicit sets.
//!
//! # Usage
//!
//! ```rust
//! use rdsdb_core::{build_table, Catalog, ParameterTuple};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "RDS(4,2,4,2)": { "status": "All", "sets": [[0, 1, 2, 7], [0, 1, 5, 6]] }
//! }"#).unwrap();
//!
//! let lines = catalog.describe(&ParameterTuple::new(4, 2, 4, 2)).unwrap();
//! assert_eq!(lines[0], "There are exactly 2 cyclic (4,2,4,2)-RDS");
//!
//! let rows = build_table(&catalog, ["RDS(4,2,4,2)"]).unwrap();
//! assert_eq!(rows.len(), 2);
//! ```

pub mod catalog;
pub mod error;
pub mod ident;
pub mod report;
pub mod table;

pub use catalog::{
    Catalog, CatalogConfig, CatalogEntry, CatalogStats, DifferenceSet, Status, UnknownStatus,
    DEFAULT_CATALOG_PATH,
};
pub use error::{Error, Result};
pub use ident::{ParameterTuple, ParseError};
pub use report::{describe, describe_set, existence_line};
pub use table::{build_table, ReportTable, TableRow, COLUMNS, NOT_IN_DATABASE};
