//! The RDS catalog.
//!
//! The catalog maps canonical identifiers to what is known about each
//! parameter tuple: an existence status, a bibliographic comment and zero or
//! more explicit sets.

mod catalog;
mod entry;
mod loader;
mod status;

pub use catalog::{Catalog, CatalogStats};
pub use entry::{CatalogEntry, DifferenceSet};
pub use loader::{CatalogConfig, DEFAULT_CATALOG_PATH};
pub use status::{Status, UnknownStatus};
