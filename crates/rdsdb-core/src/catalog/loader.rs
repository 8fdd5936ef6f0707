//! Loading a catalog from its JSON form.
//!
//! The serialized catalog is one JSON object keyed by canonical identifier:
//!
//! ```text
//! {
//!   "RDS(73,7,64,8)": {
//!     "status": "Yes",
//!     "comment": "...",
//!     "sets": [[0, 1, 3, ...], ...]
//!   }
//! }
//! ```
//!
//! Every field of an entry is optional.

use super::{Catalog, CatalogEntry, DifferenceSet, Status};
use crate::error::Result;
use crate::ident;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default catalog file name.
pub const DEFAULT_CATALOG_PATH: &str = "rds.json";

/// Catalog loading configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path of the JSON catalog.
    pub path: PathBuf,
    /// Reject keys that are not canonical identifiers instead of keeping them.
    pub strict: bool,
}

impl CatalogConfig {
    /// Create a lenient configuration for the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            strict: false,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

/// Entry as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    sets: Option<Vec<DifferenceSet>>,
}

impl Catalog {
    /// Load the catalog file named by `config`.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        let file = File::open(&config.path)?;
        let raw: BTreeMap<String, RawEntry> = serde_json::from_reader(BufReader::new(file))?;
        let catalog = Self::from_raw(raw, config.strict)?;
        info!(
            path = %config.path.display(),
            "read {} data items",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Load a catalog from any JSON reader, keeping malformed keys.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: BTreeMap<String, RawEntry> = serde_json::from_reader(reader)?;
        Self::from_raw(raw, false)
    }

    /// Load a catalog from a JSON string, keeping malformed keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawEntry> = serde_json::from_str(json)?;
        Self::from_raw(raw, false)
    }

    fn from_raw(raw: BTreeMap<String, RawEntry>, strict: bool) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (identifier, entry) in raw {
            if let Err(e) = ident::parse(&identifier) {
                if strict {
                    return Err(e.into());
                }
                warn!("catalog key {} is not a canonical identifier: {}", identifier, e.message);
            }

            let status = entry.status.as_deref().and_then(|label| {
                let status = Status::from_label(label);
                if status.is_none() {
                    warn!("{}: unknown status '{}', treating as absent", identifier, label);
                }
                status
            });

            let entry = CatalogEntry::from_parts(
                identifier.clone(),
                status,
                entry.comment,
                entry.sets.unwrap_or_default(),
            );
            entries.insert(identifier, entry);
        }

        Ok(Self::from_map(entries))
    }
}
