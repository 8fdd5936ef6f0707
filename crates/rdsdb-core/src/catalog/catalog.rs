//! The loaded catalog and its lookups.

use super::{CatalogEntry, DifferenceSet, Status};
use crate::error::{Error, Result};
use crate::ident::{self, ParameterTuple};
use std::collections::BTreeMap;
use tracing::debug;

/// Read-only mapping from canonical identifier to catalog entry.
///
/// Built once by a loader and never mutated afterwards, so a shared
/// reference can be handed to any number of readers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

/// Summary counts over a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of entries.
    pub entries: usize,
    /// Total stored sets across all entries.
    pub sets: usize,
    /// Entries per status.
    pub by_status: BTreeMap<Status, usize>,
    /// Entries with no recognized status.
    pub unknown_status: usize,
}

impl Catalog {
    /// Build a catalog from entries, keyed by each entry's identifier.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self::from_map(
            entries
                .into_iter()
                .map(|e| (e.identifier().to_string(), e))
                .collect(),
        )
    }

    pub(crate) fn from_map(entries: BTreeMap<String, CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Look up an entry by identifier.
    pub fn get(&self, identifier: &str) -> Result<&CatalogEntry> {
        debug!("lookup {}", identifier);
        self.entries.get(identifier).ok_or_else(|| Error::NotFound {
            identifier: identifier.to_string(),
        })
    }

    /// Look up an entry by parameter tuple.
    pub fn entry(&self, tuple: &ParameterTuple) -> Result<&CatalogEntry> {
        self.get(&ident::format(tuple))
    }

    /// The `index`-th stored `(m,n,k,lambda)`-RDS.
    pub fn get_rds(
        &self,
        m: u64,
        n: u64,
        k: u64,
        lambda: u64,
        index: usize,
    ) -> Result<(ParameterTuple, &DifferenceSet)> {
        let tuple = ParameterTuple::new(m, n, k, lambda);
        let set = self.entry(&tuple)?.get_set(index)?;
        Ok((tuple, set))
    }

    /// All identifiers, in key order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All entries, in key order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries.values()
    }

    /// Parameter tuples of all well-formed keys, sorted by `(m, n, k, lambda)`.
    pub fn tuples(&self) -> Vec<ParameterTuple> {
        let mut tuples: Vec<ParameterTuple> = self
            .identifiers()
            .filter_map(|id| ident::parse(id).ok())
            .collect();
        tuples.sort();
        tuples
    }

    /// Identifiers whose entry carries `status`, sorted by parameter tuple.
    ///
    /// `None` selects entries without a recognized status.
    pub fn filter_by_status(&self, status: Option<Status>) -> Vec<ParameterTuple> {
        self.tuples()
            .into_iter()
            .filter(|t| {
                self.entries
                    .get(&ident::format(t))
                    .is_some_and(|e| e.status() == status)
            })
            .collect()
    }

    /// Summary counts.
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            entries: self.len(),
            ..Default::default()
        };
        for entry in self.entries() {
            stats.sets += entry.set_count();
            match entry.status() {
                Some(status) => *stats.by_status.entry(status).or_default() += 1,
                None => stats.unknown_status += 1,
            }
        }
        stats
    }
}
