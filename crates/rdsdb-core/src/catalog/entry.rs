//! Catalog entries and their stored difference sets.

use super::Status;
use crate::error::{Error, Result};
use crate::ident::{self, ParameterTuple};
use serde::{Deserialize, Serialize};

/// One concrete relative difference set, stored as its list of integers.
///
/// The payload is opaque here: it is only counted, indexed and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifferenceSet(Vec<i64>);

impl DifferenceSet {
    pub fn new(elements: Vec<i64>) -> Self {
        Self(elements)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &i64> + '_ {
        self.0.iter()
    }
}

impl From<Vec<i64>> for DifferenceSet {
    fn from(elements: Vec<i64>) -> Self {
        Self(elements)
    }
}

impl<const N: usize> From<[i64; N]> for DifferenceSet {
    fn from(elements: [i64; N]) -> Self {
        Self(elements.to_vec())
    }
}

/// Renders as `[1, 2, 3]`.
impl std::fmt::Display for DifferenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}

/// Everything the catalog records for one identifier.
///
/// `status` and `sets` are independent: an entry may say at least one set
/// exists while storing none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    identifier: String,
    status: Option<Status>,
    comment: Option<String>,
    sets: Vec<DifferenceSet>,
}

impl CatalogEntry {
    /// Create an entry with no status, comment or sets.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            status: None,
            comment: None,
            sets: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_set(mut self, set: impl Into<DifferenceSet>) -> Self {
        self.sets.push(set.into());
        self
    }

    pub(crate) fn from_parts(
        identifier: String,
        status: Option<Status>,
        comment: Option<String>,
        sets: Vec<DifferenceSet>,
    ) -> Self {
        Self {
            identifier,
            status,
            comment,
            sets,
        }
    }

    /// The key this entry is stored under.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Parse the parameters back out of the key.
    pub fn tuple(&self) -> Result<ParameterTuple> {
        Ok(ident::parse(&self.identifier)?)
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Number of stored sets; zero when none are stored.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub fn sets(&self) -> &[DifferenceSet] {
        &self.sets
    }

    /// The `index`-th stored set.
    pub fn get_set(&self, index: usize) -> Result<&DifferenceSet> {
        self.sets.get(index).ok_or_else(|| Error::IndexOutOfRange {
            identifier: self.identifier.clone(),
            index,
            count: self.sets.len(),
        })
    }
}
