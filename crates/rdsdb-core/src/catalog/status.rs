//! Existence status of a parameter tuple.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What is known about the existence of cyclic RDS for a parameter tuple.
///
/// Serialized with the catalog's labels: `All`, `Yes`, `Open`, `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    /// Fully classified; every set is stored.
    #[serde(rename = "All")]
    AllKnown,
    /// At least one exists.
    #[serde(rename = "Yes")]
    AtLeastOneKnown,
    /// Existence undecided.
    #[serde(rename = "Open")]
    Open,
    /// Proven not to exist.
    #[serde(rename = "No")]
    KnownNotToExist,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::AllKnown,
        Status::AtLeastOneKnown,
        Status::Open,
        Status::KnownNotToExist,
    ];

    /// The catalog label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::AllKnown => "All",
            Status::AtLeastOneKnown => "Yes",
            Status::Open => "Open",
            Status::KnownNotToExist => "No",
        }
    }

    /// Look up a status by its catalog label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognized status label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected All, Yes, Open or No)")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
