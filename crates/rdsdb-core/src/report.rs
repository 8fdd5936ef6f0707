//! Existence reports.
//!
//! A report is a list of text lines derived only from an entry's status, its
//! stored sets and its comment.

use crate::catalog::{Catalog, CatalogEntry, DifferenceSet, Status};
use crate::error::Result;
use crate::ident::ParameterTuple;
use tracing::debug;

/// The existence claim for `(status, set_count)`, if any.
///
/// `Open` and an absent status make no claim.
pub fn existence_line(tuple: &ParameterTuple, status: Option<Status>, count: usize) -> Option<String> {
    let params = tuple.params();
    let line = match status? {
        Status::AllKnown if count > 1 => {
            format!("There are exactly {} cyclic ({})-RDS", count, params)
        }
        Status::AllKnown => format!("There is exactly {} cyclic ({})-RDS", count, params),
        Status::AtLeastOneKnown if count > 1 => {
            format!("There are at least {} cyclic ({})-RDS", count, params)
        }
        Status::AtLeastOneKnown if count == 1 => {
            format!("There is at least {} cyclic ({})-RDS", count, params)
        }
        Status::AtLeastOneKnown => format!(
            "There is at least one cyclic ({}), but it is not in this dataset",
            params
        ),
        Status::KnownNotToExist => format!("No {} exists", tuple),
        Status::Open => return None,
    };
    Some(line)
}

/// Full report for `entry`: existence claim, reference, then stored sets.
///
/// Sets are prefixed with their index only when more than one is stored.
pub fn describe(tuple: &ParameterTuple, entry: &CatalogEntry) -> Vec<String> {
    let count = entry.set_count();
    let mut lines = Vec::with_capacity(count + 2);

    if let Some(line) = existence_line(tuple, entry.status(), count) {
        lines.push(line);
    }

    if let Some(comment) = entry.comment() {
        lines.push(format!("Reference: {}", comment));
    }

    for (i, set) in entry.sets().iter().enumerate() {
        if count > 1 {
            lines.push(format!("{}:\tR = {}", i, set));
        } else {
            lines.push(format!("R = {}", set));
        }
    }

    lines
}

/// One stored set under its identifier.
pub fn describe_set(tuple: &ParameterTuple, set: &DifferenceSet) -> Vec<String> {
    vec![tuple.to_string(), format!("\tR={}", set)]
}

impl Catalog {
    /// Look up `tuple` and describe it.
    pub fn describe(&self, tuple: &ParameterTuple) -> Result<Vec<String>> {
        let entry = self.entry(tuple)?;
        debug!("describe {} ({} sets)", tuple, entry.set_count());
        Ok(describe(tuple, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    const T: ParameterTuple = ParameterTuple::new(4, 2, 4, 2);

    fn line(status: Status, count: usize) -> Option<String> {
        existence_line(&T, Some(status), count)
    }

    #[test]
    fn test_all_known_lines() {
        assert_eq!(
            line(Status::AllKnown, 3).unwrap(),
            "There are exactly 3 cyclic (4,2,4,2)-RDS"
        );
        assert_eq!(
            line(Status::AllKnown, 1).unwrap(),
            "There is exactly 1 cyclic (4,2,4,2)-RDS"
        );
        assert_eq!(
            line(Status::AllKnown, 0).unwrap(),
            "There is exactly 0 cyclic (4,2,4,2)-RDS"
        );
    }

    #[test]
    fn test_at_least_one_lines() {
        assert_eq!(
            line(Status::AtLeastOneKnown, 2).unwrap(),
            "There are at least 2 cyclic (4,2,4,2)-RDS"
        );
        assert_eq!(
            line(Status::AtLeastOneKnown, 1).unwrap(),
            "There is at least 1 cyclic (4,2,4,2)-RDS"
        );
        assert_eq!(
            line(Status::AtLeastOneKnown, 0).unwrap(),
            "There is at least one cyclic (4,2,4,2), but it is not in this dataset"
        );
    }

    #[test]
    fn test_nonexistence_and_open() {
        for count in [0, 1, 5] {
            assert_eq!(
                line(Status::KnownNotToExist, count).unwrap(),
                "No RDS(4,2,4,2) exists"
            );
            assert_eq!(line(Status::Open, count), None);
            assert_eq!(existence_line(&T, None, count), None);
        }
    }

    #[test]
    fn test_index_prefix_with_several_sets() {
        let entry = CatalogEntry::new("RDS(4,2,4,2)")
            .with_status(Status::AtLeastOneKnown)
            .with_set([1, 2])
            .with_set([3, 4]);
        assert_eq!(
            describe(&T, &entry),
            vec![
                "There are at least 2 cyclic (4,2,4,2)-RDS",
                "0:\tR = [1, 2]",
                "1:\tR = [3, 4]",
            ]
        );
    }

    #[test]
    fn test_no_index_prefix_with_one_set() {
        let entry = CatalogEntry::new("RDS(4,2,4,2)")
            .with_status(Status::AtLeastOneKnown)
            .with_set([1, 2]);
        assert_eq!(
            describe(&T, &entry),
            vec!["There is at least 1 cyclic (4,2,4,2)-RDS", "R = [1, 2]"]
        );
    }

    #[test]
    fn test_reference_line_follows_status() {
        let entry = CatalogEntry::new("RDS(4,2,4,2)")
            .with_status(Status::KnownNotToExist)
            .with_comment("Arasu, Jungnickel, Ma, Pott (1995)");
        assert_eq!(
            describe(&T, &entry),
            vec![
                "No RDS(4,2,4,2) exists",
                "Reference: Arasu, Jungnickel, Ma, Pott (1995)",
            ]
        );
    }

    #[test]
    fn test_open_reports_only_comment() {
        let entry = CatalogEntry::new("RDS(4,2,4,2)")
            .with_status(Status::Open)
            .with_comment("unresolved");
        assert_eq!(describe(&T, &entry), vec!["Reference: unresolved"]);
    }

    #[test]
    fn test_describe_set() {
        let set = DifferenceSet::from([0, 1, 3]);
        assert_eq!(describe_set(&T, &set), vec!["RDS(4,2,4,2)", "\tR=[0, 1, 3]"]);
    }

    #[test]
    fn test_catalog_describe_not_found() {
        let catalog = Catalog::default();
        assert!(matches!(catalog.describe(&T), Err(Error::NotFound { .. })));
    }
}
