//! Change summaries between consecutive versions.
//!
//! The timeline shows, for every version, which fields differ from the
//! version right before it in time. Versions are newest first, so entry `i`
//! is compared against entry `i + 1`; the oldest entry is the first sighting
//! of the subject.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::FieldCatalog;
use crate::snapshot::{VersionList, VersionSnapshot};

/// How a field differs between a version and its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub kind: ChangeKind,
}

/// Changes recorded by one version of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChanges {
    /// True for the oldest version, which has nothing to compare against.
    pub first_seen: bool,
    pub changes: Vec<FieldChange>,
}

impl VersionChanges {
    /// Human readable descriptions, e.g. `"FQDN changed"`.
    pub fn describe(&self, catalog: &FieldCatalog) -> Vec<String> {
        if self.first_seen {
            return vec!["Client first seen".to_string()];
        }
        self.changes
            .iter()
            .map(|change| format!("{} {}", catalog.label(&change.field), change.kind))
            .collect()
    }
}

/// Field-level differences of `newer` relative to `older`, in field-name order.
pub fn changes_between(newer: &VersionSnapshot, older: &VersionSnapshot) -> Vec<FieldChange> {
    let names: BTreeSet<&String> = newer.fields.keys().chain(older.fields.keys()).collect();
    names
        .into_iter()
        .filter_map(|name| {
            let kind = match (newer.fields.get(name), older.fields.get(name)) {
                (Some(_), None) => ChangeKind::Added,
                (None, Some(_)) => ChangeKind::Removed,
                (Some(a), Some(b)) if a != b => ChangeKind::Changed,
                _ => return None,
            };
            Some(FieldChange {
                field: name.clone(),
                kind,
            })
        })
        .collect()
}

impl VersionList {
    /// One entry per version, aligned with the list order.
    pub fn change_summaries(&self) -> Vec<VersionChanges> {
        let snapshots = self.as_slice();
        snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| match snapshots.get(index + 1) {
                Some(older) => VersionChanges {
                    first_seen: false,
                    changes: changes_between(snapshot, older),
                },
                None => VersionChanges {
                    first_seen: true,
                    changes: Vec::new(),
                },
            })
            .collect()
    }
}
