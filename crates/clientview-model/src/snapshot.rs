//! Point-in-time snapshots of a subject and the ordered list that holds them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::SnapshotId;

// =============================================================================
// FIELD VALUE
// =============================================================================

/// A single observed field value.
///
/// `List` values back the progressively disclosed lists (users, network
/// interfaces, volumes) and are the only variant with an item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Number of disclosable items held by this value.
    pub fn item_count(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            _ => 0,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

// =============================================================================
// VERSION SNAPSHOT
// =============================================================================

/// Immutable record of a subject's state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    /// Unset for snapshots recorded before anchoring existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SnapshotId>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl VersionSnapshot {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            id: None,
            timestamp,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: SnapshotId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Items of the named list field, or an empty slice if absent or scalar.
    pub fn list_items(&self, name: &str) -> &[String] {
        self.field(name)
            .and_then(FieldValue::as_list)
            .unwrap_or_default()
    }

    pub fn has_id(&self, id: &SnapshotId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

// =============================================================================
// VERSION LIST
// =============================================================================

/// Snapshots of a single subject, newest first.
///
/// The order given to [`VersionList::new`] is kept as is: it is the display
/// order and the order the selection rules rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionList(Vec<VersionSnapshot>);

impl VersionList {
    pub fn new(snapshots: Vec<VersionSnapshot>) -> Self {
        Self(snapshots)
    }

    /// Builds a list from snapshots in arbitrary order.
    ///
    /// The sort is stable, so snapshots sharing a timestamp keep their
    /// relative input order.
    pub fn sorted_newest_first(mut snapshots: Vec<VersionSnapshot>) -> Self {
        snapshots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self(snapshots)
    }

    /// Parses a JSON array of snapshots, keeping the given order.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VersionSnapshot> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionSnapshot> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[VersionSnapshot] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<VersionSnapshot> {
        self.0
    }

    /// Index of the first snapshot carrying `id`.
    pub fn position_of(&self, id: &SnapshotId) -> Option<usize> {
        self.0.iter().position(|snapshot| snapshot.has_id(id))
    }
}

impl From<Vec<VersionSnapshot>> for VersionList {
    fn from(snapshots: Vec<VersionSnapshot>) -> Self {
        Self::new(snapshots)
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a VersionSnapshot;
    type IntoIter = std::slice::Iter<'a, VersionSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, month, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn sorted_newest_first_orders_by_timestamp() {
        let list = VersionList::sorted_newest_first(vec![
            VersionSnapshot::new(at(1)),
            VersionSnapshot::new(at(3)),
            VersionSnapshot::new(at(2)),
        ]);
        let months: Vec<_> = list.iter().map(|s| s.timestamp).collect();
        assert_eq!(months, vec![at(3), at(2), at(1)]);
    }

    #[test]
    fn position_of_skips_unset_ids() {
        let id = SnapshotId::new("123").unwrap();
        let list = VersionList::new(vec![
            VersionSnapshot::new(at(3)),
            VersionSnapshot::new(at(2)).with_id(id.clone()),
        ]);
        assert_eq!(list.position_of(&id), Some(1));
        assert_eq!(list.position_of(&SnapshotId::new("999").unwrap()), None);
    }

    #[test]
    fn list_items_of_scalar_field_is_empty() {
        let snapshot = VersionSnapshot::new(at(1))
            .with_field("fqdn", FieldValue::Text("host".into()))
            .with_field("users", FieldValue::List(vec!["foo".into(), "bar".into()]));
        assert!(snapshot.list_items("fqdn").is_empty());
        assert!(snapshot.list_items("missing").is_empty());
        assert_eq!(snapshot.list_items("users"), ["foo", "bar"]);
    }

    #[test]
    fn field_values_parse_untagged() {
        let json = r#"[{
            "id": "123",
            "timestamp": "2020-02-01T00:00:00Z",
            "fields": {
                "fqdn": "foo.example",
                "fleetspeak_enabled": true,
                "memory_size": 4096,
                "users": ["foo", "bar"]
            }
        }]"#;
        let list = VersionList::from_json(json).unwrap();
        let snapshot = list.get(0).unwrap();
        assert_eq!(snapshot.id.as_ref().map(SnapshotId::as_str), Some("123"));
        assert_eq!(snapshot.field("fleetspeak_enabled"), Some(&FieldValue::Flag(true)));
        assert_eq!(snapshot.field("memory_size"), Some(&FieldValue::Integer(4096)));
        assert_eq!(snapshot.field("users").map(FieldValue::item_count), Some(2));
    }

    #[test]
    fn missing_id_deserializes_as_none() {
        let json = r#"[{"timestamp": "2020-02-01T00:00:00Z"}]"#;
        let list = VersionList::from_json(json).unwrap();
        assert_eq!(list.get(0).unwrap().id, None);
    }
}
