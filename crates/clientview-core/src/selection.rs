//! Choosing the active snapshot of a version list.

use clientview_model::{SnapshotId, VersionList};

/// Index of the snapshot to highlight.
///
/// A matching `anchor` wins; otherwise the newest snapshot (index 0) is
/// selected. An unknown anchor falls back silently. An empty list has no
/// selection.
pub fn select_active(versions: &VersionList, anchor: Option<&SnapshotId>) -> Option<usize> {
    if versions.is_empty() {
        return None;
    }
    anchor
        .and_then(|id| versions.position_of(id))
        .or(Some(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use clientview_model::VersionSnapshot;

    fn versions() -> VersionList {
        VersionList::new(vec![
            VersionSnapshot::new(Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap()),
            VersionSnapshot::new(Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap())
                .with_id(SnapshotId::new("123").unwrap()),
        ])
    }

    #[test]
    fn empty_list_has_no_selection() {
        let anchor = SnapshotId::new("123").unwrap();
        assert_eq!(select_active(&VersionList::default(), None), None);
        assert_eq!(select_active(&VersionList::default(), Some(&anchor)), None);
    }

    #[test]
    fn newest_is_selected_by_default() {
        assert_eq!(select_active(&versions(), None), Some(0));
    }

    #[test]
    fn anchor_selects_matching_snapshot() {
        let anchor = SnapshotId::new("123").unwrap();
        assert_eq!(select_active(&versions(), Some(&anchor)), Some(1));
    }

    #[test]
    fn unknown_anchor_falls_back_to_newest() {
        let anchor = SnapshotId::new("unknown").unwrap();
        assert_eq!(select_active(&versions(), Some(&anchor)), Some(0));
    }
}
