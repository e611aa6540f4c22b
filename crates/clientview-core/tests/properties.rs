//! Property tests for disclosure and selection.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use clientview_core::{DisclosureCounts, DisclosureState, compute_state, select_active};
use clientview_model::{SnapshotId, VersionList, VersionSnapshot};

fn versions_with_ids(ids: &[Option<String>]) -> VersionList {
    let base = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    VersionList::new(
        ids.iter()
            .enumerate()
            .map(|(i, id)| {
                let snapshot = VersionSnapshot::new(base - Duration::days(i as i64));
                match id {
                    Some(id) => snapshot.with_id(SnapshotId::new(id.as_str()).unwrap()),
                    None => snapshot,
                }
            })
            .collect(),
    )
}

fn arb_ids() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[a-e]{1,2}"), 0..10)
}

proptest! {
    #[test]
    fn empty_list_never_has_button(shown in 0usize..100, cap in 0usize..100) {
        prop_assert_eq!(compute_state(0, shown, cap), DisclosureState::NoButton);
    }

    #[test]
    fn hidden_items_mean_show_more(total in 1usize..100, cap in 0usize..200, gap in 1usize..100) {
        let shown = total.saturating_sub(gap);
        prop_assert_eq!(compute_state(total, shown, cap), DisclosureState::ShowMore);
    }

    #[test]
    fn fully_shown_truncated_list_means_show_less(total in 1usize..100, extra in 0usize..10, cap_gap in 1usize..100) {
        let cap = total.saturating_sub(cap_gap);
        prop_assume!(cap < total);
        prop_assert_eq!(compute_state(total, total + extra, cap), DisclosureState::ShowLess);
    }

    #[test]
    fn list_fitting_in_cap_has_no_button(total in 1usize..100, extra in 0usize..10, cap_extra in 0usize..10) {
        prop_assert_eq!(
            compute_state(total, total + extra, total + cap_extra),
            DisclosureState::NoButton
        );
    }

    #[test]
    fn compute_state_is_idempotent(total in 0usize..50, shown in 0usize..50, cap in 0usize..50) {
        prop_assert_eq!(compute_state(total, shown, cap), compute_state(total, shown, cap));
    }

    #[test]
    fn two_toggle_cycles_repeat_states(total in 1usize..50, cap_gap in 1usize..50) {
        let cap = total.saturating_sub(cap_gap);
        let mut counts = DisclosureCounts::new(total, cap);
        let start = counts;
        let mut states = Vec::new();
        for _ in 0..4 {
            states.push(counts.toggle());
        }
        prop_assert_eq!(
            states,
            vec![
                DisclosureState::ShowLess,
                DisclosureState::ShowMore,
                DisclosureState::ShowLess,
                DisclosureState::ShowMore,
            ]
        );
        prop_assert_eq!(counts, start);
    }

    #[test]
    fn no_anchor_selects_newest(ids in arb_ids()) {
        let versions = versions_with_ids(&ids);
        let expected = if ids.is_empty() { None } else { Some(0) };
        prop_assert_eq!(select_active(&versions, None), expected);
    }

    #[test]
    fn anchor_selects_first_match_or_newest(ids in arb_ids(), anchor in "[a-e]{1,2}") {
        let versions = versions_with_ids(&ids);
        let anchor = SnapshotId::new(anchor).unwrap();
        let selected = select_active(&versions, Some(&anchor));
        let first_match = ids
            .iter()
            .position(|id| id.as_deref() == Some(anchor.as_str()));
        let expected = if ids.is_empty() { None } else { Some(first_match.unwrap_or(0)) };
        prop_assert_eq!(selected, expected);
        prop_assert_eq!(select_active(&versions, Some(&anchor)), selected);
    }
}
