//! Details view model.
//!
//! Combines two independently arriving inputs (the latest version list from
//! the store and the latest anchor from the router) into one selection, and
//! keeps a disclosure counter per list for the selected snapshot.
//!
//! # Architecture
//!
//! The view model keeps the last value seen on each input and recomputes the
//! derived selection whenever either changes, so emission order between the
//! store and the router does not matter. Per-list counters live in one map
//! keyed by [`ListId`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use clientview_model::{
    FieldCatalog, FieldValue, SnapshotId, SubjectId, VersionChanges, VersionList,
    VersionSnapshot,
};

use crate::disclosure::{DisclosureCounts, DisclosureState, ListId};
use crate::message::Message;
use crate::route::{RouteParams, anchor_from_params};
use crate::selection::select_active;
use crate::settings::ViewSettings;
use crate::store::SubjectStore;

// =============================================================================
// READ MODEL
// =============================================================================

/// One field of the selected snapshot, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    pub label: String,
    /// Full value; lists are not truncated here.
    pub value: FieldValue,
    /// Disclosure counts when the field is a disclosable list.
    pub disclosure: Option<DisclosureCounts>,
}

impl FieldRow {
    /// Value as rendered: lists cut down to their visible items.
    pub fn display_value(&self) -> FieldValue {
        match (&self.value, self.disclosure) {
            (FieldValue::List(items), Some(counts)) => {
                FieldValue::List(items.iter().take(counts.visible()).cloned().collect())
            }
            (value, _) => value.clone(),
        }
    }
}

/// One entry of the version timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub id: Option<SnapshotId>,
    pub changes: Vec<String>,
    pub selected: bool,
}

// =============================================================================
// VIEW MODEL
// =============================================================================

pub struct DetailsViewModel<S> {
    store: S,
    settings: ViewSettings,
    catalog: FieldCatalog,
    latest_versions: Option<VersionList>,
    latest_anchor: Option<SnapshotId>,
    active: Option<usize>,
    disclosures: BTreeMap<ListId, DisclosureCounts>,
}

impl<S: SubjectStore> DetailsViewModel<S> {
    pub fn new(store: S, settings: ViewSettings) -> Self {
        let disclosures = settings
            .disclosure
            .lists()
            .map(|list| {
                let cap = settings.disclosure.cap_for(&list);
                (list, DisclosureCounts::new(0, cap))
            })
            .collect();
        Self {
            store,
            settings,
            catalog: FieldCatalog::default(),
            latest_versions: None,
            latest_anchor: None,
            active: None,
            disclosures,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: FieldCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Handles one inbound event.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SubjectSelected(subject) => self.on_subject_selected(&subject),
            Message::VersionsLoaded(versions) => self.on_versions_loaded(versions),
            Message::RouteChanged(params) => self.on_route_changed(&params),
            Message::ToggleList(list) => {
                self.toggle(&list);
            }
            Message::VersionClicked(index) => self.click_version(index),
        }
    }

    /// Forwards the selected subject to the store.
    pub fn on_subject_selected(&mut self, subject: &SubjectId) {
        debug!(subject = %subject, "subject selected");
        self.store.select_subject(subject);
    }

    pub fn on_versions_loaded(&mut self, versions: VersionList) {
        self.latest_versions = Some(versions);
        self.recompute_selection();
    }

    pub fn on_route_changed(&mut self, params: &RouteParams) {
        self.latest_anchor = anchor_from_params(params, &self.settings.anchor_param);
        self.recompute_selection();
    }

    /// Expands or collapses a list. `None` for lists without counters.
    pub fn toggle(&mut self, list: &ListId) -> Option<DisclosureState> {
        let Some(counts) = self.disclosures.get_mut(list) else {
            warn!(list = %list, "toggle on unknown list ignored");
            return None;
        };
        let state = counts.toggle();
        trace!(list = %list, shown = counts.shown, total = counts.total, state = %state, "list toggled");
        Some(state)
    }

    /// Selects a timeline entry directly. Out-of-range indices are ignored.
    pub fn click_version(&mut self, index: usize) {
        let len = self.latest_versions.as_ref().map_or(0, VersionList::len);
        if index >= len {
            warn!(index, len, "click on missing version ignored");
            return;
        }
        self.active = Some(index);
        debug!(index, "version clicked");
        self.refresh_totals();
    }

    fn recompute_selection(&mut self) {
        self.active = self
            .latest_versions
            .as_ref()
            .and_then(|versions| select_active(versions, self.latest_anchor.as_ref()));
        debug!(
            active = ?self.active,
            anchor = ?self.latest_anchor.as_ref().map(SnapshotId::as_str),
            versions = self.latest_versions.as_ref().map_or(0, VersionList::len),
            "selection recomputed"
        );
        self.refresh_totals();
    }

    /// Re-reads list totals from the active snapshot, keeping `shown`.
    fn refresh_totals(&mut self) {
        let snapshot = match (self.active, self.latest_versions.as_ref()) {
            (Some(index), Some(versions)) => versions.get(index),
            _ => None,
        };
        if let Some(snapshot) = snapshot {
            for (name, value) in &snapshot.fields {
                if value.as_list().is_some() {
                    let list = ListId::new(name.as_str());
                    let cap = self.settings.disclosure.cap_for(&list);
                    self.disclosures
                        .entry(list)
                        .or_insert_with(|| DisclosureCounts::new(0, cap));
                }
            }
        }
        for (list, counts) in &mut self.disclosures {
            counts.set_total(snapshot.map_or(0, |s| s.list_items(list.as_str()).len()));
        }
    }
}

impl<S> DetailsViewModel<S> {
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn versions(&self) -> Option<&VersionList> {
        self.latest_versions.as_ref()
    }

    pub fn anchor(&self) -> Option<&SnapshotId> {
        self.latest_anchor.as_ref()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_snapshot(&self) -> Option<&VersionSnapshot> {
        self.latest_versions.as_ref()?.get(self.active?)
    }

    pub fn disclosure(&self, list: &ListId) -> Option<&DisclosureCounts> {
        self.disclosures.get(list)
    }

    /// All disclosure counters, in list name order.
    pub fn disclosures(&self) -> impl Iterator<Item = (&ListId, &DisclosureCounts)> {
        self.disclosures.iter()
    }

    pub fn disclosure_state(&self, list: &ListId) -> DisclosureState {
        self.disclosure(list)
            .map_or(DisclosureState::NoButton, DisclosureCounts::state)
    }

    /// Items of `list` currently rendered for the active snapshot.
    pub fn visible_items(&self, list: &ListId) -> &[String] {
        let Some(snapshot) = self.active_snapshot() else {
            return &[];
        };
        let items = snapshot.list_items(list.as_str());
        match self.disclosure(list) {
            Some(counts) => &items[..counts.visible().min(items.len())],
            None => items,
        }
    }

    /// Fields of the active snapshot merged with catalog metadata.
    pub fn field_rows(&self) -> Vec<FieldRow> {
        let Some(snapshot) = self.active_snapshot() else {
            return Vec::new();
        };
        self.catalog
            .ordered(snapshot.fields.keys().map(String::as_str))
            .into_iter()
            .filter_map(|name| {
                let value = snapshot.field(name)?;
                let disclosure = value
                    .as_list()
                    .and_then(|_| self.disclosures.get(&ListId::new(name)).copied());
                Some(FieldRow {
                    name: name.to_string(),
                    label: self.catalog.label(name).to_string(),
                    value: value.clone(),
                    disclosure,
                })
            })
            .collect()
    }

    pub fn change_summaries(&self) -> Vec<VersionChanges> {
        self.latest_versions
            .as_ref()
            .map(VersionList::change_summaries)
            .unwrap_or_default()
    }

    /// Timeline entries with change descriptions and the selection marker.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let Some(versions) = self.latest_versions.as_ref() else {
            return Vec::new();
        };
        versions
            .iter()
            .zip(versions.change_summaries())
            .enumerate()
            .map(|(index, (snapshot, changes))| TimelineEntry {
                index,
                timestamp: snapshot.timestamp,
                id: snapshot.id.clone(),
                changes: changes.describe(&self.catalog),
                selected: self.active == Some(index),
            })
            .collect()
    }
}
