//! Drives the details view model from files and command line options.
//!
//! The CLI stands in for the store and the router: it reads the version
//! history from disk and replays the events the view would receive.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use clientview_core::{
    DetailsViewModel, ListId, Message, RouteParams, SubjectStore, ViewSettings, route_params,
};
use clientview_model::{SubjectId, VersionList};

/// Store that only records the request in the log.
#[derive(Debug, Default)]
pub struct LoggingStore {
    pub requested: Option<SubjectId>,
}

impl SubjectStore for LoggingStore {
    fn select_subject(&mut self, subject: &SubjectId) {
        info!(subject = %subject, "store asked to load subject");
        self.requested = Some(subject.clone());
    }
}

/// Events to replay after loading.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub subject: Option<String>,
    pub anchor: Option<String>,
    pub select: Option<usize>,
    pub expand: Vec<String>,
}

/// Reads a JSON array of snapshots.
///
/// With `sort`, the snapshots are ordered newest first; otherwise the file
/// order is kept.
pub fn load_versions(path: &Path, sort: bool) -> Result<VersionList> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read versions from {}", path.display()))?;
    let versions = VersionList::from_json(&content)
        .with_context(|| format!("parse versions in {}", path.display()))?;
    info!(path = %path.display(), versions = versions.len(), "versions loaded");
    if sort {
        Ok(VersionList::sorted_newest_first(versions.into_vec()))
    } else {
        Ok(versions)
    }
}

pub fn load_settings(path: Option<&Path>) -> Result<ViewSettings> {
    match path {
        Some(path) => ViewSettings::load_from(path).context("load settings"),
        None => Ok(ViewSettings::default()),
    }
}

/// Builds a view model and replays subject, route, load, click and toggle
/// events in that order.
pub fn build_view(
    versions: VersionList,
    settings: ViewSettings,
    options: &ShowOptions,
) -> Result<DetailsViewModel<LoggingStore>> {
    let span = info_span!("show", versions = versions.len());
    let _guard = span.enter();

    let anchor_param = settings.anchor_param.clone();
    let mut view = DetailsViewModel::new(LoggingStore::default(), settings);

    if let Some(subject) = &options.subject {
        let subject = SubjectId::new(subject.as_str()).context("parse subject id")?;
        view.update(Message::SubjectSelected(subject));
    }

    let params: RouteParams = match &options.anchor {
        Some(anchor) => route_params([(anchor_param, anchor.clone())]),
        None => RouteParams::new(),
    };
    view.update(Message::RouteChanged(params));
    view.update(Message::VersionsLoaded(versions));

    if let Some(index) = options.select {
        view.update(Message::VersionClicked(index));
    }
    for list in &options.expand {
        view.update(Message::ToggleList(ListId::new(list.as_str())));
    }
    Ok(view)
}
