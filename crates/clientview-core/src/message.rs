//! Inbound events for the details view model.

use clientview_model::{SubjectId, VersionList};

use crate::disclosure::ListId;
use crate::route::RouteParams;

/// Every event the view model reacts to.
///
/// Each message is handled to completion before the next one.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // External signals
    // =========================================================================
    /// The globally selected subject changed.
    SubjectSelected(SubjectId),

    /// The store emitted the versions of the selected subject, newest first.
    VersionsLoaded(VersionList),

    /// The router emitted new route parameters.
    RouteChanged(RouteParams),

    // =========================================================================
    // User actions
    // =========================================================================
    /// "Show more" / "show less" clicked on a list.
    ToggleList(ListId),

    /// A timeline entry was clicked.
    VersionClicked(usize),
}
