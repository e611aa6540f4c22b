//! Collaborator owning subject data.

use clientview_model::SubjectId;

/// Store that loads the versions of the selected subject.
///
/// Loading is asynchronous on the store's side; results come back to the
/// view model as [`crate::Message::VersionsLoaded`].
pub trait SubjectStore {
    fn select_subject(&mut self, subject: &SubjectId);
}

/// Store that only remembers which subjects were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingStore {
    pub requested: Vec<SubjectId>,
}

impl RecordingStore {
    pub fn last_requested(&self) -> Option<&SubjectId> {
        self.requested.last()
    }
}

impl SubjectStore for RecordingStore {
    fn select_subject(&mut self, subject: &SubjectId) {
        self.requested.push(subject.clone());
    }
}
