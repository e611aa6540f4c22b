//! Data model for the client details view: snapshot ids, field values,
//! newest-first version lists and version-to-version change summaries.

pub mod catalog;
pub mod diff;
pub mod error;
pub mod ids;
pub mod snapshot;

pub use catalog::{FieldCatalog, FieldMeta};
pub use diff::{ChangeKind, FieldChange, VersionChanges, changes_between};
pub use error::{ModelError, Result};
pub use ids::{SnapshotId, SubjectId};
pub use snapshot::{FieldValue, VersionList, VersionSnapshot};
