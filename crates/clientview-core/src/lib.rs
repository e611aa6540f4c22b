//! Client details view core.
//!
//! - [`disclosure`]: show-more / show-less state for long lists
//! - [`selection`]: which version of a subject is active
//! - [`view_model`]: wiring of store, router and user events onto both

pub mod disclosure;
pub mod error;
pub mod message;
pub mod route;
pub mod selection;
pub mod settings;
pub mod store;
pub mod view_model;

pub use disclosure::{DisclosureCounts, DisclosureState, ListId, compute_state};
pub use error::{CoreError, Result};
pub use message::Message;
pub use route::{RouteParams, SOURCE_FLOW_ID_PARAM, anchor_from_params, route_params};
pub use selection::select_active;
pub use settings::{DisclosureSettings, ViewSettings};
pub use store::{RecordingStore, SubjectStore};
pub use view_model::{DetailsViewModel, FieldRow, TimelineEntry};
