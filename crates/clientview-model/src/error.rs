use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid subject id: {0:?}")]
    InvalidSubjectId(String),
    #[error("invalid snapshot id: {0:?}")]
    InvalidSnapshotId(String),
    #[error("invalid version list: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
