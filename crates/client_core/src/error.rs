use shared::error::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to elevator authority failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed snapshot body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("snapshot rejected: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
