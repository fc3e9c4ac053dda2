//! Error types for itrack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Issue not found")]
    NotFound,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
