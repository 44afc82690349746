// ================================================================
// File: wardrobe-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not found error: {0}")]
    NotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document-store failure reported by a repository implementation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The text-generation collaborator failed or returned garbage.
    #[error("Completion error: {0}")]
    Completion(String),
}
