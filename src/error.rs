//! Error type shared by the catalog, the session model and the HTTP layer

use thiserror::Error;

use crate::state::SessionId;

#[derive(Debug, Error)]
pub enum WorkoutError {
    /// A split identifier outside "3-day", "4-day", "5-day"
    #[error("Unknown workout split: {0:?}")]
    UnknownSplit(String),

    #[error("Invalid weight {0:?}: expected a non-negative number")]
    InvalidWeight(String),

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// Request body or URL that could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to read catalog file: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Session state lock poisoned: {0}")]
    StatePoisoned(String),
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
