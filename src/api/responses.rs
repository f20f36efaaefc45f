//! API request and response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{
    catalog::Split,
    error::WorkoutError,
    state::{SessionId, SessionSnapshot},
    weight::Weight,
};

/// API response structure for session endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub session_id: SessionId,
    pub session: SessionSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(message: impl Into<String>, session_id: SessionId, session: SessionSnapshot) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            session_id,
            session,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        let status = match &self {
            WorkoutError::UnknownSplit(_)
            | WorkoutError::InvalidWeight(_)
            | WorkoutError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WorkoutError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            WorkoutError::InvalidCatalog(_)
            | WorkoutError::CatalogIo(_)
            | WorkoutError::CatalogParse(_)
            | WorkoutError::StatePoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Body of POST /api/sessions/:id/split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectSplitRequest {
    /// Kept as text so an unknown identifier surfaces as `UnknownSplit`
    pub split: String,
}

/// Weight as sent by a client: the raw text of an input field or a number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Number(f64),
    Text(String),
}

/// Body of PUT .../exercises/:exercise_id/weight; a missing or null weight clears it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetWeightRequest {
    #[serde(default)]
    pub weight: Option<WeightInput>,
}

impl SetWeightRequest {
    pub fn parse(&self) -> Result<Option<Weight>, WorkoutError> {
        match &self.weight {
            None => Ok(None),
            Some(WeightInput::Number(value)) => Weight::new(*value).map(Some),
            Some(WeightInput::Text(text)) => Weight::parse_input(text),
        }
    }
}

/// One entry of GET /api/splits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitInfo {
    pub split: Split,
    pub label: String,
    pub workouts: usize,
}

/// Server status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub sessions: usize,
    pub max_sessions: usize,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
