//! Extractors whose rejections use the same JSON error body as every other failure

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts,
};

use crate::error::WorkoutError;

/// `axum::Json` that rejects with `WorkoutError::BadRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WorkoutError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` that rejects with `WorkoutError::BadRequest`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WorkoutError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for WorkoutError {
    fn from(rejection: JsonRejection) -> Self {
        WorkoutError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for WorkoutError {
    fn from(rejection: PathRejection) -> Self {
        WorkoutError::BadRequest(rejection.body_text())
    }
}
