//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and request/response structures.

pub mod extract;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::{
    clear_split_handler, create_session_handler, delete_session_handler, get_session_handler,
    health_handler, index_handler, select_split_handler, set_weight_handler, splits_handler,
    status_handler, track_workout_handler,
};

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/splits", get(splits_handler))
        .route("/api/sessions", post(create_session_handler))
        .route(
            "/api/sessions/:id",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route(
            "/api/sessions/:id/split",
            post(select_split_handler).delete(clear_split_handler),
        )
        .route(
            "/api/sessions/:id/workouts/:workout_id/exercises/:exercise_id/weight",
            put(set_weight_handler),
        )
        .route(
            "/api/sessions/:id/workouts/:workout_id/track",
            post(track_workout_handler),
        )
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
