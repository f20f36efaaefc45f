//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use tracing::info;

use crate::{
    catalog::{ExerciseId, Split, WorkoutId},
    error::WorkoutError,
    state::{AppState, SessionId},
};
use super::extract::{ApiJson, ApiPath};
use super::responses::{
    ApiResponse, HealthResponse, SelectSplitRequest, SetWeightRequest, SplitInfo, StatusResponse,
};

type ApiResult<T> = Result<T, WorkoutError>;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Handle GET / - Serve the workout tracker page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle GET /api/splits - List the splits a user can choose from
pub async fn splits_handler(State(state): State<Arc<AppState>>) -> Json<Vec<SplitInfo>> {
    let splits = Split::ALL
        .into_iter()
        .map(|split| SplitInfo {
            split,
            label: split.label().to_string(),
            workouts: state.catalog.plan(split).len(),
        })
        .collect();
    Json(splits)
}

/// Handle POST /api/sessions - Open a session for a freshly loaded page
pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<ApiResponse>)> {
    let (id, session) = state.create_session()?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Session created", id, session)),
    ))
}

/// Handle GET /api/sessions/:id - Current session snapshot
pub async fn get_session_handler(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<SessionId>,
) -> ApiResult<Json<ApiResponse>> {
    let session = state.session_snapshot(id)?;
    Ok(Json(ApiResponse::new("Session snapshot", id, session)))
}

/// Handle DELETE /api/sessions/:id - Discard a session when its page goes away
pub async fn delete_session_handler(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<SessionId>,
) -> ApiResult<StatusCode> {
    state.remove_session(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handle POST /api/sessions/:id/split - Select a split and load its plan
pub async fn select_split_handler(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<SessionId>,
    ApiJson(request): ApiJson<SelectSplitRequest>,
) -> ApiResult<Json<ApiResponse>> {
    let split: Split = request.split.parse()?;
    let session = state.update_session(id, "select-split", |s| s.select_split(split))?;
    info!("Session {} selected split {}", id, split);
    Ok(Json(ApiResponse::new(format!("Selected {}", split.label()), id, session)))
}

/// Handle DELETE /api/sessions/:id/split - Return to split selection
pub async fn clear_split_handler(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<SessionId>,
) -> ApiResult<Json<ApiResponse>> {
    let session = state.update_session(id, "clear-split", |s| {
        s.clear_split();
    })?;
    info!("Session {} cleared its split", id);
    Ok(Json(ApiResponse::new("Split cleared", id, session)))
}

/// Handle PUT /api/sessions/:id/workouts/:workout_id/exercises/:exercise_id/weight
pub async fn set_weight_handler(
    State(state): State<Arc<AppState>>,
    ApiPath((id, workout_id, exercise_id)): ApiPath<(SessionId, WorkoutId, ExerciseId)>,
    ApiJson(request): ApiJson<SetWeightRequest>,
) -> ApiResult<Json<ApiResponse>> {
    // Rejected input never reaches the session, so the previous weight stays
    let weight = request.parse()?;
    let session = state.update_session(id, "set-weight", |s| {
        s.set_exercise_weight(workout_id, exercise_id, weight);
    })?;
    Ok(Json(ApiResponse::new("Weight updated", id, session)))
}

/// Handle POST /api/sessions/:id/workouts/:workout_id/track - Log a workout
pub async fn track_workout_handler(
    State(state): State<Arc<AppState>>,
    ApiPath((id, workout_id)): ApiPath<(SessionId, WorkoutId)>,
) -> ApiResult<Json<ApiResponse>> {
    let session = state.update_session(id, "track-workout", |s| {
        if let Some(entry) = s.track_workout(workout_id) {
            info!("Session {} tracked {} workout", id, entry.workout.day);
        }
    })?;
    Ok(Json(ApiResponse::new("Workout tracked", id, session)))
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatusResponse>> {
    let sessions = state.session_count()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        sessions,
        max_sessions: state.max_sessions,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
