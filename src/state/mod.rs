//! State management module
//!
//! `session` holds the workout session model itself; `app_state` keeps one
//! session per open page and is what the HTTP handlers talk to.

pub mod app_state;
pub mod session;

// Re-export main types
pub use app_state::{AppState, SessionId};
pub use session::{SessionPhase, SessionSnapshot, TrackedWorkout, WorkoutSession};
