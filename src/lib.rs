//! Workout Tracker - An HTTP server holding per-page workout sessions
//!
//! A page picks a workout split, gets a copy of that split's plan, records
//! weights per exercise and tracks finished workouts into a history that
//! later weight edits never touch.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod utils;
pub mod weight;

// Re-export commonly used types
pub use api::create_router;
pub use catalog::{Catalog, Exercise, Split, Workout};
pub use config::Config;
pub use error::WorkoutError;
pub use state::{AppState, WorkoutSession};
pub use utils::signals::shutdown_signal;
pub use weight::Weight;
