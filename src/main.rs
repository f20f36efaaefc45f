//! Workout Tracker - An HTTP server holding per-page workout sessions
//!
//! This is the main entry point for the workout-tracker application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use workout_tracker::{
    api::create_router,
    config::Config,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("workout_tracker={},tower_http=info", config.log_level()))
        .init();

    info!("Starting workout-tracker server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, max_sessions={}",
          config.host, config.port, config.max_sessions);

    let catalog = config.load_catalog()?;

    // Create application state
    let state = Arc::new(AppState::new(
        catalog,
        config.max_sessions,
        config.port,
        config.host.clone(),
    ));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /                         - Workout tracker page");
    info!("  GET    /api/splits               - Available splits");
    info!("  POST   /api/sessions             - Open a session");
    info!("  GET    /api/sessions/:id         - Session snapshot");
    info!("  POST   /api/sessions/:id/split   - Select a split");
    info!("  PUT    /api/sessions/:id/workouts/:w/exercises/:e/weight - Set a weight");
    info!("  POST   /api/sessions/:id/workouts/:w/track - Track a workout");
    info!("  GET    /status                   - Server status");
    info!("  GET    /health                   - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to listen for shutdown signals: {}", e),
            }
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
