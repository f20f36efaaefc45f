//! Main application state management

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    catalog::Catalog,
    error::{Result, WorkoutError},
};
use super::{SessionSnapshot, WorkoutSession};

pub type SessionId = u64;

/// Main application state: the catalog and every open workout session
#[derive(Debug)]
pub struct AppState {
    /// Shared, read-only split → plan mapping
    pub catalog: Arc<Catalog>,
    /// Open sessions keyed by id; ids only grow, so the first key is the oldest
    sessions: Mutex<Sessions>,
    pub max_sessions: usize,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

#[derive(Debug)]
struct Sessions {
    next_id: SessionId,
    open: BTreeMap<SessionId, WorkoutSession>,
}

impl AppState {
    pub fn new(catalog: Catalog, max_sessions: usize, port: u16, host: String) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Mutex::new(Sessions {
                next_id: 1,
                open: BTreeMap::new(),
            }),
            max_sessions: max_sessions.max(1),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, Sessions>> {
        self.sessions
            .lock()
            .map_err(|e| WorkoutError::StatePoisoned(e.to_string()))
    }

    /// Open a new session, evicting the oldest ones if the registry is full
    pub fn create_session(&self) -> Result<(SessionId, SessionSnapshot)> {
        let mut sessions = self.lock_sessions()?;

        while sessions.open.len() >= self.max_sessions {
            if let Some((evicted, _)) = sessions.open.pop_first() {
                info!("Session limit reached, evicting session {}", evicted);
            }
        }

        let id = sessions.next_id;
        sessions.next_id += 1;
        let session = WorkoutSession::new(Arc::clone(&self.catalog));
        let snapshot = session.snapshot();
        sessions.open.insert(id, session);
        drop(sessions);

        self.record_action("create-session");
        info!("Created session {}", id);
        Ok((id, snapshot))
    }

    pub fn remove_session(&self, id: SessionId) -> Result<()> {
        let mut sessions = self.lock_sessions()?;
        sessions
            .open
            .remove(&id)
            .ok_or(WorkoutError::SessionNotFound(id))?;
        drop(sessions);

        self.record_action("remove-session");
        info!("Removed session {}", id);
        Ok(())
    }

    pub fn session_snapshot(&self, id: SessionId) -> Result<SessionSnapshot> {
        let sessions = self.lock_sessions()?;
        sessions
            .open
            .get(&id)
            .map(WorkoutSession::snapshot)
            .ok_or(WorkoutError::SessionNotFound(id))
    }

    pub fn session_count(&self) -> Result<usize> {
        Ok(self.lock_sessions()?.open.len())
    }

    /// Apply one mutation to a session and return its new snapshot
    pub fn update_session<F>(&self, id: SessionId, action: &str, updater: F) -> Result<SessionSnapshot>
    where
        F: FnOnce(&mut WorkoutSession),
    {
        let mut sessions = self.lock_sessions()?;
        let session = sessions
            .open
            .get_mut(&id)
            .ok_or(WorkoutError::SessionNotFound(id))?;

        let revision = session.revision();
        updater(&mut *session);
        let snapshot = session.snapshot();
        drop(sessions); // Release the lock early

        if snapshot.revision == revision {
            debug!("Session {}: {} changed nothing", id, action);
        }
        self.record_action(action);

        Ok(snapshot)
    }

    fn record_action(&self, action: &str) {
        match self.last_action.lock() {
            Ok(mut last_action) => *last_action = Some((action.to_string(), Utc::now())),
            Err(e) => warn!("Failed to record last action {}: {}", action, e),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = match self.last_action.lock() {
            Ok(last_action) => last_action.clone(),
            Err(e) => {
                warn!("Failed to lock last action: {}", e);
                None
            }
        };
        match last_action {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
