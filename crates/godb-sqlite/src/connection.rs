//! Read-only session management for the snapshot
//!
//! The snapshot is static, so there is nothing to pool or lock: each
//! operation opens its own read-only session and drops it before returning.
//! Concurrent callers each get independent sessions without coordination.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::schema;
use rusqlite::{Connection, OpenFlags};
use std::time::Duration;
use tracing::{debug, info};

/// Handle to a GO snapshot file
///
/// Holds only the configuration; sessions are scoped to individual
/// operations via [`GoStore::with_session`].
#[derive(Debug, Clone)]
pub struct GoStore {
    config: StoreConfig,
}

impl GoStore {
    /// Open a snapshot, verifying it exists and carries the expected tables
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(path = ?config.path, "Opening GO snapshot");

        let store = Self { config };
        store.with_session(schema::validate)?;

        debug!("Snapshot schema validated");
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Run a closure against a fresh read-only session
    ///
    /// The session is released on every exit path; `f` cannot leak it.
    pub fn with_session<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let conn = Connection::open_with_flags(
            &self.config.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            StoreError::Open(format!(
                "failed to open snapshot {}: {}",
                self.config.path.display(),
                e
            ))
        })?;

        conn.busy_timeout(Duration::from_millis(self.config.busy_timeout_ms))?;

        f(&conn)
    }
}
