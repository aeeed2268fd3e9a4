//! Passthrough reads over the remaining snapshot tables
//!
//! These tables are exposed unchanged: full scans in store order, no
//! filtering or projection.

use crate::connection::GoStore;
use crate::error::StoreResult;
use crate::query::row_to_term;
use godb_core::TermRecord;
use tracing::debug;

impl GoStore {
    /// All obsolete terms, in store order
    pub fn obsolete_terms(&self) -> StoreResult<Vec<TermRecord>> {
        debug!("Reading obsolete terms");

        self.with_session(|conn| {
            let mut stmt =
                conn.prepare("SELECT go_id, term, ontology, definition FROM go_obsolete")?;
            let rows = stmt.query_map([], row_to_term)?;
            Ok(rows.collect::<Result<Vec<_>, _>>()?)
        })
    }

    /// Per-map row counts recorded by the snapshot builder
    pub fn map_counts(&self) -> StoreResult<Vec<(String, i64)>> {
        self.with_session(|conn| {
            let mut stmt = conn.prepare("SELECT map_name, count FROM map_counts")?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            Ok(rows.collect::<Result<Vec<_>, _>>()?)
        })
    }

    /// Snapshot metadata as (name, value) pairs
    pub fn metadata(&self) -> StoreResult<Vec<(String, String)>> {
        self.with_session(|conn| {
            let mut stmt = conn.prepare("SELECT name, value FROM metadata")?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            Ok(rows.collect::<Result<Vec<_>, _>>()?)
        })
    }
}
