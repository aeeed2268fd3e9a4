//! Term queries against the snapshot

use crate::connection::GoStore;
use crate::error::StoreResult;
use godb_core::{project, GoError, GoResult, KeyType, Ontology, QueryResult, TermRecord};
use rusqlite::types::Type;
use rusqlite::Row;
use tracing::debug;

pub(crate) fn row_to_term(row: &Row<'_>) -> rusqlite::Result<TermRecord> {
    let ontology: String = row.get(2)?;
    let ontology = ontology.parse::<Ontology>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
    })?;

    Ok(TermRecord {
        go_id: row.get(0)?,
        term: row.get(1)?,
        ontology,
        definition: row.get(3)?,
    })
}

impl GoStore {
    /// Filter and project the term table
    ///
    /// `source_name` must match the configured source identifier. `keytype`
    /// is case-insensitive and selects whether `keys` filter on term name or
    /// GO identifier; with `keys` absent the full table is returned.
    /// `columns`, when given, is an ordered rename+select projection over the
    /// legacy labels GOID, TERM, ONTOLOGY, DEFINITION. A filter that matches
    /// nothing yields an empty result, not an error.
    pub fn query(
        &self,
        source_name: &str,
        keys: Option<&[&str]>,
        keytype: &str,
        columns: Option<&[&str]>,
    ) -> GoResult<QueryResult> {
        if source_name != self.config().source_name {
            return Err(GoError::Configuration(format!(
                "source \"{}\" does not match expected source \"{}\"",
                source_name,
                self.config().source_name
            )));
        }

        let keytype: KeyType = keytype.parse()?;
        let records = self.terms(keys, keytype)?;
        project(&records, columns)
    }

    /// Fetch term records, optionally filtered by key membership
    ///
    /// Row order matches store iteration order; no independent sort is
    /// applied.
    pub fn terms(&self, keys: Option<&[&str]>, keytype: KeyType) -> StoreResult<Vec<TermRecord>> {
        debug!(?keytype, key_count = keys.map(|k| k.len()), "Querying term table");

        self.with_session(|conn| {
            let records = match keys {
                None => {
                    let mut stmt = conn
                        .prepare("SELECT go_id, term, ontology, definition FROM go_term")?;
                    let rows = stmt.query_map([], row_to_term)?;
                    rows.collect::<Result<Vec<_>, _>>()?
                }
                // Membership in the empty set matches nothing
                Some([]) => Vec::new(),
                Some(keys) => {
                    let placeholders = vec!["?"; keys.len()].join(", ");
                    let sql = format!(
                        "SELECT go_id, term, ontology, definition FROM go_term WHERE {} IN ({})",
                        keytype.column(),
                        placeholders
                    );
                    let mut stmt = conn.prepare(&sql)?;
                    let rows = stmt.query_map(rusqlite::params_from_iter(keys), row_to_term)?;
                    rows.collect::<Result<Vec<_>, _>>()?
                }
            };
            Ok(records)
        })
    }
}
