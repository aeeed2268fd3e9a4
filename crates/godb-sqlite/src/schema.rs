//! Snapshot schema: validation and reference DDL
//!
//! The snapshot format is a fixed, versioned artifact produced by the
//! upstream builder; this crate never migrates or writes it. [`validate`]
//! checks that a freshly opened snapshot carries every table the read
//! operations depend on. [`SNAPSHOT_DDL`] reproduces the upstream schema and
//! is used by test fixtures to build small snapshots.

use crate::error::{StoreError, StoreResult};
use rusqlite::Connection;
use std::collections::HashSet;
use tracing::debug;

/// Tables the read operations depend on
pub const REQUIRED_TABLES: [&str; 11] = [
    "go_term",
    "go_obsolete",
    "go_synonym",
    "go_bp_parents",
    "go_mf_parents",
    "go_cc_parents",
    "go_bp_offspring",
    "go_mf_offspring",
    "go_cc_offspring",
    "map_counts",
    "metadata",
];

/// Check that every required table is present in the snapshot
pub fn validate(conn: &Connection) -> StoreResult<()> {
    debug!("Validating snapshot schema");

    let tables: HashSet<String> = {
        let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<_, _>>()?
    };

    for required in REQUIRED_TABLES {
        if !tables.contains(required) {
            return Err(StoreError::Schema(format!(
                "snapshot is missing required table \"{}\"",
                required
            )));
        }
    }

    Ok(())
}

/// Upstream snapshot DDL, reproduced for reference and fixture building
///
/// go_id is the natural primary/foreign key throughout; there is no
/// surrogate integer id.
pub const SNAPSHOT_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS metadata (
    name  TEXT PRIMARY KEY,
    value TEXT
);

CREATE TABLE IF NOT EXISTS go_ontology (
    ontology  TEXT PRIMARY KEY,
    term_type TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS go_term (
    go_id      CHAR(10) PRIMARY KEY,
    term       TEXT NOT NULL,
    ontology   TEXT NOT NULL REFERENCES go_ontology(ontology),
    definition TEXT
);
CREATE INDEX IF NOT EXISTS idx_go_term_ontology ON go_term(ontology);

CREATE TABLE IF NOT EXISTS go_obsolete (
    go_id      CHAR(10) PRIMARY KEY,
    term       TEXT NOT NULL,
    ontology   TEXT NOT NULL REFERENCES go_ontology(ontology),
    definition TEXT
);
CREATE INDEX IF NOT EXISTS idx_go_obsolete_ontology ON go_obsolete(ontology);

CREATE TABLE IF NOT EXISTS go_synonym (
    go_id      CHAR(10) NOT NULL REFERENCES go_term(go_id),
    synonym    TEXT NOT NULL,
    secondary  CHAR(10),
    scope      TEXT,
    like_go_id SMALLINT NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_go_synonym_go_id ON go_synonym(go_id);
CREATE INDEX IF NOT EXISTS idx_go_synonym_syn   ON go_synonym(synonym);

CREATE TABLE IF NOT EXISTS go_bp_parents (
    go_id             CHAR(10) NOT NULL REFERENCES go_term(go_id),
    parent_id         CHAR(10) NOT NULL REFERENCES go_term(go_id),
    relationship_type TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_bp_parents_child  ON go_bp_parents(go_id);
CREATE INDEX IF NOT EXISTS idx_bp_parents_parent ON go_bp_parents(parent_id);

CREATE TABLE IF NOT EXISTS go_bp_offspring (
    go_id        CHAR(10) NOT NULL REFERENCES go_term(go_id),
    offspring_id CHAR(10) NOT NULL REFERENCES go_term(go_id)
);
CREATE INDEX IF NOT EXISTS idx_bp_offspring_anc  ON go_bp_offspring(go_id);
CREATE INDEX IF NOT EXISTS idx_bp_offspring_desc ON go_bp_offspring(offspring_id);

CREATE TABLE IF NOT EXISTS go_mf_parents (
    go_id             CHAR(10) NOT NULL REFERENCES go_term(go_id),
    parent_id         CHAR(10) NOT NULL REFERENCES go_term(go_id),
    relationship_type TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_mf_parents_child  ON go_mf_parents(go_id);
CREATE INDEX IF NOT EXISTS idx_mf_parents_parent ON go_mf_parents(parent_id);

CREATE TABLE IF NOT EXISTS go_mf_offspring (
    go_id        CHAR(10) NOT NULL REFERENCES go_term(go_id),
    offspring_id CHAR(10) NOT NULL REFERENCES go_term(go_id)
);
CREATE INDEX IF NOT EXISTS idx_mf_offspring_anc  ON go_mf_offspring(go_id);
CREATE INDEX IF NOT EXISTS idx_mf_offspring_desc ON go_mf_offspring(offspring_id);

CREATE TABLE IF NOT EXISTS go_cc_parents (
    go_id             CHAR(10) NOT NULL REFERENCES go_term(go_id),
    parent_id         CHAR(10) NOT NULL REFERENCES go_term(go_id),
    relationship_type TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_cc_parents_child  ON go_cc_parents(go_id);
CREATE INDEX IF NOT EXISTS idx_cc_parents_parent ON go_cc_parents(parent_id);

CREATE TABLE IF NOT EXISTS go_cc_offspring (
    go_id        CHAR(10) NOT NULL REFERENCES go_term(go_id),
    offspring_id CHAR(10) NOT NULL REFERENCES go_term(go_id)
);
CREATE INDEX IF NOT EXISTS idx_cc_offspring_anc  ON go_cc_offspring(go_id);
CREATE INDEX IF NOT EXISTS idx_cc_offspring_desc ON go_cc_offspring(offspring_id);

CREATE TABLE IF NOT EXISTS map_metadata (
    map_name    TEXT NOT NULL,
    source_name TEXT NOT NULL,
    source_url  TEXT NOT NULL,
    source_date TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS map_counts (
    map_name TEXT PRIMARY KEY,
    count    INTEGER NOT NULL
);
"#;

/// Apply the snapshot DDL to an empty database
///
/// Fixture-building helper; the store itself never writes.
pub fn apply_snapshot_ddl(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SNAPSHOT_DDL)
        .map_err(|e| StoreError::Schema(format!("failed to apply snapshot DDL: {}", e)))?;
    Ok(())
}
