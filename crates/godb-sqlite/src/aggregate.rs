//! Relation aggregation: edge tables reshaped into per-term indices
//!
//! Each aggregation reads one flat edge table in store order and groups it
//! by source identifier. The three parent-edge tables and the synonym table
//! share the same grouping semantics; only the source table and the meaning
//! of the label differ.

use crate::connection::GoStore;
use crate::error::StoreResult;
use godb_core::{ClosureIndex, EdgeRecord, Ontology, RelationIndex};
use tracing::debug;

fn parents_table(ontology: Ontology) -> &'static str {
    match ontology {
        Ontology::Bp => "go_bp_parents",
        Ontology::Cc => "go_cc_parents",
        Ontology::Mf => "go_mf_parents",
    }
}

fn offspring_table(ontology: Ontology) -> &'static str {
    match ontology {
        Ontology::Bp => "go_bp_offspring",
        Ontology::Cc => "go_cc_offspring",
        Ontology::Mf => "go_mf_offspring",
    }
}

impl GoStore {
    /// Materialize the parent edges of one ontology as a [`RelationIndex`]
    ///
    /// Labels are relationship types ("is_a", "part_of", ...), values are
    /// parent identifiers.
    pub fn aggregate_parents(&self, ontology: Ontology) -> StoreResult<RelationIndex> {
        let table = parents_table(ontology);
        debug!(table, "Aggregating parent edges");

        self.with_session(|conn| {
            let sql = format!("SELECT go_id, relationship_type, parent_id FROM {}", table);
            let mut stmt = conn.prepare(&sql)?;
            let edges = stmt
                .query_map([], |row| {
                    Ok(EdgeRecord {
                        go_id: row.get(0)?,
                        label: row.get(1)?,
                        value: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(RelationIndex::from_edges(edges))
        })
    }

    /// Materialize the synonym table as a [`RelationIndex`]
    ///
    /// Labels are synonym scopes ("EXACT", "RELATED", ...), values are the
    /// synonym text.
    pub fn aggregate_synonyms(&self) -> StoreResult<RelationIndex> {
        debug!("Aggregating synonyms");

        self.with_session(|conn| {
            let mut stmt = conn.prepare("SELECT go_id, scope, synonym FROM go_synonym")?;
            let edges = stmt
                .query_map([], |row| {
                    Ok(EdgeRecord {
                        go_id: row.get(0)?,
                        label: row.get(1)?,
                        value: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(RelationIndex::from_edges(edges))
        })
    }

    /// Materialize the precomputed offspring closure of one ontology
    ///
    /// The closure is built upstream; this is retrieval only, no traversal.
    pub fn aggregate_offspring(&self, ontology: Ontology) -> StoreResult<ClosureIndex> {
        let table = offspring_table(ontology);
        debug!(table, "Aggregating offspring closure");

        self.with_session(|conn| {
            let sql = format!("SELECT go_id, offspring_id FROM {}", table);
            let mut stmt = conn.prepare(&sql)?;
            let pairs = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ClosureIndex::from_pairs(pairs))
        })
    }
}
