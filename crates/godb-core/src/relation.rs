//! Per-identifier indices built from flat edge tables
//!
//! An edge table is grouped by source identifier into an ordered multimap.
//! The index is rebuilt on every aggregation call and lives for the caller's
//! query; nothing is persisted.

use crate::term::EdgeRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (label, value) pair under a GO identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub label: String,
    pub value: String,
}

/// Ordered multimap from GO identifier to its (label, value) edges
///
/// Grouping preserves the source row order within each identifier, keeps
/// every row (no deduplication), and never separates a label from its value.
/// Identifiers with zero edges are absent: `lookup` returns `None` for them
/// rather than an empty slice, so callers cannot tell an unknown identifier
/// from a known one with no edges of this kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationIndex {
    entries: HashMap<String, Vec<Relation>>,
}

impl RelationIndex {
    /// Group edge records by `go_id`, preserving per-identifier row order
    pub fn from_edges(edges: impl IntoIterator<Item = EdgeRecord>) -> Self {
        let mut entries: HashMap<String, Vec<Relation>> = HashMap::new();
        for edge in edges {
            entries.entry(edge.go_id).or_default().push(Relation {
                label: edge.label,
                value: edge.value,
            });
        }
        Self { entries }
    }

    /// Point lookup by GO identifier
    ///
    /// `None` is the not-found outcome; a returned slice is never empty.
    pub fn lookup(&self, go_id: &str) -> Option<&[Relation]> {
        self.entries.get(go_id).map(Vec::as_slice)
    }

    /// Number of distinct identifiers in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (identifier, edges) entries in unspecified key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Relation])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Mapping from GO identifier to related identifiers, without labels
///
/// Used for the precomputed offspring closure tables, which carry only
/// (ancestor, descendant) pairs. Same absence semantics as
/// [`RelationIndex`]: zero-edge identifiers are not materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureIndex {
    entries: HashMap<String, Vec<String>>,
}

impl ClosureIndex {
    /// Group (go_id, related_id) pairs, preserving per-identifier row order
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (go_id, related) in pairs {
            entries.entry(go_id).or_default().push(related);
        }
        Self { entries }
    }

    /// Point lookup by GO identifier; `None` when the identifier has no rows
    pub fn lookup(&self, go_id: &str) -> Option<&[String]> {
        self.entries.get(go_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
