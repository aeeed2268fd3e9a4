//! Term and edge records sourced from the snapshot

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Top-level GO namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ontology {
    /// Biological Process
    Bp,
    /// Cellular Component
    Cc,
    /// Molecular Function
    Mf,
}

impl Ontology {
    /// Short label as stored in the snapshot's `ontology` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Ontology::Bp => "BP",
            Ontology::Cc => "CC",
            Ontology::Mf => "MF",
        }
    }
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an ontology label is not one of BP/CC/MF
#[derive(Error, Debug)]
#[error("unrecognized ontology label: {0}")]
pub struct OntologyParseError(pub String);

impl FromStr for Ontology {
    type Err = OntologyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BP" => Ok(Ontology::Bp),
            "CC" => Ok(Ontology::Cc),
            "MF" => Ok(Ontology::Mf),
            other => Err(OntologyParseError(other.to_string())),
        }
    }
}

/// One row of the term table, sourced verbatim from the store
///
/// Identity is `go_id`; `term` is human-readable and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Stable identifier, format "GO:" + 7 digits
    pub go_id: String,
    pub term: String,
    pub ontology: Ontology,
    /// NULL in the store for a handful of terms
    pub definition: Option<String>,
}

/// One row of an edge table (parent edge or synonym edge)
///
/// `label` is the relationship type for parent edges ("is_a", "part_of", ...)
/// or the synonym scope ("EXACT", "RELATED", ...). Rows sharing a `go_id`
/// keep their store retrieval order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub go_id: String,
    pub label: String,
    pub value: String,
}
