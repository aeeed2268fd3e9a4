//! Term query support: key types and legacy column projection
//!
//! The projection honors the legacy column-naming contract: callers may ask
//! for columns by their historical labels (GOID, TERM, ONTOLOGY, DEFINITION)
//! and receive a record set renamed and reduced to exactly those columns, in
//! the requested order. Unknown labels fail closed with
//! [`GoError::InvalidArgument`] instead of faulting on a raw lookup.

use crate::error::{GoError, GoResult};
use crate::term::TermRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which term-table column a key set filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// Filter on the human-readable term name
    Term,
    /// Filter on the GO identifier
    GoId,
}

impl KeyType {
    /// Native column name this key type filters on
    pub fn column(&self) -> &'static str {
        match self {
            KeyType::Term => "term",
            KeyType::GoId => "go_id",
        }
    }
}

impl FromStr for KeyType {
    type Err = GoError;

    /// Case-insensitive: "term", "TERM" and "Term" all normalize to the
    /// same key type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "term" => Ok(KeyType::Term),
            "goid" => Ok(KeyType::GoId),
            other => Err(GoError::InvalidArgument(format!(
                "keytype must be one of \"term\", \"goid\"; got \"{}\"",
                other
            ))),
        }
    }
}

/// Ordered record set with explicit column names
///
/// Row order matches store iteration order; each row has one value per
/// column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Native column names of the term table, in store order
pub const NATIVE_COLUMNS: [&str; 4] = ["go_id", "term", "ontology", "definition"];

/// Static table mapping legacy column label to native field accessor
const LEGACY_COLUMNS: [(&str, fn(&TermRecord) -> String); 4] = [
    ("GOID", |r| r.go_id.clone()),
    ("TERM", |r| r.term.clone()),
    ("ONTOLOGY", |r| r.ontology.as_str().to_string()),
    ("DEFINITION", |r| r.definition.clone().unwrap_or_default()),
];

fn legacy_accessor(label: &str) -> Option<fn(&TermRecord) -> String> {
    LEGACY_COLUMNS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, accessor)| *accessor)
}

/// Project term records into a [`QueryResult`]
///
/// With `columns` absent, native column names are returned unmodified. With
/// `columns` present, the named legacy columns are built by copying from the
/// corresponding native field and returned in the caller-specified order.
pub fn project(records: &[TermRecord], columns: Option<&[&str]>) -> GoResult<QueryResult> {
    match columns {
        None => Ok(QueryResult {
            columns: NATIVE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records
                .iter()
                .map(|r| {
                    vec![
                        r.go_id.clone(),
                        r.term.clone(),
                        r.ontology.as_str().to_string(),
                        r.definition.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        }),
        Some(requested) => {
            let mut accessors = Vec::with_capacity(requested.len());
            for label in requested {
                let accessor = legacy_accessor(label).ok_or_else(|| {
                    GoError::InvalidArgument(format!(
                        "unrecognized column \"{}\"; expected one of GOID, TERM, ONTOLOGY, DEFINITION",
                        label
                    ))
                })?;
                accessors.push(accessor);
            }

            Ok(QueryResult {
                columns: requested.iter().map(|c| c.to_string()).collect(),
                rows: records
                    .iter()
                    .map(|r| accessors.iter().map(|accessor| accessor(r)).collect())
                    .collect(),
            })
        }
    }
}
