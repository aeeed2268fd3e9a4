//! Core domain types for Gene Ontology snapshot access
//!
//! This crate defines the records read from a GO relational snapshot and the
//! pure transformations applied to them: legacy column projection for term
//! queries, and grouping of flat edge tables into per-identifier indices.
//! It has no database dependency; the `godb-sqlite` crate provides the
//! SQLite-backed reads on top of these types.

pub mod error;
pub mod query;
pub mod relation;
pub mod term;

// Re-exports
pub use error::{GoError, GoResult};
pub use query::{project, KeyType, QueryResult};
pub use relation::{ClosureIndex, Relation, RelationIndex};
pub use term::{EdgeRecord, Ontology, OntologyParseError, TermRecord};
