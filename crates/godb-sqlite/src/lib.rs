//! Read-only SQLite backend for Gene Ontology snapshots
//!
//! This crate reads a versioned GO relational snapshot (the fixed schema
//! produced by the upstream snapshot builder) and exposes the query and
//! aggregation operations defined in `godb-core`:
//!
//! - **Term queries**: filter the term table by identifier or term name,
//!   optionally projecting to legacy column names
//! - **Relation aggregation**: materialize per-term parent edges, synonyms,
//!   and offspring closures as in-memory indices keyed by GO identifier
//! - **Snapshot passthrough**: obsolete terms, map counts, and metadata
//!
//! Every operation opens its own read-only session and releases it before
//! returning, on success and error paths alike.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use godb_core::Ontology;
//! use godb_sqlite::{GoStore, StoreConfig};
//!
//! let store = GoStore::open(StoreConfig::new("./go.sqlite3"))?;
//!
//! let result = store.query("GO", Some(&["GO:0009435"]), "goid", Some(&["GOID", "TERM"]))?;
//!
//! let parents = store.aggregate_parents(Ontology::Bp)?;
//! let edges = parents.lookup("GO:0009435");
//! ```

pub mod aggregate;
pub mod config;
pub mod connection;
pub mod error;
pub mod query;
pub mod schema;
pub mod snapshot;

// Re-exports
pub use config::StoreConfig;
pub use connection::GoStore;
pub use error::{StoreError, StoreResult};

#[cfg(test)]
pub(crate) mod test_fixtures;
