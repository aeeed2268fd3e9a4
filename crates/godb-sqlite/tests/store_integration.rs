//! End-to-end tests over an on-disk snapshot

use godb_core::{GoError, Ontology};
use godb_sqlite::{schema, GoStore, StoreConfig, StoreError};
use rusqlite::Connection;
use tempfile::TempDir;

fn build_snapshot(dir: &TempDir) -> std::path::PathBuf {
    let db_path = dir.path().join("go.sqlite3");
    let conn = Connection::open(&db_path).unwrap();
    schema::apply_snapshot_ddl(&conn).unwrap();

    conn.execute_batch(
        r#"
        INSERT INTO go_ontology VALUES
            ('BP', 'biological process'),
            ('CC', 'cellular component'),
            ('MF', 'molecular function');

        INSERT INTO go_term (go_id, term, ontology, definition) VALUES
            ('GO:0009435', 'NAD biosynthetic process', 'BP',
             'The chemical reactions and pathways resulting in the formation of NAD.'),
            ('GO:0006164', 'purine nucleotide biosynthetic process', 'BP', 'def'),
            ('GO:0019359', 'nicotinamide nucleotide biosynthetic process', 'BP', 'def'),
            ('GO:0019674', 'NAD metabolic process', 'BP', 'def'),
            ('GO:0005634', 'nucleus', 'CC', 'def');

        INSERT INTO go_bp_parents (go_id, parent_id, relationship_type) VALUES
            ('GO:0009435', 'GO:0006164', 'is_a'),
            ('GO:0009435', 'GO:0019359', 'is_a'),
            ('GO:0009435', 'GO:0019674', 'is_a');

        INSERT INTO go_synonym (go_id, synonym, secondary, scope, like_go_id) VALUES
            ('GO:0009435', 'NAD biosynthesis', NULL, 'EXACT', 0);
        "#,
    )
    .unwrap();

    db_path
}

#[test]
fn query_and_aggregate_against_snapshot() {
    let dir = TempDir::new().unwrap();
    let db_path = build_snapshot(&dir);
    let store = GoStore::open(StoreConfig::new(&db_path)).unwrap();

    // Flat filtered lookup with legacy projection
    let result = store
        .query("GO", Some(&["GO:0009435"]), "GOID", Some(&["GOID", "TERM"]))
        .unwrap();
    assert_eq!(result.columns, ["GOID", "TERM"]);
    assert_eq!(result.rows, vec![vec![
        "GO:0009435".to_string(),
        "NAD biosynthetic process".to_string(),
    ]]);

    // Aggregation round-trip: lookup count equals edge-table row count
    let parents = store.aggregate_parents(Ontology::Bp).unwrap();
    let edges = parents.lookup("GO:0009435").unwrap();
    let row_count: i64 = Connection::open(&db_path)
        .unwrap()
        .query_row(
            "SELECT COUNT(*) FROM go_bp_parents WHERE go_id = 'GO:0009435'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(edges.len() as i64, row_count);

    // Synonym aggregation shares the same semantics with scope as label
    let synonyms = store.aggregate_synonyms().unwrap();
    let syn_edges = synonyms.lookup("GO:0009435").unwrap();
    assert_eq!(syn_edges[0].label, "EXACT");
    assert_eq!(syn_edges[0].value, "NAD biosynthesis");
}

#[test]
fn repeated_calls_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let db_path = build_snapshot(&dir);
    let store = GoStore::open(StoreConfig::new(&db_path)).unwrap();

    let a = store.query("GO", None, "goid", None).unwrap();
    let b = store.query("GO", None, "goid", None).unwrap();
    assert_eq!(a, b);

    let p1 = store.aggregate_parents(Ontology::Bp).unwrap();
    let p2 = store.aggregate_parents(Ontology::Bp).unwrap();
    assert_eq!(p1, p2);
}

#[test]
fn error_taxonomy_is_exercised() {
    let dir = TempDir::new().unwrap();
    let db_path = build_snapshot(&dir);
    let store = GoStore::open(StoreConfig::new(&db_path)).unwrap();

    assert!(matches!(
        store.query("NOT-GO", None, "goid", None),
        Err(GoError::Configuration(_))
    ));
    assert!(matches!(
        store.query("GO", None, "bogus", None),
        Err(GoError::InvalidArgument(_))
    ));
    assert!(matches!(
        store.query("GO", None, "goid", Some(&["NOPE"])),
        Err(GoError::InvalidArgument(_))
    ));
}

#[test]
fn missing_table_is_store_error_and_store_stays_usable() {
    let dir = TempDir::new().unwrap();
    let db_path = build_snapshot(&dir);

    // Drop a table the aggregator needs, after open-time validation
    let store = GoStore::open(StoreConfig::new(&db_path)).unwrap();
    Connection::open(&db_path)
        .unwrap()
        .execute_batch("DROP TABLE go_synonym;")
        .unwrap();

    assert!(matches!(
        store.aggregate_synonyms(),
        Err(StoreError::Sqlite(_))
    ));

    // The failed operation held no session open; other reads still succeed
    let parents = store.aggregate_parents(Ontology::Bp).unwrap();
    assert_eq!(parents.lookup("GO:0009435").unwrap().len(), 3);
}

#[test]
fn independent_stores_read_concurrently_without_coordination() {
    let dir = TempDir::new().unwrap();
    let db_path = build_snapshot(&dir);

    let first = GoStore::open(StoreConfig::new(&db_path)).unwrap();
    let second = GoStore::open(StoreConfig::new(&db_path)).unwrap();

    let a = first.aggregate_parents(Ontology::Bp).unwrap();
    let b = second.aggregate_parents(Ontology::Bp).unwrap();
    assert_eq!(a, b);
}
