//! Shared fixture snapshot for unit tests

use crate::config::StoreConfig;
use crate::connection::GoStore;
use crate::schema;
use rusqlite::Connection;
use tempfile::TempDir;

/// Build a small on-disk snapshot and open a store over it
///
/// Row insertion order below is the store iteration order the tests assert
/// against.
pub fn sample_snapshot(dir: &TempDir) -> GoStore {
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
            ('GO:0008150', 'biological_process', 'BP', 'A biological process.'),
            ('GO:0009435', 'NAD biosynthetic process', 'BP',
             'The chemical reactions and pathways resulting in the formation of NAD.'),
            ('GO:0006164', 'purine nucleotide biosynthetic process', 'BP',
             'The chemical reactions and pathways resulting in the formation of a purine nucleotide.'),
            ('GO:0019359', 'nicotinamide nucleotide biosynthetic process', 'BP',
             'The chemical reactions and pathways resulting in the formation of a nicotinamide nucleotide.'),
            ('GO:0019674', 'NAD metabolic process', 'BP',
             'The chemical reactions and pathways involving NAD.'),
            ('GO:0005634', 'nucleus', 'CC',
             'A membrane-bounded organelle of eukaryotic cells.'),
            ('GO:0003674', 'molecular_function', 'MF', NULL);

        INSERT INTO go_bp_parents (go_id, parent_id, relationship_type) VALUES
            ('GO:0009435', 'GO:0006164', 'is_a'),
            ('GO:0009435', 'GO:0019359', 'is_a'),
            ('GO:0009435', 'GO:0019674', 'is_a'),
            ('GO:0006164', 'GO:0008150', 'part_of');

        INSERT INTO go_bp_offspring (go_id, offspring_id) VALUES
            ('GO:0008150', 'GO:0006164'),
            ('GO:0008150', 'GO:0009435'),
            ('GO:0006164', 'GO:0009435');

        INSERT INTO go_synonym (go_id, synonym, secondary, scope, like_go_id) VALUES
            ('GO:0009435', 'NAD biosynthesis', NULL, 'EXACT', 0),
            ('GO:0009435', 'NAD anabolism', NULL, 'RELATED', 0),
            ('GO:0005634', 'cell nucleus', NULL, 'EXACT', 0);

        INSERT INTO go_obsolete (go_id, term, ontology, definition) VALUES
            ('GO:0000005', 'ribosomal chaperone activity', 'MF',
             'OBSOLETE. Assisting in the correct assembly of ribosomes.');

        INSERT INTO map_counts (map_name, count) VALUES
            ('go_term', 7),
            ('go_synonym', 3);

        INSERT INTO metadata (name, value) VALUES
            ('DBSCHEMA', 'GO_DB'),
            ('SOURCENAME', 'Gene Ontology');
        "#,
    )
    .unwrap();
    drop(conn);

    GoStore::open(StoreConfig::new(&db_path)).unwrap()
}
