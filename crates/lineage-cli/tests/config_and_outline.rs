//! Config loading and outline rendering over real tables.

use std::path::PathBuf;

use lineage_cli::config::{DEFAULT_CONFIG_FILE, load_config};
use lineage_cli::outline::render_outline;
use lineage_ingest::{TableFormat, read_table};
use lineage_tree::build_family_tree;

#[test]
fn config_file_drives_table_reading() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("people.txt");
    std::fs::write(&table_path, "Alice1\tBob2\nBob2\tCara3\n").unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        format!(
            "[convert]\ninput = {:?}\nformat = \"tsv\"\n",
            table_path.display().to_string()
        ),
    )
    .unwrap();

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config.convert.format, Some(TableFormat::Tsv));
    assert_eq!(config.convert.output, PathBuf::from("family.json"));

    let table = read_table(&config.convert.input, &config.convert.read_options()).unwrap();
    let build = build_family_tree(&table);
    assert_eq!(render_outline(&build.tree, None), "Alice\n└── Bob\n    └── Cara\n");
}

#[test]
fn outline_of_messy_table() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("family.csv");
    std::fs::write(
        &table_path,
        "Root,\"Child1; Child2\",nan\nnan,Ghost\n,Nobody\nChild1,Grandchild1|Grandchild2\n",
    )
    .unwrap();
    let table = read_table(&table_path, &Default::default()).unwrap();
    let build = build_family_tree(&table);

    assert_eq!(build.report.rows_skipped.len(), 2);
    let expected = "\
Root
├── Child1
│   ├── Grandchild1
│   └── Grandchild2
└── Child2
";
    assert_eq!(render_outline(&build.tree, None), expected);
    assert_eq!(
        render_outline(&build.tree, Some(1)),
        "Root\n├── Child1\n│   └── … (2 more)\n└── Child2\n"
    );
}
