use std::path::Path;

use dfbench::datasets::plasticc::{PlasticcFiles, PlasticcRecords};
use dfbench::datasets::{census, plasticc, taxi};
use dfbench::schema::FieldKind;

#[test]
fn test_taxi_schema_shape() {
    let schema = taxi::schema();
    assert_eq!(schema.len(), 37);
    assert_eq!(taxi::DEFAULT_RECORDS, 20_000_000);

    let cab_type = schema.field("cab_type").unwrap();
    match cab_type.kind {
        FieldKind::Categorical { values } => assert_eq!(values, ["green", "yellow"]),
        other => panic!("unexpected kind for cab_type: {other:?}"),
    }
    assert!(matches!(
        schema.field("pickup_datetime").unwrap().kind,
        FieldKind::Datetime { .. }
    ));
    assert!(matches!(
        schema.field("passenger_count").unwrap().kind,
        FieldKind::Int { low: 0, high: 255 }
    ));
}

#[test]
fn test_census_schema_shape() {
    let schema = census::schema();
    assert_eq!(schema.len(), 45);
    assert!(matches!(schema.field("SEX").unwrap().kind, FieldKind::Int { low: 1, high: 2 }));
    assert!(matches!(
        schema.field("INCTOT").unwrap().kind,
        FieldKind::Int { low: -20000, high: 9_999_999 }
    ));
}

#[test]
fn test_plasticc_schema_shapes() {
    assert_eq!(plasticc::training_set_schema().len(), 6);
    assert_eq!(plasticc::test_set_schema().len(), 6);
    assert_eq!(plasticc::training_set_metadata_schema().len(), 12);
    // The test split metadata carries no target column.
    assert_eq!(plasticc::test_set_metadata_schema().len(), 11);
    assert!(plasticc::test_set_metadata_schema().field("target").is_none());
}

#[test]
fn test_plasticc_default_records() {
    let records = PlasticcRecords::default();
    assert_eq!(records.training_set, 1_421_705);
    assert_eq!(records.test_set, 4_536_531);
    assert_eq!(records.training_set_metadata, 7_848);
    assert_eq!(records.test_set_metadata, 3_492_890);
}

#[test]
fn test_plasticc_files_expand_from_prefix() {
    let files = PlasticcFiles::with_prefix(Path::new("data/plasticc"));
    assert_eq!(files.training_set, Path::new("data/plasticc_training_set.csv"));
    assert_eq!(files.test_set, Path::new("data/plasticc_test_set.csv"));
    assert_eq!(
        files.training_set_metadata,
        Path::new("data/plasticc_training_set_metadata.csv")
    );
    assert_eq!(files.test_set_metadata, Path::new("data/plasticc_test_set_metadata.csv"));
}
