use chrono::NaiveDateTime;
use dfbench::generate::{ColumnData, GenerateOptions, generate_dataset, generate_to_path};
use dfbench::schema::{Field, Schema};
use tempfile::tempdir;

fn small_schema() -> Schema {
    Schema::new(vec![
        Field::int("id", 1, 1000),
        Field::float("value", -5.0, 5.0),
        Field::datetime("ts", "2001-01-01 00:04:13", "2053-03-21 16:47:33"),
        Field::categorical("kind", &["green", "yellow"]),
    ])
}

fn opts(parallel: bool, seed: u64) -> GenerateOptions {
    GenerateOptions { parallel, seed, threads: None }
}

#[test]
fn test_parallel_and_sequential_outputs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let seq_path = dir.path().join("seq.csv");
    let par_path = dir.path().join("par.csv");
    let schema = small_schema();

    generate_to_path(&schema, 500, &seq_path, &opts(false, 42)).unwrap();
    generate_to_path(&schema, 500, &par_path, &opts(true, 42)).unwrap();

    let seq = std::fs::read(&seq_path).unwrap();
    let par = std::fs::read(&par_path).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_worker_count_does_not_change_output() {
    let dir = tempdir().unwrap();
    let one_path = dir.path().join("one.csv");
    let many_path = dir.path().join("many.csv");
    let schema = small_schema();

    let one = GenerateOptions { parallel: true, seed: 7, threads: Some(1) };
    let many = GenerateOptions { parallel: true, seed: 7, threads: Some(4) };
    generate_to_path(&schema, 300, &one_path, &one).unwrap();
    generate_to_path(&schema, 300, &many_path, &many).unwrap();

    assert_eq!(std::fs::read(&one_path).unwrap(), std::fs::read(&many_path).unwrap());
}

#[test]
fn test_different_seeds_produce_different_output() {
    let schema = small_schema();
    let a = generate_dataset(&schema, 100, &opts(false, 1)).unwrap();
    let b = generate_dataset(&schema, 100, &opts(false, 2)).unwrap();
    assert_ne!(a.column("id"), b.column("id"));
}

#[test]
fn test_row_count_matches_requested_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.csv");
    let schema = small_schema();
    generate_to_path(&schema, 123, &path, &opts(true, 42)).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        rdr.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["id", "value", "ts", "kind"]
    );
    assert_eq!(rdr.records().count(), 123);
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let schema = small_schema();
    generate_to_path(&schema, 50, &path, &opts(true, 42)).unwrap();
    generate_to_path(&schema, 20, &path, &opts(true, 42)).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    assert_eq!(rdr.records().count(), 20);
}

#[test]
fn test_values_honor_declared_bounds() {
    let schema = small_schema();
    let dataset = generate_dataset(&schema, 400, &opts(true, 99)).unwrap();
    assert_eq!(dataset.records(), 400);

    match dataset.column("id").unwrap() {
        ColumnData::Int(v) => {
            assert_eq!(v.len(), 400);
            assert!(v.iter().all(|&x| (1..=1000).contains(&x)));
        }
        other => panic!("unexpected column data: {other:?}"),
    }
    match dataset.column("value").unwrap() {
        ColumnData::Float(v) => assert!(v.iter().all(|&x| (-5.0..5.0).contains(&x))),
        other => panic!("unexpected column data: {other:?}"),
    }
    let low = NaiveDateTime::parse_from_str("2001-01-01 00:04:13", "%Y-%m-%d %H:%M:%S").unwrap();
    let high = NaiveDateTime::parse_from_str("2053-03-21 16:47:33", "%Y-%m-%d %H:%M:%S").unwrap();
    match dataset.column("ts").unwrap() {
        ColumnData::Datetime(v) => assert!(v.iter().all(|&x| x >= low && x <= high)),
        other => panic!("unexpected column data: {other:?}"),
    }
    match dataset.column("kind").unwrap() {
        ColumnData::Str(v) => assert!(v.iter().all(|&x| x == "green" || x == "yellow")),
        other => panic!("unexpected column data: {other:?}"),
    }
}
