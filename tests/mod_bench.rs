use dfbench::bench::{self, Engine};
use dfbench::datasets::plasticc::{PlasticcFiles, PlasticcRecords};
use dfbench::datasets::{census, plasticc, taxi};
use dfbench::generate::{GenerateOptions, generate_to_path};
use tempfile::tempdir;

fn opts() -> GenerateOptions {
    GenerateOptions { parallel: true, seed: 42, threads: None }
}

#[test]
fn test_taxi_benchmark_produces_ordered_buckets() {
    let dir = tempdir().unwrap();
    let datafile = dir.path().join(taxi::DEFAULT_DATAFILE);
    generate_to_path(&taxi::schema(), 300, &datafile, &opts()).unwrap();

    let timings = bench::taxi::run(&datafile, Engine::InMemory).unwrap();
    assert_eq!(timings.names(), vec!["Reading", "Q1", "Q2", "Q3", "Q4"]);
    assert!(timings.iter().all(|(_, seconds)| seconds >= 0.0));
}

#[test]
fn test_census_benchmark_produces_ordered_buckets() {
    let dir = tempdir().unwrap();
    let datafile = dir.path().join(census::DEFAULT_DATAFILE);
    generate_to_path(&census::schema(), 250, &datafile, &opts()).unwrap();

    let timings = bench::census::run(&datafile, Engine::InMemory).unwrap();
    assert_eq!(timings.names(), vec!["Reading", "Q1", "Q2", "Q3", "Q4"]);
}

#[test]
fn test_plasticc_benchmark_reads_all_four_tables() {
    let dir = tempdir().unwrap();
    let files = PlasticcFiles::with_prefix(&dir.path().join(plasticc::DEFAULT_PREFIX));
    let records = PlasticcRecords {
        training_set: 120,
        test_set: 150,
        training_set_metadata: 40,
        test_set_metadata: 30,
    };
    generate_to_path(
        &plasticc::training_set_schema(),
        records.training_set,
        &files.training_set,
        &opts(),
    )
    .unwrap();
    generate_to_path(&plasticc::test_set_schema(), records.test_set, &files.test_set, &opts())
        .unwrap();
    generate_to_path(
        &plasticc::training_set_metadata_schema(),
        records.training_set_metadata,
        &files.training_set_metadata,
        &opts(),
    )
    .unwrap();
    generate_to_path(
        &plasticc::test_set_metadata_schema(),
        records.test_set_metadata,
        &files.test_set_metadata,
        &opts(),
    )
    .unwrap();

    let timings = bench::plasticc::run(&files, Engine::InMemory).unwrap();
    assert_eq!(timings.names(), vec!["Reading", "Q1", "Q2", "Q3", "Q4"]);
}

#[test]
fn test_streaming_engine_runs_taxi_queries() {
    let dir = tempdir().unwrap();
    let datafile = dir.path().join(taxi::DEFAULT_DATAFILE);
    generate_to_path(&taxi::schema(), 200, &datafile, &opts()).unwrap();

    let timings = bench::taxi::run(&datafile, Engine::Streaming).unwrap();
    assert_eq!(timings.len(), 5);
}

#[test]
fn test_missing_data_file_propagates_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(bench::taxi::run(&missing, Engine::InMemory).is_err());
}
