use polars::prelude::*;

use crate::bench::{Engine, Timings, measure, read_table, warm_up};
use crate::datasets::plasticc::{
    self, PlasticcFiles, test_set_metadata_schema, test_set_schema, training_set_metadata_schema,
    training_set_schema,
};
use crate::errors::BenchError;

struct Tables {
    training_set: DataFrame,
    test_set: DataFrame,
    training_set_metadata: DataFrame,
    test_set_metadata: DataFrame,
}

fn read(files: &PlasticcFiles) -> Result<Tables, BenchError> {
    Ok(Tables {
        training_set: read_table(&files.training_set, &training_set_schema())?,
        test_set: read_table(&files.test_set, &test_set_schema())?,
        training_set_metadata: read_table(
            &files.training_set_metadata,
            &training_set_metadata_schema(),
        )?,
        test_set_metadata: read_table(&files.test_set_metadata, &test_set_metadata_schema())?,
    })
}

/// Flux statistics per object in the training set.
fn q1(tables: &Tables, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        tables
            .training_set
            .clone()
            .lazy()
            .group_by([col("object_id")])
            .agg([
                col("flux").mean().alias("flux_mean"),
                col("flux").min().alias("flux_min"),
                col("flux").max().alias("flux_max"),
            ]),
    )
}

/// Flux and error aggregates per object in the test set.
fn q2(tables: &Tables, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        tables
            .test_set
            .clone()
            .lazy()
            .group_by([col("object_id")])
            .agg([
                col("flux").mean().alias("flux_mean"),
                col("flux_err").max().alias("flux_err_max"),
            ]),
    )
}

/// Observation count per passband across both light-curve tables.
fn q3(tables: &Tables, engine: Engine) -> Result<DataFrame, BenchError> {
    let both = concat(
        [
            tables.training_set.clone().lazy(),
            tables.test_set.clone().lazy(),
        ],
        UnionArgs::default(),
    )?;
    engine.collect(
        both.group_by([col("passband")])
            .agg([len().alias("count"), col("detected").mean().alias("detected_rate")]),
    )
}

/// Object count and mean photometric redshift per (ddf, target) class in
/// the training metadata, largest classes first.
fn q4(tables: &Tables, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        tables
            .training_set_metadata
            .clone()
            .lazy()
            .group_by([col("ddf"), col("target")])
            .agg([
                len().alias("count"),
                col("hostgal_photoz").mean().alias("photoz_mean"),
            ])
            .sort(["count"], SortMultipleOptions::default().with_order_descending(true)),
    )
}

/// Runs the PLAsTiCC query sequence against the four related tables and
/// returns per-bucket timings.
pub fn run(files: &PlasticcFiles, engine: Engine) -> Result<Timings, BenchError> {
    warm_up(engine)?;

    let mut timings = Timings::default();
    let (tables, seconds) = measure(|| read(files))?;
    timings.record("Reading", seconds);
    log::info!(
        "plasticc: read {} train / {} test observations, {} / {} metadata rows",
        tables.training_set.height(),
        tables.test_set.height(),
        tables.training_set_metadata.height(),
        tables.test_set_metadata.height()
    );

    let (_, seconds) = measure(|| q1(&tables, engine))?;
    timings.record("Q1", seconds);
    let (_, seconds) = measure(|| q2(&tables, engine))?;
    timings.record("Q2", seconds);
    let (_, seconds) = measure(|| q3(&tables, engine))?;
    timings.record("Q3", seconds);
    let (_, seconds) = measure(|| q4(&tables, engine))?;
    timings.record("Q4", seconds);
    Ok(timings)
}

/// Default file set rooted in `dir`.
pub fn default_files(dir: &std::path::Path) -> PlasticcFiles {
    PlasticcFiles::with_prefix(&dir.join(plasticc::DEFAULT_PREFIX))
}
