use std::path::Path;

use polars::prelude::*;

use crate::bench::{Engine, Timings, measure, read_table, warm_up};
use crate::datasets::census;
use crate::errors::BenchError;

fn read(path: &Path) -> Result<DataFrame, BenchError> {
    read_table(path, &census::schema())
}

/// Mean total income per sex.
fn q1(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .group_by([col("SEX")])
            .agg([col("INCTOT").mean()]),
    )
}

/// Income statistics per census year.
fn q2(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .group_by([col("YEAR0")])
            .agg([col("INCTOT").mean().alias("mean_income"), col("INCTOT").max().alias("max_income")]),
    )
}

/// Person count per (sex, education level).
fn q3(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .group_by([col("SEX"), col("EDUC")])
            .agg([len().alias("count")]),
    )
}

/// Mean income per education level, highest-earning levels first.
fn q4(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .group_by([col("EDUC")])
            .agg([col("INCTOT").mean().alias("mean_income"), len().alias("count")])
            .sort(
                ["mean_income"],
                SortMultipleOptions::default().with_order_descending(true),
            ),
    )
}

/// Runs the census query sequence against `path` and returns per-bucket
/// timings.
pub fn run(path: &Path, engine: Engine) -> Result<Timings, BenchError> {
    warm_up(engine)?;

    let mut timings = Timings::default();
    let (df, seconds) = measure(|| read(path))?;
    timings.record("Reading", seconds);
    log::info!("census: read {} rows", df.height());

    let (_, seconds) = measure(|| q1(&df, engine))?;
    timings.record("Q1", seconds);
    let (_, seconds) = measure(|| q2(&df, engine))?;
    timings.record("Q2", seconds);
    let (_, seconds) = measure(|| q3(&df, engine))?;
    timings.record("Q3", seconds);
    let (_, seconds) = measure(|| q4(&df, engine))?;
    timings.record("Q4", seconds);
    Ok(timings)
}
