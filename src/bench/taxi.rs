use std::path::Path;

use polars::prelude::*;

use crate::bench::{Engine, Timings, measure, read_table, warm_up};
use crate::datasets::taxi;
use crate::errors::BenchError;

fn read(path: &Path) -> Result<DataFrame, BenchError> {
    read_table(path, &taxi::schema())
}

/// Trip count per cab type.
fn q1(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .group_by([col("cab_type")])
            .agg([len().alias("count")]),
    )
}

/// Mean total fare per passenger count.
fn q2(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .group_by([col("passenger_count")])
            .agg([col("total_amount").mean()]),
    )
}

/// Trip count per (passenger count, pickup year).
fn q3(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .with_column(col("pickup_datetime").dt().year().alias("pickup_year"))
            .group_by([col("passenger_count"), col("pickup_year")])
            .agg([len().alias("count")]),
    )
}

/// Trip count per (passenger count, pickup year, integral distance),
/// ordered by year ascending and count descending.
fn q4(df: &DataFrame, engine: Engine) -> Result<DataFrame, BenchError> {
    engine.collect(
        df.clone()
            .lazy()
            .with_columns([
                col("pickup_datetime").dt().year().alias("pickup_year"),
                col("trip_distance").cast(DataType::Int64),
            ])
            .group_by([col("passenger_count"), col("pickup_year"), col("trip_distance")])
            .agg([len().alias("count")])
            .sort(
                ["pickup_year", "count"],
                SortMultipleOptions::default().with_order_descending_multi([false, true]),
            ),
    )
}

/// Runs the taxi query sequence against `path` and returns per-bucket
/// timings.
pub fn run(path: &Path, engine: Engine) -> Result<Timings, BenchError> {
    warm_up(engine)?;

    let mut timings = Timings::default();
    let (df, seconds) = measure(|| read(path))?;
    timings.record("Reading", seconds);
    log::info!("taxi: read {} rows", df.height());

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
