//! Timing harness and per-benchmark query sequences.
//!
//! All queries delegate to polars. `DFBENCH_ENGINE` selects the
//! execution engine; `POLARS_MAX_THREADS` bounds the dataframe core
//! count.

pub mod census;
pub mod plasticc;
pub mod taxi;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use polars::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::BenchError;
use crate::schema::FieldKind;

/// Execution engine applied to each query's lazy plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    InMemory,
    Streaming,
}

impl Engine {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "in-memory" | "in_memory" | "default" => Some(Engine::InMemory),
            "streaming" => Some(Engine::Streaming),
            _ => None,
        }
    }

    /// Resolves the engine from an optional config value, falling back to
    /// the `DFBENCH_ENGINE` environment variable and then the default.
    pub fn resolve(configured: Option<&str>) -> Result<Self, BenchError> {
        let name = match configured {
            Some(s) => Some(s.to_string()),
            None => std::env::var("DFBENCH_ENGINE").ok(),
        };
        match name {
            Some(s) => Self::parse(&s)
                .ok_or_else(|| BenchError::Config(format!("unknown execution engine: {s}"))),
            None => Ok(Self::default()),
        }
    }

    pub(crate) fn collect(self, lf: LazyFrame) -> Result<DataFrame, BenchError> {
        let df = match self {
            Engine::InMemory => lf.collect()?,
            Engine::Streaming => lf.with_streaming(true).collect()?,
        };
        Ok(df)
    }
}

/// Ordered mapping from a timing bucket name ("Reading", "Q1"...) to
/// elapsed wall-clock seconds. Serializes as a JSON object preserving
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timings {
    entries: Vec<(String, f64)>,
}

impl Timings {
    pub fn record(&mut self, name: impl Into<String>, seconds: f64) {
        self.entries.push((name.into(), seconds));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Timings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Wall-clocks a fallible step and returns its output with the elapsed
/// seconds.
pub fn measure<T>(f: impl FnOnce() -> Result<T, BenchError>) -> Result<(T, f64), BenchError> {
    let start = Instant::now();
    let out = f()?;
    Ok((out, start.elapsed().as_secs_f64()))
}

/// Executes a trivial query before timing starts so engine
/// initialization is not billed to the "Reading" bucket.
pub fn warm_up(engine: Engine) -> Result<(), BenchError> {
    let frame = df!("a" => &[1i64, 2, 3])?;
    engine.collect(frame.lazy().select([(col("a") + lit(1i64)).alias("a")]))?;
    Ok(())
}

/// Reads a benchmark CSV with dtypes pinned from the dataset's field
/// table. Datetime columns are left to the reader's date parser.
pub(crate) fn read_table(
    path: &Path,
    fields: &crate::schema::Schema,
) -> Result<DataFrame, BenchError> {
    let mut overrides = Schema::with_capacity(fields.len());
    for field in fields.fields() {
        let dtype = match field.kind {
            FieldKind::Int { .. } => DataType::Int64,
            FieldKind::Float { .. } => DataType::Float64,
            FieldKind::Categorical { .. } => DataType::String,
            FieldKind::Datetime { .. } => continue,
        };
        overrides.with_column(PlSmallStr::from_static(field.name), dtype);
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(overrides)))
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_preserve_insertion_order() {
        let mut t = Timings::default();
        t.record("Reading", 0.5);
        t.record("Q1", 0.1);
        t.record("Q2", 0.2);
        assert_eq!(t.names(), vec!["Reading", "Q1", "Q2"]);
        assert_eq!(t.get("Q2"), Some(0.2));
    }

    #[test]
    fn timings_serialize_in_order() {
        let mut t = Timings::default();
        t.record("Reading", 1.0);
        t.record("Q1", 2.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "{\"Reading\":1.0,\"Q1\":2.0}");
    }

    #[test]
    fn engine_parse_accepts_known_names() {
        assert_eq!(Engine::parse("streaming"), Some(Engine::Streaming));
        assert_eq!(Engine::parse("In-Memory"), Some(Engine::InMemory));
        assert_eq!(Engine::parse("spark"), None);
    }
}
