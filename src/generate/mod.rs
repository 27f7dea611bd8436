mod column;
mod options;
mod writer;

pub use column::ColumnData;
pub use options::{GenerateOptions, DEFAULT_SEED};

use std::path::Path;

use rayon::prelude::*;

use crate::errors::BenchError;
use crate::schema::Schema;
use column::{column_seed, generate_column};

/// A fully materialized synthetic table: one fixed-length column per field.
#[derive(Debug)]
pub struct Dataset {
    schema: Schema,
    columns: Vec<ColumnData>,
    records: usize,
}

impl Dataset {
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.schema
            .fields()
            .iter()
            .position(|f| f.name == name)
            .map(|i| &self.columns[i])
    }

    /// Writes the dataset as a single CSV file with a header row,
    /// overwriting any existing file at `path`.
    pub fn write_csv(&self, path: &Path) -> Result<(), BenchError> {
        writer::write_csv(&self.schema, &self.columns, self.records, path)
    }
}

/// Synthesizes one column per schema field, sequentially or fanned out
/// over a rayon worker pool. Each column draws from its own RNG stream,
/// seeded deterministically from the top-level seed and the column index,
/// so the output is identical regardless of execution order or worker
/// count.
pub fn generate_dataset(
    schema: &Schema,
    records: usize,
    opts: &GenerateOptions,
) -> Result<Dataset, BenchError> {
    let seed = opts.seed;
    let synth = || -> Vec<ColumnData> {
        schema
            .fields()
            .par_iter()
            .enumerate()
            .map(|(i, f)| generate_column(column_seed(seed, i), records, &f.kind))
            .collect()
    };

    let columns = if opts.parallel {
        match opts.threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| BenchError::Pool(e.to_string()))?
                .install(synth),
            None => synth(),
        }
    } else {
        schema
            .fields()
            .iter()
            .enumerate()
            .map(|(i, f)| generate_column(column_seed(seed, i), records, &f.kind))
            .collect()
    };

    Ok(Dataset { schema: schema.clone(), columns, records })
}

/// Generates a dataset and writes it to `path` in one step.
pub fn generate_to_path(
    schema: &Schema,
    records: usize,
    path: &Path,
    opts: &GenerateOptions,
) -> Result<(), BenchError> {
    log::info!(
        "generating {} records x {} columns (parallel={})",
        records,
        schema.len(),
        opts.parallel
    );
    let dataset = generate_dataset(schema, records, opts)?;
    log::info!("writing output to {}", path.display());
    dataset.write_csv(path)
}
