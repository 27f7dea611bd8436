use std::path::Path;

use crate::errors::BenchError;
use crate::generate::ColumnData;
use crate::schema::Schema;

const PROGRESS_EVERY: usize = 1_000_000;

/// Writes columns as a single CSV file: header row first, then one
/// record per row. An existing file at `path` is overwritten.
pub(crate) fn write_csv(
    schema: &Schema,
    columns: &[ColumnData],
    records: usize,
    path: &Path,
) -> Result<(), BenchError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(schema.fields().iter().map(|f| f.name))?;

    let mut row: Vec<String> = Vec::with_capacity(columns.len());
    for i in 0..records {
        row.clear();
        for col in columns {
            row.push(col.render(i));
        }
        wtr.write_record(&row)?;
        if (i + 1) % PROGRESS_EVERY == 0 {
            log::info!("wrote {}/{} records", i + 1, records);
        }
    }
    wtr.flush()?;
    Ok(())
}
