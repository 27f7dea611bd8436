use std::fmt;
use std::path::PathBuf;

use crate::bench::Engine;
use crate::datasets::plasticc::PlasticcRecords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    Taxi,
    Census,
    Plasticc,
}

impl fmt::Display for BenchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchMode::Taxi => write!(f, "taxi"),
            BenchMode::Census => write!(f, "census"),
            BenchMode::Plasticc => write!(f, "plasticc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    One(BenchMode),
    All,
}

impl RunMode {
    pub fn selected(self) -> Vec<BenchMode> {
        match self {
            RunMode::One(m) => vec![m],
            RunMode::All => vec![BenchMode::Taxi, BenchMode::Census, BenchMode::Plasticc],
        }
    }
}

pub enum Command {
    /// Generate a synthetic dataset for one benchmark.
    Generate {
        mode: BenchMode,
        /// Required for taxi and census.
        records: Option<usize>,
        /// Required for plasticc, one per table.
        training_set_records: Option<usize>,
        test_set_records: Option<usize>,
        training_set_metadata_records: Option<usize>,
        test_set_metadata_records: Option<usize>,
        /// Output file name, or file prefix for plasticc.
        output: PathBuf,
        parallel: bool,
        seed: u64,
    },
    /// Generate (unless reusing) and time the selected benchmarks.
    Run {
        mode: RunMode,
        taxi_records: usize,
        census_records: usize,
        plasticc_records: PlasticcRecords,
        /// Skip generation and reuse data files from a previous run.
        reuse: bool,
        data_dir: PathBuf,
        seed: u64,
        engine: Engine,
        /// Write the JSON report here instead of stdout.
        report_file: Option<PathBuf>,
    },
}
