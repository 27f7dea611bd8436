use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dfbench::bench::Engine;
use dfbench::cli::{BenchMode, Command, OutputMode, RunMode, run_with_format};
use dfbench::datasets::plasticc::PlasticcRecords;
use dfbench::datasets::{census, taxi};
use dfbench::generate::DEFAULT_SEED;
use dfbench::{config, logger};

#[derive(Parser, Debug)]
#[command(name = "dfbench", version, about = "Dataframe groupby/aggregation benchmark harness", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). If omitted, defaults are used.")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit machine-readable JSON instead of human-readable lines")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    Taxi,
    Census,
    Plasticc,
}

impl From<ModeArg> for BenchMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Taxi => BenchMode::Taxi,
            ModeArg::Census => BenchMode::Census,
            ModeArg::Plasticc => BenchMode::Plasticc,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RunModeArg {
    Taxi,
    Census,
    Plasticc,
    All,
}

impl From<RunModeArg> for RunMode {
    fn from(m: RunModeArg) -> Self {
        match m {
            RunModeArg::Taxi => RunMode::One(BenchMode::Taxi),
            RunModeArg::Census => RunMode::One(BenchMode::Census),
            RunModeArg::Plasticc => RunMode::One(BenchMode::Plasticc),
            RunModeArg::All => RunMode::All,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Generate a synthetic dataset for a benchmark")]
    Generate {
        #[arg(short, long, value_enum, help = "Benchmark to generate a dataset for")]
        mode: ModeArg,
        #[arg(short, long, help = "Number of records to generate. Required for taxi and census.")]
        records: Option<usize>,
        #[arg(long, help = "Training set records. Required for plasticc.")]
        training_set_records: Option<usize>,
        #[arg(long, help = "Test set records. Required for plasticc.")]
        test_set_records: Option<usize>,
        #[arg(long, help = "Training set metadata records. Required for plasticc.")]
        training_set_metadata_records: Option<usize>,
        #[arg(long, help = "Test set metadata records. Required for plasticc.")]
        test_set_metadata_records: Option<usize>,
        #[arg(short, long, help = "File name to write the dataset, or file prefix for plasticc")]
        output: PathBuf,
        #[arg(long, help = "Disable parallel dataset generation")]
        no_parallel: bool,
        #[arg(long, help = "Top-level random seed. Takes precedence over config/env.")]
        seed: Option<u64>,
    },
    #[command(about = "Generate datasets (unless reused) and time the benchmark queries")]
    Run {
        #[arg(short, long, value_enum, help = "Benchmark to run")]
        mode: RunModeArg,
        #[arg(long, help = "Override default number of records for the taxi benchmark")]
        taxi_records: Option<usize>,
        #[arg(long, help = "Override default number of records for the census benchmark")]
        census_records: Option<usize>,
        #[arg(long, help = "Override default plasticc training set records")]
        training_set_records: Option<usize>,
        #[arg(long, help = "Override default plasticc test set records")]
        test_set_records: Option<usize>,
        #[arg(long, help = "Override default plasticc training set metadata records")]
        training_set_metadata_records: Option<usize>,
        #[arg(long, help = "Override default plasticc test set metadata records")]
        test_set_metadata_records: Option<usize>,
        #[arg(long, help = "Skip dataset generation and reuse files from a previous run")]
        reuse_dataset_files: bool,
        #[arg(long, help = "Directory for data files. Takes precedence over config/env.")]
        data_dir: Option<PathBuf>,
        #[arg(long, help = "Top-level random seed. Takes precedence over config/env.")]
        seed: Option<u64>,
        #[arg(short, long, help = "Write the JSON report to this file instead of stdout")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.clone());

    match &cfg.log_config {
        Some(path) => {
            let _ = logger::init_path(path);
        }
        None => {
            let _ = logger::init();
        }
    }

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let cmd = match build_command(cli, &cfg) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    if let Err(e) = run_with_format(cmd, output_mode) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn build_command(cli: Cli, cfg: &config::AppConfig) -> Result<Command, dfbench::BenchError> {
    let cfg_seed = cfg.seed.unwrap_or(DEFAULT_SEED);
    match cli.command {
        Commands::Generate {
            mode,
            records,
            training_set_records,
            test_set_records,
            training_set_metadata_records,
            test_set_metadata_records,
            output,
            no_parallel,
            seed,
        } => Ok(Command::Generate {
            mode: mode.into(),
            records,
            training_set_records,
            test_set_records,
            training_set_metadata_records,
            test_set_metadata_records,
            output,
            parallel: !no_parallel,
            seed: seed.unwrap_or(cfg_seed),
        }),
        Commands::Run {
            mode,
            taxi_records,
            census_records,
            training_set_records,
            test_set_records,
            training_set_metadata_records,
            test_set_metadata_records,
            reuse_dataset_files,
            data_dir,
            seed,
            output,
        } => {
            let defaults = PlasticcRecords::default();
            let engine = Engine::resolve(cfg.engine.as_deref())?;
            Ok(Command::Run {
                mode: mode.into(),
                taxi_records: taxi_records.unwrap_or(taxi::DEFAULT_RECORDS),
                census_records: census_records.unwrap_or(census::DEFAULT_RECORDS),
                plasticc_records: PlasticcRecords {
                    training_set: training_set_records.unwrap_or(defaults.training_set),
                    test_set: test_set_records.unwrap_or(defaults.test_set),
                    training_set_metadata: training_set_metadata_records
                        .unwrap_or(defaults.training_set_metadata),
                    test_set_metadata: test_set_metadata_records
                        .unwrap_or(defaults.test_set_metadata),
                },
                reuse: reuse_dataset_files,
                data_dir: data_dir
                    .or_else(|| cfg.data_dir.clone())
                    .unwrap_or_else(|| PathBuf::from(".")),
                seed: seed.unwrap_or(cfg_seed),
                engine,
                report_file: output,
            })
        }
    }
}
