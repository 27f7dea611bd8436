use std::path::Path;

use crate::bench::{self, Timings};
use crate::datasets::plasticc::PlasticcFiles;
use crate::datasets::{census, plasticc, taxi};
use crate::errors::BenchError;
use crate::generate::{GenerateOptions, generate_to_path};

use super::command::{BenchMode, Command};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
}

fn require(value: Option<usize>, flag: &str, mode: BenchMode) -> Result<usize, BenchError> {
    value.ok_or_else(|| {
        BenchError::Config(format!("parameter \"{flag}\" is required for the {mode} benchmark"))
    })
}

fn generate_plasticc(
    files: &PlasticcFiles,
    records: plasticc::PlasticcRecords,
    opts: &GenerateOptions,
) -> Result<(), BenchError> {
    generate_to_path(
        &plasticc::training_set_schema(),
        records.training_set,
        &files.training_set,
        opts,
    )?;
    generate_to_path(&plasticc::test_set_schema(), records.test_set, &files.test_set, opts)?;
    generate_to_path(
        &plasticc::training_set_metadata_schema(),
        records.training_set_metadata,
        &files.training_set_metadata,
        opts,
    )?;
    generate_to_path(
        &plasticc::test_set_metadata_schema(),
        records.test_set_metadata,
        &files.test_set_metadata,
        opts,
    )?;
    Ok(())
}

fn emit_generated(mode: OutputMode, bench_mode: BenchMode, outputs: &[&Path], records: &[usize]) {
    match mode {
        OutputMode::Json => {
            let files: Vec<String> = outputs.iter().map(|p| p.display().to_string()).collect();
            let json = serde_json::json!({
                "action": "generated",
                "mode": bench_mode.to_string(),
                "outputs": files,
                "records": records,
            });
            println!("{json}");
        }
        OutputMode::Human => {
            for (path, n) in outputs.iter().zip(records) {
                println!("generated {} ({} records)", path.display(), n);
            }
        }
    }
}

fn print_results(mode: OutputMode, results: &[(String, Timings)]) -> Result<(), BenchError> {
    match mode {
        OutputMode::Human => {
            for (name, timings) in results {
                println!("{name}:");
                for (bucket, seconds) in timings.iter() {
                    println!("{bucket}: {seconds}");
                }
            }
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&results_json(results)?)?);
        }
    }
    Ok(())
}

fn results_json(results: &[(String, Timings)]) -> Result<serde_json::Value, BenchError> {
    if let [(_, only)] = results {
        return Ok(serde_json::to_value(only)?);
    }
    let mut root = serde_json::Map::new();
    for (name, timings) in results {
        root.insert(name.clone(), serde_json::to_value(timings)?);
    }
    Ok(serde_json::Value::Object(root))
}

pub fn run_with_format(cmd: Command, mode: OutputMode) -> Result<(), BenchError> {
    match cmd {
        Command::Generate {
            mode: bench_mode,
            records,
            training_set_records,
            test_set_records,
            training_set_metadata_records,
            test_set_metadata_records,
            output,
            parallel,
            seed,
        } => {
            let opts = GenerateOptions { parallel, seed, ..GenerateOptions::from_env() };
            match bench_mode {
                BenchMode::Taxi | BenchMode::Census => {
                    let records = require(records, "--records", bench_mode)?;
                    log::info!("generating {bench_mode} dataset");
                    let schema = match bench_mode {
                        BenchMode::Taxi => taxi::schema(),
                        _ => census::schema(),
                    };
                    generate_to_path(&schema, records, &output, &opts)?;
                    emit_generated(mode, bench_mode, &[output.as_path()], &[records]);
                }
                BenchMode::Plasticc => {
                    let records = plasticc::PlasticcRecords {
                        training_set: require(
                            training_set_records,
                            "--training-set-records",
                            bench_mode,
                        )?,
                        test_set: require(test_set_records, "--test-set-records", bench_mode)?,
                        training_set_metadata: require(
                            training_set_metadata_records,
                            "--training-set-metadata-records",
                            bench_mode,
                        )?,
                        test_set_metadata: require(
                            test_set_metadata_records,
                            "--test-set-metadata-records",
                            bench_mode,
                        )?,
                    };
                    log::info!("generating plasticc datasets");
                    let files = PlasticcFiles::with_prefix(&output);
                    generate_plasticc(&files, records, &opts)?;
                    emit_generated(
                        mode,
                        bench_mode,
                        &[
                            files.training_set.as_path(),
                            files.test_set.as_path(),
                            files.training_set_metadata.as_path(),
                            files.test_set_metadata.as_path(),
                        ],
                        &[
                            records.training_set,
                            records.test_set,
                            records.training_set_metadata,
                            records.test_set_metadata,
                        ],
                    );
                }
            }
            Ok(())
        }
        Command::Run {
            mode: run_mode,
            taxi_records,
            census_records,
            plasticc_records,
            reuse,
            data_dir,
            seed,
            engine,
            report_file,
        } => {
            let opts = GenerateOptions { seed, ..GenerateOptions::from_env() };
            let mut results: Vec<(String, Timings)> = Vec::new();
            for bench_mode in run_mode.selected() {
                let timings = match bench_mode {
                    BenchMode::Taxi => {
                        let datafile = data_dir.join(taxi::DEFAULT_DATAFILE);
                        if !reuse {
                            log::info!("generating taxi data file {}", datafile.display());
                            generate_to_path(&taxi::schema(), taxi_records, &datafile, &opts)?;
                        }
                        log::info!("running taxi benchmark");
                        bench::taxi::run(&datafile, engine)?
                    }
                    BenchMode::Census => {
                        let datafile = data_dir.join(census::DEFAULT_DATAFILE);
                        if !reuse {
                            log::info!("generating census data file {}", datafile.display());
                            generate_to_path(&census::schema(), census_records, &datafile, &opts)?;
                        }
                        log::info!("running census benchmark");
                        bench::census::run(&datafile, engine)?
                    }
                    BenchMode::Plasticc => {
                        let files = bench::plasticc::default_files(&data_dir);
                        if !reuse {
                            log::info!(
                                "generating plasticc data files with prefix {}",
                                data_dir.join(plasticc::DEFAULT_PREFIX).display()
                            );
                            generate_plasticc(&files, plasticc_records, &opts)?;
                        }
                        log::info!("running plasticc benchmark");
                        bench::plasticc::run(&files, engine)?
                    }
                };
                results.push((bench_mode.to_string(), timings));
            }

            if let Some(path) = &report_file {
                let json = serde_json::to_string_pretty(&results_json(&results)?)?;
                std::fs::write(path, json)?;
                log::info!("wrote report to {}", path.display());
            } else {
                print_results(mode, &results)?;
            }
            Ok(())
        }
    }
}
