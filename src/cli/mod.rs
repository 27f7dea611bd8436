mod command;
mod runner;

pub use command::{BenchMode, Command, RunMode};
pub use runner::{OutputMode, run_with_format};
