pub mod bench;
pub mod cli;
pub mod config;
pub mod datasets;
pub mod errors;
pub mod generate;
pub mod logger;
pub mod schema;

pub use errors::BenchError;
