//! Field tables and defaults for the built-in benchmark datasets.

pub mod census;
pub mod plasticc;
pub mod taxi;
