/// Top-level seed used when none is supplied on the command line or in
/// the config file.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Fan column synthesis out over a rayon worker pool.
    pub parallel: bool,
    /// Top-level seed; split into one sub-seed per column.
    pub seed: u64,
    /// Worker pool size; `None` uses the rayon default.
    pub threads: Option<usize>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { parallel: true, seed: DEFAULT_SEED, threads: None }
    }
}

impl GenerateOptions {
    /// Default options with the worker pool size taken from
    /// `DFBENCH_GEN_THREADS`, if set.
    pub fn from_env() -> Self {
        let threads = std::env::var("DFBENCH_GEN_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok());
        Self { threads, ..Self::default() }
    }
}
