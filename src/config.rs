use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Harness settings merged from config files and environment variables.
/// Precedence: CLI flags > env > config files > defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Directory benchmark data files are generated into and read from.
    pub data_dir: Option<PathBuf>,
    /// Top-level random seed for dataset generation.
    pub seed: Option<u64>,
    /// Execution engine name: "in-memory" or "streaming".
    pub engine: Option<String>,
    /// Optional log4rs YAML config path.
    pub log_config: Option<PathBuf>,
}

/// Parses a config file, returning `None` when it is missing or invalid.
pub fn from_file(path: &Path) -> Option<AppConfig> {
    let text = std::fs::read_to_string(path).ok()?;
    toml::from_str::<AppConfig>(&text).ok()
}

/// Loads config from the first sources that provide each setting:
/// an explicit `--config` path, `DFBENCH_CONFIG`, `~/.config/dfbench.toml`,
/// then `./dfbench.toml`; env vars fill any remaining gaps.
pub fn load(cli_cfg: Option<PathBuf>) -> AppConfig {
    let mut cfg = AppConfig::default();

    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = &cli_cfg {
        paths.push(p.clone());
    }
    if let Ok(p) = std::env::var("DFBENCH_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Ok(home) = std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME")) {
        paths.push(PathBuf::from(home).join(".config").join("dfbench.toml"));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join("dfbench.toml"));
    }
    for p in paths {
        if let Some(file_cfg) = from_file(&p) {
            if cfg.data_dir.is_none() {
                cfg.data_dir = file_cfg.data_dir;
            }
            if cfg.seed.is_none() {
                cfg.seed = file_cfg.seed;
            }
            if cfg.engine.is_none() {
                cfg.engine = file_cfg.engine;
            }
            if cfg.log_config.is_none() {
                cfg.log_config = file_cfg.log_config;
            }
        }
    }

    if cfg.data_dir.is_none()
        && let Ok(s) = std::env::var("DFBENCH_DATA_DIR")
    {
        cfg.data_dir = Some(PathBuf::from(s));
    }
    if cfg.seed.is_none()
        && let Ok(s) = std::env::var("DFBENCH_SEED")
    {
        cfg.seed = s.parse::<u64>().ok();
    }
    if cfg.engine.is_none()
        && let Ok(s) = std::env::var("DFBENCH_ENGINE")
    {
        cfg.engine = Some(s);
    }
    if cfg.log_config.is_none()
        && let Ok(s) = std::env::var("DFBENCH_LOG_CONFIG")
    {
        cfg.log_config = Some(PathBuf::from(s));
    }
    cfg
}
