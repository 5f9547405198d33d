use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".stringscanrc.json";

/// Environment variable that overrides the log directory.
pub const LOG_DIR_ENV: &str = "STRINGSCAN_LOG_DIR";

/// Settings for the audit log. The scan vocabulary itself is fixed and not
/// configurable here.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Rotated files kept next to the active log.
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
    /// Size in megabytes at which the active log is rotated.
    #[serde(default = "default_max_log_size_mb")]
    pub max_log_size_mb: usize,
    /// Rotated files older than this are deleted when the log is opened.
    #[serde(default = "default_max_log_age_days")]
    pub max_log_age_days: u64,
}

fn default_log_dir() -> String {
    "stringscan_logs".to_string()
}

fn default_max_log_files() -> usize {
    10
}

fn default_max_log_size_mb() -> usize {
    10
}

fn default_max_log_age_days() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            max_log_files: default_max_log_files(),
            max_log_size_mb: default_max_log_size_mb(),
            max_log_age_days: default_max_log_age_days(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_log_files == 0 {
            bail!("Invalid value for 'maxLogFiles': must be at least 1");
        }
        if self.max_log_size_mb == 0 {
            bail!("Invalid value for 'maxLogSizeMb': must be at least 1");
        }
        if self.max_log_age_days == 0 {
            bail!("Invalid value for 'maxLogAgeDays': must be at least 1");
        }
        if self.log_dir.trim().is_empty() {
            bail!("Invalid value for 'logDir': must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
