use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::output::Format;

pub const CONFIG_FILE_NAME: &str = ".spotenvrc.json";

pub const DEFAULT_IGNORE: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/.turbo/**",
    "**/.vercel/**",
    "**/out/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Project directory to scan.
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Destination path for the generated file.
    #[serde(default = "default_out")]
    pub out: String,
    #[serde(default)]
    pub merge: bool,
    #[serde(default)]
    pub watch: bool,
    /// Also emit a TypeScript declaration of the discovered keys.
    #[serde(default)]
    pub types: bool,
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub format: Option<Format>,
}

fn default_dir() -> String {
    ".".to_string()
}

fn default_out() -> String {
    ".env.example".to_string()
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            out: default_out(),
            merge: false,
            watch: false,
            types: false,
            ignore: default_ignore(),
            format: None,
        }
    }
}

impl Config {
    /// Returns an error if any glob pattern in `ignore` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignore': \"{}\"", pattern))?;
        }
        Ok(())
    }
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

/// Load `.spotenvrc.json` by walking up from `start_dir`.
///
/// A malformed config file is not fatal: it is reported as a warning and
/// the defaults are used instead.
pub fn load_config(start_dir: &Path) -> ConfigLoadResult {
    let Some(path) = find_config_file(start_dir) else {
        return ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        };
    };

    match read_config(&path) {
        Ok(config) => ConfigLoadResult {
            config,
            from_file: true,
        },
        Err(e) => {
            eprintln!(
                "{} {:#}; falling back to defaults",
                "warning:".bold().yellow(),
                e
            );
            ConfigLoadResult {
                config: Config::default(),
                from_file: false,
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
