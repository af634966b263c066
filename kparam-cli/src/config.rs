//! Configuration file for the kparam tool.
//!
//! ```toml
//! log_level = "debug"
//! format = "json"
//! defaults = ["test=1", "strtest=\"from config\""]
//! ```
//!
//! `defaults` are parsed before the command line arguments, so anything
//! given on the command line overrides them.

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Verbosity of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Normal,
    Quiet,
}

impl LogLevel {
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "kparam=debug,kparam_core=debug",
            LogLevel::Normal => "kparam=warn,kparam_core=warn",
            LogLevel::Quiet => "kparam=error,kparam_core=error",
        }
    }
}

/// How the demo prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub format: OutputFormat,
    pub defaults: Vec<String>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {}", e))
    }

    /// Demo arguments: the file's `defaults` followed by `params`.
    pub fn argv(&self, params: Vec<String>) -> Vec<String> {
        let mut argv = self.defaults.clone();
        argv.extend(params);
        argv
    }

    /// Command line flags win over the file.
    pub fn log_level(&self, debug: bool, quiet: bool) -> LogLevel {
        if debug {
            LogLevel::Debug
        } else if quiet {
            LogLevel::Quiet
        } else {
            self.log_level
        }
    }
}
