use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How validation results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// One JSON object per run.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration loaded from `~/.config/filtersum/config.toml`.
///
/// Only the tool around the checksum protocol is configurable; the protocol
/// itself has no knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersumConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Log to the XDG state dir; false logs to stderr.
    pub log_to_file: bool,
    /// Default output format for `validate`.
    pub format: OutputFormat,
}

impl Default for FiltersumConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            log_to_file: true,
            format: OutputFormat::Text,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filtersum")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration. An explicit path must exist; a missing default file
/// means built-in defaults. Nothing is written to disk.
pub fn load(explicit: Option<&Path>) -> Result<FiltersumConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    let path = config_path()?;
    if !path.exists() {
        return Ok(FiltersumConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<FiltersumConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FiltersumConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
