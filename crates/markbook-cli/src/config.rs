//! markbook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level markbook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkbookConfig {
    /// Roster file the CLI loads and saves between invocations.
    #[serde(default = "default_roster")]
    pub roster: PathBuf,
    /// Default report style: "full" or "minimal".
    #[serde(default = "default_report_style")]
    pub report_style: String,
}

fn default_roster() -> PathBuf {
    PathBuf::from("roster.csv")
}

fn default_report_style() -> String {
    "full".to_string()
}

impl Default for MarkbookConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            report_style: default_report_style(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `markbook.toml` in the current directory
/// 2. `~/.config/markbook/config.toml`
///
/// Missing files fall back to defaults; an explicitly given path must exist.
pub fn load_config_from(path: Option<&Path>) -> Result<MarkbookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("markbook.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MarkbookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MarkbookConfig::default(),
    };

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("markbook"))
}
