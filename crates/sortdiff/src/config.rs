//! User configuration loaded from TOML

use crate::cli::Cli;
use anyhow::Context;
use serde::Deserialize;
use sortdiff_core::OutputSpec;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputSpec,
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config {}", path.display()))
            }
        };
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// `~/.config/sortdiff/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sortdiff").join("config.toml"))
    }

    /// Config file named on the command line, else the default location
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        match cli.config.clone().or_else(Self::default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Output settings with command-line flags taking precedence
    pub fn output_spec(&self, cli: &Cli) -> OutputSpec {
        let mut spec = self.output.clone();
        if let Some(dir) = &cli.output_dir {
            spec.dir = dir.clone();
        }
        if let Some(name) = &cli.first_name {
            spec.first_name = name.clone();
        }
        if let Some(name) = &cli.second_name {
            spec.second_name = name.clone();
        }
        spec
    }
}
