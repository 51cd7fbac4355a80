//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::store::Canvas;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding the board's storage
    pub dir: Option<PathBuf>,

    /// Width of the canvas new notes are placed on
    pub canvas_width: Option<u32>,

    /// Height of the canvas new notes are placed on
    pub canvas_height: Option<u32>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/keep-writing/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keep-writing")
            .join("config.toml")
    }

    /// Resolve the storage directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. The platform data directory (`~/.local/share/keep-writing`)
    /// 4. Current working directory
    pub fn storage_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("keep-writing")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the canvas size; unset dimensions fall back individually.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(
            self.canvas_width.unwrap_or(Canvas::FALLBACK.width),
            self.canvas_height.unwrap_or(Canvas::FALLBACK.height),
        )
    }
}
