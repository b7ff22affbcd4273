//! Configuration and settings management for StitchGrid
//!
//! Supports JSON and TOML file formats stored in the platform config
//! directory. Configuration is organized into two sections:
//! - Analyzer settings (merge threshold, curve sampling, palette)
//! - Editor settings (default grid size, border locking, history depth)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stitchgrid_core::ConfigError;

/// Schematic analyzer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Per-axis distance under which path endpoints merge into one grid node
    pub merge_threshold: f64,
    /// Parameter divisor for curve sampling
    pub curve_samples: usize,
    /// Flattening tolerance for curve-length measurement
    pub length_tolerance: f64,
    /// Colors handed out in order to paths without a stroke
    pub palette: Vec<String>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            merge_threshold: 1.5,
            curve_samples: 10,
            length_tolerance: 0.01,
            palette: Vec::new(),
        }
    }
}

/// Pattern editor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Width of a new pattern grid, in stitches
    pub default_width: usize,
    /// Height of a new pattern grid, in rows
    pub default_height: usize,
    /// Lock the outer border of new grids
    pub lock_border: bool,
    /// Number of undoable edits kept
    pub history_limit: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_width: 40,
            default_height: 40,
            lock_border: true,
            history_limit: 100,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Analyzer settings
    pub analyzer: AnalyzerSettings,
    /// Editor settings
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/stitchgrid/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("No platform config directory".to_string())
        })?;
        Ok(dir.join("stitchgrid").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let analyzer = &self.analyzer;
        if !analyzer.merge_threshold.is_finite() || analyzer.merge_threshold < 0.0 {
            return Err(SettingsError::invalid(
                "analyzer.merge_threshold",
                format!("{} is not a finite, non-negative distance", analyzer.merge_threshold),
            ));
        }

        if analyzer.curve_samples < 2 {
            return Err(SettingsError::invalid(
                "analyzer.curve_samples",
                "must be >= 2",
            ));
        }

        if !analyzer.length_tolerance.is_finite() || analyzer.length_tolerance <= 0.0 {
            return Err(SettingsError::invalid(
                "analyzer.length_tolerance",
                "must be > 0",
            ));
        }

        let editor = &self.editor;
        if editor.default_width == 0 || editor.default_height == 0 {
            return Err(SettingsError::invalid(
                "editor.default_width",
                "grid dimensions must be > 0",
            ));
        }

        if editor.history_limit == 0 {
            return Err(SettingsError::invalid("editor.history_limit", "must be > 0"));
        }

        Ok(())
    }
}
