//! StitchGrid Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{AnalyzerSettings, Config, EditorSettings};
pub use error::{SettingsError, SettingsResult};
