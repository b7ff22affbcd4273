//! # StitchGrid
//!
//! Knitting pattern tooling built from two engines:
//! - A schematic analyzer that turns a drawn garment outline into an
//!   addressable reference grid and grid-snapped path definitions
//! - A pattern grid engine for editing colored stitch charts with locked
//!   cells, flips, clipboard operations and undo/redo
//!
//! ## Architecture
//!
//! StitchGrid is organized as a workspace with multiple crates:
//!
//! 1. **stitchgrid-core** - Error types and shared-state aliases
//! 2. **stitchgrid-schematic** - Path parsing, grid derivation, path snapping
//! 3. **stitchgrid-editor** - Pattern grid, history, clipboard, actions
//! 4. **stitchgrid-settings** - Configuration files
//! 5. **stitchgrid** - Command-line driver that integrates all crates

use std::path::Path;

pub use stitchgrid_core::{ConfigError, Error, GeometryError, GridError, Result, ThreadSafe};

pub use stitchgrid_schematic::{
    AnalyzerOptions, ControlPoint, GridPoint, PathDefinition, PathKind, PathSample, PathSource,
    SchematicAnalyzer, SchematicArtifact, SchematicDocument,
};

pub use stitchgrid_editor::{
    Cell, CellRecord, EditorAction, PatternEditor, PatternGrid, SelectedArea, SharedEditor,
};

pub use stitchgrid_settings::{AnalyzerSettings, Config, EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for results
/// - RUST_LOG environment variable support, defaulting to `info`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Analyzer options from the configured settings
pub fn analyzer_options(settings: &AnalyzerSettings) -> AnalyzerOptions {
    AnalyzerOptions {
        merge_threshold: settings.merge_threshold,
        curve_samples: settings.curve_samples,
        length_tolerance: settings.length_tolerance,
        palette: settings.palette.clone(),
    }
}

/// Blank pattern grid sized and locked per the configured settings
pub fn new_pattern_grid(settings: &EditorSettings) -> Result<PatternGrid> {
    if settings.lock_border {
        PatternGrid::with_border_locked(settings.default_height, settings.default_width)
    } else {
        PatternGrid::new(settings.default_height, settings.default_width)
    }
}

/// Editor over a blank grid, with the configured history depth
pub fn new_pattern_editor(settings: &EditorSettings) -> Result<PatternEditor> {
    let grid = new_pattern_grid(settings)?;
    Ok(PatternEditor::with_history_limit(grid, settings.history_limit))
}

/// Reads a schematic document from disk
///
/// `.svg` files are scanned for `<path>` elements; anything else is read as
/// one path command string per line.
pub fn load_document(path: &Path) -> Result<SchematicDocument> {
    let content = std::fs::read_to_string(path)?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        SchematicDocument::from_svg(&content)
    } else {
        Ok(SchematicDocument::from_lines(&content))
    }
}
