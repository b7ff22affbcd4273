//! # Schematic Analyzer
//!
//! Runs the whole pipeline over one schematic document:
//!
//! ```text
//! PathSource* ──parse──▶ PathSample* ──derive_grid──▶ GridPoint*
//!                              │                          │
//!                              └──────build_path_definition┘──▶ PathDefinition*
//! ```
//!
//! The analyzer holds only its options; every call is independent, so one
//! analyzer may be shared between threads.

use crate::definition::build_path_definition_with_tolerance;
use crate::document::{PathSource, SchematicDocument};
use crate::grid::{derive_grid, DEFAULT_MERGE_THRESHOLD};
use crate::model::{GridPoint, PathDefinition, DEFAULT_PATH_COLOR};
use crate::path::{PathParser, PathSample, DEFAULT_CURVE_SAMPLES, DEFAULT_LENGTH_TOLERANCE};
use serde::{Deserialize, Serialize};
use stitchgrid_core::{GeometryError, Result};

/// Tuning knobs for the analyzer pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerOptions {
    /// Per-axis distance under which endpoints merge.
    pub merge_threshold: f64,
    /// Parameter divisor for curve sampling.
    pub curve_samples: usize,
    /// Flattening tolerance for curve-length measurement.
    pub length_tolerance: f64,
    /// Colors assigned in order to paths without a stroke.
    pub palette: Vec<String>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            length_tolerance: DEFAULT_LENGTH_TOLERANCE,
            palette: Vec::new(),
        }
    }
}

impl AnalyzerOptions {
    /// Checks that the merge threshold is a usable distance.
    pub fn validate(&self) -> Result<()> {
        if !self.merge_threshold.is_finite() || self.merge_threshold < 0.0 {
            return Err(GeometryError::InvalidThreshold {
                threshold: self.merge_threshold,
            }
            .into());
        }
        Ok(())
    }
}

/// The grid and path mapping stored with a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchematicArtifact {
    pub grid_points: Vec<GridPoint>,
    pub paths: Vec<PathDefinition>,
    /// Ids of paths that produced no definition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

impl SchematicArtifact {
    /// Looks up a grid point by label.
    pub fn grid_point(&self, id: &str) -> Option<&GridPoint> {
        self.grid_points.iter().find(|p| p.id == id)
    }

    /// Looks up a path definition by id.
    pub fn path(&self, id: &str) -> Option<&PathDefinition> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Schematic analyzer pipeline.
#[derive(Debug, Clone, Default)]
pub struct SchematicAnalyzer {
    options: AnalyzerOptions,
    parser: PathParser,
}

impl SchematicAnalyzer {
    /// Creates an analyzer, rejecting an unusable merge threshold.
    pub fn new(options: AnalyzerOptions) -> Result<Self> {
        options.validate()?;
        let parser = PathParser::new(options.curve_samples);
        Ok(Self { options, parser })
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Parses every source into a sample, assigning ids `path-1`, `path-2`, ...
    pub fn sample_paths(&self, sources: &[PathSource]) -> Vec<PathSample> {
        sources
            .iter()
            .enumerate()
            .map(|(i, source)| self.parser.parse(format!("path-{}", i + 1), &source.commands))
            .collect()
    }

    /// Analyzes a whole document.
    pub fn analyze_document(&self, document: &SchematicDocument) -> SchematicArtifact {
        self.analyze(&document.paths)
    }

    /// Analyzes a list of outline sources.
    pub fn analyze(&self, sources: &[PathSource]) -> SchematicArtifact {
        let samples = self.sample_paths(sources);
        let grid_points = derive_grid(&samples, self.options.merge_threshold);

        let mut paths = Vec::with_capacity(samples.len());
        let mut unresolved = Vec::new();

        for (i, (sample, source)) in samples.iter().zip(sources).enumerate() {
            match build_path_definition_with_tolerance(
                sample,
                &grid_points,
                self.options.length_tolerance,
            ) {
                Some(mut definition) => {
                    definition.name = source
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("Path {}", i + 1));
                    definition.color = self.color_for(i, source);
                    paths.push(definition);
                }
                None => unresolved.push(sample.id.clone()),
            }
        }

        if !unresolved.is_empty() {
            tracing::warn!("{} path(s) could not be mapped: {:?}", unresolved.len(), unresolved);
        }
        tracing::info!(
            "Analyzed schematic: {} paths, {} grid points, {} definitions",
            sources.len(),
            grid_points.len(),
            paths.len()
        );

        SchematicArtifact {
            grid_points,
            paths,
            unresolved,
        }
    }

    fn color_for(&self, index: usize, source: &PathSource) -> String {
        if let Some(stroke) = &source.stroke {
            return stroke.clone();
        }
        let palette = &self.options.palette;
        palette
            .get(index % palette.len().max(1))
            .cloned()
            .unwrap_or_else(|| DEFAULT_PATH_COLOR.to_string())
    }
}
