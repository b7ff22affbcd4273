//! # StitchGrid Schematic Analyzer
//!
//! Converts an author-drawn garment schematic (a set of outline paths) into
//! an addressable reference grid that measurement rules can point at.
//!
//! ## Pipeline
//!
//! ```text
//! SVG document ──▶ SchematicDocument (one command string per outline)
//!   └── parse_path ──▶ PathSample (ordered samples + exact segments)
//!         ├── derive_grid ──▶ GridPoint lattice (a1, a2, b1, ...)
//!         └── build_path_definition ──▶ PathDefinition (endpoints snapped)
//! ```
//!
//! Malformed geometry never fails the pipeline: bad tokens are skipped,
//! unsupported commands yield empty samples, and unmappable paths are
//! reported as `None` / listed in [`SchematicArtifact::unresolved`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stitchgrid_schematic::{AnalyzerOptions, SchematicAnalyzer, SchematicDocument};
//!
//! let document = SchematicDocument::from_svg(&svg)?;
//! let analyzer = SchematicAnalyzer::new(AnalyzerOptions::default())?;
//! let artifact = analyzer.analyze_document(&document);
//! println!("{}", artifact.to_json()?);
//! ```

pub mod analyzer;
pub mod control_points;
pub mod definition;
pub mod document;
pub mod grid;
pub mod model;
pub mod path;

pub use analyzer::{AnalyzerOptions, SchematicAnalyzer, SchematicArtifact};
pub use control_points::extract_control_points;
pub use definition::{build_path_definition, build_path_definition_with_tolerance, nearest_grid_point};
pub use document::{PathSource, SchematicDocument};
pub use grid::{
    derive_grid, grid_dimensions, lattice_from_points, lattice_is_separated, merge_points,
    MergedPoint, DEFAULT_MERGE_THRESHOLD,
};
pub use model::{ControlPoint, GridPoint, GridPointKind, PathDefinition, PathKind, Point, DEFAULT_PATH_COLOR};
pub use path::{parse_path, PathParser, PathSample, PathSegment, DEFAULT_CURVE_SAMPLES, DEFAULT_LENGTH_TOLERANCE};
