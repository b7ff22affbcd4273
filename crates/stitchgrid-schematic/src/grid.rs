//! # Reference Grid Derivation
//!
//! Builds the addressable lattice from path endpoints:
//! 1. Collect the first and last sample of every non-empty path
//! 2. Merge points closer than the threshold on both axes (greedy, in input order)
//! 3. Collect the distinct rounded X and Y values, each sorted ascending
//! 4. Emit the full row-major Cartesian product, labeled `a1`, `a2`, ...
//!
//! The lattice is dense: nodes are emitted even where no endpoint lies, so
//! later hand-specified mappings always have a node to snap to. Nodes that do
//! carry an endpoint record the id of the path that produced them.

use crate::model::GridPoint;
use crate::path::PathSample;
use std::collections::{BTreeSet, HashMap};

/// Default merge distance, matched to the authoring tool's drawing precision.
pub const DEFAULT_MERGE_THRESHOLD: f64 = 1.5;

/// An endpoint after proximity merging.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPoint {
    pub x: f64,
    pub y: f64,
    /// Path whose endpoint first created this point.
    pub path_id: Option<String>,
}

/// Greedily merges points whose axis deltas are both within `threshold`.
///
/// A point joins the first existing merged point it is close to and keeps
/// that point's position; otherwise it starts a new one. The result depends
/// on input order and is not a globally optimal clustering.
pub fn merge_points<I>(points: I, threshold: f64) -> Vec<MergedPoint>
where
    I: IntoIterator<Item = (f64, f64, Option<String>)>,
{
    let mut merged: Vec<MergedPoint> = Vec::new();

    for (x, y, path_id) in points {
        let existing = merged
            .iter()
            .any(|m| (m.x - x).abs() <= threshold && (m.y - y).abs() <= threshold);
        if !existing {
            merged.push(MergedPoint { x, y, path_id });
        }
    }

    merged
}

/// Endpoints of every path, in path order, skipping paths with no samples.
fn collect_endpoints(paths: &[PathSample]) -> Vec<(f64, f64, Option<String>)> {
    let mut points = Vec::with_capacity(paths.len() * 2);
    for path in paths {
        match path.sample_endpoints() {
            Some((first, last)) => {
                points.push((first.x, first.y, Some(path.id.clone())));
                points.push((last.x, last.y, Some(path.id.clone())));
            }
            None => tracing::debug!("Path {} has no samples; skipped for grid", path.id),
        }
    }
    points
}

/// Expands merged points into the dense labeled lattice.
pub fn lattice_from_points(merged: &[MergedPoint]) -> Vec<GridPoint> {
    let xs: BTreeSet<i64> = merged.iter().map(|m| m.x.round() as i64).collect();
    let ys: BTreeSet<i64> = merged.iter().map(|m| m.y.round() as i64).collect();

    let mut origins: HashMap<(i64, i64), &str> = HashMap::new();
    for m in merged {
        if let Some(id) = &m.path_id {
            origins
                .entry((m.x.round() as i64, m.y.round() as i64))
                .or_insert(id.as_str());
        }
    }

    let mut grid = Vec::with_capacity(xs.len() * ys.len());
    for (row, &y) in ys.iter().enumerate() {
        for (col, &x) in xs.iter().enumerate() {
            let mut point = GridPoint::new(row, col, x, y);
            point.originating_path_id = origins.get(&(x, y)).map(|id| id.to_string());
            grid.push(point);
        }
    }
    grid
}

/// Derives the reference lattice from a set of sampled paths.
///
/// The lattice is dense, so it can hold nodes closer together than
/// `threshold` on one axis (e.g. x = 0 and x = 1 with the default 1.5).
/// Feeding such a lattice back through [`merge_points`] collapses those
/// nodes. Re-deriving is idempotent only when [`lattice_is_separated`] holds.
pub fn derive_grid(paths: &[PathSample], threshold: f64) -> Vec<GridPoint> {
    let endpoints = collect_endpoints(paths);
    let merged = merge_points(endpoints, threshold);
    let grid = lattice_from_points(&merged);
    tracing::debug!(
        "Derived grid: {} merged endpoints, {} lattice points",
        merged.len(),
        grid.len()
    );
    grid
}

/// True when the distinct coordinates on each axis are more than
/// `threshold` apart, so that no two lattice nodes merge.
pub fn lattice_is_separated(grid: &[GridPoint], threshold: f64) -> bool {
    let separated = |values: BTreeSet<i64>| {
        values
            .iter()
            .zip(values.iter().skip(1))
            .all(|(a, b)| (b - a) as f64 > threshold)
    };
    separated(grid.iter().map(|p| p.x).collect()) && separated(grid.iter().map(|p| p.y).collect())
}

/// Number of rows and columns of a lattice produced by [`derive_grid`].
pub fn grid_dimensions(grid: &[GridPoint]) -> (usize, usize) {
    let rows: BTreeSet<i64> = grid.iter().map(|p| p.y).collect();
    let cols: BTreeSet<i64> = grid.iter().map(|p| p.x).collect();
    (rows.len(), cols.len())
}
