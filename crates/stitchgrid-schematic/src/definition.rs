//! Snapping sampled paths onto the reference lattice.

use crate::control_points::extract_control_points;
use crate::model::{GridPoint, PathDefinition, PathKind, DEFAULT_PATH_COLOR};
use crate::path::{PathSample, DEFAULT_LENGTH_TOLERANCE};

/// Finds the lattice node closest to `(x, y)`.
///
/// Ties go to the node met first in grid order. No distance cutoff is
/// applied: a far-away endpoint still snaps to the nearest node. Any future
/// cutoff belongs here.
pub fn nearest_grid_point(x: f64, y: f64, grid: &[GridPoint]) -> Option<&GridPoint> {
    let mut best: Option<(&GridPoint, f64)> = None;
    for candidate in grid {
        let d = candidate.distance_squared_to(x, y);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(point, _)| point)
}

/// Builds the grid-addressed definition of one path.
///
/// Returns `None` when the grid is empty or the path has no endpoints. The
/// definition is named after the path id and uses the default color; the
/// analyzer overrides both from the source document.
pub fn build_path_definition(path: &PathSample, grid: &[GridPoint]) -> Option<PathDefinition> {
    build_path_definition_with_tolerance(path, grid, DEFAULT_LENGTH_TOLERANCE)
}

/// [`build_path_definition`] with an explicit curve-length tolerance.
pub fn build_path_definition_with_tolerance(
    path: &PathSample,
    grid: &[GridPoint],
    tolerance: f64,
) -> Option<PathDefinition> {
    if grid.is_empty() {
        tracing::warn!("No grid to snap path {} onto", path.id);
        return None;
    }

    let Some(((sx, sy), (ex, ey))) = path.endpoints(tolerance) else {
        tracing::warn!("Path {} has no endpoints to snap", path.id);
        return None;
    };

    let start = nearest_grid_point(sx, sy, grid)?;
    let end = nearest_grid_point(ex, ey, grid)?;

    let control_points = match path.kind {
        PathKind::Curve => {
            let cps = extract_control_points(&path.raw_command_string);
            (!cps.is_empty()).then_some(cps)
        }
        PathKind::Line => None,
    };

    Some(PathDefinition {
        id: path.id.clone(),
        name: path.id.clone(),
        points: [start.id.clone(), end.id.clone()],
        kind: path.kind,
        control_points,
        color: DEFAULT_PATH_COLOR.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: usize, col: usize, x: i64, y: i64) -> GridPoint {
        GridPoint::new(row, col, x, y)
    }

    #[test]
    fn nearest_picks_closest() {
        let grid = vec![node(0, 0, 0, 0), node(0, 1, 10, 0), node(1, 0, 0, 10)];
        assert_eq!(nearest_grid_point(9.0, 1.0, &grid).unwrap().id, "a2");
        assert_eq!(nearest_grid_point(1.0, 8.0, &grid).unwrap().id, "b1");
    }

    #[test]
    fn nearest_ties_go_to_first() {
        let grid = vec![node(0, 0, 0, 0), node(0, 1, 10, 0)];
        assert_eq!(nearest_grid_point(5.0, 0.0, &grid).unwrap().id, "a1");
    }

    #[test]
    fn nearest_has_no_cutoff() {
        let grid = vec![node(0, 0, 0, 0)];
        assert_eq!(nearest_grid_point(1.0e6, -1.0e6, &grid).unwrap().id, "a1");
    }

    #[test]
    fn nearest_on_empty_grid_is_none() {
        assert!(nearest_grid_point(0.0, 0.0, &[]).is_none());
    }
}
