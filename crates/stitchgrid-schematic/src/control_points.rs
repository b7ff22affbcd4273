//! Control point extraction for curve commands.

use crate::model::ControlPoint;
use crate::path::{command_groups, Command};

/// Collects the Bézier control points of every curve command, in command order.
///
/// Each `C` segment contributes its two control points and each `Q` segment
/// its single control point; terminal points are never included. A pair with
/// an unparseable coordinate is dropped rather than replaced by the origin.
pub fn extract_control_points(raw: &str) -> Vec<ControlPoint> {
    let mut points = Vec::new();

    for group in command_groups(raw) {
        let (stride, controls) = match group.command {
            Command::Cubic => (6, 2),
            Command::Quad => (4, 1),
            _ => continue,
        };

        for chunk in group.raw.chunks_exact(stride) {
            for pair in chunk.chunks_exact(2).take(controls) {
                let (x, y) = (pair[0], pair[1]);
                if x.is_finite() && y.is_finite() {
                    points.push(ControlPoint::new(x, y));
                } else {
                    tracing::debug!("Dropping malformed control point in {:?}", raw);
                }
            }
        }
    }

    points
}
