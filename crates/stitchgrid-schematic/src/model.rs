//! Data model shared by the analyzer stages.

use serde::{Deserialize, Serialize};

/// Display color used when neither the source element nor the palette supplies one.
pub const DEFAULT_PATH_COLOR: &str = "#000000";

/// A sampled point on an outline path.
///
/// `id` is assigned sequentially while sampling and is only unique within one
/// path's sample sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to an arbitrary coordinate.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

/// Whether a path is made purely of straight segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Line,
    Curve,
}

/// A Bézier control point taken verbatim from a curve command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Discriminator carried by every grid point in the serialized artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPointKind {
    #[default]
    Grid,
}

/// One labeled node of the reference lattice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPoint {
    /// Row letter(s) followed by the 1-based column number, e.g. `b3`.
    pub id: String,
    pub x: i64,
    pub y: i64,
    pub kind: GridPointKind,
    /// Path whose endpoint produced this lattice node, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originating_path_id: Option<String>,
}

impl GridPoint {
    /// Creates an unoccupied lattice node at `(row, col)`.
    pub fn new(row: usize, col: usize, x: i64, y: i64) -> Self {
        Self {
            id: Self::label(row, col),
            x,
            y,
            kind: GridPointKind::Grid,
            originating_path_id: None,
        }
    }

    /// Builds the label for a 0-based row and column.
    ///
    /// Rows are lettered like spreadsheet columns (`a`..`z`, then `aa`, `ab`, ...)
    /// and columns are numbered from 1.
    pub fn label(row: usize, col: usize) -> String {
        let mut letters = Vec::new();
        let mut n = row + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'a' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        let mut label = String::from_utf8(letters).unwrap_or_default();
        label.push_str(&(col + 1).to_string());
        label
    }

    /// True when some path endpoint lies on this node.
    pub fn is_occupied(&self) -> bool {
        self.originating_path_id.is_some()
    }

    /// Squared distance to an arbitrary coordinate.
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x as f64 - x;
        let dy = self.y as f64 - y;
        dx * dx + dy * dy
    }
}

/// A path snapped onto the reference lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDefinition {
    pub id: String,
    pub name: String,
    /// Start and end grid point labels.
    pub points: [String; 2],
    pub kind: PathKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_points: Option<Vec<ControlPoint>>,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_single_letters() {
        assert_eq!(GridPoint::label(0, 0), "a1");
        assert_eq!(GridPoint::label(1, 0), "b1");
        assert_eq!(GridPoint::label(25, 11), "z12");
    }

    #[test]
    fn label_wraps_after_z() {
        assert_eq!(GridPoint::label(26, 0), "aa1");
        assert_eq!(GridPoint::label(27, 1), "ab2");
        assert_eq!(GridPoint::label(51, 0), "az1");
        assert_eq!(GridPoint::label(52, 0), "ba1");
    }

    #[test]
    fn grid_point_serializes_camel_case() {
        let mut point = GridPoint::new(0, 1, 10, 0);
        point.originating_path_id = Some("path-1".to_string());
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"originatingPathId\":\"path-1\""));
        assert!(json.contains("\"kind\":\"grid\""));
        assert!(json.contains("\"id\":\"a2\""));
    }

    #[test]
    fn unoccupied_point_omits_origin() {
        let point = GridPoint::new(1, 1, 10, 10);
        let json = serde_json::to_string(&point).unwrap();
        assert!(!json.contains("originatingPathId"));
        assert!(!point.is_occupied());
    }
}
