//! # Outline Path Parsing
//!
//! Converts one outline element's command string into an ordered sequence of
//! sample points plus the exact segment geometry behind them.
//!
//! Supported grammar (absolute coordinates only):
//! - `M x,y` move, further pairs are implicit line-tos
//! - `L x,y` line
//! - `C x1,y1 x2,y2 x,y` cubic Bézier
//! - `Q x1,y1 x,y` quadratic Bézier
//!
//! Any relative or shorthand command (`m`, `l`, `H`, `V`, `S`, `T`, `A`, ...)
//! makes the whole path unparseable and it yields no samples. `Z` carries no
//! coordinates and is ignored.

use crate::model::{PathKind, Point};
use lyon::geom::{point, CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use serde::{Deserialize, Serialize};

/// Default number of parameter steps per curve segment (`t = i / 10`).
pub const DEFAULT_CURVE_SAMPLES: usize = 10;

/// Default flattening tolerance used when measuring curve length.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 0.01;

type GeomPoint = lyon::geom::Point<f64>;

/// A command letter recognised by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Move,
    Line,
    Cubic,
    Quad,
    Close,
    Unsupported(char),
}

impl Command {
    fn from_letter(letter: char) -> Self {
        match letter {
            'M' => Command::Move,
            'L' => Command::Line,
            'C' => Command::Cubic,
            'Q' => Command::Quad,
            'Z' | 'z' => Command::Close,
            other => Command::Unsupported(other),
        }
    }
}

/// A command letter with the numeric arguments that follow it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CommandGroup {
    pub command: Command,
    /// Finite arguments only.
    pub args: Vec<f64>,
    /// Every token in order, with unparseable ones kept as `NaN`.
    pub raw: Vec<f64>,
}

impl CommandGroup {
    /// Coordinate pairs of the argument list; a trailing odd value is dropped.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.args.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Splits a command string into command groups.
///
/// Arguments are separated by whitespace or commas. Tokens that do not parse
/// as finite numbers are dropped from `args`. `e`/`E` never start a command since they
/// appear inside exponents.
pub(crate) fn command_groups(raw: &str) -> Vec<CommandGroup> {
    let mut groups = Vec::new();
    let mut current: Option<(Command, usize)> = None;

    let flush = |command: Command, body: &str, groups: &mut Vec<CommandGroup>| {
        let raw = parse_numbers(body);
        let args = raw.iter().copied().filter(|v| v.is_finite()).collect();
        groups.push(CommandGroup { command, args, raw });
    };

    for (idx, ch) in raw.char_indices() {
        if ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E' {
            if let Some((command, start)) = current.take() {
                flush(command, &raw[start..idx], &mut groups);
            } else if !raw[..idx].trim().is_empty() {
                tracing::debug!("Ignoring coordinates before the first command: {:?}", &raw[..idx]);
            }
            current = Some((Command::from_letter(ch), idx + ch.len_utf8()));
        }
    }
    if let Some((command, start)) = current {
        flush(command, &raw[start..], &mut groups);
    }

    groups
}

fn parse_numbers(body: &str) -> Vec<f64> {
    body.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().unwrap_or(f64::NAN))
        .collect()
}

/// Exact geometry of one drawn segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line(LineSegment<f64>),
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
}

impl PathSegment {
    fn from(&self) -> GeomPoint {
        match self {
            PathSegment::Line(s) => s.from,
            PathSegment::Quadratic(s) => s.from,
            PathSegment::Cubic(s) => s.from,
        }
    }

    fn to(&self) -> GeomPoint {
        match self {
            PathSegment::Line(s) => s.to,
            PathSegment::Quadratic(s) => s.to,
            PathSegment::Cubic(s) => s.to,
        }
    }

    /// Point at parameter `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> (f64, f64) {
        let p = match self {
            PathSegment::Line(s) => s.sample(t),
            PathSegment::Quadratic(s) => s.sample(t),
            PathSegment::Cubic(s) => s.sample(t),
        };
        (p.x, p.y)
    }

    /// Polyline approximation, starting with the segment's first point.
    fn polyline(&self, tolerance: f64) -> Vec<GeomPoint> {
        let mut points = vec![self.from()];
        match self {
            PathSegment::Line(s) => points.push(s.to),
            PathSegment::Quadratic(s) => points.extend(s.flattened(tolerance)),
            PathSegment::Cubic(s) => points.extend(s.flattened(tolerance)),
        }
        points
    }
}

fn polyline_length(points: &[GeomPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

fn usable_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_LENGTH_TOLERANCE
    }
}

/// One outline element, sampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSample {
    pub id: String,
    pub raw_command_string: String,
    pub kind: PathKind,
    pub sample_points: Vec<Point>,
    #[serde(skip)]
    pub segments: Vec<PathSegment>,
}

impl PathSample {
    /// True when nothing could be sampled from the command string.
    pub fn is_empty(&self) -> bool {
        self.sample_points.is_empty()
    }

    /// First and last sample points.
    pub fn sample_endpoints(&self) -> Option<(&Point, &Point)> {
        Some((self.sample_points.first()?, self.sample_points.last()?))
    }

    /// Total drawn length, measured on the segment geometry.
    pub fn length(&self, tolerance: f64) -> f64 {
        let tolerance = usable_tolerance(tolerance);
        self.segments
            .iter()
            .map(|segment| polyline_length(&segment.polyline(tolerance)))
            .sum()
    }

    /// Point at arc length `distance` from the start, clamped to the path.
    ///
    /// Returns `None` when the path has no segment geometry.
    pub fn point_at_length(&self, distance: f64, tolerance: f64) -> Option<(f64, f64)> {
        let tolerance = usable_tolerance(tolerance);
        let last = self.segments.last()?;
        if distance >= self.length(tolerance) {
            let end = last.to();
            return Some((end.x, end.y));
        }
        let mut remaining = distance.max(0.0);

        for segment in &self.segments {
            let polyline = segment.polyline(tolerance);
            for edge in polyline.windows(2) {
                let edge_len = edge[0].distance_to(edge[1]);
                if remaining <= edge_len {
                    let t = if edge_len > 0.0 { remaining / edge_len } else { 0.0 };
                    let p = edge[0].lerp(edge[1], t);
                    return Some((p.x, p.y));
                }
                remaining -= edge_len;
            }
        }

        let end = last.to();
        Some((end.x, end.y))
    }

    /// The path's true geometric endpoints.
    ///
    /// Measured at arc length zero and at the full length when segment
    /// geometry exists, otherwise taken from the first and last samples.
    pub fn endpoints(&self, tolerance: f64) -> Option<((f64, f64), (f64, f64))> {
        if !self.segments.is_empty() {
            let total = self.length(tolerance);
            let start = self.point_at_length(0.0, tolerance)?;
            let end = self.point_at_length(total, tolerance)?;
            return Some((start, end));
        }
        let (first, last) = self.sample_endpoints()?;
        Some(((first.x, first.y), (last.x, last.y)))
    }
}

/// Stateless sampler for outline command strings.
#[derive(Debug, Clone, Copy)]
pub struct PathParser {
    curve_samples: usize,
}

impl Default for PathParser {
    fn default() -> Self {
        Self {
            curve_samples: DEFAULT_CURVE_SAMPLES,
        }
    }
}

impl PathParser {
    /// Creates a parser that evaluates curves at `t = i / curve_samples`.
    ///
    /// Values below 2 fall back to the default.
    pub fn new(curve_samples: usize) -> Self {
        let curve_samples = if curve_samples < 2 {
            tracing::warn!(
                "Curve sample count {} too small, using {}",
                curve_samples,
                DEFAULT_CURVE_SAMPLES
            );
            DEFAULT_CURVE_SAMPLES
        } else {
            curve_samples
        };
        Self { curve_samples }
    }

    pub fn curve_samples(&self) -> usize {
        self.curve_samples
    }

    /// Parses one command string into a [`PathSample`].
    pub fn parse(&self, id: impl Into<String>, raw: &str) -> PathSample {
        let id = id.into();
        let groups = command_groups(raw);
        let kind = classify(&groups);

        let mut sample = PathSample {
            id,
            raw_command_string: raw.to_string(),
            kind,
            sample_points: Vec::new(),
            segments: Vec::new(),
        };

        if let Some(bad) = groups.iter().find_map(|g| match g.command {
            Command::Unsupported(letter) => Some(letter),
            _ => None,
        }) {
            tracing::warn!(
                "Path {} uses unsupported command '{}'; no samples produced",
                sample.id,
                bad
            );
            return sample;
        }

        let mut emitter = Emitter::default();
        let mut cursor: Option<GeomPoint> = None;

        for group in &groups {
            match group.command {
                Command::Move => {
                    for (i, (x, y)) in group.pairs().enumerate() {
                        let to = point(x, y);
                        if i > 0 {
                            if let Some(from) = cursor {
                                sample.segments.push(PathSegment::Line(LineSegment { from, to }));
                            }
                        }
                        emitter.push(to);
                        cursor = Some(to);
                    }
                }
                Command::Line => {
                    for (x, y) in group.pairs() {
                        let to = point(x, y);
                        if let Some(from) = cursor {
                            sample.segments.push(PathSegment::Line(LineSegment { from, to }));
                        }
                        emitter.push(to);
                        cursor = Some(to);
                    }
                }
                Command::Cubic => {
                    for chunk in group.args.chunks_exact(6) {
                        let from = cursor.unwrap_or_else(|| point(0.0, 0.0));
                        let segment = CubicBezierSegment {
                            from,
                            ctrl1: point(chunk[0], chunk[1]),
                            ctrl2: point(chunk[2], chunk[3]),
                            to: point(chunk[4], chunk[5]),
                        };
                        self.emit_curve(&mut emitter, PathSegment::Cubic(segment));
                        sample.segments.push(PathSegment::Cubic(segment));
                        cursor = Some(segment.to);
                    }
                }
                Command::Quad => {
                    for chunk in group.args.chunks_exact(4) {
                        let from = cursor.unwrap_or_else(|| point(0.0, 0.0));
                        let segment = QuadraticBezierSegment {
                            from,
                            ctrl: point(chunk[0], chunk[1]),
                            to: point(chunk[2], chunk[3]),
                        };
                        self.emit_curve(&mut emitter, PathSegment::Quadratic(segment));
                        sample.segments.push(PathSegment::Quadratic(segment));
                        cursor = Some(segment.to);
                    }
                }
                Command::Close => {
                    tracing::debug!("Ignoring close command in path {}", sample.id);
                }
                Command::Unsupported(_) => {}
            }
        }

        sample.sample_points = emitter.points;
        tracing::debug!(
            "Parsed path {}: {} samples, {} segments",
            sample.id,
            sample.sample_points.len(),
            sample.segments.len()
        );
        sample
    }

    /// Cursor, interior samples, then the literal terminal point.
    fn emit_curve(&self, emitter: &mut Emitter, segment: PathSegment) {
        emitter.push(segment.from());
        for i in 1..self.curve_samples {
            let (x, y) = segment.sample(i as f64 / self.curve_samples as f64);
            emitter.push(point(x, y));
        }
        emitter.push(segment.to());
    }
}

#[derive(Default)]
struct Emitter {
    points: Vec<Point>,
}

impl Emitter {
    fn push(&mut self, p: GeomPoint) {
        let id = self.points.len().to_string();
        self.points.push(Point::new(id, p.x, p.y));
    }
}

fn classify(groups: &[CommandGroup]) -> PathKind {
    let has_line = groups.iter().any(|g| g.command == Command::Line);
    let has_curve = groups
        .iter()
        .any(|g| matches!(g.command, Command::Cubic | Command::Quad));
    if has_line && !has_curve {
        PathKind::Line
    } else {
        PathKind::Curve
    }
}

/// Parses a command string with the default sampler.
pub fn parse_path(id: impl Into<String>, raw: &str) -> PathSample {
    PathParser::default().parse(id, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_split_on_letters() {
        let groups = command_groups("M0,0 L10 5C1 2 3 4 5 6");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].command, Command::Move);
        assert_eq!(groups[1].args, vec![10.0, 5.0]);
        assert_eq!(groups[2].command, Command::Cubic);
        assert_eq!(groups[2].args.len(), 6);
    }

    #[test]
    fn exponents_stay_in_numbers() {
        let groups = command_groups("M1e2,2E-1");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].args, vec![100.0, 0.2]);
    }

    #[test]
    fn non_numeric_tokens_are_dropped() {
        let groups = command_groups("L 1,abc,2");
        assert_eq!(groups[0].args, vec![1.0, 2.0]);
        assert_eq!(groups[0].raw.len(), 3);
        assert!(groups[0].raw[1].is_nan());
    }

    #[test]
    fn leading_numbers_are_ignored() {
        let groups = command_groups("5 5 M1,1");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].args, vec![1.0, 1.0]);
    }

    #[test]
    fn classify_needs_line_without_curves() {
        assert_eq!(classify(&command_groups("M0,0 L1,1")), PathKind::Line);
        assert_eq!(classify(&command_groups("M0,0 L1,1 Q2,2 3,3")), PathKind::Curve);
        assert_eq!(classify(&command_groups("M0,0")), PathKind::Curve);
    }

    #[test]
    fn degenerate_tolerance_falls_back() {
        assert_eq!(usable_tolerance(0.0), DEFAULT_LENGTH_TOLERANCE);
        assert_eq!(usable_tolerance(f64::NAN), DEFAULT_LENGTH_TOLERANCE);
        assert_eq!(usable_tolerance(0.5), 0.5);
    }
}
