use stitchgrid_schematic::{parse_path, PathKind, PathParser};

fn coords(raw: &str) -> Vec<(f64, f64)> {
    parse_path("p", raw)
        .sample_points
        .iter()
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn test_simple_line_path() {
    let sample = parse_path("path-1", "M0,0 L10,0");
    assert_eq!(sample.kind, PathKind::Line);
    assert_eq!(sample.sample_points.len(), 2);
    assert_eq!((sample.sample_points[0].x, sample.sample_points[0].y), (0.0, 0.0));
    assert_eq!((sample.sample_points[1].x, sample.sample_points[1].y), (10.0, 0.0));
    assert_eq!(sample.raw_command_string, "M0,0 L10,0");
}

#[test]
fn test_line_commands_emit_literal_points() {
    let points = coords("M 1.5 2.5 L 3,4 L5 , 6 L-7.25,8e1");
    assert_eq!(points, vec![(1.5, 2.5), (3.0, 4.0), (5.0, 6.0), (-7.25, 80.0)]);
}

#[test]
fn test_sample_ids_are_sequential() {
    let sample = parse_path("p", "M0,0 L1,0 L2,0");
    let ids: Vec<&str> = sample.sample_points.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn test_cubic_emits_eleven_samples() {
    let sample = parse_path("p", "M0,0 C0,10 10,10 10,0");
    // Move point + cursor + 9 interior + terminal.
    assert_eq!(sample.sample_points.len(), 12);
    assert_eq!(sample.kind, PathKind::Curve);

    let curve = &sample.sample_points[1..];
    assert_eq!((curve[0].x, curve[0].y), (0.0, 0.0));
    assert_eq!((curve[10].x, curve[10].y), (10.0, 0.0));
}

#[test]
fn test_cubic_interior_matches_bernstein_blend() {
    let sample = parse_path("p", "M0,0 C0,10 10,10 10,0");
    let curve = &sample.sample_points[1..];
    for (i, p) in curve.iter().enumerate() {
        let t = i as f64 / 10.0;
        let mt = 1.0 - t;
        let x = 3.0 * mt * t * t * 10.0 + t * t * t * 10.0;
        let y = 3.0 * mt * mt * t * 10.0 + 3.0 * mt * t * t * 10.0;
        assert!((p.x - x).abs() < 1e-9, "x at t={t}");
        assert!((p.y - y).abs() < 1e-9, "y at t={t}");
    }
}

#[test]
fn test_cubic_samples_monotonic_in_t() {
    // x(t) is strictly increasing for this curve.
    let sample = parse_path("p", "M0,0 C3,5 6,5 9,0");
    let curve = &sample.sample_points[1..];
    for pair in curve.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn test_quadratic_samples() {
    let sample = parse_path("p", "M0,0 Q5,10 10,0");
    assert_eq!(sample.sample_points.len(), 12);
    let mid = &sample.sample_points[1 + 5];
    // Quadratic midpoint: 0.25*P0 + 0.5*P1 + 0.25*P2
    assert!((mid.x - 5.0).abs() < 1e-9);
    assert!((mid.y - 5.0).abs() < 1e-9);
    let last = sample.sample_points.last().unwrap();
    assert_eq!((last.x, last.y), (10.0, 0.0));
}

#[test]
fn test_cursor_advances_after_curve() {
    let points = coords("M0,0 Q5,10 10,0 L20,0");
    assert_eq!(points.last(), Some(&(20.0, 0.0)));
    let sample = parse_path("p", "M0,0 Q5,10 10,0 L20,0");
    assert_eq!(sample.segments.len(), 2);
}

#[test]
fn test_empty_input_has_no_samples() {
    let sample = parse_path("p", "");
    assert!(sample.is_empty());
    assert!(sample.segments.is_empty());
}

#[test]
fn test_relative_commands_fail_closed() {
    for raw in ["m0,0 l10,0", "M0,0 H10", "M0,0 V10", "M0,0 S1,1 2,2", "M0,0 A5,5 0 0 1 10,0"] {
        let sample = parse_path("p", raw);
        assert!(sample.is_empty(), "{raw} should yield no samples");
    }
}

#[test]
fn test_close_command_is_ignored() {
    let points = coords("M0,0 L10,0 L10,10 Z");
    assert_eq!(points, vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
}

#[test]
fn test_malformed_coordinates_are_skipped() {
    let points = coords("M0,0 L10,abc,0");
    assert_eq!(points, vec![(0.0, 0.0), (10.0, 0.0)]);
}

#[test]
fn test_implicit_move_pairs_are_lines() {
    let sample = parse_path("p", "M0,0 5,0 5,5");
    assert_eq!(sample.sample_points.len(), 3);
    assert_eq!(sample.segments.len(), 2);
}

#[test]
fn test_custom_sample_count() {
    let parser = PathParser::new(4);
    let sample = parser.parse("p", "C0,10 10,10 10,0");
    // Cursor + 3 interior + terminal.
    assert_eq!(sample.sample_points.len(), 5);
}

#[test]
fn test_tiny_sample_count_uses_default() {
    assert_eq!(PathParser::new(1).curve_samples(), 10);
}

#[test]
fn test_line_length_and_endpoints() {
    let sample = parse_path("p", "M0,0 L3,4 L3,10");
    assert!((sample.length(0.01) - 11.0).abs() < 1e-9);
    let ((sx, sy), (ex, ey)) = sample.endpoints(0.01).unwrap();
    assert_eq!((sx, sy), (0.0, 0.0));
    assert_eq!((ex, ey), (3.0, 10.0));

    let (mx, my) = sample.point_at_length(5.0, 0.01).unwrap();
    assert!((mx - 3.0).abs() < 1e-9 && (my - 4.0).abs() < 1e-9);
}

#[test]
fn test_curve_endpoints_are_exact() {
    let sample = parse_path("p", "M1,2 C4,8 9,8 12,2");
    let ((sx, sy), (ex, ey)) = sample.endpoints(0.01).unwrap();
    assert_eq!((sx, sy), (1.0, 2.0));
    assert_eq!((ex, ey), (12.0, 2.0));
    // Arc is longer than the chord.
    assert!(sample.length(0.01) > 11.0);
}

#[test]
fn test_endpoints_fall_back_to_samples() {
    let sample = parse_path("p", "M4,5");
    assert!(sample.segments.is_empty());
    let (start, end) = sample.endpoints(0.01).unwrap();
    assert_eq!(start, (4.0, 5.0));
    assert_eq!(end, (4.0, 5.0));
    assert!(parse_path("p", "").endpoints(0.01).is_none());
}
