use stitchgrid_schematic::{
    AnalyzerOptions, PathKind, PathSource, SchematicAnalyzer, SchematicArtifact,
    SchematicDocument, DEFAULT_PATH_COLOR,
};

const BODICE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200">
  <g>
    <path id="shoulder" stroke="#aa0000" d="M0,0 L40,0"/>
    <path id="armhole" d="M40,0 C50,20 50,40 40.8,60.6"/>
    <path id="side" stroke="none" d='M40,60 L40,120'/>
    <path d=""/>
  </g>
</svg>"##;

#[test]
fn test_document_extracts_paths_in_order() {
    let doc = SchematicDocument::from_svg(BODICE_SVG).unwrap();
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.paths[0].name.as_deref(), Some("shoulder"));
    assert_eq!(doc.paths[0].stroke.as_deref(), Some("#aa0000"));
    assert_eq!(doc.paths[1].commands, "M40,0 C50,20 50,40 40.8,60.6");
    assert_eq!(doc.paths[2].stroke, None);
}

#[test]
fn test_document_requires_svg_root() {
    let err = SchematicDocument::from_svg("<path d=\"M0,0 L1,1\"/>").unwrap_err();
    assert!(err.is_geometry_error());
}

#[test]
fn test_document_without_paths_is_empty() {
    let doc = SchematicDocument::from_svg("<svg><rect x=\"1\"/></svg>").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_full_pipeline() {
    let doc = SchematicDocument::from_svg(BODICE_SVG).unwrap();
    let analyzer = SchematicAnalyzer::new(AnalyzerOptions::default()).unwrap();
    let artifact = analyzer.analyze_document(&doc);

    // Endpoints: (0,0) (40,0) (40.8,60.6) (40,120); (40,60) merges into (40.8,60.6).
    // Rounded xs {0, 40, 41}, ys {0, 61, 120}.
    assert_eq!(artifact.grid_points.len(), 9);
    assert_eq!(artifact.paths.len(), 3);
    assert!(artifact.unresolved.is_empty());

    let shoulder = artifact.path("path-1").unwrap();
    assert_eq!(shoulder.name, "shoulder");
    assert_eq!(shoulder.color, "#aa0000");
    assert_eq!(shoulder.kind, PathKind::Line);
    assert_eq!(shoulder.points, ["a1".to_string(), "a2".to_string()]);

    let armhole = artifact.path("path-2").unwrap();
    assert_eq!(armhole.kind, PathKind::Curve);
    assert_eq!(armhole.points, ["a2".to_string(), "b3".to_string()]);

    let side = artifact.path("path-3").unwrap();
    assert_eq!(side.color, DEFAULT_PATH_COLOR);
    assert_eq!(side.points, ["b2".to_string(), "c2".to_string()]);
}

#[test]
fn test_unmappable_paths_are_listed() {
    let analyzer = SchematicAnalyzer::default();
    let sources = vec![PathSource::new("m0,0 l5,5"), PathSource::new("H10")];
    let artifact = analyzer.analyze(&sources);
    assert!(artifact.grid_points.is_empty());
    assert!(artifact.paths.is_empty());
    assert_eq!(artifact.unresolved, vec!["path-1", "path-2"]);
}

#[test]
fn test_unnamed_paths_get_ordinal_names() {
    let analyzer = SchematicAnalyzer::default();
    let doc = SchematicDocument::from_lines("M0,0 L10,0\nM10,0 L10,10");
    let artifact = analyzer.analyze_document(&doc);
    assert_eq!(artifact.paths[0].name, "Path 1");
    assert_eq!(artifact.paths[1].name, "Path 2");
}

#[test]
fn test_artifact_json_round_trip() {
    let analyzer = SchematicAnalyzer::default();
    let doc = SchematicDocument::from_commands(["M0,0 L10,0", "M10,0 Q15,5 10,10"]);
    let artifact = analyzer.analyze_document(&doc);

    let json = artifact.to_json().unwrap();
    assert!(json.contains("\"gridPoints\""));
    assert!(json.contains("\"controlPoints\""));
    assert!(json.contains("\"kind\": \"curve\""));
    assert!(!json.contains("unresolved"));

    let restored = SchematicArtifact::from_json(&json).unwrap();
    assert_eq!(restored, artifact);
}

#[test]
fn test_larger_threshold_merges_more() {
    let sources = vec![PathSource::new("M0,0 L10,0"), PathSource::new("M12,1 L12,10")];
    let tight = SchematicAnalyzer::default().analyze(&sources);
    let loose = SchematicAnalyzer::new(AnalyzerOptions {
        merge_threshold: 3.0,
        ..Default::default()
    })
    .unwrap()
    .analyze(&sources);
    assert!(loose.grid_points.len() < tight.grid_points.len());
}
