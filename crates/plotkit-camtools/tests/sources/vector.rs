use plotkit_camtools::{SvgDocument, VectorPathSampler, VectorSource};
use plotkit_core::{ConversionError, GeometrySource, ParameterError};

const TEXT_ONLY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
  <text x="10" y="20">Hello</text>
  <text x="10" y="40"><tspan>World</tspan></text>
  <image href="logo.png" width="10" height="10"/>
</svg>"#;

#[test]
fn test_text_only_svg_reports_excluded_content() {
    let doc = SvgDocument::parse(TEXT_ONLY).unwrap();
    let err = VectorPathSampler::default().sample(&doc).unwrap_err();
    match err {
        ConversionError::EmptyGeometry(report) => {
            assert_eq!(report.text_elements, 3);
            assert_eq!(report.embedded_images, 1);
            assert_eq!(report.use_references, 0);
            assert!(report.has_excluded_content());
            let hints = report.remediation_hints();
            assert!(hints.iter().any(|h| h.contains("text")));
            assert!(hints.iter().any(|h| h.contains("image")));
        }
        other => panic!("expected EmptyGeometry, got {:?}", other),
    }
}

#[test]
fn test_translated_rect_sampled_in_root_space() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
      <g transform="translate(10 20)">
        <rect x="0" y="0" width="10" height="5"/>
      </g>
    </svg>"#;
    let doc = SvgDocument::parse(svg).unwrap();
    let set = VectorPathSampler::new(1.0).sample(&doc).unwrap();
    assert_eq!(set.len(), 1);

    let bounds = set.bounds().unwrap();
    assert!((bounds.min_x - 10.0).abs() < 1e-3);
    assert!((bounds.min_y - 20.0).abs() < 1e-3);
    assert!((bounds.max_x - 20.0).abs() < 1e-3);
    assert!((bounds.max_y - 25.0).abs() < 1e-3);

    // perimeter 30 at step 1 gives 31 samples ending back at the start
    let outline = &set.as_slice()[0];
    assert_eq!(outline.len(), 31);
    assert!(outline.first().distance_to(&outline.last()) < 1e-3);
}

#[test]
fn test_hidden_and_definition_shapes_skipped() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
      <defs><circle id="c" cx="5" cy="5" r="4"/></defs>
      <g style="display:none"><line x1="0" y1="0" x2="10" y2="0"/></g>
      <line x1="0" y1="10" x2="10" y2="10"/>
      <use href="#c"/>
    </svg>"##;
    let doc = SvgDocument::parse(svg).unwrap();
    let set = VectorPathSampler::default().sample(&doc).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.points().all(|p| (p.y - 10.0).abs() < 1e-3));
}

#[test]
fn test_document_order_preserved() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
      <line x1="0" y1="30" x2="5" y2="30"/>
      <line x1="0" y1="10" x2="5" y2="10"/>
      <line x1="0" y1="20" x2="5" y2="20"/>
    </svg>"#;
    let doc = SvgDocument::parse(svg).unwrap();
    let set = VectorPathSampler::default().sample(&doc).unwrap();
    let ys: Vec<f64> = set.iter().map(|l| l.first().y.round()).collect();
    assert_eq!(ys, vec![30.0, 10.0, 20.0]);
}

#[test]
fn test_tiny_step_rejected_before_sampling() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><line x1="0" y1="0" x2="10" y2="0"/></svg>"#;
    let doc = SvgDocument::parse(svg).unwrap();
    let err = VectorPathSampler::new(1e-300).sample(&doc).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::InvalidParameters(ParameterError::OutOfRange { .. })
    ));
}

#[test]
fn test_malformed_document_rejected() {
    let err = SvgDocument::parse("<svg><path d='M0 0 L1 1'></svg").unwrap_err();
    assert!(matches!(err, ConversionError::MalformedDocument(_)));
}

#[test]
fn test_vector_source_headers() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><circle cx="0" cy="0" r="10"/></svg>"#;
    let source = VectorSource::new(
        SvgDocument::parse(svg).unwrap(),
        VectorPathSampler::default(),
        50.0,
    );
    assert_eq!(source.name(), "svg");
    assert_eq!(source.header_comments(), vec!["Scale: 50%".to_string()]);

    let set = source.polylines().unwrap();
    // circumference ~62.8 at 0.5 steps
    let points = set.as_slice()[0].len();
    assert!((125..=128).contains(&points), "got {} samples", points);
}
