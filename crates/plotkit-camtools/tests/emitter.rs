use plotkit_camtools::{emit, MotionInstruction, ToolpathEmitter};
use plotkit_core::{ConversionError, MachineParams, Point2D, PolylineSet};
use proptest::prelude::*;

fn set_of(lines: &[&[(f64, f64)]]) -> PolylineSet {
    lines
        .iter()
        .map(|l| l.iter().map(|&(x, y)| Point2D::new(x, y)).collect::<Vec<_>>())
        .collect()
}

fn count_pen_downs(gcode: &str, z_down: f64) -> usize {
    let marker = format!("G1 Z{} F300", z_down);
    gcode.lines().filter(|l| *l == marker).count()
}

#[test]
fn test_square_with_custom_machine() {
    let set = set_of(&[&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]]);
    let params = MachineParams::new(-1.0, 3.0, 800.0, 2400.0);
    let toolpath = emit(&set, &params, None, None).unwrap();
    let lines: Vec<String> = toolpath.lines().collect();

    let start = lines.iter().position(|l| l == "G0 X0.000 Y0.000").unwrap();
    assert_eq!(
        &lines[start..start + 8],
        &[
            "G0 X0.000 Y0.000",
            "G1 Z-1 F300",
            "G1 F800 ; Set print speed",
            "G1 X10.000 Y0.000",
            "G1 X10.000 Y10.000",
            "G1 X0.000 Y10.000",
            "G1 X0.000 Y0.000",
            "G0 Z3 F2400",
        ]
    );
    assert!(lines.contains(&"G0 F2400 ; Set travel speed".to_string()));
    assert!((toolpath.summary().pen_down_distance - 40.0).abs() < 1e-9);
}

#[test]
fn test_one_pen_down_per_polyline() {
    let set = set_of(&[
        &[(0.0, 0.0), (1.0, 1.0)],
        &[(5.0, 5.0)],
        &[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0)],
    ]);
    let params = MachineParams::default();
    let gcode = emit(&set, &params, None, None).unwrap().to_gcode();
    assert_eq!(count_pen_downs(&gcode, params.z_down), 3);
}

#[test]
fn test_custom_prologue_and_epilogue_verbatim() {
    let set = set_of(&[&[(0.0, 0.0), (1.0, 0.0)]]);
    let params = MachineParams::default();
    let toolpath = emit(&set, &params, Some("M3 S0\nG4 P1"), Some("M5")).unwrap();
    let lines: Vec<String> = toolpath.lines().collect();

    assert_eq!(lines[0], "M3 S0");
    assert_eq!(lines[1], "G4 P1");
    assert_eq!(lines.last().map(String::as_str), Some("M5"));
    assert!(!lines.iter().any(|l| l.starts_with("G28")));
}

#[test]
fn test_header_comments_first() {
    let set = set_of(&[&[(0.0, 0.0), (1.0, 0.0)]]);
    let toolpath = ToolpathEmitter::new(MachineParams::default())
        .with_header_comments(["Generated by test", "Mode: Hatching"])
        .emit(&set, None, None)
        .unwrap();
    assert_eq!(
        toolpath.instructions()[0],
        MotionInstruction::Comment("Generated by test".to_string())
    );
    assert!(toolpath.to_gcode().starts_with("; Generated by test\n; Mode: Hatching\nG28"));
}

#[test]
fn test_empty_set_rejected() {
    let err = emit(&PolylineSet::new(), &MachineParams::default(), None, None).unwrap_err();
    assert!(matches!(err, ConversionError::NoGeometryToEmit));
}

#[test]
fn test_inverted_pen_heights_rejected() {
    let set = set_of(&[&[(0.0, 0.0), (1.0, 0.0)]]);
    let params = MachineParams::new(5.0, 0.0, 1000.0, 3000.0);
    let err = emit(&set, &params, None, None).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidParameters(_)));
}

fn coordinate_words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
        .filter(|w| w.starts_with('X') || w.starts_with('Y'))
}

proptest! {
    #[test]
    fn coordinates_have_three_decimals(
        lines in prop::collection::vec(
            prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..8),
            1..6,
        )
    ) {
        let set: PolylineSet = lines
            .iter()
            .map(|l| l.iter().map(|&(x, y)| Point2D::new(x, y)).collect::<Vec<_>>())
            .collect();
        let gcode = emit(&set, &MachineParams::default(), None, None).unwrap().to_gcode();

        for line in gcode.lines() {
            for word in coordinate_words(line) {
                let (_, decimals) = word.split_once('.').unwrap();
                prop_assert_eq!(decimals.len(), 3, "bad word {} in {}", word, line);
                prop_assert!(!word[1..].starts_with("-0.000"));
            }
        }
        prop_assert_eq!(count_pen_downs(&gcode, 0.0), set.len());
    }
}
