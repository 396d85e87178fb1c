use image::{GrayImage, Luma, Rgba, RgbaImage};
use plotkit_camtools::raster_analyzer::{convert, convert_with_rng};
use plotkit_camtools::{grayscale, RasterAnalyzer, RasterMode};
use plotkit_core::GeometrySource;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn gray_image() -> impl Strategy<Value = GrayImage> {
    (3u32..16, 3u32..16).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), (w * h) as usize).prop_map(move |data| {
            GrayImage::from_raw(w, h, data).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn grayscale_luminance_in_range(data in prop::collection::vec(any::<u8>(), 4 * 16)) {
        let rgba = RgbaImage::from_raw(4, 4, data).unwrap();
        let gray = grayscale(&rgba);
        for (src, dst) in rgba.pixels().zip(gray.pixels()) {
            let [r, g, b, _] = src.0;
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            prop_assert!(dst.0[0] <= max);
            prop_assert!(dst.0[0] >= min.saturating_sub(1));
        }
    }

    #[test]
    fn raising_threshold_never_adds_edges(
        gray in gray_image(),
        low in 0.0f64..500.0,
        delta in 0.0f64..500.0,
    ) {
        let few = convert(&gray, &RasterMode::Edges { threshold: low + delta }, 50.0);
        let many = convert(&gray, &RasterMode::Edges { threshold: low }, 50.0);
        prop_assert!(few.len() <= many.len());
    }
}

#[test]
fn test_black_3x3_has_no_edges() {
    let gray = GrayImage::from_pixel(3, 3, Luma([0]));
    let set = convert(&gray, &RasterMode::Edges { threshold: 50.0 }, 100.0);
    assert!(set.is_empty());
}

#[test]
fn test_edge_segments_follow_scale() {
    // vertical boundary between a dark left half and light right half
    let gray = GrayImage::from_fn(8, 8, |x, _| if x < 4 { Luma([0]) } else { Luma([255]) });
    let set = convert(&gray, &RasterMode::Edges { threshold: 50.0 }, 16.0);
    assert!(!set.is_empty());
    for line in set.iter() {
        let a = line.first();
        assert!(a.x == 6.0 || a.x == 8.0, "unexpected edge column at {}", a.x);
        assert_eq!(line.last().x - a.x, 2.0);
    }
}

#[test]
fn test_hatching_dark_image_line_count() {
    let gray = GrayImage::from_pixel(100, 100, Luma([0]));
    let mode = RasterMode::Hatching {
        spacing: 2.0,
        angle_deg: 135.0,
    };
    let set = convert(&gray, &mode, 100.0);
    let expected = (100.0 + 100.0) / 2.0;
    let count = set.len() as f64;
    assert!(
        count >= expected * 0.9 && count <= expected,
        "got {} strokes, expected about {}",
        count,
        expected
    );
}

#[test]
fn test_hatching_light_image_is_empty() {
    let gray = GrayImage::from_pixel(60, 40, Luma([128]));
    let mode = RasterMode::Hatching {
        spacing: 1.0,
        angle_deg: 45.0,
    };
    assert!(convert(&gray, &mode, 60.0).is_empty());
}

#[test]
fn test_hatch_strokes_have_more_than_two_points() {
    let gray = GrayImage::from_pixel(30, 30, Luma([10]));
    let mode = RasterMode::Hatching {
        spacing: 1.5,
        angle_deg: 30.0,
    };
    let set = convert(&gray, &mode, 30.0);
    assert!(set.iter().all(|line| line.len() > 2));
}

#[test]
fn test_stippling_is_seedable() {
    let gray = GrayImage::from_pixel(40, 40, Luma([100]));
    let mode = RasterMode::Stippling {
        density: 5.0,
        dot_size: 0.5,
    };
    let a = convert_with_rng(&gray, &mode, 40.0, &mut StdRng::seed_from_u64(42));
    let b = convert_with_rng(&gray, &mode, 40.0, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    assert!(!a.is_empty());
    assert!(a.len() < 400);
}

#[test]
fn test_analyzer_as_source() {
    let mut rgba = RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 255]));
    for x in 5..15 {
        for y in 3..7 {
            rgba.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    let analyzer = RasterAnalyzer::from_rgba(
        &rgba,
        RasterMode::Edges { threshold: 50.0 },
        100.0,
        400,
    );
    assert_eq!(analyzer.gray().dimensions(), (400, 200));
    assert_eq!(analyzer.name(), "image");
    assert_eq!(analyzer.header_comments(), vec!["Mode: Edge Detection".to_string()]);

    let set = analyzer.polylines().unwrap();
    assert!(!set.is_empty());
    let bounds = set.bounds().unwrap();
    assert!(bounds.max_x <= 100.0);
}
