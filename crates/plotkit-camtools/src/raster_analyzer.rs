//! Raster Image Analyzer
//!
//! Turns a bitmap into plotter polylines using one of three modes:
//! Sobel edge segments, dark-area hatching, or random stippling.
//! All coordinates are scaled so the image width maps to the requested
//! physical width in millimetres; Y grows downward as in the source image.

use image::{imageops::FilterType, DynamicImage, GrayImage, Luma, RgbaImage};
use plotkit_core::{ConversionResult, GeometrySource, ParameterError, ParameterResult, Point2D, PolylineSet};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Pixels darker than this are hatched.
const HATCH_DARK_LIMIT: u8 = 128;

/// Smallest distance between hatch rays, in working pixels.
pub const MIN_HATCH_STEP_PX: f64 = 1e-3;

/// Default longest side of the working image in pixels.
pub const DEFAULT_WORKING_DIMENSION: u32 = 400;

/// Geometry extraction mode with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RasterMode {
    /// One diagonal micro-segment per Sobel edge pixel
    Edges {
        /// Gradient magnitude above which a pixel is an edge
        threshold: f64,
    },
    /// Parallel strokes over dark areas
    Hatching {
        /// Distance between strokes in mm
        spacing: f64,
        /// Stroke direction in degrees
        angle_deg: f64,
    },
    /// Random diamond dots, denser where darker
    Stippling {
        /// Density 1-10; also sets the sample grid
        density: f64,
        /// Dot diameter in mm
        dot_size: f64,
    },
}

impl Default for RasterMode {
    fn default() -> Self {
        RasterMode::Edges { threshold: 50.0 }
    }
}

impl RasterMode {
    /// Human readable mode label used in header comments.
    pub fn label(&self) -> &'static str {
        match self {
            RasterMode::Edges { .. } => "Edge Detection",
            RasterMode::Hatching { .. } => "Hatching",
            RasterMode::Stippling { .. } => "Stippling",
        }
    }

    pub fn validate(&self) -> ParameterResult<()> {
        match *self {
            RasterMode::Edges { threshold } => {
                ParameterError::check_finite("edge_threshold", threshold)?;
                if threshold < 0.0 {
                    return Err(ParameterError::InvalidValue {
                        name: "edge_threshold".to_string(),
                        reason: "must not be negative".to_string(),
                    });
                }
            }
            RasterMode::Hatching { spacing, angle_deg } => {
                ParameterError::check_positive("hatch_spacing", spacing)?;
                ParameterError::check_finite("hatch_angle", angle_deg)?;
            }
            RasterMode::Stippling { density, dot_size } => {
                ParameterError::check_positive("stipple_density", density)?;
                ParameterError::check_positive("stipple_dot_size", dot_size)?;
            }
        }
        Ok(())
    }
}

/// Luminance of one RGB sample, truncated to a byte.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let l = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    l.clamp(0.0, 255.0) as u8
}

/// Convert an RGBA buffer to grayscale. Alpha is ignored.
pub fn grayscale(image: &RgbaImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        gray.put_pixel(x, y, Luma([luminance(r, g, b)]));
    }
    gray
}

/// Resample so the longer side equals `max_dim`, keeping the aspect ratio.
///
/// Smaller images are upscaled as well.
pub fn fit_working_resolution(image: &RgbaImage, max_dim: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 || max_dim == 0 {
        return image.clone();
    }

    let scale = (max_dim as f64 / w as f64).min(max_dim as f64 / h as f64);
    let new_w = ((w as f64 * scale) as u32).max(1);
    let new_h = ((h as f64 * scale) as u32).max(1);
    if (new_w, new_h) == (w, h) {
        return image.clone();
    }

    debug!("Resampling image {}x{} -> {}x{}", w, h, new_w, new_h);
    image::imageops::resize(image, new_w, new_h, FilterType::Triangle)
}

/// Extract polylines from a grayscale image.
///
/// Stippling draws from the thread-local RNG and is not reproducible.
pub fn convert(gray: &GrayImage, mode: &RasterMode, target_width: f64) -> PolylineSet {
    convert_with_rng(gray, mode, target_width, &mut rand::thread_rng())
}

/// Same as [`convert`] with a caller-supplied random source for stippling.
pub fn convert_with_rng<R: Rng>(
    gray: &GrayImage,
    mode: &RasterMode,
    target_width: f64,
    rng: &mut R,
) -> PolylineSet {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return PolylineSet::new();
    }
    if let Err(e) = mode.validate() {
        warn!("{}; producing no geometry", e);
        return PolylineSet::new();
    }
    if let Err(e) = ParameterError::check_positive("target_width", target_width) {
        warn!("{}; producing no geometry", e);
        return PolylineSet::new();
    }

    let scale = target_width / width as f64;
    if let RasterMode::Hatching { spacing, .. } = *mode {
        let step = spacing / scale;
        if let Err(e) = ParameterError::check_at_least("hatch_step_px", step, MIN_HATCH_STEP_PX) {
            warn!("{}; producing no geometry", e);
            return PolylineSet::new();
        }
    }
    let polylines = match *mode {
        RasterMode::Edges { threshold } => edge_segments(gray, threshold, scale),
        RasterMode::Hatching { spacing, angle_deg } => {
            hatch_strokes(gray, spacing, angle_deg, scale)
        }
        RasterMode::Stippling { density, dot_size } => {
            stipple_dots(gray, density, dot_size, scale, rng)
        }
    };

    debug!(
        "{} produced {} polylines from {}x{} image",
        mode.label(),
        polylines.len(),
        width,
        height
    );
    polylines
}

fn sobel_magnitude(gray: &GrayImage, x: u32, y: u32) -> f64 {
    let p = |dx: i32, dy: i32| -> f64 {
        let px = (x as i32 + dx) as u32;
        let py = (y as i32 + dy) as u32;
        gray.get_pixel(px, py).0[0] as f64
    };

    let gx = -p(-1, -1) - 2.0 * p(-1, 0) - p(-1, 1) + p(1, -1) + 2.0 * p(1, 0) + p(1, 1);
    let gy = -p(-1, -1) - 2.0 * p(0, -1) - p(1, -1) + p(-1, 1) + 2.0 * p(0, 1) + p(1, 1);
    (gx * gx + gy * gy).sqrt()
}

fn edge_segments(gray: &GrayImage, threshold: f64, scale: f64) -> PolylineSet {
    let (width, height) = gray.dimensions();
    let mut set = PolylineSet::new();
    if width < 3 || height < 3 {
        return set;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if sobel_magnitude(gray, x, y) > threshold {
                let (fx, fy) = (x as f64, y as f64);
                set.push_points(vec![
                    Point2D::new(fx * scale, fy * scale),
                    Point2D::new((fx + 1.0) * scale, (fy + 1.0) * scale),
                ]);
            }
        }
    }
    set
}

fn flush_stroke(stroke: &mut Vec<Point2D>, set: &mut PolylineSet) {
    if stroke.len() > 2 {
        set.push_points(std::mem::take(stroke));
    } else {
        stroke.clear();
    }
}

fn hatch_strokes(gray: &GrayImage, spacing: f64, angle_deg: f64, scale: f64) -> PolylineSet {
    let (width, height) = gray.dimensions();
    let (w, h) = (width as i64, height as i64);
    let reach = w + h;
    let step = spacing / scale;
    let (sin, cos) = angle_deg.to_radians().sin_cos();

    let mut set = PolylineSet::new();
    let mut stroke = Vec::new();
    let mut offset = 0.0;
    while offset < reach as f64 {
        for d in 0..reach {
            let d = d as f64;
            let x = (offset + d * cos + 0.5).floor() as i64;
            let y = (d * sin + 0.5).floor() as i64;

            if x < 0 || x >= w || y < 0 || y >= h {
                flush_stroke(&mut stroke, &mut set);
                continue;
            }

            if gray.get_pixel(x as u32, y as u32).0[0] < HATCH_DARK_LIMIT {
                stroke.push(Point2D::new(x as f64 * scale, y as f64 * scale));
            } else {
                flush_stroke(&mut stroke, &mut set);
            }
        }
        flush_stroke(&mut stroke, &mut set);
        offset += step;
    }
    set
}

fn stipple_dots<R: Rng>(
    gray: &GrayImage,
    density: f64,
    dot_size: f64,
    scale: f64,
    rng: &mut R,
) -> PolylineSet {
    let (width, height) = gray.dimensions();
    let grid = ((10.0 / density).floor() as u32).max(2);
    let radius = dot_size / 2.0;
    let weight = density / 5.0;

    let mut set = PolylineSet::new();
    for y in (0..height).step_by(grid as usize) {
        for x in (0..width).step_by(grid as usize) {
            let lum = gray.get_pixel(x, y).0[0] as f64;
            let prob = (255.0 - lum) / 255.0 * weight;
            if rng.gen::<f64>() < prob {
                let cx = x as f64 * scale;
                let cy = y as f64 * scale;
                set.push_points(vec![
                    Point2D::new(cx + radius, cy),
                    Point2D::new(cx, cy + radius),
                    Point2D::new(cx - radius, cy),
                    Point2D::new(cx, cy - radius),
                    Point2D::new(cx + radius, cy),
                ]);
            }
        }
    }
    set
}

/// A bitmap prepared for analysis, usable as a geometry source.
#[derive(Debug, Clone)]
pub struct RasterAnalyzer {
    gray: GrayImage,
    mode: RasterMode,
    target_width: f64,
}

impl RasterAnalyzer {
    /// Build from a grayscale image already at working resolution.
    pub fn new(gray: GrayImage, mode: RasterMode, target_width: f64) -> Self {
        Self {
            gray,
            mode,
            target_width,
        }
    }

    /// Resample to `max_dim` and convert to grayscale.
    pub fn from_rgba(image: &RgbaImage, mode: RasterMode, target_width: f64, max_dim: u32) -> Self {
        let working = fit_working_resolution(image, max_dim);
        Self::new(grayscale(&working), mode, target_width)
    }

    pub fn from_image(image: &DynamicImage, mode: RasterMode, target_width: f64, max_dim: u32) -> Self {
        Self::from_rgba(&image.to_rgba8(), mode, target_width, max_dim)
    }

    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    pub fn mode(&self) -> &RasterMode {
        &self.mode
    }

    /// Run the analysis with a caller-supplied random source.
    pub fn polylines_with_rng<R: Rng>(&self, rng: &mut R) -> PolylineSet {
        convert_with_rng(&self.gray, &self.mode, self.target_width, rng)
    }
}

impl GeometrySource for RasterAnalyzer {
    fn name(&self) -> &'static str {
        "image"
    }

    fn polylines(&self) -> ConversionResult<PolylineSet> {
        Ok(convert(&self.gray, &self.mode, self.target_width))
    }

    fn header_comments(&self) -> Vec<String> {
        vec![format!("Mode: {}", self.mode.label())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 149);
        assert_eq!(luminance(0, 0, 255), 29);
    }

    #[test]
    fn test_grayscale_ignores_alpha() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        let gray = grayscale(&rgba);
        assert!(gray.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_fit_working_resolution() {
        let rgba = RgbaImage::new(800, 400);
        let out = fit_working_resolution(&rgba, 400);
        assert_eq!(out.dimensions(), (400, 200));

        let small = RgbaImage::new(10, 20);
        let out = fit_working_resolution(&small, 400);
        assert_eq!(out.dimensions(), (200, 400));
    }

    #[test]
    fn test_edges_on_black_square() {
        let mut gray = uniform(10, 10, 255);
        for y in 3..7 {
            for x in 3..7 {
                gray.put_pixel(x, y, Luma([0]));
            }
        }
        let set = convert(&gray, &RasterMode::Edges { threshold: 50.0 }, 10.0);
        assert!(!set.is_empty());
        for line in set.iter() {
            assert_eq!(line.len(), 2);
            let (a, b) = (line.first(), line.last());
            assert_eq!(b.x - a.x, 1.0);
            assert_eq!(b.y - a.y, 1.0);
        }
    }

    #[test]
    fn test_edges_skip_border_pixels() {
        let gray = uniform(2, 2, 0);
        let set = convert(&gray, &RasterMode::Edges { threshold: 0.0 }, 100.0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_hatching_light_image_is_empty() {
        let gray = uniform(50, 50, 200);
        let mode = RasterMode::Hatching {
            spacing: 2.0,
            angle_deg: 45.0,
        };
        assert!(convert(&gray, &mode, 50.0).is_empty());
    }

    #[test]
    fn test_hatching_strokes_stay_dark() {
        let mut gray = uniform(40, 40, 255);
        for y in 0..40 {
            for x in 0..20 {
                gray.put_pixel(x, y, Luma([0]));
            }
        }
        let mode = RasterMode::Hatching {
            spacing: 3.0,
            angle_deg: 0.0,
        };
        let set = convert(&gray, &mode, 40.0);
        assert!(!set.is_empty());
        for p in set.points() {
            assert!(p.x < 20.0);
        }
    }

    #[test]
    fn test_hatching_tiny_spacing_yields_empty() {
        let gray = uniform(50, 50, 0);
        let mode = RasterMode::Hatching {
            spacing: 1e-7,
            angle_deg: 45.0,
        };
        assert!(mode.validate().is_ok());
        assert!(convert(&gray, &mode, 50.0).is_empty());
    }

    #[test]
    fn test_hatching_emits_rays_in_offset_order() {
        // two horizontal dark bands, rays running straight down each column
        let mut gray = uniform(10, 20, 255);
        for x in 0..10 {
            for y in (2..6).chain(12..16) {
                gray.put_pixel(x, y, Luma([0]));
            }
        }
        let mode = RasterMode::Hatching {
            spacing: 1.0,
            angle_deg: 90.0,
        };
        let set = convert(&gray, &mode, 10.0);

        let starts: Vec<(f64, f64)> = set.iter().map(|l| (l.first().x, l.first().y)).collect();
        let expected: Vec<(f64, f64)> = (0..10)
            .flat_map(|x| [(x as f64, 2.0), (x as f64, 12.0)])
            .collect();
        assert_eq!(starts, expected);
        assert!(set.iter().all(|l| l.len() == 4));
    }

    #[test]
    fn test_stippling_density_weighted() {
        let black = uniform(40, 40, 0);
        let white = uniform(40, 40, 255);
        let mode = RasterMode::Stippling {
            density: 5.0,
            dot_size: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let dark = convert_with_rng(&black, &mode, 40.0, &mut rng);
        let light = convert_with_rng(&white, &mode, 40.0, &mut rng);

        // grid = 2, so 20x20 samples, all placed at full darkness
        assert_eq!(dark.len(), 400);
        assert!(light.is_empty());
    }

    #[test]
    fn test_stipple_dot_shape() {
        let gray = uniform(1, 1, 0);
        let mode = RasterMode::Stippling {
            density: 10.0,
            dot_size: 2.0,
        };
        let set = convert_with_rng(&gray, &mode, 1.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(set.len(), 1);
        let dot = &set.as_slice()[0];
        assert_eq!(dot.len(), 5);
        assert_eq!(dot.first(), dot.last());
        assert_eq!(dot.points()[1], Point2D::new(0.0, 1.0));
    }

    #[test]
    fn test_invalid_parameters_yield_empty() {
        let gray = uniform(10, 10, 0);
        let mode = RasterMode::Hatching {
            spacing: 0.0,
            angle_deg: 45.0,
        };
        assert!(convert(&gray, &mode, 10.0).is_empty());
        assert!(mode.validate().is_err());
    }

    #[test]
    fn test_zero_dimension_image() {
        let gray = GrayImage::new(0, 0);
        assert!(convert(&gray, &RasterMode::default(), 100.0).is_empty());
    }
}
