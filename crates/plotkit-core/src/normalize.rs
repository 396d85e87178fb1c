//! Polyline normalization.
//!
//! Moves a [`PolylineSet`] so its bounding box starts at the origin and applies
//! one uniform scale factor to both axes.

use crate::geometry::{Bounds, Point2D, PolylineSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the uniform scale factor is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Explicit percentage, 100 keeps the source size.
    Percent(f64),
    /// Scale so the box width becomes this many millimetres.
    FitWidth(f64),
    /// Largest uniform scale that fits the box inside `width` x `height`.
    Fit { width: f64, height: f64 },
}

impl Default for ScaleMode {
    fn default() -> Self {
        ScaleMode::Percent(100.0)
    }
}

impl ScaleMode {
    /// Scale factor for a box of the given extents. Zero extents count as 1.
    pub fn factor_for(&self, width: f64, height: f64) -> f64 {
        let width = if width == 0.0 { 1.0 } else { width };
        let height = if height == 0.0 { 1.0 } else { height };
        match *self {
            ScaleMode::Percent(percent) => percent / 100.0,
            ScaleMode::FitWidth(target) => target / width,
            ScaleMode::Fit {
                width: target_w,
                height: target_h,
            } => (target_w / width).min(target_h / height),
        }
    }
}

/// Translates and uniformly scales polyline sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolylineNormalizer {
    mode: ScaleMode,
}

impl PolylineNormalizer {
    pub fn new(mode: ScaleMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Normalize `set`, dropping any non-finite points first.
    pub fn normalize(&self, set: &PolylineSet) -> PolylineSet {
        let finite = drop_non_finite(set);
        let Some(bounds) = finite.bounds() else {
            return finite;
        };

        if bounds.is_degenerate() {
            warn!(
                "Degenerate bounding box {:.3} x {:.3}, substituting 1 for the zero extent",
                bounds.width(),
                bounds.height()
            );
        }

        let mut factor = self.mode.factor_for(bounds.width(), bounds.height());
        if !factor.is_finite() || factor <= 0.0 {
            warn!(
                "Invalid scale factor {} for {:?}, keeping original size",
                factor, self.mode
            );
            factor = 1.0;
        }

        debug!(
            "Normalizing {} polylines: bounds {:.3} x {:.3}, factor {:.4}",
            finite.len(),
            bounds.width(),
            bounds.height(),
            factor
        );

        transform(&finite, &bounds, factor)
    }
}

/// Normalize `set` with the given scale mode.
pub fn normalize(set: &PolylineSet, mode: ScaleMode) -> PolylineSet {
    PolylineNormalizer::new(mode).normalize(set)
}

fn transform(set: &PolylineSet, bounds: &Bounds, factor: f64) -> PolylineSet {
    let origin = bounds.min();
    set.iter()
        .map(|polyline| {
            polyline.map_points(|p| {
                Point2D::new((p.x - origin.x) * factor, (p.y - origin.y) * factor)
            })
        })
        .collect()
}

fn drop_non_finite(set: &PolylineSet) -> PolylineSet {
    let mut dropped = 0usize;
    let cleaned: PolylineSet = set
        .iter()
        .map(|polyline| {
            let points: Vec<Point2D> = polyline
                .points()
                .iter()
                .filter(|p| p.is_finite())
                .copied()
                .collect();
            dropped += polyline.len() - points.len();
            points
        })
        .collect();

    if dropped > 0 {
        warn!("Dropped {} non-finite points before normalization", dropped);
    }
    cleaned
}
