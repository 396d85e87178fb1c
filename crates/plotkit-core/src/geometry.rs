//! Geometry data model shared by every geometry source.
//!
//! A [`PolylineSet`] is the unit passed between sources, the normalizer and the
//! toolpath emitter. Its order is the draw order and is never changed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 2D point in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculate distance to another point
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A non-empty ordered sequence of points connected by straight segments.
///
/// Serialized as a bare point array; deserializing an empty array fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct Polyline {
    points: Vec<Point2D>,
}

impl TryFrom<Vec<Point2D>> for Polyline {
    type Error = &'static str;

    fn try_from(points: Vec<Point2D>) -> Result<Self, Self::Error> {
        Self::new(points).ok_or("a polyline needs at least one point")
    }
}

impl From<Polyline> for Vec<Point2D> {
    fn from(polyline: Polyline) -> Self {
        polyline.points
    }
}

impl Polyline {
    /// Builds a polyline, returning `None` for an empty point list.
    pub fn new(points: Vec<Point2D>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point2D {
        self.points[0]
    }

    pub fn last(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }

    /// Applies `f` to every point.
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: FnMut(&Point2D) -> Point2D,
    {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds over an iterator of points, `None` when it yields nothing.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grow to contain `p`.
    pub fn include(&mut self, p: &Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Point2D {
        Point2D::new(self.min_x, self.min_y)
    }

    /// True when either extent is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// Ordered collection of polylines; order is draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolylineSet {
    polylines: Vec<Polyline>,
}

impl PolylineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    /// Appends the points as a polyline, ignoring an empty list.
    pub fn push_points(&mut self, points: Vec<Point2D>) {
        if let Some(polyline) = Polyline::new(points) {
            self.polylines.push(polyline);
        }
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polyline> {
        self.polylines.iter()
    }

    pub fn as_slice(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Total number of points across all polylines.
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(Polyline::len).sum()
    }

    /// All points in draw order.
    pub fn points(&self) -> impl Iterator<Item = &Point2D> {
        self.polylines.iter().flat_map(|p| p.points().iter())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points())
    }

    pub fn extend(&mut self, other: PolylineSet) {
        self.polylines.extend(other.polylines);
    }
}

impl FromIterator<Polyline> for PolylineSet {
    fn from_iter<I: IntoIterator<Item = Polyline>>(iter: I) -> Self {
        Self {
            polylines: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Vec<Point2D>> for PolylineSet {
    fn from_iter<I: IntoIterator<Item = Vec<Point2D>>>(iter: I) -> Self {
        Self {
            polylines: iter.into_iter().filter_map(Polyline::new).collect(),
        }
    }
}

impl IntoIterator for PolylineSet {
    type Item = Polyline;
    type IntoIter = std::vec::IntoIter<Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.polylines.into_iter()
    }
}

impl<'a> IntoIterator for &'a PolylineSet {
    type Item = &'a Polyline;
    type IntoIter = std::slice::Iter<'a, Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.polylines.iter()
    }
}
