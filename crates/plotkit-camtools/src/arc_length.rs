//! Arc-length parameterization of flattened lyon paths.

use lyon::path::iterator::PathIterator;
use lyon::path::{Event, Path};
use plotkit_core::Point2D;

/// Flattening tolerance used when building tables, in local units.
pub const FLATTEN_TOLERANCE: f32 = 0.01;

#[derive(Debug, Clone, Copy)]
struct Segment {
    from: Point2D,
    to: Point2D,
    start: f64,
    length: f64,
}

/// Cumulative length table over the drawn segments of a path.
///
/// Closing segments count toward the length, the jump between two
/// subpaths does not.
#[derive(Debug, Clone, Default)]
pub struct ArcLengthTable {
    segments: Vec<Segment>,
    total: f64,
}

impl ArcLengthTable {
    pub fn from_path(path: &Path, tolerance: f32) -> Self {
        let mut table = Self::default();
        for event in path.iter().flattened(tolerance) {
            match event {
                Event::Line { from, to } => table.push(to_point(from), to_point(to)),
                Event::End {
                    last,
                    first,
                    close: true,
                } => table.push(to_point(last), to_point(first)),
                _ => {}
            }
        }
        table
    }

    fn push(&mut self, from: Point2D, to: Point2D) {
        let length = from.distance_to(&to);
        if length <= 0.0 {
            return;
        }
        self.segments.push(Segment {
            from,
            to,
            start: self.total,
            length,
        });
        self.total += length;
    }

    pub fn total_length(&self) -> f64 {
        self.total
    }

    /// Point at `distance` along the path, clamped to the path's extent.
    pub fn point_at(&self, distance: f64) -> Option<Point2D> {
        let last = self.segments.len().checked_sub(1)?;
        let distance = distance.clamp(0.0, self.total);
        let idx = self
            .segments
            .partition_point(|s| s.start + s.length < distance)
            .min(last);

        let seg = &self.segments[idx];
        let t = ((distance - seg.start) / seg.length).clamp(0.0, 1.0);
        Some(Point2D::new(
            seg.from.x + (seg.to.x - seg.from.x) * t,
            seg.from.y + (seg.to.y - seg.from.y) * t,
        ))
    }
}

fn to_point(p: lyon::math::Point) -> Point2D {
    Point2D::new(p.x as f64, p.y as f64)
}
