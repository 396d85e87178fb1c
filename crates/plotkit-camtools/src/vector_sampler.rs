//! Vector Path Sampler
//!
//! Walks the drawable nodes of a shape tree and samples each one at a fixed
//! arc-length step, mapping every sample into root coordinates.

use lyon::math::Transform;
use plotkit_core::{
    ConversionError, ConversionResult, EmptyGeometryReport, GeometrySource, ParameterError,
    Point2D, Polyline, PolylineSet,
};
use tracing::{debug, warn};

use crate::svg_document::SvgDocument;

/// A node of a shape tree that can be measured and sampled.
pub trait DrawableNode {
    /// Length of the whole outline in local units.
    fn total_length(&self) -> f64;

    /// Point at `distance` along the outline, in local coordinates.
    fn point_at_length(&self, distance: f64) -> Option<Point2D>;

    /// Transform from local coordinates to root coordinates.
    fn root_transform(&self) -> Transform;

    /// False for hidden nodes and nodes inside definition subtrees.
    fn is_drawable(&self) -> bool {
        true
    }
}

fn apply(transform: &Transform, p: Point2D) -> Point2D {
    let (m11, m12) = (transform.m11 as f64, transform.m12 as f64);
    let (m21, m22) = (transform.m21 as f64, transform.m22 as f64);
    let (m31, m32) = (transform.m31 as f64, transform.m32 as f64);
    Point2D::new(p.x * m11 + p.y * m21 + m31, p.x * m12 + p.y * m22 + m32)
}

/// Samples drawable nodes into polylines.
#[derive(Debug, Clone, Copy)]
pub struct VectorPathSampler {
    step: f64,
}

impl Default for VectorPathSampler {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
        }
    }
}

impl VectorPathSampler {
    /// Arc-length distance between samples.
    pub const DEFAULT_STEP: f64 = 0.5;

    /// Smallest accepted sample step.
    pub const MIN_STEP: f64 = 1e-3;

    /// Nodes needing more samples than this are skipped.
    pub const MAX_SAMPLES_PER_NODE: usize = 10_000_000;

    pub fn new(step: f64) -> Self {
        Self { step }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample one node. Returns `None` for undrawable or zero-length nodes.
    pub fn sample_node<N: DrawableNode + ?Sized>(&self, node: &N) -> Option<Polyline> {
        if !node.is_drawable() {
            return None;
        }
        let length = node.total_length();
        if length.is_nan() || length <= 0.0 {
            return None;
        }

        let ratio = (length / self.step).floor();
        if !ratio.is_finite() || ratio < 0.0 || ratio >= Self::MAX_SAMPLES_PER_NODE as f64 {
            warn!(
                "Skipping path of length {} at step {}: too many samples",
                length, self.step
            );
            return None;
        }

        let transform = node.root_transform();
        let count = ratio as usize;
        let mut points = Vec::with_capacity(count + 2);
        let mut last_distance = 0.0;
        for k in 0..=count {
            let distance = k as f64 * self.step;
            if distance > length {
                break;
            }
            if let Some(p) = node.point_at_length(distance) {
                points.push(apply(&transform, p));
                last_distance = distance;
            }
        }
        if last_distance < length {
            if let Some(p) = node.point_at_length(length) {
                points.push(apply(&transform, p));
            }
        }
        Polyline::new(points)
    }

    /// Sample every qualifying node in order.
    ///
    /// `diagnostics` is only consulted when nothing qualifies.
    pub fn sample_nodes<'a, N, I, D>(&self, nodes: I, diagnostics: D) -> ConversionResult<PolylineSet>
    where
        N: DrawableNode + 'a,
        I: IntoIterator<Item = &'a N>,
        D: FnOnce() -> EmptyGeometryReport,
    {
        ParameterError::check_positive("sample_step", self.step)?;
        ParameterError::check_at_least("sample_step", self.step, Self::MIN_STEP)?;

        let mut set = PolylineSet::new();
        let mut skipped = 0usize;
        for node in nodes {
            match self.sample_node(node) {
                Some(polyline) => set.push(polyline),
                None => skipped += 1,
            }
        }

        if set.is_empty() {
            let report = diagnostics();
            warn!("No drawable paths found ({})", report);
            return Err(ConversionError::EmptyGeometry(report));
        }

        debug!(
            "Sampled {} polylines ({} points), skipped {} nodes",
            set.len(),
            set.point_count(),
            skipped
        );
        Ok(set)
    }

    /// Sample all shapes of a parsed document.
    pub fn sample(&self, document: &SvgDocument) -> ConversionResult<PolylineSet> {
        self.sample_nodes(document.shapes(), || document.diagnostics().clone())
    }
}

/// A parsed SVG document usable as a geometry source.
#[derive(Debug, Clone)]
pub struct VectorSource {
    document: SvgDocument,
    sampler: VectorPathSampler,
    scale_percent: f64,
}

impl VectorSource {
    pub fn new(document: SvgDocument, sampler: VectorPathSampler, scale_percent: f64) -> Self {
        Self {
            document,
            sampler,
            scale_percent,
        }
    }

    pub fn document(&self) -> &SvgDocument {
        &self.document
    }

    pub fn scale_percent(&self) -> f64 {
        self.scale_percent
    }
}

impl GeometrySource for VectorSource {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn polylines(&self) -> ConversionResult<PolylineSet> {
        self.sampler.sample(&self.document)
    }

    fn header_comments(&self) -> Vec<String> {
        vec![format!("Scale: {}%", self.scale_percent)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight segment from the origin along +X.
    struct Segment {
        length: f64,
        transform: Transform,
        drawable: bool,
    }

    impl Segment {
        fn new(length: f64) -> Self {
            Self {
                length,
                transform: Transform::identity(),
                drawable: true,
            }
        }
    }

    impl DrawableNode for Segment {
        fn total_length(&self) -> f64 {
            self.length
        }

        fn point_at_length(&self, distance: f64) -> Option<Point2D> {
            Some(Point2D::new(distance.min(self.length), 0.0))
        }

        fn root_transform(&self) -> Transform {
            self.transform
        }

        fn is_drawable(&self) -> bool {
            self.drawable
        }
    }

    #[test]
    fn test_terminal_point_included() {
        let sampler = VectorPathSampler::default();
        let line = sampler.sample_node(&Segment::new(1.2)).unwrap();
        let xs: Vec<f64> = line.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.2]);
    }

    #[test]
    fn test_terminal_point_not_duplicated() {
        let sampler = VectorPathSampler::default();
        let line = sampler.sample_node(&Segment::new(1.0)).unwrap();
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn test_points_are_transformed() {
        let mut node = Segment::new(1.0);
        node.transform = Transform::scale(2.0, 2.0).then_translate(lyon::math::vector(10.0, 5.0));
        let line = VectorPathSampler::default().sample_node(&node).unwrap();
        assert_eq!(line.first(), Point2D::new(10.0, 5.0));
        assert_eq!(line.last(), Point2D::new(12.0, 5.0));
    }

    #[test]
    fn test_skips_zero_length_and_hidden() {
        let mut hidden = Segment::new(3.0);
        hidden.drawable = false;
        let nodes = vec![Segment::new(0.0), hidden, Segment::new(2.0)];
        let set = VectorPathSampler::default()
            .sample_nodes(&nodes, EmptyGeometryReport::default)
            .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_geometry_carries_report() {
        let nodes = vec![Segment::new(0.0)];
        let err = VectorPathSampler::default()
            .sample_nodes(&nodes, || EmptyGeometryReport {
                text_elements: 4,
                ..Default::default()
            })
            .unwrap_err();
        match err {
            ConversionError::EmptyGeometry(report) => assert_eq!(report.text_elements, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_step() {
        let nodes = vec![Segment::new(2.0)];
        let err = VectorPathSampler::new(0.0)
            .sample_nodes(&nodes, EmptyGeometryReport::default)
            .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidParameters(_)));
    }

    #[test]
    fn test_tiny_step_rejected_as_out_of_range() {
        let nodes = vec![Segment::new(10.0)];
        let err = VectorPathSampler::new(1e-300)
            .sample_nodes(&nodes, EmptyGeometryReport::default)
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidParameters(ParameterError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_oversampled_node_skipped() {
        let sampler = VectorPathSampler::new(1e-300);
        assert!(sampler.sample_node(&Segment::new(10.0)).is_none());
        assert!(sampler.sample_node(&Segment::new(f64::INFINITY)).is_none());
    }
}
