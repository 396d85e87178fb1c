//! SVG Shape Tree
//!
//! Parses an SVG document into drawable shape nodes. Each node carries its
//! local outline as a lyon [`Path`], the transform composed from the root
//! down, and whether it is visible. Element counts that explain an empty
//! result (text, embedded images, clones) are collected along the way.
//!
//! Visibility comes from presentation attributes and inline `style` only;
//! `<style>` sheets and `class` selectors are not applied.

use std::str::FromStr;

use lyon::geom::{Arc, QuadraticBezierSegment};
use lyon::math::{point, vector, Angle, Transform};
use lyon::path::{path::Builder, Path, Winding};
use plotkit_core::{ConversionError, ConversionResult, EmptyGeometryReport, Point2D};
use svgtypes::{PointsParser, SimplePathSegment, SimplifyingPathParser};
use tracing::{debug, warn};

use crate::arc_length::{ArcLengthTable, FLATTEN_TOLERANCE};
use crate::vector_sampler::DrawableNode;

/// Element names converted to outlines.
pub const SHAPE_ELEMENTS: [&str; 7] = [
    "path", "rect", "circle", "ellipse", "line", "polyline", "polygon",
];

/// Subtrees that never render directly.
const DEFINITION_ELEMENTS: [&str; 3] = ["defs", "symbol", "clipPath"];

const DEFAULT_DIMENSION: f64 = 100.0;

/// Why a shape node is or is not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeVisibility {
    Visible,
    /// `display:none`, `visibility:hidden` or `opacity:0` applies
    Hidden,
    /// Inside `defs`, `symbol` or `clipPath`
    InDefinitions,
}

/// One shape element with its outline in local coordinates.
#[derive(Debug, Clone)]
pub struct ShapeNode {
    tag: String,
    path: Path,
    transform: Transform,
    visibility: NodeVisibility,
    table: ArcLengthTable,
}

impl ShapeNode {
    fn new(tag: &str, path: Path, transform: Transform, visibility: NodeVisibility) -> Self {
        let table = ArcLengthTable::from_path(&path, FLATTEN_TOLERANCE);
        Self {
            tag: tag.to_string(),
            path,
            transform,
            visibility,
            table,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn visibility(&self) -> NodeVisibility {
        self.visibility
    }
}

impl DrawableNode for ShapeNode {
    fn total_length(&self) -> f64 {
        self.table.total_length()
    }

    fn point_at_length(&self, distance: f64) -> Option<Point2D> {
        self.table.point_at(distance)
    }

    fn root_transform(&self) -> Transform {
        self.transform
    }

    fn is_drawable(&self) -> bool {
        self.visibility == NodeVisibility::Visible
    }
}

/// A parsed SVG document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    shapes: Vec<ShapeNode>,
    diagnostics: EmptyGeometryReport,
}

impl SvgDocument {
    /// Parse SVG source text.
    ///
    /// XML syntax errors are reported as `MalformedDocument`; a well-formed
    /// document whose root is not `svg` is rejected as the wrong input type.
    pub fn parse(source: &str) -> ConversionResult<Self> {
        let doc = roxmltree::Document::parse(source)
            .map_err(|e| ConversionError::MalformedDocument(e.to_string()))?;

        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(ConversionError::InputRejected(format!(
                "expected an <svg> root element, found <{}>",
                root.tag_name().name()
            )));
        }

        let (width, height) = document_dimensions(&root);
        let mut collector = Collector::default();
        let root_ctx = WalkContext::default().enter(&root);
        collector.walk(&root, &root_ctx);

        debug!(
            "Parsed SVG {}x{}: {} shape elements, {} distinct tags",
            width,
            height,
            collector.shapes.len(),
            collector.report.tags_found.len()
        );

        Ok(Self {
            width,
            height,
            shapes: collector.shapes,
            diagnostics: collector.report,
        })
    }

    /// Width from `viewBox`, else `width`, else 100.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height from `viewBox`, else `height`, else 100.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Every shape element in document order, including hidden ones.
    pub fn shapes(&self) -> &[ShapeNode] {
        &self.shapes
    }

    /// Counts of excluded element categories and the tags seen.
    pub fn diagnostics(&self) -> &EmptyGeometryReport {
        &self.diagnostics
    }
}

fn document_dimensions(root: &roxmltree::Node) -> (f64, f64) {
    if let Some(vb) = root
        .attribute("viewBox")
        .and_then(|v| svgtypes::ViewBox::from_str(v).ok())
    {
        if vb.w > 0.0 && vb.h > 0.0 {
            return (vb.w, vb.h);
        }
    }
    let w = length_attr(root, "width").filter(|v| *v > 0.0);
    let h = length_attr(root, "height").filter(|v| *v > 0.0);
    (
        w.unwrap_or(DEFAULT_DIMENSION),
        h.unwrap_or(DEFAULT_DIMENSION),
    )
}

fn length_attr(node: &roxmltree::Node, name: &str) -> Option<f64> {
    node.attribute(name)
        .and_then(|v| svgtypes::Length::from_str(v).ok())
        .map(|l| l.number)
}

fn attr_or_zero(node: &roxmltree::Node, name: &str) -> f64 {
    length_attr(node, name).unwrap_or(0.0)
}

/// Looks a property up in the inline `style` first, then the presentation attribute.
/// `0.5` or `50%`
fn parse_opacity(value: &str) -> Option<f64> {
    let value = value.trim();
    match value.strip_suffix('%') {
        Some(percent) => percent.trim_end().parse::<f64>().ok().map(|v| v / 100.0),
        None => value.parse::<f64>().ok(),
    }
}

fn style_property<'a, 'input>(node: &roxmltree::Node<'a, 'input>, name: &str) -> Option<&'a str> {
    let inline = node.attribute("style").and_then(|style| {
        style
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .filter(|(key, _)| key.trim() == name)
            .map(|(_, value)| value.trim())
            .last()
    });
    inline
        .or_else(|| node.attribute(name).map(str::trim))
        .map(|v| v.trim_end_matches("!important").trim())
}

fn local_transform(node: &roxmltree::Node) -> Transform {
    let Some(value) = node.attribute("transform") else {
        return Transform::identity();
    };
    match svgtypes::Transform::from_str(value) {
        Ok(t) => Transform::new(
            t.a as f32, t.b as f32, t.c as f32, t.d as f32, t.e as f32, t.f as f32,
        ),
        Err(e) => {
            warn!("Ignoring invalid transform '{}': {}", value, e);
            Transform::identity()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WalkContext {
    transform: Transform,
    hidden: bool,
    visibility_hidden: bool,
    in_definitions: bool,
}

impl Default for WalkContext {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            hidden: false,
            visibility_hidden: false,
            in_definitions: false,
        }
    }
}

impl WalkContext {
    /// Context for `node` given this context as its parent's.
    fn enter(&self, node: &roxmltree::Node) -> Self {
        let mut ctx = *self;
        ctx.transform = local_transform(node).then(&self.transform);

        if style_property(node, "display") == Some("none") {
            ctx.hidden = true;
        }
        if let Some(opacity) = style_property(node, "opacity").and_then(parse_opacity) {
            if opacity <= 0.0 {
                ctx.hidden = true;
            }
        }
        match style_property(node, "visibility") {
            Some("hidden") | Some("collapse") => ctx.visibility_hidden = true,
            Some("visible") => ctx.visibility_hidden = false,
            _ => {}
        }
        if DEFINITION_ELEMENTS.contains(&node.tag_name().name()) {
            ctx.in_definitions = true;
        }
        ctx
    }

    fn visibility(&self) -> NodeVisibility {
        if self.in_definitions {
            NodeVisibility::InDefinitions
        } else if self.hidden || self.visibility_hidden {
            NodeVisibility::Hidden
        } else {
            NodeVisibility::Visible
        }
    }
}

#[derive(Default)]
struct Collector {
    shapes: Vec<ShapeNode>,
    report: EmptyGeometryReport,
}

impl Collector {
    fn walk(&mut self, node: &roxmltree::Node, ctx: &WalkContext) {
        for child in node.children().filter(|n| n.is_element()) {
            let name = child.tag_name().name();
            self.record(name);

            let child_ctx = ctx.enter(&child);
            if SHAPE_ELEMENTS.contains(&name) {
                match build_outline(&child, name) {
                    Some(path) => self.shapes.push(ShapeNode::new(
                        name,
                        path,
                        child_ctx.transform,
                        child_ctx.visibility(),
                    )),
                    None => debug!("Skipping <{}> without usable geometry", name),
                }
            }
            self.walk(&child, &child_ctx);
        }
    }

    fn record(&mut self, name: &str) {
        match name {
            "text" | "tspan" => self.report.text_elements += 1,
            "image" => self.report.embedded_images += 1,
            "use" => self.report.use_references += 1,
            _ => {}
        }
        if !self.report.tags_found.iter().any(|t| t == name) {
            self.report.tags_found.push(name.to_string());
        }
    }
}

fn build_outline(node: &roxmltree::Node, name: &str) -> Option<Path> {
    match name {
        "path" => node.attribute("d").and_then(path_outline),
        "rect" => rect_outline(node),
        "circle" => {
            let r = attr_or_zero(node, "r");
            if r <= 0.0 {
                return None;
            }
            let mut builder = Path::builder();
            builder.add_circle(
                point(attr_or_zero(node, "cx") as f32, attr_or_zero(node, "cy") as f32),
                r as f32,
                Winding::Positive,
            );
            Some(builder.build())
        }
        "ellipse" => {
            let rx = length_attr(node, "rx");
            let ry = length_attr(node, "ry");
            let (rx, ry) = match (rx, ry) {
                (Some(rx), Some(ry)) => (rx, ry),
                (Some(r), None) | (None, Some(r)) => (r, r),
                (None, None) => return None,
            };
            if rx <= 0.0 || ry <= 0.0 {
                return None;
            }
            let mut builder = Path::builder();
            builder.add_ellipse(
                point(attr_or_zero(node, "cx") as f32, attr_or_zero(node, "cy") as f32),
                vector(rx as f32, ry as f32),
                Angle::radians(0.0),
                Winding::Positive,
            );
            Some(builder.build())
        }
        "line" => {
            let mut builder = Path::builder();
            builder.begin(point(attr_or_zero(node, "x1") as f32, attr_or_zero(node, "y1") as f32));
            builder.line_to(point(attr_or_zero(node, "x2") as f32, attr_or_zero(node, "y2") as f32));
            builder.end(false);
            Some(builder.build())
        }
        "polyline" | "polygon" => {
            let points: Vec<(f64, f64)> = PointsParser::from(node.attribute("points")?).collect();
            let (first, rest) = points.split_first()?;
            let mut builder = Path::builder();
            builder.begin(point(first.0 as f32, first.1 as f32));
            for &(x, y) in rest {
                builder.line_to(point(x as f32, y as f32));
            }
            builder.end(name == "polygon");
            Some(builder.build())
        }
        _ => None,
    }
}

/// Build a path from `d` data. Parsing stops at the first bad segment.
fn path_outline(data: &str) -> Option<Path> {
    let mut builder = Path::builder();
    let mut open = false;
    let mut any = false;
    let mut start = point(0.0, 0.0);
    let mut current = point(0.0, 0.0);

    for segment in SimplifyingPathParser::from(data) {
        let segment = match segment {
            Ok(s) => s,
            Err(e) => {
                warn!("Path data error, keeping segments parsed so far: {}", e);
                break;
            }
        };

        match segment {
            SimplePathSegment::MoveTo { x, y } => {
                if open {
                    builder.end(false);
                }
                current = point(x as f32, y as f32);
                start = current;
                builder.begin(current);
                open = true;
                any = true;
                continue;
            }
            SimplePathSegment::ClosePath => {
                if open {
                    builder.end(true);
                    open = false;
                }
                current = start;
                continue;
            }
            _ => {}
        }

        if !open {
            builder.begin(current);
            start = current;
            open = true;
            any = true;
        }

        match segment {
            SimplePathSegment::LineTo { x, y } => {
                current = point(x as f32, y as f32);
                builder.line_to(current);
            }
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                current = point(x as f32, y as f32);
                builder.quadratic_bezier_to(point(x1 as f32, y1 as f32), current);
            }
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                current = point(x as f32, y as f32);
                builder.cubic_bezier_to(
                    point(x1 as f32, y1 as f32),
                    point(x2 as f32, y2 as f32),
                    current,
                );
            }
            SimplePathSegment::MoveTo { .. } | SimplePathSegment::ClosePath => {}
        }
    }

    if open {
        builder.end(false);
    }
    any.then(|| builder.build())
}

fn rect_outline(node: &roxmltree::Node) -> Option<Path> {
    let x = attr_or_zero(node, "x");
    let y = attr_or_zero(node, "y");
    let w = attr_or_zero(node, "width");
    let h = attr_or_zero(node, "height");
    if w <= 0.0 || h <= 0.0 {
        return None;
    }

    let (rx, ry) = match (length_attr(node, "rx"), length_attr(node, "ry")) {
        (Some(rx), Some(ry)) => (rx, ry),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (None, None) => (0.0, 0.0),
    };
    let rx = rx.clamp(0.0, w / 2.0);
    let ry = ry.clamp(0.0, h / 2.0);

    let mut builder = Path::builder();
    if rx == 0.0 || ry == 0.0 {
        builder.begin(point(x as f32, y as f32));
        builder.line_to(point((x + w) as f32, y as f32));
        builder.line_to(point((x + w) as f32, (y + h) as f32));
        builder.line_to(point(x as f32, (y + h) as f32));
        builder.end(true);
        return Some(builder.build());
    }

    use std::f64::consts::{FRAC_PI_2, PI};
    builder.begin(point((x + rx) as f32, y as f32));
    builder.line_to(point((x + w - rx) as f32, y as f32));
    corner(&mut builder, x + w - rx, y + ry, rx, ry, -FRAC_PI_2);
    builder.line_to(point((x + w) as f32, (y + h - ry) as f32));
    corner(&mut builder, x + w - rx, y + h - ry, rx, ry, 0.0);
    builder.line_to(point((x + rx) as f32, (y + h) as f32));
    corner(&mut builder, x + rx, y + h - ry, rx, ry, FRAC_PI_2);
    builder.line_to(point(x as f32, (y + ry) as f32));
    corner(&mut builder, x + rx, y + ry, rx, ry, PI);
    builder.end(true);
    Some(builder.build())
}

/// Quarter ellipse starting at `start_angle`, sweeping clockwise on screen.
fn corner(builder: &mut Builder, cx: f64, cy: f64, rx: f64, ry: f64, start_angle: f64) {
    let arc = Arc {
        center: point(cx as f32, cy as f32),
        radii: vector(rx as f32, ry as f32),
        start_angle: Angle::radians(start_angle as f32),
        sweep_angle: Angle::radians(std::f32::consts::FRAC_PI_2),
        x_rotation: Angle::radians(0.0),
    };
    arc.for_each_quadratic_bezier(&mut |segment: &QuadraticBezierSegment<f32>| {
        builder.quadratic_bezier_to(segment.ctrl, segment.to);
    });
}
