//! # PlotKit CAM Tools
//!
//! Geometry sources and G-code generation for pen plotters.
//!
//! ## Geometry Sources
//!
//! - **Raster Analyzer**: Edge detection, hatching and stippling of bitmap images
//! - **Vector Path Sampler**: Arc-length sampling of SVG shape elements
//! - **Text Vectorizer**: Word-wrapped text in single-stroke fonts
//!
//! ## Output
//!
//! - **Toolpath Emitter**: Pen-up/pen-down G-code for a normalized polyline set

pub mod arc_length;
pub mod raster_analyzer;
mod stroke_font_data;
pub mod stroke_fonts;
pub mod svg_document;
pub mod text_vectorizer;
pub mod toolpath_emitter;
pub mod vector_sampler;

pub use raster_analyzer::{
    fit_working_resolution, grayscale, luminance, RasterAnalyzer, RasterMode,
    DEFAULT_WORKING_DIMENSION, MIN_HATCH_STEP_PX,
};
pub use stroke_fonts::{font_by_name, GlyphStrokeTable, StrokeFont};
pub use svg_document::{NodeVisibility, ShapeNode, SvgDocument};
pub use text_vectorizer::{layout, wrap_lines, TextLayoutParams, TextVectorizer};
pub use toolpath_emitter::{
    emit, AxisWords, MotionInstruction, Toolpath, ToolpathEmitter, ToolpathSummary,
};
pub use vector_sampler::{DrawableNode, VectorPathSampler, VectorSource};
