//! Conversion pipeline
//!
//! Loads and classifies inputs, then runs one geometry source through
//! normalization and emission. Every run takes its settings as a value and
//! returns a fresh toolpath.

use std::io;
use std::path::Path;

use image::DynamicImage;
use plotkit_camtools::{RasterAnalyzer, SvgDocument, TextVectorizer, Toolpath, ToolpathEmitter, VectorSource};
use plotkit_core::{
    normalize, ConversionError, ConversionResult, GeometrySource, MachineParams, ScaleMode,
};
use plotkit_settings::Config;
use tracing::{debug, info};

use crate::VERSION;

/// Decode raster image data. Data in no known image format is rejected.
pub fn load_raster_bytes(bytes: &[u8]) -> ConversionResult<DynamicImage> {
    let format = image::guess_format(bytes)
        .map_err(|_| ConversionError::InputRejected("not a recognized image format".to_string()))?;
    debug!("Decoding {:?} image ({} bytes)", format, bytes.len());
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ConversionError::Image(e.to_string()))
}

/// Read and decode a raster image file.
pub fn load_raster_file(path: &Path) -> ConversionResult<DynamicImage> {
    let bytes = std::fs::read(path)?;
    load_raster_bytes(&bytes).map_err(|e| match e {
        ConversionError::InputRejected(reason) => {
            ConversionError::InputRejected(format!("{}: {}", path.display(), reason))
        }
        other => other,
    })
}

fn looks_like_svg(content: &str) -> bool {
    let head: String = content.chars().take(4096).collect();
    head.contains("<svg")
}

/// Parse SVG source text.
pub fn load_vector_str(content: &str) -> ConversionResult<SvgDocument> {
    if !looks_like_svg(content) {
        return Err(ConversionError::InputRejected(
            "no <svg> element found".to_string(),
        ));
    }
    SvgDocument::parse(content)
}

/// Read and parse an SVG file.
///
/// Files that are not text, or that carry neither an `.svg` extension nor an
/// `<svg>` element, are rejected before parsing.
pub fn load_vector_file(path: &Path) -> ConversionResult<SvgDocument> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(ConversionError::InputRejected(format!(
                "{}: not a text file",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let svg_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !svg_extension && !looks_like_svg(&content) {
        return Err(ConversionError::InputRejected(format!(
            "{}: not an SVG document",
            path.display()
        )));
    }
    SvgDocument::parse(&content)
}

/// Run `source` through normalization and emission.
pub fn run_source<S: GeometrySource>(
    source: &S,
    scale: ScaleMode,
    params: &MachineParams,
) -> ConversionResult<Toolpath> {
    let polylines = source.polylines()?;
    debug!(
        "{} source produced {} polylines ({} points)",
        source.name(),
        polylines.len(),
        polylines.point_count()
    );

    let normalized = normalize(&polylines, scale);
    let header = std::iter::once(format!("Generated by PlotKit {}", VERSION))
        .chain(source.header_comments());

    let toolpath = ToolpathEmitter::new(params.clone())
        .with_header_comments(header)
        .emit(&normalized, None, None)?;
    info!("Converted {} input: {}", source.name(), toolpath.summary());
    Ok(toolpath)
}

/// Raster image to toolpath using the raster and machine settings.
pub fn convert_image(image: &DynamicImage, config: &Config) -> ConversionResult<Toolpath> {
    let analyzer = RasterAnalyzer::from_image(
        image,
        config.raster_mode(),
        config.raster.target_width_mm,
        config.raster.max_working_dimension_px,
    );
    run_source(&analyzer, ScaleMode::default(), &config.machine_params())
}

/// SVG document to toolpath using the vector and machine settings.
pub fn convert_svg(document: SvgDocument, config: &Config) -> ConversionResult<Toolpath> {
    let source = VectorSource::new(document, config.sampler(), config.vector.scale_percent);
    run_source(&source, config.scale_mode(), &config.machine_params())
}

/// Text to toolpath using the text and machine settings.
pub fn convert_text(text: &str, config: &Config) -> ConversionResult<Toolpath> {
    let source = TextVectorizer::new(text, config.text.font.table(), config.text_params());
    run_source(&source, ScaleMode::default(), &config.machine_params())
}
