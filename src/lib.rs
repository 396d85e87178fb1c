//! # PlotKit
//!
//! Converts raster images, SVG drawings and typed text into G-code for pen
//! plotters.
//!
//! ## Architecture
//!
//! PlotKit is organized as a workspace with multiple crates:
//!
//! 1. **plotkit-core** - Geometry model, error taxonomy, machine parameters, normalization
//! 2. **plotkit-camtools** - Raster, vector and text geometry sources plus the G-code emitter
//! 3. **plotkit-settings** - Configuration sections, validation, JSON/TOML persistence
//! 4. **plotkit** - Conversion pipeline and the command-line front end
//!
//! ## Features
//!
//! - **Raster Modes**: Sobel edges, angled hatching, density-weighted stippling
//! - **SVG Sampling**: All basic shapes with nested transforms and visibility rules
//! - **Stroke Fonts**: Simplex, complex and script single-line fonts with word wrap
//! - **Plotter Output**: Pen-up/pen-down G-code with custom start and end blocks

pub mod pipeline;

pub use plotkit_camtools::{
    RasterAnalyzer, RasterMode, StrokeFont, SvgDocument, TextLayoutParams, TextVectorizer,
    Toolpath, ToolpathEmitter, ToolpathSummary, VectorPathSampler, VectorSource,
};
pub use plotkit_core::{
    ConversionError, ConversionResult, EmptyGeometryReport, GeometrySource, MachineParams,
    Point2D, Polyline, PolylineSet, ScaleMode,
};
pub use plotkit_settings::{Config, RasterModeKind, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, so G-code written to stdout stays clean
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_level(tracing::Level::INFO)
}

/// Initialize logging with `level` as the default directive.
pub fn init_logging_with_level(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
