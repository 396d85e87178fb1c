//! # PlotKit Core
//!
//! Core types, traits, and utilities for PlotKit.
//! Provides the geometry data model shared by every geometry source,
//! the error taxonomy, machine parameters and the polyline normalizer.

pub mod error;
pub mod geometry;
pub mod machine;
pub mod normalize;
pub mod source;

pub use error::{
    ConversionError, ConversionResult, EmptyGeometryReport, ParameterError, ParameterResult,
};
pub use geometry::{Bounds, Point2D, Polyline, PolylineSet};
pub use machine::MachineParams;
pub use normalize::{normalize, PolylineNormalizer, ScaleMode};
pub use source::GeometrySource;
