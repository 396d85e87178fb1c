//! Error types for PlotKit conversions.
//!
//! Every conversion run either produces geometry or fails with one of the
//! categories below. Degenerate bounding boxes are not represented here: the
//! normalizer recovers from them locally and only logs a warning.

use std::fmt;
use std::io;
use thiserror::Error;

/// Errors that can occur while turning a design input into a toolpath.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The input is of the wrong file category (e.g. a PDF handed to the image converter).
    #[error("Input rejected: {0}")]
    InputRejected(String),

    /// The document parsed fine but contains nothing drawable.
    #[error("No drawable geometry found ({0})")]
    EmptyGeometry(EmptyGeometryReport),

    /// The document could not be parsed at all.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Emission was requested on an empty polyline set.
    #[error("No geometry to emit")]
    NoGeometryToEmit,

    /// A mode or machine parameter is unusable.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// The image decoder failed on data that looked like an image.
    #[error("Image processing error: {0}")]
    Image(String),

    /// I/O error while reading an input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter that must be strictly positive was not.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive { name: String, value: f64 },

    /// A parameter was NaN or infinite.
    #[error("Parameter '{name}' must be finite")]
    NotFinite { name: String },

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid for another reason.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ParameterError {
    /// Checks that `value` is finite.
    pub fn check_finite(name: &str, value: f64) -> ParameterResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite {
                name: name.to_string(),
            })
        }
    }

    /// Checks that `value` is finite and strictly positive.
    pub fn check_positive(name: &str, value: f64) -> ParameterResult<f64> {
        Self::check_finite(name, value)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Self::NotPositive {
                name: name.to_string(),
                value,
            })
        }
    }

    /// Checks that `value` lies in `min..=max`.
    pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> ParameterResult<f64> {
        Self::check_finite(name, value)?;
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::OutOfRange {
                name: name.to_string(),
                value,
                min,
                max,
            })
        }
    }

    /// Checks that `value` is finite and not below `min`.
    pub fn check_at_least(name: &str, value: f64, min: f64) -> ParameterResult<f64> {
        Self::check_range(name, value, min, f64::INFINITY)
    }
}

/// Diagnostic counts carried by an empty-geometry failure.
///
/// Callers turn these into remediation guidance, see [`EmptyGeometryReport::remediation_hints`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyGeometryReport {
    /// `text` and `tspan` elements, which are not converted to outlines.
    pub text_elements: usize,
    /// Embedded raster `image` elements.
    pub embedded_images: usize,
    /// Cloned/instanced `use` references.
    pub use_references: usize,
    /// Distinct element names present in the document, in first-seen order.
    pub tags_found: Vec<String>,
}

impl EmptyGeometryReport {
    /// True when at least one excluded category was seen.
    pub fn has_excluded_content(&self) -> bool {
        self.text_elements > 0 || self.embedded_images > 0 || self.use_references > 0
    }

    /// One actionable message per non-empty excluded category.
    pub fn remediation_hints(&self) -> Vec<String> {
        let mut hints = Vec::new();
        if self.text_elements > 0 {
            hints.push(format!(
                "{} text element(s) found, which are not supported; convert text to paths first",
                self.text_elements
            ));
        }
        if self.embedded_images > 0 {
            hints.push(format!(
                "{} embedded image(s) found; only vector shapes can be plotted, use the image converter for bitmaps",
                self.embedded_images
            ));
        }
        if self.use_references > 0 {
            hints.push(format!(
                "{} 'use' element(s) found (clones); unlink clones or ungroup them before exporting",
                self.use_references
            ));
        }
        if self.text_elements == 0 && self.embedded_images == 0 {
            hints.push("no known shapes (path, rect, circle, ellipse, line, polyline, polygon) found".to_string());
            hints.push(format!(
                "elements in the file: [{}]",
                self.tags_found.join(", ")
            ));
        }
        hints
    }
}

impl fmt::Display for EmptyGeometryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} text, {} image, {} use element(s) excluded",
            self.text_elements, self.embedded_images, self.use_references
        )
    }
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::InputRejected("expected an image file".to_string());
        assert_eq!(err.to_string(), "Input rejected: expected an image file");

        let err = ConversionError::MalformedDocument("unexpected end of stream".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed document: unexpected end of stream"
        );

        let err = ConversionError::NoGeometryToEmit;
        assert_eq!(err.to_string(), "No geometry to emit");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NotPositive {
            name: "feed_rate".to_string(),
            value: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'feed_rate' must be positive, got -5"
        );

        let err = ParameterError::OutOfRange {
            name: "edge_threshold".to_string(),
            value: 2000.0,
            min: 0.0,
            max: 1500.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'edge_threshold' out of range: 2000 (valid: 0..1500)"
        );
    }

    #[test]
    fn test_parameter_checks() {
        assert_eq!(ParameterError::check_positive("f", 3.0), Ok(3.0));
        assert!(matches!(
            ParameterError::check_positive("f", 0.0),
            Err(ParameterError::NotPositive { .. })
        ));
        assert!(matches!(
            ParameterError::check_finite("z", f64::NAN),
            Err(ParameterError::NotFinite { .. })
        ));
        assert_eq!(ParameterError::check_at_least("step", 0.5, 1e-3), Ok(0.5));
        assert!(matches!(
            ParameterError::check_at_least("step", 1e-300, 1e-3),
            Err(ParameterError::OutOfRange { min, .. }) if min == 1e-3
        ));
        assert!(matches!(
            ParameterError::check_at_least("step", f64::INFINITY, 1e-3),
            Err(ParameterError::NotFinite { .. })
        ));
        assert!(ParameterError::check_range("a", 5.0, 0.0, 10.0).is_ok());
        assert!(ParameterError::check_range("a", 11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_empty_geometry_hints() {
        let report = EmptyGeometryReport {
            text_elements: 3,
            embedded_images: 0,
            use_references: 2,
            tags_found: vec!["svg".to_string(), "text".to_string(), "use".to_string()],
        };
        let hints = report.remediation_hints();
        assert_eq!(hints.len(), 2);
        assert!(hints[0].starts_with("3 text element(s)"));
        assert!(hints[1].starts_with("2 'use' element(s)"));
        assert!(report.has_excluded_content());

        let err = ConversionError::EmptyGeometry(report);
        assert_eq!(
            err.to_string(),
            "No drawable geometry found (3 text, 0 image, 2 use element(s) excluded)"
        );
    }

    #[test]
    fn test_empty_geometry_lists_tags_without_known_shapes() {
        let report = EmptyGeometryReport {
            tags_found: vec!["svg".to_string(), "g".to_string()],
            ..Default::default()
        };
        let hints = report.remediation_hints();
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[1], "elements in the file: [svg, g]");
        assert!(!report.has_excluded_content());
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::NotFinite {
            name: "z_up".to_string(),
        };
        let err: ConversionError = param_err.into();
        assert!(matches!(err, ConversionError::InvalidParameters(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ConversionError = io_err.into();
        assert!(matches!(err, ConversionError::Io(_)));
    }
}
