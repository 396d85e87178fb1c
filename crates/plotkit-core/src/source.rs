//! The capability shared by raster, vector and text inputs.

use crate::error::ConversionResult;
use crate::geometry::PolylineSet;

/// Anything that can produce a fresh [`PolylineSet`] for one conversion run.
///
/// Implementations hold their inputs and parameters by value or reference and
/// keep no state between calls.
pub trait GeometrySource {
    /// Short name used in logs and emitted header comments.
    fn name(&self) -> &'static str;

    /// Produce the polylines in draw order.
    fn polylines(&self) -> ConversionResult<PolylineSet>;

    /// Extra `;` comment lines describing this source's settings.
    fn header_comments(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<T: GeometrySource + ?Sized> GeometrySource for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn polylines(&self) -> ConversionResult<PolylineSet> {
        (**self).polylines()
    }

    fn header_comments(&self) -> Vec<String> {
        (**self).header_comments()
    }
}

impl<T: GeometrySource + ?Sized> GeometrySource for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn polylines(&self) -> ConversionResult<PolylineSet> {
        (**self).polylines()
    }

    fn header_comments(&self) -> Vec<String> {
        (**self).header_comments()
    }
}
