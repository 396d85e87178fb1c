//! Text Vectorizer
//!
//! Lays typed text out with a stroke font: greedy word wrap per input line,
//! then one polyline per glyph stroke, left to right and top to bottom.

use plotkit_core::{ConversionResult, GeometrySource, ParameterError, ParameterResult, Point2D, PolylineSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::stroke_fonts::GlyphStrokeTable;

/// Horizontal gap after every character, as a fraction of the font size.
const LETTER_SPACING: f64 = 0.2;
/// Glyph cell width, as a fraction of the font size.
const GLYPH_WIDTH: f64 = 0.7;
/// Width of a space, as a fraction of the font size.
const SPACE_WIDTH: f64 = 0.5;
/// Absorbs rounding when a line's width equals the limit exactly.
const WIDTH_EPSILON: f64 = 1e-9;

/// Text layout parameters. All lengths are in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextLayoutParams {
    /// Cap height
    pub font_size: f64,
    /// Baseline distance as a multiple of the font size
    pub line_spacing: f64,
    /// Wrap width
    pub max_line_width: f64,
}

impl Default for TextLayoutParams {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            line_spacing: 1.5,
            max_line_width: 100.0,
        }
    }
}

impl TextLayoutParams {
    pub fn validate(&self) -> ParameterResult<()> {
        ParameterError::check_positive("font_size", self.font_size)?;
        ParameterError::check_positive("line_spacing", self.line_spacing)?;
        ParameterError::check_positive("max_line_width", self.max_line_width)?;
        Ok(())
    }

    /// Width of the glyph cell for `c`.
    pub fn glyph_width(&self, c: char) -> f64 {
        if c == ' ' {
            self.font_size * SPACE_WIDTH
        } else {
            self.font_size * GLYPH_WIDTH
        }
    }

    /// Pen advance after `c`.
    pub fn advance(&self, c: char) -> f64 {
        self.glyph_width(c) + self.font_size * LETTER_SPACING
    }

    /// Summed advances over every character of `s`.
    pub fn measure(&self, s: &str) -> f64 {
        s.chars().map(|c| self.advance(c)).sum()
    }
}

/// Greedy word wrap, applied to each input line on its own.
///
/// Lines that end up empty are dropped and take no vertical space. A word wider
/// than the limit is placed alone on its own line rather than broken.
pub fn wrap_lines(text: &str, params: &TextLayoutParams) -> Vec<String> {
    let limit = params.max_line_width + WIDTH_EPSILON;
    let mut lines = Vec::new();

    for input in text.split('\n') {
        let input = input.strip_suffix('\r').unwrap_or(input);
        let mut current = String::new();

        for word in input.split(' ') {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if params.measure(&candidate) <= limit {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Lay `text` out with `table`. Invalid parameters produce no geometry.
pub fn layout(text: &str, table: &GlyphStrokeTable, params: &TextLayoutParams) -> PolylineSet {
    if let Err(e) = params.validate() {
        warn!("{}; producing no geometry", e);
        return PolylineSet::new();
    }

    let mut set = PolylineSet::new();
    let mut y = 0.0;
    let lines = wrap_lines(text, params);
    for line in &lines {
        let mut x = 0.0;
        for c in line.chars() {
            let width = params.glyph_width(c);
            if let Some(glyph) = table.resolve(c) {
                for stroke in glyph {
                    let points: Vec<Point2D> = stroke
                        .iter()
                        .map(|p| Point2D::new(x + p.x * width, y + p.y * params.font_size))
                        .collect();
                    set.push_points(points);
                }
            }
            x += width + params.font_size * LETTER_SPACING;
        }
        y += params.font_size * params.line_spacing;
    }

    debug!(
        "Laid out {} lines with font '{}' into {} strokes",
        lines.len(),
        table.name(),
        set.len()
    );
    set
}

/// Text plus font and layout settings, usable as a geometry source.
#[derive(Debug, Clone)]
pub struct TextVectorizer<'a> {
    text: String,
    table: &'a GlyphStrokeTable,
    params: TextLayoutParams,
}

impl<'a> TextVectorizer<'a> {
    pub fn new(text: impl Into<String>, table: &'a GlyphStrokeTable, params: TextLayoutParams) -> Self {
        Self {
            text: text.into(),
            table,
            params,
        }
    }

    pub fn params(&self) -> &TextLayoutParams {
        &self.params
    }
}

impl GeometrySource for TextVectorizer<'_> {
    fn name(&self) -> &'static str {
        "text"
    }

    fn polylines(&self) -> ConversionResult<PolylineSet> {
        Ok(layout(&self.text, self.table, &self.params))
    }

    fn header_comments(&self) -> Vec<String> {
        vec![
            format!("Font: {}", self.table.name()),
            format!("Font size: {}mm", self.params.font_size),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke_fonts::StrokeFont;

    fn params(max_line_width: f64) -> TextLayoutParams {
        TextLayoutParams {
            max_line_width,
            ..TextLayoutParams::default()
        }
    }

    #[test]
    fn test_measure() {
        let p = TextLayoutParams::default();
        // 2 glyphs at 9 plus one space at 7
        assert!((p.measure("A B") - 25.0).abs() < 1e-9);
        assert!((p.measure("AB") - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_greedy() {
        // "AB CD" measures 43, "AB CD EF" 68
        let lines = wrap_lines("AB CD EF", &params(50.0));
        assert_eq!(lines, vec!["AB CD", "EF"]);
    }

    #[test]
    fn test_wrap_exact_fit_not_split() {
        let lines = wrap_lines("AB CD", &params(43.0));
        assert_eq!(lines, vec!["AB CD"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_lines() {
        let lines = wrap_lines("A\nB\r\n\nC", &params(1000.0));
        assert_eq!(lines, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_long_word_stands_alone() {
        let lines = wrap_lines("A ABCDEFGHIJ B", &params(30.0));
        assert_eq!(lines, vec!["A", "ABCDEFGHIJ", "B"]);
    }

    #[test]
    fn test_layout_positions() {
        let table = StrokeFont::Simplex.table();
        let set = layout("AA", table, &TextLayoutParams::default());
        // 'A' has two strokes
        assert_eq!(set.len(), 4);
        let second_a = &set.as_slice()[2];
        assert_eq!(second_a.first(), Point2D::new(9.0, 10.0));
    }

    #[test]
    fn test_layout_line_advance() {
        let table = StrokeFont::Simplex.table();
        let set = layout("L\nL", table, &TextLayoutParams::default());
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].first(), Point2D::new(0.0, 0.0));
        assert_eq!(set.as_slice()[1].first(), Point2D::new(0.0, 15.0));
    }

    #[test]
    fn test_blank_lines_do_not_advance() {
        let table = StrokeFont::Simplex.table();
        let set = layout("L\n\n   \nL", table, &TextLayoutParams::default());
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1].first(), Point2D::new(0.0, 15.0));
    }

    #[test]
    fn test_invalid_params_yield_empty() {
        let table = StrokeFont::Simplex.table();
        let p = TextLayoutParams {
            font_size: 0.0,
            ..TextLayoutParams::default()
        };
        assert!(layout("ABC", table, &p).is_empty());
    }
}
