//! Stroke Fonts
//!
//! Immutable glyph stroke tables. The bundled fonts are built once on first
//! use and shared for the lifetime of the process.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use plotkit_core::Point2D;
use serde::{Deserialize, Serialize};

use crate::stroke_font_data::{GlyphData, COMPLEX, SCRIPT, SIMPLEX};

/// One glyph: a list of strokes with points in the unit cell.
pub type Glyph = Vec<Vec<Point2D>>;

/// The bundled fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeFont {
    /// Simple, clean single-stroke capitals
    #[default]
    Simplex,
    /// Decorative double strokes with serifs
    Complex,
    /// Cursive
    Script,
}

impl StrokeFont {
    pub const ALL: [StrokeFont; 3] = [StrokeFont::Simplex, StrokeFont::Complex, StrokeFont::Script];

    pub fn name(&self) -> &'static str {
        match self {
            StrokeFont::Simplex => "simplex",
            StrokeFont::Complex => "complex",
            StrokeFont::Script => "script",
        }
    }

    /// The shared glyph table for this font.
    pub fn table(&self) -> &'static GlyphStrokeTable {
        static SIMPLEX_TABLE: OnceLock<GlyphStrokeTable> = OnceLock::new();
        static COMPLEX_TABLE: OnceLock<GlyphStrokeTable> = OnceLock::new();
        static SCRIPT_TABLE: OnceLock<GlyphStrokeTable> = OnceLock::new();

        match self {
            StrokeFont::Simplex => {
                SIMPLEX_TABLE.get_or_init(|| GlyphStrokeTable::from_data("simplex", SIMPLEX))
            }
            StrokeFont::Complex => {
                COMPLEX_TABLE.get_or_init(|| GlyphStrokeTable::from_data("complex", COMPLEX))
            }
            StrokeFont::Script => {
                SCRIPT_TABLE.get_or_init(|| GlyphStrokeTable::from_data("script", SCRIPT))
            }
        }
    }
}

impl fmt::Display for StrokeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrokeFont {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simplex" => Ok(StrokeFont::Simplex),
            "complex" => Ok(StrokeFont::Complex),
            "script" => Ok(StrokeFont::Script),
            other => Err(format!("unknown font '{}'", other)),
        }
    }
}

/// Look a bundled font up by name, falling back to simplex.
pub fn font_by_name(name: &str) -> &'static GlyphStrokeTable {
    name.parse::<StrokeFont>()
        .unwrap_or_else(|e| {
            tracing::warn!("{}, using simplex", e);
            StrokeFont::Simplex
        })
        .table()
}

/// Mapping from character to strokes in a unit cell.
#[derive(Debug, Clone, Default)]
pub struct GlyphStrokeTable {
    name: String,
    glyphs: HashMap<char, Glyph>,
}

impl GlyphStrokeTable {
    /// Build a table from glyph definitions.
    pub fn new<I>(name: impl Into<String>, glyphs: I) -> Self
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        Self {
            name: name.into(),
            glyphs: glyphs.into_iter().collect(),
        }
    }

    fn from_data(name: &str, data: &[GlyphData]) -> Self {
        let glyphs = data.iter().map(|(c, strokes)| {
            let strokes = strokes
                .iter()
                .map(|coords| {
                    coords
                        .chunks_exact(2)
                        .map(|xy| Point2D::new(xy[0], xy[1]))
                        .collect()
                })
                .collect();
            (*c, strokes)
        });
        Self::new(name, glyphs)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for `c` after case folding, else `?`, else nothing.
    pub fn resolve(&self, c: char) -> Option<&Glyph> {
        self.get(fold_case(c)).or_else(|| self.get('?'))
    }
}

/// Single-character uppercase mapping, or `c` itself when the mapping expands.
pub fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
