mod place_glyphs;

pub use place_glyphs::PlaceGlyphs;

use crate::geometry::Tangent;
use crate::math::{Isometry2, Point2};

/// A glyph's position on a straight baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphAnchor {
    /// Index of the glyph in the caller's run.
    pub index: usize,
    /// Distance of the glyph's center from the start of the baseline.
    pub anchor: f64,
}

impl GlyphAnchor {
    /// Creates an anchor for glyph `index` at `anchor`.
    #[must_use]
    pub fn new(index: usize, anchor: f64) -> Self {
        Self { index, anchor }
    }

    /// Creates the anchor of a glyph starting at `x` with advance `width`.
    #[must_use]
    pub fn centered(index: usize, x: f64, width: f64) -> Self {
        Self {
            index,
            anchor: x + width / 2.0,
        }
    }
}

/// Where and how to draw one glyph along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    /// Index of the glyph in the caller's run.
    pub index: usize,
    /// Distance along the path the glyph is centered on.
    pub anchor: f64,
    /// Path tangent at `anchor`.
    pub tangent: Tangent,
    /// Maps baseline coordinates to path coordinates: shift the anchor to
    /// the origin, rotate by the tangent angle, move to the tangent point.
    pub transform: Isometry2,
}

impl GlyphPlacement {
    /// Maps a point from baseline space into path space.
    #[must_use]
    pub fn transform_point(&self, p: &Point2) -> Point2 {
        self.transform.transform_point(p)
    }
}
