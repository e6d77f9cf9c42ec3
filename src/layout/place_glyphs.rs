use nalgebra::Translation2;
use tracing::debug;

use crate::geometry::Path;
use crate::math::Isometry2;
use crate::walk::{TangentGenerator, WalkParams};

use super::{GlyphAnchor, GlyphPlacement};

/// Lays glyph anchors along a path.
///
/// Anchors are placed in ascending order of distance; placement stops at the
/// first anchor past the end of the path. Non-finite anchors are skipped.
#[derive(Debug)]
pub struct PlaceGlyphs {
    anchors: Vec<GlyphAnchor>,
    params: WalkParams,
}

impl PlaceGlyphs {
    /// Creates a new glyph placement operation.
    #[must_use]
    pub fn new(anchors: Vec<GlyphAnchor>, params: WalkParams) -> Self {
        Self { anchors, params }
    }

    /// Executes the placement against `path`.
    #[must_use]
    pub fn execute(&self, path: &Path) -> Vec<GlyphPlacement> {
        let mut anchors: Vec<GlyphAnchor> = self
            .anchors
            .iter()
            .copied()
            .filter(|a| a.anchor.is_finite())
            .collect();
        anchors.sort_by(|a, b| a.anchor.total_cmp(&b.anchor));

        let mut generator = TangentGenerator::with_params(path, self.params);
        let placements: Vec<GlyphPlacement> = anchors
            .iter()
            .map_while(|glyph| {
                let tangent = generator.get_tangent(glyph.anchor)?;
                let transform = Isometry2::new(tangent.point.coords, tangent.angle)
                    * Translation2::new(-glyph.anchor, 0.0);
                Some(GlyphPlacement {
                    index: glyph.index,
                    anchor: glyph.anchor,
                    tangent,
                    transform,
                })
            })
            .collect();

        if placements.len() < anchors.len() {
            debug!(
                placed = placements.len(),
                total = anchors.len(),
                "path too short for all glyphs"
            );
        }
        placements
    }
}
