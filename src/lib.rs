//! Position and direction of travel at linear distances along a 2D path.
//!
//! A [`Path`] is decomposed into [`PathSection`]s, and a [`TangentGenerator`]
//! walks them by arc length, answering one ascending distance at a time.
//! [`PlaceGlyphs`] builds on that to turn glyph anchor distances into
//! rigid transforms.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod walk;

pub use error::{PathTextError, Result};
pub use geometry::{Path, PathCommand, PathSection, Tangent};
pub use layout::{GlyphAnchor, GlyphPlacement, PlaceGlyphs};
pub use walk::{TangentGenerator, WalkParams};
