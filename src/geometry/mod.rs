pub mod path;
pub mod section;

pub use path::{Path, PathCommand};
pub use section::{PathSection, Tangent};
