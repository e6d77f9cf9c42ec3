mod generator;
mod params;

pub use generator::TangentGenerator;
pub use params::{WalkParams, DEFAULT_STEP};
