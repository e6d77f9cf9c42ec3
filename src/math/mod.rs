pub mod bezier;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rigid transform (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the direction of `v` in radians, as reported by `atan2(v.y, v.x)`.
///
/// A zero vector yields `0.0`.
#[must_use]
pub fn direction_angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn direction_angle_quadrants() {
        assert!((direction_angle(&Vector2::new(1.0, 0.0))).abs() < TOLERANCE);
        assert!((direction_angle(&Vector2::new(1.0, 1.0)) - FRAC_PI_4).abs() < TOLERANCE);
        assert!((direction_angle(&Vector2::new(0.0, 1.0)) - FRAC_PI_2).abs() < TOLERANCE);
        assert!((direction_angle(&Vector2::new(-1.0, 0.0)) - PI).abs() < TOLERANCE);
    }

    #[test]
    fn zero_vector_has_zero_angle() {
        assert!(direction_angle(&Vector2::zeros()).abs() < TOLERANCE);
    }
}
