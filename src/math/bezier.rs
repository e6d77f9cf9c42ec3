//! Bézier polynomials in Bernstein form.
//!
//! Positions and first derivatives are evaluated for both axes at once.
//! None of these functions clamp `t`; values slightly past `[0, 1]`
//! extrapolate the polynomial.

use super::{Point2, Vector2};

/// Quadratic Bézier position at `t`.
#[must_use]
pub fn quad_point(t: f64, p0: &Point2, p1: &Point2, p2: &Point2) -> Point2 {
    let mt = 1.0 - t;
    Point2::from(p0.coords * (mt * mt) + p1.coords * (2.0 * mt * t) + p2.coords * (t * t))
}

/// Quadratic Bézier first derivative at `t`: `2(1-t)(p1-p0) + 2t(p2-p1)`.
#[must_use]
pub fn quad_derivative(t: f64, p0: &Point2, p1: &Point2, p2: &Point2) -> Vector2 {
    let mt = 1.0 - t;
    (p1 - p0) * (2.0 * mt) + (p2 - p1) * (2.0 * t)
}

/// Cubic Bézier position at `t`.
#[must_use]
pub fn cubic_point(t: f64, p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> Point2 {
    let mt = 1.0 - t;
    Point2::from(
        p0.coords * (mt * mt * mt)
            + p1.coords * (3.0 * mt * mt * t)
            + p2.coords * (3.0 * mt * t * t)
            + p3.coords * (t * t * t),
    )
}

/// Cubic Bézier first derivative at `t`:
/// `3(1-t)²(p1-p0) + 6(1-t)t(p2-p1) + 3t²(p3-p2)`.
#[must_use]
pub fn cubic_derivative(t: f64, p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> Vector2 {
    let mt = 1.0 - t;
    (p1 - p0) * (3.0 * mt * mt) + (p2 - p1) * (6.0 * mt * t) + (p3 - p2) * (3.0 * t * t)
}
