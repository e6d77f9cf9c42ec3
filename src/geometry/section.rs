use crate::math::bezier::{cubic_derivative, cubic_point, quad_derivative, quad_point};
use crate::math::{direction_angle, Point2};

/// Position and direction of travel at a parameter on a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangent {
    /// Section parameter, `0` at the start and `1` at the end.
    ///
    /// Not proportional to arc length on curves.
    pub t: f64,
    /// Point on the section at `t`.
    pub point: Point2,
    /// Direction of travel in radians, `atan2(dy/dt, dx/dt)`.
    pub angle: f64,
}

/// One drawable segment of a path between two anchor points.
///
/// Sections are produced by [`Path::sections`](super::Path::sections) and
/// never change once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSection {
    /// Straight segment.
    Line { start: Point2, end: Point2 },
    /// Quadratic Bézier with one control point.
    QuadCurve { p0: Point2, p1: Point2, p2: Point2 },
    /// Cubic Bézier with two control points.
    Curve {
        p0: Point2,
        p1: Point2,
        p2: Point2,
        p3: Point2,
    },
}

impl PathSection {
    /// Returns the first point of the section.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match *self {
            Self::Line { start, .. } => start,
            Self::QuadCurve { p0, .. } | Self::Curve { p0, .. } => p0,
        }
    }

    /// Returns the last point of the section.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match *self {
            Self::Line { end, .. } => end,
            Self::QuadCurve { p2, .. } => p2,
            Self::Curve { p3, .. } => p3,
        }
    }

    /// Evaluates the point and tangent angle at parameter `t`.
    ///
    /// `t` is not clamped: values past either end extrapolate the segment.
    /// A line keeps the same angle for every `t`. Where the derivative
    /// vanishes (coincident points) the angle is `0`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Tangent {
        let (point, derivative) = match self {
            Self::Line { start, end } => {
                let delta = end - start;
                (start + delta * t, delta)
            }
            Self::QuadCurve { p0, p1, p2 } => {
                (quad_point(t, p0, p1, p2), quad_derivative(t, p0, p1, p2))
            }
            Self::Curve { p0, p1, p2, p3 } => (
                cubic_point(t, p0, p1, p2, p3),
                cubic_derivative(t, p0, p1, p2, p3),
            ),
        };

        Tangent {
            t,
            point,
            angle: direction_angle(&derivative),
        }
    }
}
