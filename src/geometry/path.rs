use crate::math::Point2;
use crate::walk::TangentGenerator;

use super::{PathSection, Tangent};

/// A single drawing command in a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the point.
    MoveTo(Point2),
    /// Straight segment to the point.
    LineTo(Point2),
    /// Quadratic Bézier to `to`.
    QuadTo { control: Point2, to: Point2 },
    /// Cubic Bézier to `to`.
    CurveTo {
        control1: Point2,
        control2: Point2,
        to: Point2,
    },
    /// Straight segment back to the start of the subpath.
    Close,
}

/// An ordered list of drawing commands.
///
/// The same path can be stroked by a renderer and walked by a
/// [`TangentGenerator`]; multiple subpaths are walked as one continuous
/// path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move to `p`.
    #[must_use]
    pub fn move_to(mut self, p: Point2) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Appends a line to `p`.
    #[must_use]
    pub fn line_to(mut self, p: Point2) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Appends a quadratic curve to `to`.
    #[must_use]
    pub fn quad_to(mut self, control: Point2, to: Point2) -> Self {
        self.commands.push(PathCommand::QuadTo { control, to });
        self
    }

    /// Appends a cubic curve to `to`.
    #[must_use]
    pub fn curve_to(mut self, control1: Point2, control2: Point2, to: Point2) -> Self {
        self.commands.push(PathCommand::CurveTo {
            control1,
            control2,
            to,
        });
        self
    }

    /// Closes the current subpath.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Appends a command in place.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Returns the commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Decomposes the path into drawable sections, in command order.
    ///
    /// - A move records the subpath start unless one is already pending,
    ///   and always sets the current point.
    /// - Drawing commands emit one section from the current point. With no
    ///   current point they start at the origin, and with no pending subpath
    ///   start the origin becomes the start.
    /// - `Close` emits a line back to the subpath start (origin if none) and
    ///   clears the start.
    ///
    /// Zero-length sections are kept.
    #[must_use]
    pub fn sections(&self) -> Vec<PathSection> {
        let origin = Point2::origin();
        let mut sections = Vec::with_capacity(self.commands.len());
        let mut start: Option<Point2> = None;
        let mut current: Option<Point2> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    start = start.or(Some(p));
                    current = Some(p);
                }
                PathCommand::LineTo(p) => {
                    sections.push(PathSection::Line {
                        start: current.unwrap_or(origin),
                        end: p,
                    });
                    start = start.or(Some(origin));
                    current = Some(p);
                }
                PathCommand::QuadTo { control, to } => {
                    sections.push(PathSection::QuadCurve {
                        p0: current.unwrap_or(origin),
                        p1: control,
                        p2: to,
                    });
                    start = start.or(Some(origin));
                    current = Some(to);
                }
                PathCommand::CurveTo {
                    control1,
                    control2,
                    to,
                } => {
                    sections.push(PathSection::Curve {
                        p0: current.unwrap_or(origin),
                        p1: control1,
                        p2: control2,
                        p3: to,
                    });
                    start = start.or(Some(origin));
                    current = Some(to);
                }
                PathCommand::Close => {
                    sections.push(PathSection::Line {
                        start: current.unwrap_or(origin),
                        end: start.unwrap_or(origin),
                    });
                    current = start.take();
                }
            }
        }

        sections
    }

    /// Returns the tangent at each location, stopping at the first location
    /// past the end of the path.
    ///
    /// Locations must be in ascending order.
    #[must_use]
    pub fn tangents(&self, locations: &[f64]) -> Vec<Tangent> {
        debug_assert!(
            locations.windows(2).all(|w| w[0] <= w[1]),
            "locations must be ascending"
        );
        TangentGenerator::new(self)
            .tangents(locations.iter().copied())
            .collect()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn single_curve_decomposes_to_one_section() {
        let (p0, p1, p2, p3) = (p(50.0, 500.0), p(300.0, 300.0), p(400.0, 700.0), p(650.0, 500.0));
        let path = Path::new().move_to(p0).curve_to(p1, p2, p3);
        assert_eq!(path.sections(), vec![PathSection::Curve { p0, p1, p2, p3 }]);
    }

    #[test]
    fn quad_curve_decomposes_to_one_section() {
        let (p0, p1, p2) = (p(50.0, 500.0), p(300.0, 300.0), p(650.0, 500.0));
        let path = Path::new().move_to(p0).quad_to(p1, p2);
        assert_eq!(path.sections(), vec![PathSection::QuadCurve { p0, p1, p2 }]);
    }

    #[test]
    fn two_lines_share_the_middle_point() {
        let path = Path::new()
            .move_to(p(0.0, 0.0))
            .line_to(p(400.0, 400.0))
            .line_to(p(800.0, 0.0));
        let sections = path.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].start(), p(0.0, 0.0));
        assert_eq!(sections[0].end(), p(400.0, 400.0));
        assert_eq!(sections[1].start(), p(400.0, 400.0));
        assert_eq!(sections[1].end(), p(800.0, 0.0));
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let path = Path::new()
            .move_to(p(10.0, 10.0))
            .line_to(p(20.0, 10.0))
            .line_to(p(20.0, 20.0))
            .close();
        let sections = path.sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(
            sections[2],
            PathSection::Line {
                start: p(20.0, 20.0),
                end: p(10.0, 10.0),
            }
        );
    }

    #[test]
    fn second_move_keeps_recorded_start() {
        let path = Path::new()
            .move_to(p(1.0, 1.0))
            .move_to(p(5.0, 5.0))
            .line_to(p(9.0, 5.0))
            .close();
        let sections = path.sections();
        assert_eq!(sections[0].start(), p(5.0, 5.0));
        assert_eq!(sections[1].end(), p(1.0, 1.0));
    }

    #[test]
    fn move_after_close_starts_new_subpath() {
        let path = Path::new()
            .move_to(p(0.0, 0.0))
            .line_to(p(10.0, 0.0))
            .close()
            .move_to(p(50.0, 50.0))
            .line_to(p(60.0, 50.0))
            .close();
        let sections = path.sections();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[2].start(), p(50.0, 50.0));
        assert_eq!(sections[3].end(), p(50.0, 50.0));
    }

    #[test]
    fn drawing_without_move_starts_at_origin() {
        let path = Path::new().line_to(p(3.0, 4.0)).close();
        let sections = path.sections();
        assert_eq!(
            sections,
            vec![
                PathSection::Line {
                    start: p(0.0, 0.0),
                    end: p(3.0, 4.0),
                },
                PathSection::Line {
                    start: p(3.0, 4.0),
                    end: p(0.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn close_without_start_degenerates_to_origin() {
        let path = Path::new().close();
        assert_eq!(
            path.sections(),
            vec![PathSection::Line {
                start: p(0.0, 0.0),
                end: p(0.0, 0.0),
            }]
        );
    }

    #[test]
    fn repeated_close_targets_origin() {
        let path = Path::new()
            .move_to(p(2.0, 2.0))
            .line_to(p(6.0, 2.0))
            .close()
            .close();
        let sections = path.sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(
            sections[2],
            PathSection::Line {
                start: p(2.0, 2.0),
                end: p(0.0, 0.0),
            }
        );
    }

    #[test]
    fn zero_length_sections_are_kept() {
        let path = Path::new()
            .move_to(p(1.0, 1.0))
            .line_to(p(1.0, 1.0))
            .line_to(p(2.0, 1.0));
        assert_eq!(path.sections().len(), 2);
    }

    #[test]
    fn decomposition_is_deterministic() {
        let path = Path::new()
            .move_to(p(0.0, 0.0))
            .quad_to(p(5.0, 10.0), p(10.0, 0.0))
            .curve_to(p(12.0, -5.0), p(18.0, 5.0), p(20.0, 0.0))
            .close();
        assert_eq!(path.sections(), path.sections());
    }

    #[test]
    fn collects_from_commands() {
        let commands = [
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(1.0, 0.0)),
            PathCommand::Close,
        ];
        let path: Path = commands.into_iter().collect();
        assert_eq!(path.commands(), &commands);
        assert!(!path.is_empty());
        assert!(Path::new().sections().is_empty());
    }
}
