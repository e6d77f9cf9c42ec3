use tracing::{debug, trace};

use crate::geometry::{Path, PathSection, Tangent};

use super::WalkParams;

/// Outcome of walking a single section.
enum Walk {
    /// The requested distance was reached on the section.
    Found(Tangent),
    /// The section ended first, after `walked` units of arc length.
    Insufficient { walked: f64 },
}

/// Walks forward from `from` until at least `needed` units of arc length
/// have been covered.
///
/// Arc length is approximated by summing chord lengths between samples
/// spaced `step` apart in `t`. The last sample lands exactly on `t = 1`, so
/// an insufficient walk reports the section's full remaining length.
fn walk(section: &PathSection, from: Tangent, needed: f64, step: f64) -> Walk {
    let mut walked = 0.0;
    let mut tangent = from;
    while walked < needed {
        if tangent.t >= 1.0 {
            return Walk::Insufficient { walked };
        }
        let next = section.tangent_at((tangent.t + step).min(1.0));
        walked += (next.point - tangent.point).norm();
        tangent = next;
    }
    Walk::Found(tangent)
}

/// Finds tangents at increasing linear distances along a path.
///
/// The generator consumes the path as it goes: each query resumes from the
/// previous tangent, so distances must be non-decreasing. Once a distance
/// runs past the end of the path every later query returns `None`.
///
/// A distance that overruns a section carries the exact remainder into the
/// next section; the next section is walked from its own `t = 0`.
#[derive(Debug, Clone)]
pub struct TangentGenerator {
    sections: Vec<PathSection>,
    current: usize,
    last_tangent: Option<Tangent>,
    consumed: f64,
    params: WalkParams,
}

impl TangentGenerator {
    /// Creates a generator over `path` with default walk parameters.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self::with_params(path, WalkParams::default())
    }

    /// Creates a generator over `path` with the given walk parameters.
    #[must_use]
    pub fn with_params(path: &Path, params: WalkParams) -> Self {
        Self::from_sections(path.sections(), params)
    }

    /// Creates a generator over already decomposed sections.
    #[must_use]
    pub fn from_sections(sections: Vec<PathSection>, params: WalkParams) -> Self {
        Self {
            sections,
            current: 0,
            last_tangent: None,
            consumed: 0.0,
            params,
        }
    }

    /// Returns the tangent `distance` units along the path, or `None` if the
    /// path is shorter than that.
    ///
    /// Repeating the previous distance returns the previous tangent, and
    /// `0.0` on a fresh generator returns the start of the first section.
    /// Querying a smaller distance than the previous one is not supported.
    #[allow(clippy::float_cmp)]
    pub fn get_tangent(&mut self, distance: f64) -> Option<Tangent> {
        while let Some(&section) = self.sections.get(self.current) {
            let from = self
                .last_tangent
                .unwrap_or_else(|| section.tangent_at(0.0));

            if distance == self.consumed {
                return Some(from);
            }

            match walk(&section, from, distance - self.consumed, self.params.step()) {
                Walk::Found(tangent) => {
                    trace!(distance, t = tangent.t, "tangent found");
                    self.last_tangent = Some(tangent);
                    self.consumed = distance;
                    return Some(tangent);
                }
                Walk::Insufficient { walked } => {
                    self.consumed += walked;
                    self.last_tangent = None;
                    self.current += 1;
                    debug!(
                        distance,
                        section = self.current - 1,
                        consumed = self.consumed,
                        "section exhausted, carrying distance forward"
                    );
                    if self.is_exhausted() {
                        debug!(distance, length = self.consumed, "path exhausted");
                    }
                }
            }
        }
        None
    }

    /// Lazily maps ascending `distances` to tangents, stopping at the first
    /// distance past the end of the path.
    pub fn tangents<'a, I>(&'a mut self, distances: I) -> impl Iterator<Item = Tangent> + 'a
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: 'a,
    {
        distances
            .into_iter()
            .map_while(move |distance| self.get_tangent(distance))
    }

    /// Returns `true` once no sections remain.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.current >= self.sections.len()
    }

    /// Returns the distance consumed so far.
    ///
    /// After exhaustion this is the approximate length of the whole path.
    #[must_use]
    pub fn consumed_distance(&self) -> f64 {
        self.consumed
    }

    /// Returns the walk parameters in effect.
    #[must_use]
    pub fn params(&self) -> WalkParams {
        self.params
    }
}
