use crate::error::{ParamsError, Result};

/// Parameter increment used when none is given.
pub const DEFAULT_STEP: f64 = 0.001;

/// Parameters controlling the arc-length walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    step: f64,
}

impl WalkParams {
    /// Creates walk parameters with the given `t` increment.
    ///
    /// Smaller steps resolve tighter curvature at the cost of more
    /// evaluations; `0.0001..=0.001` works well for glyph layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite or not in `(0, 1]`.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(ParamsError::InvalidStep(step).into());
        }
        Ok(Self { step })
    }

    /// Returns the `t` increment.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for WalkParams {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}
