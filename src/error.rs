use thiserror::Error;

/// Top-level error type for the pathtext crate.
#[derive(Debug, Error)]
pub enum PathTextError {
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Errors related to walker configuration.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("walk step {0} must be finite and in (0, 1]")]
    InvalidStep(f64),
}

/// Convenience type alias for results using [`PathTextError`].
pub type Result<T> = std::result::Result<T, PathTextError>;
