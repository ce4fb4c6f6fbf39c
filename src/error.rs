use thiserror::Error;

/// Top-level error type for the sweepclip polygon clipper.
#[derive(Debug, Error)]
pub enum SweepclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sweep(#[from] SweepError),
}

/// Errors related to the input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("contour {contour} has a non-finite coordinate at vertex {index}")]
    NonFiniteCoordinate { contour: usize, index: usize },
}

/// Errors related to clip configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}

/// Internal invariant violations detected during the sweep.
///
/// These indicate a defect in active edge or bundle maintenance rather than
/// a problem with the caller's input.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("output contour with {points} points was never closed")]
    UnclosedContour { points: usize },

    #[error("intersection refers to an edge missing from the active edge list")]
    MissingEdge,
}

/// Convenience type alias for results using [`SweepclipError`].
pub type Result<T> = std::result::Result<T, SweepclipError>;
