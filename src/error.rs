use thiserror::Error;

/// Errors reported by the bid generator.
///
/// Generation is all-or-nothing: every variant is raised before any bid is
/// produced, so a failing call returns no partial batch.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DatagenError {
    /// A market side asked for more distinct values than the discretized
    /// domain contains.
    #[error("cannot draw {requested} distinct values from a grid of {available} points")]
    SamplingExhausted { requested: usize, available: usize },

    /// The discretization step must be a finite value strictly between
    /// 0 and 1.
    #[error("precision must lie strictly between 0 and 1, got {precision}")]
    InvalidPrecision { precision: f64 },
}
