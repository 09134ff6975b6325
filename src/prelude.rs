use ndarray::prelude::*;

pub type R1D = Array1<f64>;
pub type VR1D<'a> = ArrayView1<'a, f64>;

/// Errors reported by the estimation core.
/// Every one of these is a deterministic input-validity failure, nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("sample count mismatch: {x_count} x values but {y_count} y values")]
    CountMismatch { x_count: usize, y_count: usize },

    #[error("duplicate abscissa x = {0}")]
    DuplicateAbscissa(f64),

    #[error("{method} needs at least {required} samples, got {actual}")]
    InsufficientData {
        method: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("not a finite number: {0}")]
    ParseFailure(String),

    #[error("no reference value at x = {0}")]
    MissingReference(f64),
}
