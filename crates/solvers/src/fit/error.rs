use invnewton_core::DomainError;
use thiserror::Error;

use crate::seed::TableError;

/// Errors that can occur while fitting a seed table.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("a seed table needs at least 2 knots, got {knots}")]
    TooFewKnots { knots: usize },

    #[error("invalid domain: {0}")]
    Domain(#[from] DomainError),

    /// The function takes the same value at both ends of the x range.
    #[error("function is flat over the x range (value {value})")]
    Flat { value: f64 },

    /// No x in the range reproduces a knot's y value.
    #[error("could not locate x for knot y = {y}")]
    NoRoot { y: f64 },

    /// Knot x values do not strictly advance in one direction, or the
    /// derivative at a knot points the other way.
    #[error("knot {knot} breaks monotonicity of the inverse")]
    NotMonotonic { knot: usize },

    #[error(transparent)]
    Table(#[from] TableError),
}
