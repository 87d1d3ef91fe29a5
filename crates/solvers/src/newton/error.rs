use thiserror::Error;

use crate::seed::SeedError;

/// Errors that can occur during a Newton solve.
///
/// Running out of iterations is not an error; it is reported through
/// [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    OutOfDomain(#[from] SeedError),

    #[error("non-finite Newton step at iteration {iter}: x = {x}, step = {step}")]
    NonFiniteStep { iter: usize, x: f64, step: f64 },
}
