/// Indicates how a Newton solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured mode and tolerances.
    Converged,

    /// Reached the iteration budget without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last iterate. Only a valid inverse when `status` is `Converged`.
    pub x: f64,

    /// Residual `f(x) - y` at the reported iterate.
    pub residual: f64,

    /// Iterations consumed when the solver finished.
    pub iters: usize,

    /// Steps applied at each iteration, if recording was requested.
    ///
    /// When present, its length equals `iters`.
    pub history: Option<Vec<f64>>,
}

impl Solution {
    /// Returns true if the solve converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns `x` if the solve converged.
    #[must_use]
    pub fn converged_x(&self) -> Option<f64> {
        self.is_converged().then_some(self.x)
    }
}
