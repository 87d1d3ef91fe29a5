/// Iteration event emitted by the Newton solver.
///
/// One event is emitted per refinement step, after the step has been applied
/// and the function re-evaluated, and before the convergence test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The iterate after applying `step`.
    pub x: f64,
    /// The step `dx` that produced `x`.
    pub step: f64,
    /// The residual `f(x) - y` at the new iterate.
    pub residual: f64,
}
