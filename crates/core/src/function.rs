/// The value of a function and its derivative at a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub derivative: f64,
}

impl Evaluation {
    /// Creates an evaluation from a value and derivative.
    #[must_use]
    pub fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }
}

/// A smooth, monotonic scalar function `y = f(x)` to be inverted.
///
/// The value and derivative are produced by one call so that an
/// implementation can compute the subexpressions they share only once.
/// Solvers call [`evaluate`](Function::evaluate) exactly once per iteration.
///
/// Closures of the form `Fn(f64) -> (f64, f64)` returning
/// `(value, derivative)` implement this trait automatically.
pub trait Function {
    /// Evaluates the function and its derivative at `x`.
    fn evaluate(&self, x: f64) -> Evaluation;
}

/// Blanket implementation for `(value, derivative)` closures.
impl<F> Function for F
where
    F: Fn(f64) -> (f64, f64),
{
    fn evaluate(&self, x: f64) -> Evaluation {
        let (value, derivative) = self(x);
        Evaluation { value, derivative }
    }
}
