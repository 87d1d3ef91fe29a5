use invnewton_core::Observer;
use tracing::debug;

use crate::traits::{HasIteration, HasResidual, HasStep};

/// Forwards every solver event to `tracing` at debug level.
///
/// Never requests an action. Each record carries the observer's label so
/// interleaved solves can be told apart.
///
/// # Example
///
/// ```
/// use invnewton_observers::TraceObserver;
/// use invnewton_solvers::{Inverter, fit::FitOrder, newton::Config};
///
/// let inverter = Inverter::fit(|x: f64| (x * x, 2.0 * x), [0.0, 10.0], 5, FitOrder::Linear)
///     .unwrap();
/// let mut trace = TraceObserver::new("square");
///
/// let solution = inverter.solve_observed(49.0, &Config::default(), &mut trace).unwrap();
/// assert_eq!(trace.events(), solution.iters);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceObserver {
    label: String,
    events: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its records with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: 0,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of events logged so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new("newton")
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        debug!(
            label = %self.label,
            iter = event.iteration(),
            step = event.step(),
            residual = event.residual(),
            "solver event"
        );
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to solvers that take an observer
/// by value.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
