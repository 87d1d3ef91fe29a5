use invnewton_core::Observer;
use tracing::debug;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solve once its residual stops improving.
///
/// After a warm-up of `warm_up` events, every event whose absolute residual
/// is not strictly below the best seen so far counts as a stall. Reaching
/// `patience` consecutive stalls requests an early stop. A non-finite
/// residual always counts as a stall.
///
/// Useful when a tolerance is tighter than the function can resolve in
/// floating point, where the residual hovers at rounding level instead of
/// reaching zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StallGuard {
    patience: usize,
    warm_up: usize,
    seen: usize,
    stalls: usize,
    best: f64,
}

impl StallGuard {
    /// Creates a guard that stops after `patience` consecutive stalls.
    ///
    /// A `patience` of zero is treated as one.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience: patience.max(1),
            warm_up: 0,
            seen: 0,
            stalls: 0,
            best: f64::INFINITY,
        }
    }

    /// Ignores stalls during the first `warm_up` events.
    #[must_use]
    pub fn with_warm_up(mut self, warm_up: usize) -> Self {
        self.warm_up = warm_up;
        self
    }

    #[must_use]
    pub fn patience(&self) -> usize {
        self.patience
    }

    #[must_use]
    pub fn warm_up(&self) -> usize {
        self.warm_up
    }

    /// Returns the smallest absolute residual observed.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.best
    }

    /// Clears the observed history so the guard can watch another solve.
    pub fn reset(&mut self) {
        self.seen = 0;
        self.stalls = 0;
        self.best = f64::INFINITY;
    }

    fn is_stalled(&mut self, residual: f64) -> bool {
        self.seen += 1;

        let residual = residual.abs();
        if residual < self.best {
            self.best = residual;
            self.stalls = 0;
            return false;
        }

        if self.seen > self.warm_up {
            self.stalls += 1;
        }
        self.stalls >= self.patience
    }
}

impl Default for StallGuard {
    fn default() -> Self {
        Self::new(2)
    }
}

impl<E, A> Observer<E, A> for StallGuard
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if !self.is_stalled(event.residual()) {
            return None;
        }
        debug!(
            stalls = self.stalls,
            best = self.best,
            "residual stalled, stopping early"
        );
        Some(A::stop_early())
    }
}

/// Allows `&mut StallGuard` to be passed to solvers that take an observer by
/// value.
impl<E, A> Observer<E, A> for &mut StallGuard
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
