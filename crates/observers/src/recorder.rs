use invnewton_core::Observer;

use crate::traits::{HasIteration, HasResidual, HasStep};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub iter: usize,
    pub step: f64,
    pub residual: f64,
}

/// Collects the step and residual of every iteration.
///
/// Unlike the solver's own step history, the recorder also keeps residuals
/// and can be reused across several solves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepRecorder {
    records: Vec<StepRecord>,
}

impl StepRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Returns the recorded steps in order.
    pub fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.step)
    }

    /// Returns the recorded residuals in order.
    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.residual)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }
}

impl<E, A> Observer<E, A> for StepRecorder
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(StepRecord {
            iter: event.iteration(),
            step: event.step(),
            residual: event.residual(),
        });
        None
    }
}

/// Allows `&mut StepRecorder` to be passed to solvers that take an observer
/// by value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut StepRecorder
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
