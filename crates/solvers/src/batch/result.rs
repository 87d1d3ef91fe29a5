use crate::newton::{self, Solution, Status};

/// Outcome of one element of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementStatus {
    /// Converged after the given number of iterations.
    Converged { iters: usize },

    /// Exhausted the iteration budget without converging.
    MaxIters,

    /// The solve failed outright.
    Failed(newton::Error),
}

impl ElementStatus {
    /// Returns true if the element converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// Converts a scalar outcome into an output slot and status.
    pub(super) fn slot(outcome: Result<Solution, newton::Error>) -> (f64, Self) {
        match outcome {
            Ok(solution) => match solution.status {
                Status::Converged => (
                    solution.x,
                    Self::Converged {
                        iters: solution.iters,
                    },
                ),
                // Batches run unobserved, so nothing can stop them early.
                Status::MaxIters | Status::StoppedByObserver => (f64::NAN, Self::MaxIters),
            },
            Err(error) => (f64::NAN, Self::Failed(error)),
        }
    }
}

/// The result of a batch solve.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    x: Vec<f64>,
    status: Vec<ElementStatus>,
    failure: Option<usize>,
}

impl BatchResult {
    /// Gathers per-element slots and records the lowest failing index.
    pub(super) fn from_slots(slots: Vec<(f64, ElementStatus)>) -> Self {
        let (x, status): (Vec<_>, Vec<_>) = slots.into_iter().unzip();
        let failure = status.iter().position(|s| !s.is_converged());
        Self { x, status, failure }
    }

    /// Returns the solved x values, aligned with the input.
    ///
    /// Entries for elements that did not converge are `NaN`.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the status of every element, aligned with the input.
    #[must_use]
    pub fn status(&self) -> &[ElementStatus] {
        &self.status
    }

    /// Returns the index of the lowest failing element, or `None` if every
    /// element converged.
    #[must_use]
    pub fn failure(&self) -> Option<usize> {
        self.failure
    }

    /// Returns true if every element converged.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Returns the solved x at `index` if that element converged.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.status
            .get(index)
            .filter(|s| s.is_converged())
            .map(|_| self.x[index])
    }

    /// Returns the indices of all elements that did not converge.
    pub fn failures(&self) -> impl Iterator<Item = usize> + '_ {
        self.status
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_converged())
            .map(|(i, _)| i)
    }

    /// Returns the number of elements in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the batch was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Consumes the result and returns the x values.
    #[must_use]
    pub fn into_x(self) -> Vec<f64> {
        self.x
    }
}
