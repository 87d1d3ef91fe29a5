//! Capability traits for observers.
//!
//! These traits abstract over solver event and action types, so observers can
//! be written once against the capabilities they need rather than a concrete
//! event type.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that know which iteration produced them
//! - [`HasResidual`] — events that carry a residual `f(x) - y`
//! - [`HasStep`] — events that carry the step just applied to `x`
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use invnewton_core::Observer;
//! use invnewton_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use invnewton_solvers::newton;

/// An event produced by a numbered iteration.
pub trait HasIteration {
    /// Returns the one-based iteration number.
    fn iteration(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(x) - y` for this event.
    fn residual(&self) -> f64;
}

/// An event that carries the step applied to the iterate.
pub trait HasStep {
    /// Returns the step applied to `x`.
    fn step(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for newton::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasStep for newton::Event {
    fn step(&self) -> f64 {
        self.step
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
