//! Reusable observers for Newton inversion solves.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver events and actions
//!   ([`HasIteration`], [`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — forwards every event to `tracing`
//! - [`StallGuard`] — stops a solve whose residual has stopped improving
//! - [`StepRecorder`] — collects per-iteration steps and residuals
//!
//! [`Observer`]: invnewton_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod stall;
mod trace;

pub use recorder::{StepRecord, StepRecorder};
pub use stall::StallGuard;
pub use trace::TraceObserver;
