//! Core traits and types for the invnewton engine.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Function`] — a monotonic scalar function evaluated together with its
//!   derivative
//! - [`Evaluation`] — the value/derivative pair returned by a [`Function`]
//! - [`DomainBounds`] — the valid input and output ranges of an inversion
//! - [`Observer`] — receives solver events and optionally returns control actions

mod domain;
mod function;
mod observer;

pub use domain::{DomainBounds, DomainError};
pub use function::{Evaluation, Function};
pub use observer::Observer;
