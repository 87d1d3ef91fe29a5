//! Numeric inversion of smooth, monotonic scalar functions.
//!
//! Given `y = f(x)` with a cheap forward evaluation, this crate computes
//! `x = f⁻¹(y)` to a prescribed tolerance:
//!
//! - [`seed`] — piecewise-polynomial lookup table giving a fast initial guess
//! - [`newton`] — Newton refinement from the seed with configurable convergence
//! - [`batch`] — independent parallel solves over an array of targets
//! - [`fit`] — numeric construction of a seed table from the function itself
//! - [`Inverter`] — bundles a function, its table, and a dispatcher
//!
//! # Example
//!
//! ```
//! use invnewton_solvers::{Inverter, fit::FitOrder, newton::Config};
//!
//! let square = |x: f64| (x * x, 2.0 * x);
//! let inverter = Inverter::fit(square, [0.0, 10.0], 5, FitOrder::Linear).unwrap();
//!
//! let solution = inverter.solve(49.0, &Config::default()).unwrap();
//! assert!(solution.is_converged());
//! assert!((solution.x - 7.0).abs() < 1e-8);
//! ```

pub mod batch;
pub mod fit;
pub mod newton;
pub mod seed;

mod inverter;

pub use inverter::Inverter;
