//! Piecewise-polynomial seed tables for the initial inverse guess.
//!
//! A [`SeedTable`] covers `[y_lo, y_hi]` with `N` equidistant knots spaced
//! `Δ = (y_hi - y_lo) / (N - 1)`. Bucket `i` starts at `y_lo + i·Δ` and holds
//! the power-basis coefficients `c_0..=c_order` of a local polynomial:
//!
//! ```text
//! x(y) ≈ c_0 + c_1·(y - y_i) + c_2·(y - y_i)² + …
//! ```
//!
//! [`SeedTable::seed`] locates the bucket for a `y` and evaluates the
//! polynomial and its first derivative with one Horner pass.
//!
//! Tables are immutable once built and can be shared freely across threads.

mod evaluate;
mod table;

pub use evaluate::{Seed, SeedError};
pub use table::{SeedTable, TableError};
