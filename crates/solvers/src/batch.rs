//! Parallel batch inversion.
//!
//! A batch applies the Newton solver independently to every target `y`.
//! Elements share only the read-only function and seed table, so they run as
//! an unordered parallel map on a rayon pool; results are gathered back in
//! input order, so output slot `i` always belongs to `ys[i]`.
//!
//! Every element is attempted regardless of failures elsewhere in the batch.
//! The [`BatchResult`] carries a status per element and the index of the
//! lowest failing element, if any. Slots of elements that did not converge
//! hold `NaN`.

mod dispatch;
mod result;


pub use dispatch::{DispatchConfig, DispatchError, Dispatcher};
pub use result::{BatchResult, ElementStatus};

use invnewton_core::Function;

use crate::{newton::Config, seed::SeedTable};

/// Inverts every element of `ys` on rayon's global pool.
///
/// This is a convenience wrapper around [`Dispatcher::solve_batch`] with
/// [`Dispatcher::global`]. Step history recording is always disabled.
#[must_use]
pub fn solve_batch<F>(function: &F, table: &SeedTable, ys: &[f64], config: &Config) -> BatchResult
where
    F: Function + Sync + ?Sized,
{
    Dispatcher::global().solve_batch(function, table, ys, config)
}
