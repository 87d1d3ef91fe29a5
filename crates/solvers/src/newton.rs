//! Newton refinement of a seeded inverse.
//!
//! # Algorithm
//!
//! Starting from the seed table's guess `x₀`, each iteration applies the
//! Newton step `dx = -(f(x) - y) / f'(x)`, re-evaluates the function once
//! for both value and derivative, and tests convergence:
//!
//! - [`Mode::OnResidual`] — `|f(x) - y| < y_tol`
//! - [`Mode::OnStep`] — `|dx| < x_tol` for the step just applied
//! - [`Mode::OnBoth`] — both of the above
//!
//! The loop is bounded by [`Config::max_iters`]. A budget of zero performs no
//! refinement and reports [`Status::MaxIters`].
//!
//! # Failure
//!
//! A zero or non-finite derivative, or an overflowing iterate, produces a
//! non-finite step or residual, which is reported as [`Error::NonFiniteStep`]
//! instead of being returned as a plausible `x`. A target outside the table's domain is
//! rejected with [`Error::OutOfDomain`] before any evaluation.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is applied and
//! before the convergence test. Observers can return [`Action::StopEarly`] to
//! halt with [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, Mode};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use invnewton_core::{Function, Observer};
use tracing::trace;

use crate::seed::SeedTable;

/// Inverts `function` at `y`, starting from the seed table's guess.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if `y` is outside the table's domain or if an iteration
/// produces a non-finite step, iterate, or residual.
pub fn solve<F, Obs>(
    function: &F,
    table: &SeedTable,
    y: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let seed = table.seed(y)?;

    let mut x = seed.x;
    let mut eval = function.evaluate(x);
    let mut residual = eval.value - y;
    let mut history = config.record_history().then(Vec::new);

    for iter in 1..=config.max_iters() {
        let step = newton_step(residual, eval.derivative);
        if !step.is_finite() {
            return Err(Error::NonFiniteStep { iter, x, step });
        }

        x += step;
        eval = function.evaluate(x);
        residual = eval.value - y;
        if !x.is_finite() || !residual.is_finite() {
            return Err(Error::NonFiniteStep { iter, x, step });
        }

        if let Some(history) = history.as_mut() {
            history.push(step);
        }

        trace!(iter, x, step, residual, "newton iteration");

        let event = Event {
            iter,
            x,
            step,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                iters: iter,
                history,
            });
        }

        if config.is_converged(residual, step) {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters: iter,
                history,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual,
        iters: config.max_iters(),
        history,
    })
}

/// Inverts `function` at `y` without observation.
///
/// # Errors
///
/// Returns an error if `y` is outside the table's domain or if an iteration
/// produces a non-finite step, iterate, or residual.
pub fn solve_unobserved<F>(
    function: &F,
    table: &SeedTable,
    y: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, table, y, config, ())
}

/// Computes the Newton step for a residual and derivative.
///
/// An exact residual yields a zero step without dividing, so a seed that
/// lands on a point of zero slope is not mistaken for a failure. Otherwise a
/// non-finite derivative yields `NaN`, since dividing by it would give a zero
/// step that looks converged.
#[allow(clippy::float_cmp)]
fn newton_step(residual: f64, derivative: f64) -> f64 {
    if residual == 0.0 {
        0.0
    } else if derivative.is_finite() {
        -residual / derivative
    } else {
        f64::NAN
    }
}
