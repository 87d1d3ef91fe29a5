//! Inverting `y = x / (1 + x)` on `x ∈ [0, 1]`.
//!
//! Fits a cubic seed table, traces one observed solve, then inverts a batch
//! of sampled targets in parallel and compares every result against the
//! analytic inverse `x = y / (1 - y)`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example invert
//! cargo run --example invert -- 64 1e-14
//! RUST_LOG=debug cargo run --example invert
//! ```
//!
//! The optional arguments are the knot count (default 16) and the residual
//! tolerance (default 1e-13).

use std::error::Error;

use invnewton_core::{Evaluation, Function, Observer};
use invnewton_observers::{StallGuard, StepRecorder, TraceObserver};
use invnewton_solvers::{
    Inverter,
    batch::{DispatchConfig, Dispatcher},
    fit::FitOrder,
    newton::{Action, Config, Event},
};
use tracing::{info, warn};

const SAMPLES: i32 = 100_000;

/// `y = x / (1 + x)`; value and derivative share the denominator.
struct Saturating;

impl Function for Saturating {
    fn evaluate(&self, x: f64) -> Evaluation {
        let denom = 1.0 + x;
        Evaluation::new(x / denom, 1.0 / (denom * denom))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let knots: usize = args.next().map_or(Ok(16), |s| s.parse())?;
    let y_tol: f64 = args.next().map_or(Ok(1e-13), |s| s.parse())?;

    let dispatcher = Dispatcher::new(DispatchConfig::new().name_prefix("invert"))?;
    let inverter =
        Inverter::fit(Saturating, [0.0, 1.0], knots, FitOrder::Cubic)?.with_dispatcher(dispatcher);
    let config = Config::on_residual(y_tol, 50)?;

    info!(
        knots,
        y_lo = inverter.bounds().y_lo(),
        y_hi = inverter.bounds().y_hi(),
        "fitted seed table"
    );

    traced_solve(&inverter, 0.3, &config)?;
    batch_solve(&inverter, &config);

    Ok(())
}

/// Solves a single target with every observer attached.
fn traced_solve(
    inverter: &Inverter<Saturating>,
    y: f64,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let mut trace = TraceObserver::new("traced");
    let mut recorder = StepRecorder::new();
    let mut guard = StallGuard::new(3).with_warm_up(2);

    let solution = inverter.solve_observed(y, config, |event: &Event| -> Option<Action> {
        let _: Option<Action> = trace.observe(event);
        let _: Option<Action> = recorder.observe(event);
        guard.observe(event)
    })?;

    for record in recorder.records() {
        info!(
            iter = record.iter,
            step = record.step,
            residual = record.residual,
            "step"
        );
    }
    info!(
        y,
        x = solution.x,
        exact = y / (1.0 - y),
        status = ?solution.status,
        "traced solve"
    );
    Ok(())
}

/// Inverts evenly spaced samples of the range and reports the worst error.
fn batch_solve(inverter: &Inverter<Saturating>, config: &Config) {
    let y_hi = inverter.bounds().y_hi();
    let ys: Vec<f64> = (0..SAMPLES)
        .map(|i| y_hi * f64::from(i) / f64::from(SAMPLES))
        .collect();

    let result = inverter.solve_batch(&ys, config);
    if let Some(index) = result.failure() {
        warn!(
            index,
            status = ?result.status()[index],
            failed = result.failures().count(),
            "batch had failures"
        );
    }

    let worst = ys
        .iter()
        .zip(result.x())
        .map(|(&y, &x)| (x - y / (1.0 - y)).abs())
        .filter(|err| err.is_finite())
        .fold(0.0_f64, f64::max);

    info!(
        samples = ys.len(),
        worst_error = worst,
        "batch solve against analytic inverse"
    );
}
