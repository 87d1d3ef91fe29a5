use approx::assert_relative_eq;

use invnewton_core::{DomainBounds, Evaluation, Function};

use crate::seed::SeedTable;

use super::{Action, Config, Error, Event, Mode, Status, solve, solve_unobserved};

/// `y = x²` on `x ∈ [0, 10]`.
struct Square;

impl Function for Square {
    fn evaluate(&self, x: f64) -> Evaluation {
        Evaluation::new(x * x, 2.0 * x)
    }
}

/// Order-1 table for `x = sqrt(y)` with 5 knots over `y ∈ [0, 100]`.
fn square_table() -> SeedTable {
    let bounds = DomainBounds::new([0.0, 100.0], [0.0, 10.0]).expect("valid bounds");
    let x: Vec<f64> = (0..5_i32).map(|i| (25.0 * f64::from(i)).sqrt()).collect();

    let mut coefficients = Vec::with_capacity(10);
    for i in 0..5 {
        let slope = if i < 4 {
            (x[i + 1] - x[i]) / 25.0
        } else {
            (x[4] - x[3]) / 25.0
        };
        coefficients.extend([x[i], slope]);
    }

    SeedTable::new(bounds, 1, 5, coefficients).expect("valid table")
}

#[test]
fn inverts_square_at_49() {
    let config = Config::on_residual(1e-10, 20).expect("valid config");

    let solution =
        solve_unobserved(&Square, &square_table(), 49.0, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 7.0, epsilon = 1e-5);
    assert!(solution.residual.abs() < 1e-10);
    assert!(solution.iters >= 1 && solution.iters <= 20);
    assert!(solution.history.is_none());
}

#[test]
fn zero_budget_reports_max_iters() {
    let config = Config::on_residual(1e-10, 0)
        .expect("valid config")
        .with_history();

    let solution =
        solve_unobserved(&Square, &square_table(), 49.0, &config).expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.history, Some(Vec::new()));
    assert_eq!(solution.converged_x(), None);

    // No refinement: x is the seed guess.
    let seed = square_table().seed(49.0).expect("in domain");
    assert_relative_eq!(solution.x, seed.x);
}

#[test]
fn exhausted_budget_reports_max_iters() {
    // One step from the seed leaves a residual near 1e-4.
    let config = Config::on_residual(1e-10, 1).expect("valid config");

    let solution =
        solve_unobserved(&Square, &square_table(), 49.0, &config).expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    assert!(solution.residual.abs() > 1e-10);
}

#[test]
fn history_matches_iterations() {
    let config = Config::on_residual(1e-12, 20)
        .expect("valid config")
        .with_history();
    let table = square_table();

    let solution = solve_unobserved(&Square, &table, 49.0, &config).expect("should solve");
    let history = solution.history.as_ref().expect("history recorded");

    assert_eq!(history.len(), solution.iters);

    // The first recorded step is the Newton step from the seed.
    let x0 = table.seed(49.0).expect("in domain").x;
    let expected = -(x0 * x0 - 49.0) / (2.0 * x0);
    assert_relative_eq!(history[0], expected, epsilon = 1e-15);

    // Replaying the steps from the seed reproduces the solution.
    let replayed = history.iter().fold(x0, |x, dx| x + dx);
    assert_relative_eq!(replayed, solution.x, epsilon = 1e-12);
}

#[test]
fn step_mode_converges() {
    let config = Config::new(Mode::OnStep, 1.0, Some(1e-9), 20).expect("valid config");

    let solution =
        solve_unobserved(&Square, &square_table(), 30.0, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 30.0_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn both_mode_needs_both_tests() {
    let table = square_table();
    let residual = Config::new(Mode::OnResidual, 1e-3, Some(1e-14), 50).expect("valid");
    let both = Config::new(Mode::OnBoth, 1e-3, Some(1e-14), 50).expect("valid");

    let loose = solve_unobserved(&Square, &table, 60.0, &residual).expect("should solve");
    let strict = solve_unobserved(&Square, &table, 60.0, &both).expect("should solve");

    assert_eq!(loose.status, Status::Converged);
    assert_eq!(strict.status, Status::Converged);
    assert!(strict.iters > loose.iters);
}

#[test]
fn exact_seed_on_zero_slope_converges() {
    // The seed at y = 0 is exactly x = 0, where f'(x) = 0.
    let config = Config::on_residual(1e-12, 10).expect("valid config");

    let solution = solve_unobserved(&Square, &square_table(), 0.0, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 0.0);
}

#[test]
fn rejects_out_of_domain() {
    let config = Config::default();

    let result = solve_unobserved(&Square, &square_table(), 1e9, &config);

    assert!(matches!(result, Err(Error::OutOfDomain(_))));
}

#[test]
fn zero_derivative_is_non_finite_step() {
    // Reports a flat derivative everywhere, so the first step divides by zero.
    let flat = |x: f64| (x, 0.0);
    let bounds = DomainBounds::new([0.0, 1.0], [0.0, 1.0]).expect("valid bounds");
    let table = SeedTable::new(bounds, 1, 2, vec![0.4, 0.0, 0.4, 0.0]).expect("valid table");

    let result = solve_unobserved(&flat, &table, 0.5, &Config::default());

    assert!(matches!(
        result,
        Err(Error::NonFiniteStep { iter: 1, step, .. }) if step.is_infinite()
    ));
}

#[test]
fn infinite_derivative_is_not_converged() {
    // The cube root is vertical at zero, where every seed of this table lands.
    let cbrt = |x: f64| {
        let c = x.cbrt();
        (c, 1.0 / (3.0 * c * c))
    };
    let bounds = DomainBounds::new([-1.0, 1.0], [-1.0, 1.0]).expect("valid bounds");
    let table = SeedTable::new(bounds, 1, 2, vec![0.0; 4]).expect("valid table");
    let config = Config::new(Mode::OnStep, 1e-12, Some(1e-12), 20).expect("valid config");

    let result = solve_unobserved(&cbrt, &table, 0.5, &config);

    assert!(matches!(
        result,
        Err(Error::NonFiniteStep { iter: 1, x, step }) if x == 0.0 && step.is_nan()
    ));

    // An exact seed at the vertical point is still a root.
    let exact = solve_unobserved(&cbrt, &table, 0.0, &config).expect("in domain");
    assert_eq!(exact.status, Status::Converged);
}

#[test]
fn overflowing_iterate_is_non_finite_step() {
    // A tiny derivative throws the iterate far enough to overflow f.
    let steep = |x: f64| (x.powi(3) - 1.0, 1e-300);
    let bounds = DomainBounds::new([0.0, 1.0], [0.0, 1.0]).expect("valid bounds");
    let table = SeedTable::new(bounds, 1, 2, vec![0.5, 0.0, 0.5, 0.0]).expect("valid table");

    let result = solve_unobserved(&steep, &table, 0.5, &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteStep { iter: 1, .. })));
}

#[test]
fn observer_sees_each_iteration() {
    let config = Config::on_residual(1e-12, 20).expect("valid config");

    let mut events = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    let solution =
        solve(&Square, &square_table(), 49.0, &config, observer).expect("should solve");

    assert_eq!(events.len(), solution.iters);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iter, i + 1);
    }
    let last = events.last().expect("at least one event");
    assert_relative_eq!(last.x, solution.x);
    assert_relative_eq!(last.residual, solution.residual);
}

#[test]
fn observer_can_stop_iteration() {
    let config = Config::on_residual(1e-300, 20).expect("valid config");

    let observer = |event: &Event| (event.iter >= 2).then_some(Action::StopEarly);

    let solution =
        solve(&Square, &square_table(), 49.0, &config, observer).expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
}

#[test]
fn residual_decreases_after_second_iteration() {
    let config = Config::on_residual(1e-12, 20).expect("valid config");

    let mut residuals = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        residuals.push(event.residual.abs());
        None
    };

    let solution =
        solve(&Square, &square_table(), 83.0, &config, observer).expect("should solve");

    assert!(solution.is_converged());
    assert_eq!(residuals.len(), solution.iters);
    assert!(residuals.len() >= 2);
    for pair in residuals.windows(2).skip(1) {
        assert!(pair[1] <= pair[0], "residual grew: {residuals:?}");
    }
}

#[test]
fn deterministic_for_fixed_inputs() {
    let config = Config::on_residual(1e-12, 20)
        .expect("valid config")
        .with_history();
    let table = square_table();

    let first = solve_unobserved(&Square, &table, 12.5, &config).expect("should solve");
    let second = solve_unobserved(&Square, &table, 12.5, &config).expect("should solve");

    assert_eq!(first, second);
}
