//! Property-based tests for seeding and Newton refinement.
//!
//! Covers round-trip accuracy over the whole table domain, seed containment,
//! and agreement between batch and scalar solves for arbitrary targets.

use invnewton_core::{Evaluation, Function};
use invnewton_solvers::{
    Inverter,
    batch::ElementStatus,
    fit::FitOrder,
    newton::{Config, Error, Status},
};
use proptest::prelude::*;

/// `y = exp(x)` on `[0, 3]`, where value and derivative coincide.
struct Exponential;

impl Function for Exponential {
    fn evaluate(&self, x: f64) -> Evaluation {
        let e = x.exp();
        Evaluation::new(e, e)
    }
}

fn inverter(order: FitOrder) -> Inverter<Exponential> {
    Inverter::fit(Exponential, [0.0, 3.0], 24, order).expect("fit should succeed")
}

// ── Strategies ──────────────────────────────────────────────────────────────

/// A target inside the domain `[1, e³]`.
fn arb_in_domain() -> impl Strategy<Value = f64> {
    1.0..=3.0_f64.exp()
}

/// A target that may fall outside the domain or be non-finite.
fn arb_any_target() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => arb_in_domain(),
        1 => -1e3..1.0_f64,
        1 => 21.0..1e6_f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn arb_order() -> impl Strategy<Value = FitOrder> {
    prop_oneof![Just(FitOrder::Linear), Just(FitOrder::Cubic)]
}

// ── Property tests ───────────────────────────────────────────────────────────

proptest! {
    /// Every in-domain target converges and reproduces `y`.
    #[test]
    fn round_trip(y in arb_in_domain(), order in arb_order()) {
        let config = Config::on_residual(1e-12, 30).expect("valid config");
        let solution = inverter(order).solve(y, &config).expect("in domain");

        prop_assert_eq!(solution.status, Status::Converged);
        prop_assert!((solution.x.exp() - y).abs() < 1e-12 * y.max(1.0) + 1e-12);
        prop_assert!((solution.x - y.ln()).abs() < 1e-11);
    }

    /// Seeds stay inside the x range the table was fitted over.
    #[test]
    fn seed_stays_near_x_range(y in arb_in_domain()) {
        let seed = inverter(FitOrder::Cubic).seed(y).expect("in domain");
        prop_assert!((-1e-3..=3.0 + 1e-3).contains(&seed.x), "seed {} for y = {}", seed.x, y);
        prop_assert!(seed.dxdy > 0.0);
    }

    /// Out-of-domain and non-finite targets are rejected, never solved.
    #[test]
    fn rejects_exactly_the_out_of_domain_targets(y in arb_any_target()) {
        let inverter = inverter(FitOrder::Linear);
        let result = inverter.solve(y, &Config::default());

        if inverter.bounds().contains_y(y) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(Error::OutOfDomain(_))));
        }
    }

    /// Batch slots agree with independent scalar solves.
    #[test]
    fn batch_agrees_with_scalar(ys in prop::collection::vec(arb_any_target(), 0..64)) {
        let inverter = inverter(FitOrder::Cubic);
        let config = Config::on_residual(1e-12, 30).expect("valid config");
        let result = inverter.solve_batch(&ys, &config);

        prop_assert_eq!(result.len(), ys.len());
        for (i, &y) in ys.iter().enumerate() {
            match (result.status()[i], inverter.solve(y, &config)) {
                (ElementStatus::Converged { .. }, Ok(solution)) => {
                    prop_assert_eq!(result.x()[i].to_bits(), solution.x.to_bits());
                }
                (ElementStatus::Failed(batch_error), Err(scalar_error)) => {
                    prop_assert!(result.x()[i].is_nan());
                    // NaN fields never compare equal, so match on the variant.
                    prop_assert_eq!(
                        std::mem::discriminant(&batch_error),
                        std::mem::discriminant(&scalar_error)
                    );
                }
                (status, scalar) => {
                    prop_assert!(false, "batch {:?} vs scalar {:?} at {}", status, scalar, i);
                }
            }
        }

        let expected = result.status().iter().position(|s| !s.is_converged());
        prop_assert_eq!(result.failure(), expected);
    }
}
