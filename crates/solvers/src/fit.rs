//! Numeric construction of seed tables.
//!
//! A table is fitted from the forward function alone. Knots are placed at
//! equal spacing in y across `[f(x_lo), f(x_hi)]` (sorted, so decreasing
//! functions work too), the x at each knot is located by bisection, and a
//! piecewise polynomial in `local_y` is built through the located points:
//!
//! - [`FitOrder::Linear`] joins neighbouring knots with secant lines.
//! - [`FitOrder::Cubic`] builds a Hermite cubic per bucket, using the
//!   inverse slope `dx/dy = 1 / f'(x)` at each knot and falling back to the
//!   secant slope wherever that is not finite.
//!
//! The last knot carries a bucket of its own so that `y = y_hi` evaluates
//! without reading past the table. That bucket continues the final
//! segment's slope.

mod bracket;
mod error;


pub use error::FitError;

use invnewton_core::{DomainBounds, DomainError, Function};
use tracing::debug;

use crate::seed::SeedTable;

use bracket::bisect;

const BISECT_MAX_ITERS: usize = 200;
const BISECT_REL_TOL: f64 = 4.0 * f64::EPSILON;

/// Polynomial order of a fitted seed table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitOrder {
    /// Secant lines between knots (order 1).
    Linear,

    /// Hermite cubics matching the inverse slope at each knot (order 3).
    #[default]
    Cubic,
}

impl FitOrder {
    /// Returns the polynomial order of each bucket.
    #[must_use]
    pub fn degree(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Cubic => 3,
        }
    }
}

/// Fits a seed table for `function` over `x_range` with `knots` knots.
///
/// The function must be continuous and strictly monotonic over `x_range`.
///
/// # Errors
///
/// Returns an error if:
/// - fewer than two knots are requested,
/// - `x_range` is non-finite or empty, or `f` is non-finite at its ends,
/// - `f` takes the same value at both ends of `x_range`,
/// - a knot's x cannot be located,
/// - the located knot x values are not strictly monotonic, or
/// - `f'` at a knot has the opposite sign to the direction of `f`.
pub fn build<F>(
    function: &F,
    x_range: [f64; 2],
    knots: usize,
    order: FitOrder,
) -> Result<SeedTable, FitError>
where
    F: Function + ?Sized,
{
    if knots < 2 {
        return Err(FitError::TooFewKnots { knots });
    }

    let [x_lo, x_hi] = x_range;
    let y_a = function.evaluate(x_lo).value;
    let y_b = function.evaluate(x_hi).value;
    let y_range = if y_a <= y_b { [y_a, y_b] } else { [y_b, y_a] };

    let bounds = DomainBounds::new(y_range, x_range).map_err(|error| match error {
        DomainError::EmptyY { lo, .. } => FitError::Flat { value: lo },
        other => FitError::Domain(other),
    })?;

    let xs = locate_knots(function, &bounds, knots)?;
    check_monotonic(&xs)?;
    check_slope_signs(function, &xs)?;

    #[allow(clippy::cast_precision_loss)]
    let spacing = bounds.y_span() / (knots - 1) as f64;
    let secants: Vec<f64> = xs.windows(2).map(|w| (w[1] - w[0]) / spacing).collect();

    let coefficients = match order {
        FitOrder::Linear => linear(&xs, &secants),
        FitOrder::Cubic => {
            let slopes = knot_slopes(function, &xs, &secants);
            cubic(&xs, &secants, &slopes, spacing)
        }
    };

    debug!(
        knots,
        order = order.degree(),
        y_lo = bounds.y_lo(),
        y_hi = bounds.y_hi(),
        "fitted seed table"
    );

    Ok(SeedTable::new(bounds, order.degree(), knots, coefficients)?)
}

/// Locates the x value at each equally spaced knot in y.
fn locate_knots<F>(function: &F, bounds: &DomainBounds, knots: usize) -> Result<Vec<f64>, FitError>
where
    F: Function + ?Sized,
{
    let x_range = [bounds.x_lo(), bounds.x_hi()];
    let x_abs_tol = f64::EPSILON * bounds.x_span();

    (0..knots)
        .map(|i| {
            let y = knot_y(bounds, knots, i);
            bisect(
                |x| function.evaluate(x).value - y,
                x_range,
                x_abs_tol,
                BISECT_REL_TOL,
                BISECT_MAX_ITERS,
            )
            .map_err(|_| FitError::NoRoot { y })
        })
        .collect()
}

/// Returns the y value of knot `index`, pinning the last knot to `y_hi`.
fn knot_y(bounds: &DomainBounds, knots: usize, index: usize) -> f64 {
    if index + 1 == knots {
        return bounds.y_hi();
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = index as f64 / (knots - 1) as f64;
    bounds.y_lo() + fraction * bounds.y_span()
}

/// Checks that knot x values strictly advance in a single direction.
fn check_monotonic(xs: &[f64]) -> Result<(), FitError> {
    let increasing = xs[xs.len() - 1] > xs[0];
    for (i, w) in xs.windows(2).enumerate() {
        let advances = if increasing { w[1] > w[0] } else { w[1] < w[0] };
        if !advances {
            return Err(FitError::NotMonotonic { knot: i + 1 });
        }
    }
    Ok(())
}

/// Checks that `f'` at each knot agrees with the direction the knots advance.
///
/// Zero and non-finite derivatives are accepted; the cubic fit falls back to
/// secant slopes there.
fn check_slope_signs<F>(function: &F, xs: &[f64]) -> Result<(), FitError>
where
    F: Function + ?Sized,
{
    let increasing = xs[xs.len() - 1] > xs[0];
    match xs.iter().position(|&x| {
        let derivative = function.evaluate(x).derivative;
        if increasing {
            derivative < 0.0
        } else {
            derivative > 0.0
        }
    }) {
        Some(knot) => Err(FitError::NotMonotonic { knot }),
        None => Ok(()),
    }
}

fn linear(xs: &[f64], secants: &[f64]) -> Vec<f64> {
    let last = secants.len() - 1;
    xs.iter()
        .enumerate()
        .flat_map(|(i, &x)| [x, secants[i.min(last)]])
        .collect()
}

/// Returns `dx/dy` at each knot.
///
/// Uses `1 / f'(x)` where finite, otherwise the secant slope of the adjacent
/// bucket (averaged over both neighbours for interior knots).
fn knot_slopes<F>(function: &F, xs: &[f64], secants: &[f64]) -> Vec<f64>
where
    F: Function + ?Sized,
{
    let last = secants.len() - 1;
    xs.iter()
        .enumerate()
        .map(|(i, &x)| {
            let inverse = function.evaluate(x).derivative.recip();
            if inverse.is_finite() {
                return inverse;
            }
            match i {
                0 => secants[0],
                i if i > last => secants[last],
                i => 0.5 * (secants[i - 1] + secants[i]),
            }
        })
        .collect()
}

fn cubic(xs: &[f64], secants: &[f64], slopes: &[f64], h: f64) -> Vec<f64> {
    let mut coefficients = Vec::with_capacity(xs.len() * 4);
    for (i, &delta) in secants.iter().enumerate() {
        let (m0, m1) = (slopes[i], slopes[i + 1]);
        coefficients.extend([
            xs[i],
            m0,
            (3.0 * delta - 2.0 * m0 - m1) / h,
            (m0 + m1 - 2.0 * delta) / (h * h),
        ]);
    }

    let n = xs.len() - 1;
    coefficients.extend([xs[n], slopes[n], 0.0, 0.0]);
    coefficients
}
