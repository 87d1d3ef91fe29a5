use thiserror::Error;

/// Reasons an x interval cannot be searched for a knot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(super) enum BracketError {
    #[error("interval endpoint is not finite")]
    NonFinite,
    #[error("interval has no width")]
    ZeroWidth,
    /// `f - y` has the same sign at both ends.
    #[error("target is not bracketed")]
    NotBracketed,
}

/// Which side of the target `f(x)` falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Below,
    /// At or above the target.
    Above,
}

impl Side {
    pub(super) fn of(residual: f64) -> Self {
        if residual < 0.0 { Side::Below } else { Side::Above }
    }
}

/// An x interval whose ends straddle the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lo: f64,
    hi: f64,
    lo_side: Side,
}

impl Bracket {
    /// # Errors
    ///
    /// Fails if either end is non-finite, the ends coincide, or both ends
    /// lie on the same side of the target.
    #[allow(clippy::float_cmp)]
    pub(super) fn new(
        [lo, hi]: [f64; 2],
        lo_side: Side,
        hi_side: Side,
    ) -> Result<Self, BracketError> {
        if !(lo.is_finite() && hi.is_finite()) {
            Err(BracketError::NonFinite)
        } else if lo == hi {
            Err(BracketError::ZeroWidth)
        } else if lo_side == hi_side {
            Err(BracketError::NotBracketed)
        } else {
            Ok(Self { lo, hi, lo_side })
        }
    }

    pub(super) fn middle(&self) -> f64 {
        self.lo + 0.5 * (self.hi - self.lo)
    }

    /// True once the interval is narrower than `abs_tol + rel_tol * |mid|`.
    pub(super) fn is_narrow(&self, abs_tol: f64, rel_tol: f64) -> bool {
        (self.hi - self.lo).abs() <= abs_tol + rel_tol * self.middle().abs()
    }

    /// Replaces whichever end lies on the same side of the target as `x`.
    pub(super) fn narrow(&mut self, x: f64, side: Side) {
        if side == self.lo_side {
            self.lo = x;
        } else {
            self.hi = x;
        }
    }
}

/// Locates a sign change of `residual` in `[lo, hi]` by halving.
///
/// Returns an end or midpoint whose residual is exactly zero as soon as one
/// is seen. Otherwise halves until the interval is within tolerance, can no
/// longer be split in floating point, or `max_iters` halvings are spent.
///
/// # Errors
///
/// Fails if the end residuals are `NaN` or do not straddle zero.
#[allow(clippy::float_cmp)]
pub(super) fn bisect(
    residual: impl Fn(f64) -> f64,
    [lo, hi]: [f64; 2],
    abs_tol: f64,
    rel_tol: f64,
    max_iters: usize,
) -> Result<f64, BracketError> {
    let r_lo = residual(lo);
    let r_hi = residual(hi);
    if r_lo == 0.0 {
        return Ok(lo);
    }
    if r_hi == 0.0 {
        return Ok(hi);
    }
    if r_lo.is_nan() || r_hi.is_nan() {
        return Err(BracketError::NonFinite);
    }

    let mut bracket = Bracket::new([lo, hi], Side::of(r_lo), Side::of(r_hi))?;
    for _ in 0..max_iters {
        let x = bracket.middle();
        if x == bracket.lo || x == bracket.hi || bracket.is_narrow(abs_tol, rel_tol) {
            return Ok(x);
        }
        let r = residual(x);
        if r == 0.0 {
            return Ok(x);
        }
        bracket.narrow(x, Side::of(r));
    }
    Ok(bracket.middle())
}
