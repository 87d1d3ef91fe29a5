use thiserror::Error;

/// Errors that can occur when constructing [`DomainBounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("non-finite bound in y range [{lo}, {hi}]")]
    NonFiniteY { lo: f64, hi: f64 },

    #[error("non-finite bound in x range [{lo}, {hi}]")]
    NonFiniteX { lo: f64, hi: f64 },

    #[error("y range is empty: y_lo = {lo} must be below y_hi = {hi}")]
    EmptyY { lo: f64, hi: f64 },

    #[error("x range is empty: x_lo = {lo} must be below x_hi = {hi}")]
    EmptyX { lo: f64, hi: f64 },
}

/// The valid input (`y`) and output (`x`) ranges of an inversion.
///
/// Both ranges are finite and non-empty. Bounds are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    y_lo: f64,
    y_hi: f64,
    x_lo: f64,
    x_hi: f64,
}

impl DomainBounds {
    /// Creates validated domain bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite or if either range is
    /// empty or reversed. The x range is checked first.
    pub fn new(y: [f64; 2], x: [f64; 2]) -> Result<Self, DomainError> {
        let [y_lo, y_hi] = y;
        let [x_lo, x_hi] = x;

        if !x_lo.is_finite() || !x_hi.is_finite() {
            return Err(DomainError::NonFiniteX { lo: x_lo, hi: x_hi });
        }
        if x_lo >= x_hi {
            return Err(DomainError::EmptyX { lo: x_lo, hi: x_hi });
        }
        if !y_lo.is_finite() || !y_hi.is_finite() {
            return Err(DomainError::NonFiniteY { lo: y_lo, hi: y_hi });
        }
        if y_lo >= y_hi {
            return Err(DomainError::EmptyY { lo: y_lo, hi: y_hi });
        }

        Ok(Self {
            y_lo,
            y_hi,
            x_lo,
            x_hi,
        })
    }

    #[must_use]
    pub fn y_lo(&self) -> f64 {
        self.y_lo
    }

    #[must_use]
    pub fn y_hi(&self) -> f64 {
        self.y_hi
    }

    #[must_use]
    pub fn x_lo(&self) -> f64 {
        self.x_lo
    }

    #[must_use]
    pub fn x_hi(&self) -> f64 {
        self.x_hi
    }

    /// Returns `y_hi - y_lo`.
    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y_hi - self.y_lo
    }

    /// Returns `x_hi - x_lo`.
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_hi - self.x_lo
    }

    /// Returns true if `y` lies in the closed range `[y_lo, y_hi]`.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        (self.y_lo..=self.y_hi).contains(&y)
    }

    /// Returns true if `x` lies in the closed range `[x_lo, x_hi]`.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        (self.x_lo..=self.x_hi).contains(&x)
    }
}
