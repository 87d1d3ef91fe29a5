use thiserror::Error;

use super::SeedTable;

/// Errors that can occur when seeding from a [`SeedTable`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeedError {
    #[error("y = {y} is outside the table domain [{y_lo}, {y_hi}]")]
    OutOfDomain { y: f64, y_lo: f64, y_hi: f64 },
}

/// An initial guess for `x = f⁻¹(y)` read from a seed table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    /// Initial guess for x.
    pub x: f64,
    /// Estimate of `dx/dy` from the local polynomial.
    pub dxdy: f64,
    /// Index of the bucket that produced the guess.
    pub bucket: usize,
}

impl SeedTable {
    /// Evaluates the seed polynomial at `y`.
    ///
    /// The value and first derivative of the bucket's polynomial are
    /// accumulated together in a single Horner pass over its coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::OutOfDomain`] if `y` is outside `[y_lo, y_hi]`
    /// or is `NaN`. The table never extrapolates.
    pub fn seed(&self, y: f64) -> Result<Seed, SeedError> {
        let bounds = self.bounds();
        if !bounds.contains_y(y) {
            return Err(SeedError::OutOfDomain {
                y,
                y_lo: bounds.y_lo(),
                y_hi: bounds.y_hi(),
            });
        }

        let bucket = self.bucket_index(y);
        let local_y = y - self.knot_y(bucket);

        let mut x = 0.0;
        let mut dxdy = 0.0;
        for &c in self.row(bucket).iter().rev() {
            dxdy = dxdy * local_y + x;
            x = x * local_y + c;
        }

        Ok(Seed { x, dxdy, bucket })
    }
}
