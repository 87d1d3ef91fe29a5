use invnewton_core::DomainBounds;
use thiserror::Error;

/// Errors that can occur when constructing a [`SeedTable`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("a seed table needs at least 2 knots, got {knots}")]
    TooFewKnots { knots: usize },

    #[error("{knots} knots of order {order} need more coefficients than fit in memory")]
    TooLarge { knots: usize, order: usize },

    #[error("expected {expected} coefficients ({knots} knots of order {order}), got {actual}")]
    LengthMismatch {
        knots: usize,
        order: usize,
        expected: usize,
        actual: usize,
    },
}

/// An immutable table of per-bucket polynomial coefficients.
///
/// See the [module docs](super) for the coefficient layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTable {
    bounds: DomainBounds,
    order: usize,
    knots: usize,
    spacing: f64,
    coefficients: Box<[f64]>,
}

impl SeedTable {
    /// Creates a seed table from a flattened coefficient array.
    ///
    /// `coefficients` holds `knots * (order + 1)` values, bucket by bucket.
    /// Only the shape is validated; the numerical quality of the fit is the
    /// responsibility of whoever produced the coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two knots are given, if
    /// `knots * (order + 1)` overflows, or if the number of coefficients does
    /// not match the knot count and order.
    pub fn new(
        bounds: DomainBounds,
        order: usize,
        knots: usize,
        coefficients: impl Into<Vec<f64>>,
    ) -> Result<Self, TableError> {
        if knots < 2 {
            return Err(TableError::TooFewKnots { knots });
        }

        let coefficients = coefficients.into();
        let expected = order
            .checked_add(1)
            .and_then(|width| knots.checked_mul(width))
            .ok_or(TableError::TooLarge { knots, order })?;
        if coefficients.len() != expected {
            return Err(TableError::LengthMismatch {
                knots,
                order,
                expected,
                actual: coefficients.len(),
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = bounds.y_span() / (knots - 1) as f64;

        Ok(Self {
            bounds,
            order,
            knots,
            spacing,
            coefficients: coefficients.into_boxed_slice(),
        })
    }

    /// Returns the domain bounds covered by this table.
    #[must_use]
    pub fn bounds(&self) -> &DomainBounds {
        &self.bounds
    }

    /// Returns the polynomial order of each bucket.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of knots (and buckets).
    #[must_use]
    pub fn knots(&self) -> usize {
        self.knots
    }

    /// Returns the knot spacing `Δ` in y.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the y value at the left edge of bucket `index`.
    #[must_use]
    pub fn knot_y(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * self.spacing;
        self.bounds.y_lo() + offset
    }

    /// Returns the flattened coefficient array.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the coefficients of bucket `index`, lowest power first.
    #[must_use]
    pub fn bucket(&self, index: usize) -> Option<&[f64]> {
        let width = self.order + 1;
        let start = index.checked_mul(width)?;
        self.coefficients.get(start..start.checked_add(width)?)
    }

    /// Returns the coefficients of a bucket known to exist.
    ///
    /// Construction guarantees `knots * (order + 1)` coefficients, so any
    /// `index < knots` addresses a full bucket.
    pub(super) fn row(&self, index: usize) -> &[f64] {
        let width = self.order + 1;
        let start = index * width;
        &self.coefficients[start..start + width]
    }

    /// Returns the bucket index for an in-domain `y`.
    ///
    /// The index is clamped to the last knot so that rounding at `y_hi`
    /// never selects a bucket past the end of the table.
    pub(super) fn bucket_index(&self, y: f64) -> usize {
        #[allow(clippy::cast_precision_loss)]
        let scaled = (self.knots - 1) as f64 * (y - self.bounds.y_lo()) / self.bounds.y_span();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = scaled.floor().max(0.0) as usize;

        index.min(self.knots - 1)
    }
}
