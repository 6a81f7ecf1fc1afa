//! Discretized sampling domain shared by quantities and prices.
//!
//! Both volumes and reservation prices are drawn from the same finite grid
//! of multiples of the precision step, without replacement. Drawing without
//! replacement is what makes per-side values pairwise distinct by
//! construction.

use rand::Rng;
use rand::seq::index;

use crate::error::DatagenError;

/// The ordered finite set `{0, ε, 2ε, …}` covering the half-open
/// interval `[0, 1)`.
///
/// The grid is never materialized; points are addressed by index and
/// reconstructed as `i * ε`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    step: f64,
    len: usize,
}

impl SampleGrid {
    /// Build the grid for step size `precision`.
    ///
    /// `precision` must be finite and lie strictly between 0 and 1.
    pub fn new(precision: f64) -> Result<Self, DatagenError> {
        if !precision.is_finite() || precision <= 0.0 || precision >= 1.0 {
            return Err(DatagenError::InvalidPrecision { precision });
        }
        // ceil keeps the upper bound half-open: the last multiple of the
        // step below 1 is included, 1 itself never is.
        let len = (1.0 / precision).ceil() as usize;
        Ok(Self {
            step: precision,
            len,
        })
    }

    /// Number of grid points, i.e. the maximum count of distinct values a
    /// single draw can supply.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of the `i`-th grid point.
    pub fn value(&self, i: usize) -> f64 {
        i as f64 * self.step
    }

    /// Draw `amount` distinct grid values, uniformly without replacement.
    ///
    /// Checked before any entropy is consumed: if `amount` exceeds the
    /// number of grid points the draw fails with
    /// [`DatagenError::SamplingExhausted`] and the RNG state is untouched.
    pub fn sample<R: Rng>(&self, rng: &mut R, amount: usize) -> Result<Vec<f64>, DatagenError> {
        if amount > self.len {
            return Err(DatagenError::SamplingExhausted {
                requested: amount,
                available: self.len,
            });
        }
        Ok(index::sample(rng, self.len, amount)
            .into_iter()
            .map(|i| self.value(i))
            .collect())
    }
}
