/// Errors reported by [`BlockStatistics::compute`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum BlockStatsError {
    /// The block series contained no values.
    #[display("block series is empty")]
    EmptySeries,
    /// A block value was NaN or infinite.
    #[display("block {index} has a non-finite value ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    /// A running sum overflowed while accumulating block `index`.
    #[display("running sums overflow at block {index}")]
    Overflow { index: usize },
}

/// Block-averaging estimator.
///
/// Converts a series of per-block estimates into a [`CumulativeCurve`]:
/// the running mean of the first `i + 1` blocks and its statistical
/// uncertainty.
///
/// The uncertainty at index `i` is
///
/// ```text
/// error[0] = 0
/// error[i] = sqrt((<v²>_i - <v>_i²) / i)
/// ```
///
/// where `<·>_i` averages over blocks `0..=i`. The divisor is `i`, so the
/// first block acts as a zero-variance starting point.
///
/// # Examples
///
/// ```
/// use mcpi_stats::block::BlockStatistics;
///
/// let curve = BlockStatistics::compute(&[3.0, 3.2, 2.8]).unwrap();
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.error()[0], 0.0);
/// assert!((curve.mean()[2] - 3.0).abs() < 1e-12);
/// assert!((curve.error()[1] - 0.1).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockStatistics;

impl BlockStatistics {
    /// Computes the cumulative mean and error curve of `series`.
    ///
    /// Sums are accumulated left to right starting from `0.0`, so every
    /// `mean[i]` is bit-identical to averaging the prefix `series[..=i]`
    /// from scratch.
    ///
    /// # Errors
    ///
    /// * [`BlockStatsError::EmptySeries`] - if `series` is empty
    /// * [`BlockStatsError::NonFiniteValue`] - if any value is NaN or infinite
    /// * [`BlockStatsError::Overflow`] - if the sum of the values or of their
    ///   squares is not representable
    #[expect(clippy::cast_precision_loss)]
    pub fn compute(series: &[f64]) -> Result<CumulativeCurve, BlockStatsError> {
        if series.is_empty() {
            return Err(BlockStatsError::EmptySeries);
        }
        if let Some((index, &value)) = series.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(BlockStatsError::NonFiniteValue { index, value });
        }

        let mut mean = Vec::with_capacity(series.len());
        let mut error = Vec::with_capacity(series.len());
        let mut clamped = vec![];

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for (i, &value) in series.iter().enumerate() {
            sum += value;
            sum_sq += value * value;
            if !sum.is_finite() || !sum_sq.is_finite() {
                return Err(BlockStatsError::Overflow { index: i });
            }
            let count = (i + 1) as f64;
            let avg = sum / count;
            let avg_sq = sum_sq / count;

            let err = match standard_error(avg, avg_sq, i) {
                Radicand::Valid(err) => err,
                Radicand::Clamped => {
                    clamped.push(i);
                    0.0
                }
            };
            mean.push(avg);
            error.push(err);
        }

        Ok(CumulativeCurve {
            mean,
            error,
            clamped,
        })
    }
}

/// Outcome of evaluating the standard-error formula for one block index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radicand {
    /// The radicand was non-negative; holds the resulting error.
    Valid(f64),
    /// `<v²> - <v>²` was negative (or NaN) due to cancellation and was clamped to zero.
    Clamped,
}

impl Radicand {
    /// Returns the error value, `0.0` for a clamped radicand.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Radicand::Valid(err) => err,
            Radicand::Clamped => 0.0,
        }
    }
}

/// Standard error of the mean after `n + 1` blocks.
///
/// `mean` and `mean_sq` are the averages of the values and of their squares
/// over those blocks. Returns `Valid(0.0)` for `n == 0`. A radicand that is
/// not a non-negative number, NaN included, is reported as `Clamped`.
///
/// # Examples
///
/// ```
/// use mcpi_stats::block::{Radicand, standard_error};
///
/// assert_eq!(standard_error(3.1, 9.62, 0), Radicand::Valid(0.0));
/// assert_eq!(standard_error(3.1, 9.60, 1), Radicand::Clamped);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn standard_error(mean: f64, mean_sq: f64, n: usize) -> Radicand {
    if n == 0 {
        return Radicand::Valid(0.0);
    }
    let variance = mean_sq - mean * mean;
    if variance.is_nan() || variance < 0.0 {
        return Radicand::Clamped;
    }
    Radicand::Valid((variance / n as f64).sqrt())
}

/// Running mean and running error of a block series.
///
/// Both sequences have one entry per block and are indexed like the input
/// series. `error()[0]` is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeCurve {
    mean: Vec<f64>,
    error: Vec<f64>,
    clamped: Vec<usize>,
}

impl CumulativeCurve {
    /// Number of blocks in the curve. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Always `false`; an empty series is rejected by [`BlockStatistics::compute`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Running mean, `mean()[i]` averages blocks `0..=i`.
    #[must_use]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Running standard error of [`Self::mean`].
    #[must_use]
    pub fn error(&self) -> &[f64] {
        &self.error
    }

    /// Block indices where the error radicand was negative and clamped to zero.
    #[must_use]
    pub fn clamped_indices(&self) -> &[usize] {
        &self.clamped
    }

    /// The estimate over all blocks as `(mean, error)`.
    #[must_use]
    pub fn final_estimate(&self) -> (f64, f64) {
        let last = self.len() - 1;
        (self.mean[last], self.error[last])
    }

    /// Iterates over `(block_index, mean, error)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.mean
            .iter()
            .zip(&self.error)
            .enumerate()
            .map(|(i, (&m, &e))| (i, m, e))
    }

    /// Returns a copy with both mean and error multiplied by `factor`.
    ///
    /// Used to convert a curve of raw quantities into a curve of the target
    /// quantity after averaging (e.g. an integral estimate of `π/4`).
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            mean: self.mean.iter().map(|m| m * factor).collect(),
            error: self.error.iter().map(|e| e * factor).collect(),
            clamped: self.clamped.clone(),
        }
    }
}
