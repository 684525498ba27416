//! Monte Carlo quadrature of `∫ 1/(1+x²) dx`.
//!
//! Over `[0, 1]` the integral equals `π / 4`. Each block averages the
//! integrand at uniform abscissae; the factor 4 is applied once to the
//! cumulative curve, so block estimates stay plain quadrature estimates.

use mcpi_stats::block::CumulativeCurve;
use rand::Rng;
use serde::Serialize;

use crate::{BlockProducer, ExperimentError};

/// Factor turning the integral over `[0, 1]` into π.
pub const PI_SCALE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Integral {
    lower: f32,
    upper: f32,
}

impl Default for Integral {
    fn default() -> Self {
        Self::unit()
    }
}

impl Integral {
    /// Integration over `[0, 1]`, whose scaled result is π.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }

    /// Integration over `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidParams`] unless both bounds are
    /// finite, `lower < upper`, and the width `upper - lower` is finite.
    pub fn new(lower: f32, upper: f32) -> Result<Self, ExperimentError> {
        let invalid = |reason| ExperimentError::InvalidParams {
            experiment: Self::NAME,
            reason,
        };
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(invalid("bounds must be finite with lower < upper"));
        }
        if !(upper - lower).is_finite() {
            return Err(invalid("interval is too wide to sample"));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub const fn bounds(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }

    #[must_use]
    pub fn integrand(x: f64) -> f64 {
        1.0 / (1.0 + x * x)
    }
}

impl BlockProducer for Integral {
    type Sample = f32;
    const NAME: &'static str = "integral";

    fn sample<R>(&self, rng: &mut R) -> f32
    where
        R: Rng + ?Sized,
    {
        rng.random_range(self.lower..self.upper)
    }

    #[expect(clippy::cast_precision_loss)]
    fn block_estimate(&self, _block: usize, samples: &[f32]) -> Result<f64, ExperimentError> {
        let sum = samples
            .iter()
            .map(|&x| Self::integrand(f64::from(x)))
            .sum::<f64>();
        let width = f64::from(self.upper) - f64::from(self.lower);
        Ok(width * sum / samples.len() as f64)
    }

    fn finish(&self, curve: CumulativeCurve) -> CumulativeCurve {
        curve.scaled(PI_SCALE)
    }
}
