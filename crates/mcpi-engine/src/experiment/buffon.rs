//! Buffon's needle.
//!
//! Needles of length `L` are dropped on a floor ruled with parallel lines a
//! distance `d` apart. For a short needle (`L < d`) the crossing probability
//! is `2L / (πd)`, so a block with `hits` crossings out of `R` drops gives
//! the estimate `2LR / (hits · d)`.
//!
//! The needle angle is sampled without trigonometric functions: a point is
//! drawn uniformly in the unit disk and its direction gives `cos θ`.

use rand::Rng;
use serde::Serialize;

use crate::{BlockProducer, ExperimentError};

/// Buffon's needle experiment with line spacing `distance` and needle `length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Buffon {
    distance: f32,
    length: f32,
}

/// One dropped needle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Needle {
    /// Distance of the needle's centre from the line below, in `[0, distance)`.
    pub center: f32,
    /// Cosine of the angle between the needle and the line normal, in `[0, 1]`.
    pub cos_theta: f32,
}

impl Buffon {
    /// Creates the experiment.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidParams`] unless
    /// `0 < length < distance` and both are finite.
    pub fn new(distance: f32, length: f32) -> Result<Self, ExperimentError> {
        let invalid = |reason| ExperimentError::InvalidParams {
            experiment: Self::NAME,
            reason,
        };
        if !distance.is_finite() || distance <= 0.0 {
            return Err(invalid("line spacing must be positive"));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(invalid("needle length must be positive"));
        }
        if length >= distance {
            return Err(invalid("needle must be shorter than the line spacing"));
        }
        Ok(Self { distance, length })
    }

    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    #[must_use]
    pub const fn length(&self) -> f32 {
        self.length
    }

    /// Returns `true` if `needle` touches or crosses the nearest line.
    #[must_use]
    pub fn crosses_line(&self, needle: Needle) -> bool {
        let distance = f64::from(self.distance);
        let center = f64::from(needle.center);
        let reach = f64::from(self.length) / 2.0 * f64::from(needle.cos_theta);
        if center >= distance / 2.0 {
            reach >= distance - center
        } else {
            reach >= center
        }
    }
}

impl BlockProducer for Buffon {
    type Sample = Needle;
    const NAME: &'static str = "buffon";

    fn sample<R>(&self, rng: &mut R) -> Needle
    where
        R: Rng + ?Sized,
    {
        let center = rng.random_range(0.0..self.distance);
        let cos_theta = loop {
            let x = rng.random_range(-1.0_f32..1.0);
            let y = rng.random_range(-1.0_f32..1.0);
            let r2 = x * x + y * y;
            if r2 > 0.0 && r2 <= 1.0 {
                break x.abs() / r2.sqrt();
            }
        };
        Needle { center, cos_theta }
    }

    #[expect(clippy::cast_precision_loss)]
    fn block_estimate(&self, block: usize, samples: &[Needle]) -> Result<f64, ExperimentError> {
        let hits = samples.iter().filter(|n| self.crosses_line(**n)).count();
        if hits == 0 {
            return Err(ExperimentError::NoHits { block });
        }
        let drops = samples.len() as f64;
        Ok(2.0 * f64::from(self.length) * drops / (hits as f64 * f64::from(self.distance)))
    }
}
