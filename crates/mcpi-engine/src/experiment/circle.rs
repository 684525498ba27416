//! Hit-or-miss estimation with a circle inscribed in a square.
//!
//! Points are drawn uniformly in `[-r, r)²`; the fraction falling strictly
//! inside the circle of radius `r` tends to `π / 4`.

use rand::Rng;
use serde::Serialize;

use crate::{BlockProducer, ExperimentError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Circle {
    /// Creates the experiment for a circle of `radius`.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidParams`] unless `radius` is positive
    /// and the sampling square side `2 * radius` is finite.
    pub fn new(radius: f32) -> Result<Self, ExperimentError> {
        let invalid = |reason| ExperimentError::InvalidParams {
            experiment: Self::NAME,
            reason,
        };
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid("radius must be positive"));
        }
        if !(2.0 * radius).is_finite() {
            return Err(invalid("radius is too large to sample"));
        }
        Ok(Self { radius })
    }

    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let x = f64::from(point.x);
        let y = f64::from(point.y);
        let r = f64::from(self.radius);
        x * x + y * y < r * r
    }
}

impl BlockProducer for Circle {
    type Sample = Point;
    const NAME: &'static str = "circle";

    fn sample<R>(&self, rng: &mut R) -> Point
    where
        R: Rng + ?Sized,
    {
        let x = rng.random_range(-self.radius..self.radius);
        let y = rng.random_range(-self.radius..self.radius);
        Point { x, y }
    }

    #[expect(clippy::cast_precision_loss)]
    fn block_estimate(&self, _block: usize, samples: &[Point]) -> Result<f64, ExperimentError> {
        let hits = samples.iter().filter(|p| self.contains(**p)).count();
        Ok(4.0 * hits as f64 / samples.len() as f64)
    }
}
