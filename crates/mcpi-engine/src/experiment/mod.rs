//! Block-structured Monte Carlo experiments.
//!
//! - [`BlockLayout`] - Partition of the total sample count into equal blocks
//! - [`BlockProducer`] - Sampling strategy turning samples into per-block scalars
//! - [`ExperimentSeed`] - Seed for deterministic sampling
//! - [`run`] - Drives a producer over a layout and computes the cumulative curve
//!
//! The experiments themselves live in [`buffon`], [`circle`] and [`integral`].
//!
//! # Example
//!
//! ```
//! use mcpi_engine::{BlockLayout, ExperimentSeed, experiment::buffon::Buffon};
//!
//! let buffon = Buffon::new(1.0, 0.5).unwrap();
//! let layout = BlockLayout::new(10_000, 100).unwrap();
//!
//! let first = mcpi_engine::run(&buffon, layout, &mut ExperimentSeed::from(42).rng()).unwrap();
//! let second = mcpi_engine::run(&buffon, layout, &mut ExperimentSeed::from(42).rng()).unwrap();
//! assert_eq!(first.curve, second.curve);
//! ```

pub use self::{layout::*, producer::*, seed::*};

pub mod buffon;
pub mod circle;
pub mod integral;

mod layout;
mod producer;
mod seed;
