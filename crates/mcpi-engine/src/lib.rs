//! Monte Carlo experiments estimating π with block averaging.
//!
//! Each experiment implements [`BlockProducer`]: it draws elementary samples
//! from an explicitly passed random generator, reduces every block of samples
//! to one scalar estimate, and hands the resulting series to
//! [`mcpi_stats::block::BlockStatistics`].
//!
//! ```
//! use mcpi_engine::{BlockLayout, ExperimentSeed, experiment::circle::Circle};
//!
//! let layout = BlockLayout::new(20_000, 20).unwrap();
//! let mut rng = ExperimentSeed::from(7).rng();
//! let run = mcpi_engine::run(&Circle::new(1.0).unwrap(), layout, &mut rng).unwrap();
//!
//! let (pi, error) = run.curve.final_estimate();
//! assert!((pi - std::f64::consts::PI).abs() < 0.2);
//! assert!(error > 0.0);
//! ```

pub use self::experiment::*;

pub mod experiment;
pub mod series;

use mcpi_stats::block::BlockStatsError;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    #[display("number of blocks must be at least 1")]
    ZeroBlocks,
    #[display("{points} points are not enough to fill {blocks} blocks")]
    EmptyBlocks { points: usize, blocks: usize },
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ExperimentError {
    #[display("invalid {experiment} parameters: {reason}")]
    InvalidParams {
        experiment: &'static str,
        reason: &'static str,
    },
    #[display("block {block} recorded no hits")]
    NoHits { block: usize },
    #[display("invalid block layout")]
    #[from]
    Layout(LayoutError),
    #[display("block statistics failed")]
    #[from]
    Statistics(BlockStatsError),
}
