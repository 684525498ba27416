use mcpi_stats::block::{BlockStatistics, CumulativeCurve};
use rand::Rng;

use crate::{BlockLayout, ExperimentError};

/// Sampling strategy of a block-averaged experiment.
///
/// A producer knows how to draw one elementary sample and how to reduce the
/// samples of one block to a single scalar estimate. [`run`] handles the
/// partitioning into blocks and the cumulative statistics.
pub trait BlockProducer {
    /// One elementary random trial outcome.
    type Sample: Copy;

    /// Short experiment name used in reports.
    const NAME: &'static str;

    /// Draws one sample from `rng`.
    fn sample<R>(&self, rng: &mut R) -> Self::Sample
    where
        R: Rng + ?Sized;

    /// Reduces the samples of block `block` to one scalar estimate.
    ///
    /// `samples` is never empty.
    fn block_estimate(&self, block: usize, samples: &[Self::Sample])
    -> Result<f64, ExperimentError>;

    /// Converts the cumulative curve of block estimates into a curve of π
    /// estimates.
    ///
    /// The default leaves the curve untouched, for producers whose block
    /// estimates are already π-scaled.
    fn finish(&self, curve: CumulativeCurve) -> CumulativeCurve {
        curve
    }
}

/// Result of one experiment run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRun {
    pub layout: BlockLayout,
    /// Raw per-block estimates, in block order.
    pub series: Vec<f64>,
    /// Cumulative π estimate and its error, one entry per block.
    pub curve: CumulativeCurve,
}

/// Draws every block of `layout` from `rng` and reduces it with `producer`.
///
/// Samples are drawn sequentially, block after block, into one reused
/// buffer.
pub fn block_series<P, R>(
    producer: &P,
    layout: BlockLayout,
    rng: &mut R,
) -> Result<Vec<f64>, ExperimentError>
where
    P: BlockProducer,
    R: Rng + ?Sized,
{
    let mut samples = Vec::with_capacity(layout.block_size());
    let mut series = Vec::with_capacity(layout.blocks());
    for block in 0..layout.blocks() {
        samples.clear();
        samples.extend((0..layout.block_size()).map(|_| producer.sample(rng)));
        series.push(producer.block_estimate(block, &samples)?);
    }
    Ok(series)
}

/// Runs `producer` over `layout` and computes the cumulative curve.
pub fn run<P, R>(
    producer: &P,
    layout: BlockLayout,
    rng: &mut R,
) -> Result<ExperimentRun, ExperimentError>
where
    P: BlockProducer,
    R: Rng + ?Sized,
{
    let series = block_series(producer, layout, rng)?;
    let curve = BlockStatistics::compute(&series)?;
    let curve = producer.finish(curve);
    Ok(ExperimentRun {
        layout,
        series,
        curve,
    })
}

#[cfg(test)]
mod tests {
    use mcpi_stats::block::BlockStatsError;

    use super::*;
    use crate::ExperimentSeed;

    /// Sums uniform digits; any reordering of the stream would change the sums.
    struct Counter;

    impl BlockProducer for Counter {
        type Sample = u32;
        const NAME: &'static str = "counter";

        fn sample<R>(&self, rng: &mut R) -> u32
        where
            R: Rng + ?Sized,
        {
            rng.random_range(0..10)
        }

        fn block_estimate(&self, _block: usize, samples: &[u32]) -> Result<f64, ExperimentError> {
            Ok(f64::from(samples.iter().sum::<u32>()))
        }
    }

    struct Failing;

    impl BlockProducer for Failing {
        type Sample = ();
        const NAME: &'static str = "failing";

        fn sample<R>(&self, _rng: &mut R)
        where
            R: Rng + ?Sized,
        {
        }

        fn block_estimate(&self, block: usize, _samples: &[()]) -> Result<f64, ExperimentError> {
            if block == 2 {
                Err(ExperimentError::NoHits { block })
            } else {
                Ok(1.0)
            }
        }
    }

    struct NotFinite;

    impl BlockProducer for NotFinite {
        type Sample = ();
        const NAME: &'static str = "not-finite";

        fn sample<R>(&self, _rng: &mut R)
        where
            R: Rng + ?Sized,
        {
        }

        fn block_estimate(&self, _block: usize, _samples: &[()]) -> Result<f64, ExperimentError> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn test_series_has_one_value_per_block() {
        let layout = BlockLayout::new(103, 10).unwrap();
        let series = block_series(&Counter, layout, &mut ExperimentSeed::from(3).rng()).unwrap();
        assert_eq!(series.len(), 10);
    }

    #[test]
    fn test_blocks_consume_stream_in_order() {
        // Reducing the whole stream as one block must match the sum of
        // the per-block reductions of the same stream.
        let split = block_series(
            &Counter,
            BlockLayout::new(100, 4).unwrap(),
            &mut ExperimentSeed::from(9).rng(),
        )
        .unwrap();
        let whole = block_series(
            &Counter,
            BlockLayout::new(100, 1).unwrap(),
            &mut ExperimentSeed::from(9).rng(),
        )
        .unwrap();
        assert_eq!(split.iter().sum::<f64>(), whole[0]);
    }

    #[test]
    fn test_run_is_deterministic() {
        let layout = BlockLayout::new(500, 25).unwrap();
        let first = run(&Counter, layout, &mut ExperimentSeed::from(5).rng()).unwrap();
        let second = run(&Counter, layout, &mut ExperimentSeed::from(5).rng()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.curve.len(), 25);
        assert_eq!(first.curve.error()[0], 0.0);
    }

    #[test]
    fn test_producer_error_stops_run() {
        let layout = BlockLayout::new(10, 5).unwrap();
        let err = run(&Failing, layout, &mut ExperimentSeed::from(0).rng()).unwrap_err();
        assert_eq!(err, ExperimentError::NoHits { block: 2 });
    }

    #[test]
    fn test_non_finite_block_is_rejected() {
        let layout = BlockLayout::new(4, 2).unwrap();
        let err = run(&NotFinite, layout, &mut ExperimentSeed::from(0).rng()).unwrap_err();
        assert!(matches!(
            err,
            ExperimentError::Statistics(BlockStatsError::NonFiniteValue { index: 0, .. })
        ));
    }
}
