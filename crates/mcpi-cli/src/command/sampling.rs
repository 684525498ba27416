use std::path::PathBuf;

use anyhow::Context;
use mcpi_engine::{BlockLayout, BlockProducer, ExperimentRun, ExperimentSeed};
use rand::Rng as _;
use serde::Serialize;

use crate::{schema::summary::RunSummary, util::Output};

/// Options shared by every Monte Carlo experiment.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SamplingArg {
    /// Total number of samples (the remainder of points / blocks is dropped)
    #[arg(long, default_value_t = 1_000_000)]
    pub(crate) points: usize,
    /// Number of blocks the samples are split into
    #[arg(long, default_value_t = 100)]
    pub(crate) blocks: usize,
    /// Seed for the random generator (a random seed is used when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Output file path for the cumulative curve (stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Write a JSON run summary to this path
    #[arg(long)]
    pub(crate) summary: Option<PathBuf>,
}

impl SamplingArg {
    fn resolve_seed(&self) -> ExperimentSeed {
        self.seed.map_or_else(|| rand::rng().random(), ExperimentSeed::from)
    }
}

/// Runs `producer` with the shared options and writes its cumulative curve.
///
/// Every line of the output is `block mean error`, formatted with
/// `precision` fractional digits.
pub(crate) fn run_experiment<P>(
    producer: &P,
    arg: &SamplingArg,
    precision: usize,
) -> anyhow::Result<()>
where
    P: BlockProducer + Serialize,
{
    let layout = BlockLayout::new(arg.points, arg.blocks)
        .with_context(|| format!("Invalid sampling options for {}", P::NAME))?;
    let seed = arg.resolve_seed();

    eprintln!("Experiment: {}", P::NAME);
    eprintln!(
        "  Points: {} ({} blocks of {})",
        layout.used_points(),
        layout.blocks(),
        layout.block_size()
    );
    if layout.dropped_points() > 0 {
        eprintln!(
            "  Dropping {} points that do not fill a whole block",
            layout.dropped_points()
        );
    }
    eprintln!("  Seed: {seed}");

    let run = simulate(producer, layout, seed)?;

    let clamped = run.curve.clamped_indices();
    if let Some(first) = clamped.first() {
        eprintln!(
            "Warning: negative variance clamped to zero in {} block(s), first at block {first}",
            clamped.len()
        );
    }

    let mut output = Output::create(arg.output.as_deref())?;
    output.write_curve(&run.curve, precision)?;

    let (estimate, error) = run.curve.final_estimate();
    eprintln!();
    eprintln!("Result: {estimate:.precision$} ± {error:.precision$}");
    eprintln!("  Curve written to {output}");

    if let Some(path) = &arg.summary {
        let summary = RunSummary::new(P::NAME, producer, seed, &run);
        Output::create(Some(path))?.write_json(&summary)?;
        eprintln!("  Summary written to {}", path.display());
    }

    Ok(())
}

fn simulate<P>(
    producer: &P,
    layout: BlockLayout,
    seed: ExperimentSeed,
) -> anyhow::Result<ExperimentRun>
where
    P: BlockProducer,
{
    mcpi_engine::run(producer, layout, &mut seed.rng())
        .with_context(|| format!("{} experiment failed", P::NAME))
}
