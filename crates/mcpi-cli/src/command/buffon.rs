use mcpi_engine::experiment::buffon::Buffon;

use super::sampling::{self, SamplingArg};

const PRECISION: usize = 6;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BuffonArg {
    /// Distance between the ruled lines
    #[arg(long, default_value_t = 1.0)]
    pub(crate) distance: f32,
    /// Needle length (must be shorter than the line distance)
    #[arg(long, default_value_t = 0.5)]
    pub(crate) length: f32,
    #[command(flatten)]
    pub(crate) sampling: SamplingArg,
}

pub(crate) fn run(arg: &BuffonArg) -> anyhow::Result<()> {
    let buffon = Buffon::new(arg.distance, arg.length)?;
    eprintln!(
        "Buffon's needle: line distance {}, needle length {}",
        buffon.distance(),
        buffon.length()
    );
    sampling::run_experiment(&buffon, &arg.sampling, PRECISION)
}
