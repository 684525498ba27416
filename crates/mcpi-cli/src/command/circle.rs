use mcpi_engine::experiment::circle::Circle;

use super::sampling::{self, SamplingArg};

const PRECISION: usize = 5;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CircleArg {
    /// Radius of the circle inscribed in the sampling square
    #[arg(long, default_value_t = 1.0)]
    pub(crate) radius: f32,
    #[command(flatten)]
    pub(crate) sampling: SamplingArg,
}

pub(crate) fn run(arg: &CircleArg) -> anyhow::Result<()> {
    let circle = Circle::new(arg.radius)?;
    eprintln!("Circle: radius {}", circle.radius());
    sampling::run_experiment(&circle, &arg.sampling, PRECISION)
}
