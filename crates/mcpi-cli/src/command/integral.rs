use mcpi_engine::experiment::integral::Integral;

use super::sampling::{self, SamplingArg};

const PRECISION: usize = 5;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct IntegralArg {
    #[command(flatten)]
    pub(crate) sampling: SamplingArg,
}

pub(crate) fn run(arg: &IntegralArg) -> anyhow::Result<()> {
    let integral = Integral::unit();
    let (lower, upper) = integral.bounds();
    eprintln!("Integral of 1/(1+x^2) over [{lower}, {upper}], scaled by 4");
    sampling::run_experiment(&integral, &arg.sampling, PRECISION)
}
