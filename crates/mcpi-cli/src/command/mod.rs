use clap::{Parser, Subcommand};

use self::{buffon::BuffonArg, circle::CircleArg, integral::IntegralArg, leibniz::LeibnizArg};

mod buffon;
mod circle;
mod integral;
mod leibniz;
mod sampling;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which estimator to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Estimate π by dropping needles on ruled lines (Buffon's needle)
    Buffon(#[clap(flatten)] BuffonArg),
    /// Estimate π from the fraction of points falling inside a circle
    Circle(#[clap(flatten)] CircleArg),
    /// Estimate π by Monte Carlo integration of 1/(1+x²) over [0, 1]
    Integral(#[clap(flatten)] IntegralArg),
    /// Estimate π with the Leibniz series and its accelerated variants
    Leibniz(#[clap(flatten)] LeibnizArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Buffon(arg) => buffon::run(&arg)?,
        Mode::Circle(arg) => circle::run(&arg)?,
        Mode::Integral(arg) => integral::run(&arg)?,
        Mode::Leibniz(arg) => leibniz::run(&arg)?,
    }
    Ok(())
}
