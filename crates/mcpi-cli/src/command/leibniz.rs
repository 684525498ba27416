use mcpi_engine::series;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum SeriesMode {
    /// Leibniz series
    #[value(name = "lb")]
    Leibniz,
    /// Non-alternating Leibniz series
    #[value(name = "nlb")]
    NonAlternating,
    /// Leibniz series accelerated with Wynn's epsilon method
    #[value(name = "weps")]
    WynnEpsilon,
}

impl SeriesMode {
    fn method(self) -> &'static str {
        match self {
            SeriesMode::Leibniz => "Leibniz series",
            SeriesMode::NonAlternating => "Non-alternating Leibniz series",
            SeriesMode::WynnEpsilon => "Wynn's epsilon method",
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LeibnizArg {
    /// Method for π estimation
    #[arg(value_enum)]
    pub(crate) mode: SeriesMode,
    /// Last considered term of the series
    #[arg(long, default_value_t = 20)]
    pub(crate) order: usize,
    /// Number of Shanks transformations (weps only)
    #[arg(long, default_value_t = 1)]
    pub(crate) iteration: usize,
}

pub(crate) fn run(arg: &LeibnizArg) -> anyhow::Result<()> {
    let LeibnizArg {
        mode,
        order,
        iteration,
    } = *arg;

    eprintln!("-------- PI estimation --------");
    eprintln!("Method: {}", mode.method());
    match mode {
        SeriesMode::WynnEpsilon => eprintln!("Params: order={order}, iteration={iteration}"),
        SeriesMode::Leibniz | SeriesMode::NonAlternating => eprintln!("Params: order={order}"),
    }
    eprintln!("-------------------------------");

    let result = estimate(mode, order, iteration)?;
    println!("Result: {result:.12}");
    Ok(())
}

fn estimate(mode: SeriesMode, order: usize, iteration: usize) -> anyhow::Result<f64> {
    let value = match mode {
        SeriesMode::Leibniz => series::leibniz(order),
        SeriesMode::NonAlternating => series::nonalternating_leibniz(order),
        SeriesMode::WynnEpsilon => series::wynn_leibniz(order, iteration)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_estimate_modes() {
        assert_eq!(estimate(SeriesMode::Leibniz, 0, 1).unwrap(), 4.0);
        assert!((estimate(SeriesMode::NonAlternating, 100, 1).unwrap() - PI).abs() < 1e-2);
        assert!((estimate(SeriesMode::WynnEpsilon, 20, 2).unwrap() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_weps_rejects_short_series() {
        let err = estimate(SeriesMode::WynnEpsilon, 2, 2).unwrap_err();
        assert!(err.to_string().contains("too small"));
        let err = estimate(SeriesMode::WynnEpsilon, 20, 1_000_000_000).unwrap_err();
        assert!(err.to_string().contains("too small"));
    }
}
