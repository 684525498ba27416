use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use mcpi_engine::{BlockLayout, ExperimentRun, ExperimentSeed};
use serde::Serialize;

/// JSON summary of one experiment run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a, P> {
    pub experiment: &'static str,
    pub params: &'a P,
    pub layout: BlockLayout,
    pub dropped_points: usize,
    pub seed: ExperimentSeed,
    pub estimate: f64,
    pub error: f64,
    pub deviation_from_pi: f64,
    pub clamped_blocks: usize,
    pub finished_at: DateTime<Utc>,
}

impl<'a, P> RunSummary<'a, P> {
    pub fn new(
        experiment: &'static str,
        params: &'a P,
        seed: ExperimentSeed,
        run: &ExperimentRun,
    ) -> Self {
        let (estimate, error) = run.curve.final_estimate();
        Self {
            experiment,
            params,
            layout: run.layout,
            dropped_points: run.layout.dropped_points(),
            seed,
            estimate,
            error,
            deviation_from_pi: (estimate - PI).abs(),
            clamped_blocks: run.curve.clamped_indices().len(),
            finished_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use mcpi_engine::{BlockProducer as _, experiment::circle::Circle};

    use super::*;

    #[test]
    fn test_summary_json_fields() {
        let circle = Circle::new(1.0).unwrap();
        let layout = BlockLayout::new(1003, 10).unwrap();
        let seed = ExperimentSeed::from(17);
        let run = mcpi_engine::run(&circle, layout, &mut seed.rng()).unwrap();

        let summary = RunSummary::new(Circle::NAME, &circle, seed, &run);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["experiment"], "circle");
        assert_eq!(json["params"]["radius"], 1.0);
        assert_eq!(json["layout"]["points"], 1003);
        assert_eq!(json["layout"]["blocks"], 10);
        assert_eq!(json["layout"]["block_size"], 100);
        assert_eq!(json["dropped_points"], 3);
        assert_eq!(json["seed"], 17);
        assert_eq!(json["estimate"], run.curve.final_estimate().0);
        assert!(json["finished_at"].is_string());
    }
}
