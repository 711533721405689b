// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Batch Runner

//! Monte Carlo batches: repeat generation plus all rounds, keep only each
//! run's final census, and average.
//!
//! Runs share nothing but the configuration. With the `parallel` feature they
//! execute on the rayon pool; per-run outcomes are collected first and merged
//! afterwards, so a seeded batch gives the same summary either way.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::aggregate::BucketCounts;
use crate::config::{BatchConfig, SimulationConfig};
use crate::errors::Result;
use crate::simulation::Simulation;
use crate::stats::{round_cents, Stats};

/// Final census of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub run: usize,
    pub seed: Option<u64>,
    pub counts: BucketCounts,
}

/// Means over all runs, rounded to two places, plus the underlying spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_healthy_high_risk: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_total_healthy: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_infected_asymptomatic: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_symptomatic: Decimal,
    pub healthy_high_risk: Stats,
    pub total_healthy: Stats,
    pub infected_asymptomatic: Stats,
    pub symptomatic: Stats,
}

impl BatchSummary {
    /// Asymptomatic and symptomatic means combined.
    pub fn mean_ever_infected(&self) -> Decimal {
        self.mean_infected_asymptomatic + self.mean_symptomatic
    }
}

impl From<&[RunOutcome]> for BatchSummary {
    fn from(outcomes: &[RunOutcome]) -> Self {
        let bucket = |f: fn(&BucketCounts) -> usize| {
            Stats::from_samples(&outcomes.iter().map(|o| f(&o.counts) as f64).collect::<Vec<_>>())
        };
        let healthy_high_risk = bucket(|c| c.healthy_high_risk);
        let total_healthy = bucket(|c| c.total_healthy);
        let infected_asymptomatic = bucket(|c| c.infected_asymptomatic);
        let symptomatic = bucket(|c| c.symptomatic);

        Self {
            runs: outcomes.len(),
            mean_healthy_high_risk: round_cents(healthy_high_risk.mean),
            mean_total_healthy: round_cents(total_healthy.mean),
            mean_infected_asymptomatic: round_cents(infected_asymptomatic.mean),
            mean_symptomatic: round_cents(symptomatic.mean),
            healthy_high_risk,
            total_healthy,
            infected_asymptomatic,
            symptomatic,
        }
    }
}

fn run_one(config: &SimulationConfig, run: usize, base_seed: Option<u64>) -> Result<RunOutcome> {
    let seed = base_seed.map(|base| base.wrapping_add(run as u64));
    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let counts = Simulation::with_rng(config.clone(), rng)?.run_to_end();
    Ok(RunOutcome { run, seed, counts })
}

/// Final-round outcome of every run, in run order.
pub fn run_outcomes(config: &SimulationConfig, batch: &BatchConfig) -> Result<Vec<RunOutcome>> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    let runs = (0..batch.runs).into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let runs = 0..batch.runs;

    runs.map(|run| run_one(config, run, batch.base_seed)).collect()
}

/// Run the batch and average the final-round buckets.
pub fn run_batch(config: &SimulationConfig, batch: &BatchConfig) -> Result<BatchSummary> {
    info!("batch start: runs={} population={} seed={:?}", batch.runs, config.population, batch.base_seed);
    let outcomes = run_outcomes(config, batch)?;
    let summary = BatchSummary::from(outcomes.as_slice());
    info!(
        "batch done: healthy={} asymptomatic={} symptomatic={}",
        summary.mean_total_healthy, summary.mean_infected_asymptomatic, summary.mean_symptomatic
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpreadMode;
    use rust_decimal_macros::dec;

    fn town() -> SimulationConfig {
        SimulationConfig {
            population: 30,
            infected: 2,
            vaccinated: 4,
            high_risk: 6,
            group_capacities: vec![6, 6, 4],
            spread_mode: SpreadMode::InfectAll,
        }
    }

    #[test]
    fn outcomes_are_in_run_order_with_derived_seeds() {
        let outcomes = run_outcomes(&town(), &BatchConfig::seeded(5, 100)).expect("test: valid");
        assert_eq!(outcomes.len(), 5);
        for (i, o) in outcomes.iter().enumerate() {
            assert_eq!(o.run, i);
            assert_eq!(o.seed, Some(100 + i as u64));
            assert_eq!(o.counts.total(), 30);
        }
    }

    #[test]
    fn seeded_batch_repeats() {
        let a = run_batch(&town(), &BatchConfig::seeded(20, 3)).expect("test: valid");
        let b = run_batch(&town(), &BatchConfig::seeded(20, 3)).expect("test: valid");
        assert_eq!(a, b);
    }

    #[test]
    fn means_sum_to_population() {
        let summary = run_batch(&town(), &BatchConfig::seeded(50, 9)).expect("test: valid");
        let total = summary.total_healthy.mean + summary.infected_asymptomatic.mean + summary.symptomatic.mean;
        assert!((total - 30.0).abs() < 1e-9);
        assert!(summary.mean_total_healthy >= dec!(4));
    }

    #[test]
    fn fully_vaccinated_batch_is_exact() {
        let config = SimulationConfig { infected: 0, vaccinated: 30, high_risk: 0, ..town() };
        let summary = run_batch(&config, &BatchConfig::seeded(10, 0)).expect("test: valid");
        assert_eq!(summary.mean_total_healthy, dec!(30));
        assert_eq!(summary.mean_ever_infected(), dec!(0));
        assert_eq!(summary.total_healthy.std_dev, 0.0);
    }

    #[test]
    fn zero_runs_gives_empty_summary() {
        let summary = run_batch(&town(), &BatchConfig::seeded(0, 0)).expect("test: valid");
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.mean_symptomatic, dec!(0));
    }

    #[test]
    fn invalid_config_returns_no_partial_results() {
        let config = SimulationConfig { group_capacities: vec![0], ..town() };
        assert!(run_batch(&config, &BatchConfig::seeded(10, 0)).is_err());
    }

    #[test]
    fn summary_serializes_means_as_numbers() {
        let config = SimulationConfig { infected: 0, vaccinated: 30, high_risk: 0, ..town() };
        let summary = run_batch(&config, &BatchConfig::seeded(2, 0)).expect("test: valid");
        let json = serde_json::to_value(&summary).expect("test: serialize");
        assert_eq!(json["mean_total_healthy"], serde_json::json!(30.0));
    }
}
