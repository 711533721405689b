// Monte Carlo Scenario Runner: N runs per scenario with statistical aggregation
// Run i is seeded with base_seed + i; the base-seed run is also replayed round by round

use log::{debug, warn};
use outbreak_engine::errors::Result;
use outbreak_engine::{run_outcomes, run_single, BatchConfig, BatchSummary, BucketCounts, RoundRecord, RunOutcome, Stats};

use crate::report::ScenarioReport;
use crate::scenarios::Scenario;
use crate::time_series;

use std::time::Instant;

/// Run one scenario's batch and judge it against its criteria.
pub fn run_scenario(
    scenario: &Scenario,
    n_runs: usize,
    base_seed: u64,
    time_series_dir: Option<&std::path::Path>,
) -> Result<ScenarioReport> {
    let start = Instant::now();
    let outcomes = run_outcomes(&scenario.config, &BatchConfig::seeded(n_runs, base_seed))?;
    let summary = BatchSummary::from(outcomes.as_slice());
    let probe_run = run_single(&scenario.config, Some(base_seed))?;
    let elapsed_ms = start.elapsed().as_millis();

    if let Some(dir) = time_series_dir {
        let path = dir
            .join(scenario.name.to_lowercase())
            .join(format!("seed-{}.jsonl", base_seed));
        if let Err(e) = time_series::write_jsonl(&probe_run, &path) {
            warn!("failed to write time series {}: {}", path.display(), e);
        }
    }

    let failures = evaluate(scenario, &outcomes, &summary, &probe_run);
    debug!("{}: {} runs in {}ms, {} failure(s)", scenario.name, n_runs, elapsed_ms, failures.len());

    Ok(ScenarioReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        category: scenario.category.to_string(),
        n_runs,
        pass: failures.is_empty(),
        failures,
        summary,
        probe_run,
        elapsed_ms,
        individual_runs: outcomes,
    })
}

fn counts_of(record: &RoundRecord) -> BucketCounts {
    BucketCounts {
        healthy_high_risk: record.healthy_high_risk,
        total_healthy: record.total_healthy,
        infected_asymptomatic: record.infected_asymptomatic,
        symptomatic: record.symptomatic,
    }
}

fn has_spread(stats: &Stats) -> bool {
    stats.n > 0 && stats.max != stats.min
}

/// Every violated criterion, as a human-readable line.
fn evaluate(
    scenario: &Scenario,
    outcomes: &[RunOutcome],
    summary: &BatchSummary,
    probe_run: &[RoundRecord],
) -> Vec<String> {
    let population = scenario.config.population;
    let criteria = &scenario.criteria;
    let mut failures = Vec::new();

    for outcome in outcomes {
        if outcome.counts.total() != population {
            failures.push(format!("run {}: buckets sum to {} not {}", outcome.run, outcome.counts.total(), population));
        }
        if let Some(expected) = criteria.expected_final {
            if outcome.counts != expected {
                failures.push(format!("run {}: final census {:?} != {:?}", outcome.run, outcome.counts, expected));
            }
        }
    }

    if criteria.require_zero_variance {
        let spread = [
            &summary.healthy_high_risk,
            &summary.total_healthy,
            &summary.infected_asymptomatic,
            &summary.symptomatic,
        ];
        if spread.into_iter().any(has_spread) {
            failures.push("final buckets vary between runs".to_string());
        }
    }

    if let Some(expected) = criteria.expected_first_round {
        match probe_run.get(1).map(counts_of) {
            Some(actual) if actual == expected => {}
            actual => failures.push(format!("round 1 census {:?} != {:?}", actual, expected)),
        }
    }

    if let Some(max_share) = criteria.max_healthy_share {
        let share = if population > 0 { summary.total_healthy.mean / population as f64 } else { 0.0 };
        if share > max_share {
            failures.push(format!("mean healthy share {:.3} above {:.3}", share, max_share));
        }
    }

    failures
}
