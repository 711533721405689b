// Outbreak Runner Report Types
// Structured output for independent analysis of each scenario batch

use outbreak_engine::{BatchSummary, RoundRecord, RunOutcome};
use serde::Serialize;

// ─── Scenario Report (per-scenario aggregation) ─────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub label: String,
    pub category: String,
    pub n_runs: usize,
    pub pass: bool,
    pub failures: Vec<String>,
    pub summary: BatchSummary,
    /// Round-by-round history of the run seeded with the base seed.
    pub probe_run: Vec<RoundRecord>,
    pub elapsed_ms: u128,
    pub individual_runs: Vec<RunOutcome>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RunnerReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub n_runs_per_scenario: usize,
    pub base_seed: u64,
    pub summary: Summary,
    pub scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}

impl Summary {
    pub fn from_reports(reports: &[ScenarioReport]) -> Self {
        let total = reports.len();
        let passed = reports.iter().filter(|r| r.pass).count();
        Self {
            total,
            passed,
            failed: total - passed,
            pass_rate: if total > 0 { passed as f64 / total as f64 } else { 0.0 },
        }
    }
}
