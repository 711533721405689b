// Outbreak Runner v0.1.0: Monte Carlo scenario validation
// N runs per scenario, seedable ChaCha8 PRNG, JSON report, optional per-round JSONL
//
// Usage:
//   cargo run --release --bin outbreak                          # All scenarios (1000 runs each)
//   cargo run --release --bin outbreak -- --runs 50             # Quick mode
//   cargo run --release --bin outbreak -- EXACT                 # Filter by name
//   cargo run --release --bin outbreak -- --config town.json    # Batch-run a custom town
//   cargo run --release --bin outbreak -- --time-series         # Enable JSONL output
//   cargo run --release --features parallel --bin outbreak      # Runs on all cores

mod logging;
mod monte_carlo;
mod report;
mod scenarios;
mod time_series;

use clap::Parser;
use log::{error, warn, LevelFilter};
use outbreak_engine::{SimulationConfig, DEFAULT_RUNS};
use report::*;
use scenarios::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "outbreak", version, about = "Monte Carlo runner for the outbreak engine")]
struct CliArgs {
    /// Runs per scenario
    #[arg(long, default_value_t = DEFAULT_RUNS)]
    runs: usize,

    /// Base seed; run i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write per-round JSONL of each scenario's base-seed run
    #[arg(long)]
    time_series: bool,

    /// Run a single town read from a JSON configuration file instead of the built-in scenarios
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for reports
    #[arg(long, default_value = "outbreak-results")]
    out_dir: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Case-insensitive filter on scenario name, label or category
    filter: Option<String>,
}

fn load_scenarios(cli: &CliArgs) -> Result<Vec<Scenario>, String> {
    if let Some(path) = &cli.config {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let config = SimulationConfig::from_json(&json)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        return Ok(vec![Scenario {
            name: "CUSTOM",
            label: "Custom Town",
            category: "custom",
            config,
            criteria: PassCriteria::default(),
        }]);
    }

    let all = scenarios();
    Ok(match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all.into_iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all,
    })
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = CliArgs::parse();
    if let Err(e) = logging::init(cli.log_level) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let to_run = match load_scenarios(&cli) {
        Ok(to_run) if to_run.is_empty() => {
            error!("no scenarios match filter: {:?}", cli.filter);
            return ExitCode::FAILURE;
        }
        Ok(to_run) => to_run,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let ts_dir = cli.time_series.then(|| cli.out_dir.join("time-series"));

    println!("\n  Outbreak Runner v{}", env!("CARGO_PKG_VERSION"));
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<34} {:>9} {:>9} {:>9} {:>9} {:>8}  {}",
        "Scenario", "HighRisk", "Healthy", "Incub.", "Sick", "Time", "Status");
    println!("  {}", "-".repeat(92));

    let suite_start = Instant::now();
    let mut reports = Vec::new();

    for scenario in &to_run {
        let report = match monte_carlo::run_scenario(scenario, cli.runs, cli.seed, ts_dir.as_deref()) {
            Ok(report) => report,
            Err(e) => {
                error!("{}: {}", scenario.name, e);
                return ExitCode::FAILURE;
            }
        };

        let s = &report.summary;
        println!("  {:<34} {:>9} {:>9} {:>9} {:>9} {:>6}ms  {}",
            report.label,
            s.mean_healthy_high_risk,
            s.mean_total_healthy,
            s.mean_infected_asymptomatic,
            s.mean_symptomatic,
            report.elapsed_ms,
            if report.pass { "PASS" } else { "FAIL" },
        );
        for failure in &report.failures {
            warn!("{}: {}", report.scenario_name, failure);
        }

        reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Summary ────────────────────────────────────────────────────────

    let summary = Summary::from_reports(&reports);
    println!("  {}", "-".repeat(92));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        summary.total, summary.passed, summary.failed, suite_elapsed.as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let failed = summary.failed;

    let report = RunnerReport {
        timestamp: ts.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        base_seed: cli.seed,
        summary,
        scenarios: reports,
    };

    if let Err(e) = write_report(&cli.out_dir, &report) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn write_report(dir: &std::path::Path, report: &RunnerReport) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create {}: {}", dir.display(), e))?;
    let path = dir.join(format!("outbreak-{}.json", report.timestamp));
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("failed to serialize report: {}", e))?;
    std::fs::write(&path, json)
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    println!("  Results saved to: {}\n", path.display());
    Ok(())
}
