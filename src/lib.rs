// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - stochastic epidemic spread over random daily groups

pub mod types;
pub mod errors;
pub mod config;
pub mod population;
pub mod partition;
pub mod propagation;
pub mod round;
pub mod aggregate;
pub mod simulation;
pub mod stats;
pub mod batch;

pub use types::*;
pub use aggregate::{BucketCounts, HighRiskTracker};
pub use batch::{run_batch, run_outcomes, BatchSummary, RunOutcome};
pub use config::{BatchConfig, SimulationConfig, DEFAULT_RUNS, MAX_POPULATION, ROUNDS};
pub use errors::{ConfigError, EngineError};
pub use population::Population;
pub use simulation::{run_single, Simulation};
pub use stats::Stats;

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[cfg(target_arch = "wasm32")]
static PANIC_HOOK: std::sync::Once = std::sync::Once::new();

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    PANIC_HOOK.call_once(|| std::panic::set_hook(Box::new(console_error_panic_hook::hook)));
}

fn config_from_js(config: JsValue) -> Result<SimulationConfig, JsValue> {
    install_panic_hook();
    let config: SimulationConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| to_js_error(ConfigError::Malformed(e.to_string()).into()))?;
    config.validate().map_err(|e| to_js_error(e.into()))?;
    Ok(config)
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// All eleven round records of one run.
#[wasm_bindgen(js_name = runSingle)]
pub fn run_single_js(config: JsValue, seed: Option<u64>) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let records = run_single(&config, seed).map_err(to_js_error)?;
    to_js(&records)
}

/// Averaged final-round buckets over `runs` independent runs.
#[wasm_bindgen(js_name = runBatch)]
pub fn run_batch_js(config: JsValue, runs: Option<usize>, seed: Option<u64>) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let batch = BatchConfig { runs: runs.unwrap_or(DEFAULT_RUNS), base_seed: seed };
    let summary = run_batch(&config, &batch).map_err(to_js_error)?;
    to_js(&summary)
}

/// Round-by-round driver for hosts that render each day as it happens.
#[wasm_bindgen]
pub struct OutbreakSession {
    sim: Simulation,
}

#[wasm_bindgen]
impl OutbreakSession {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, seed: Option<u64>) -> Result<OutbreakSession, JsValue> {
        let config = config_from_js(config)?;
        let sim = match seed {
            Some(seed) => Simulation::seeded(config, seed),
            None => Simulation::new(config),
        }
        .map_err(to_js_error)?;
        Ok(Self { sim })
    }

    pub fn initial(&self) -> Result<JsValue, JsValue> {
        to_js(&self.sim.initial_record())
    }

    /// Next round record, or `null` when all rounds are done.
    pub fn step(&mut self) -> Result<JsValue, JsValue> {
        match self.sim.step() {
            Some(record) => to_js(&record),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn round(&self) -> u32 {
        self.sim.round()
    }

    #[wasm_bindgen(getter, js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.sim.is_finished()
    }
}
