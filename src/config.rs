// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::SpreadMode;

/// Days simulated by every run.
pub const ROUNDS: u32 = 10;

/// Largest population a host may request.
pub const MAX_POPULATION: usize = 1_000_000;

/// Runs per batch when the caller does not say otherwise.
pub const DEFAULT_RUNS: usize = 1000;

/// Venue sizes of the classic board: concert hall, bakery, school, pharmacy,
/// restaurant, gym, supermarket, shopping center.
pub const CLASSIC_VENUES: [usize; 8] = [20, 4, 16, 4, 12, 8, 4, 8];

// ─── Simulation Config ───────────────────────────────────────────────────────

/// Immutable description of one simulated town.
///
/// Individuals not covered by `infected`, `vaccinated` or `high_risk` start
/// `Healthy`. `group_capacities` is the set of venues open each day; the list
/// is consumed afresh every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub population: usize,
    pub infected: usize,
    pub vaccinated: usize,
    pub high_risk: usize,
    #[serde(default)]
    pub group_capacities: Vec<usize>,
    #[serde(default)]
    pub spread_mode: SpreadMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: 100,
            infected: 2,
            vaccinated: 0,
            high_risk: 0,
            group_capacities: CLASSIC_VENUES.to_vec(),
            spread_mode: SpreadMode::InfectOne,
        }
    }
}

impl SimulationConfig {
    /// Check the population-count invariants. An empty capacity list is
    /// valid: nobody meets and only progression happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population > MAX_POPULATION {
            return Err(ConfigError::PopulationTooLarge {
                population: self.population,
                max: MAX_POPULATION,
            });
        }
        let seeded = self
            .infected
            .checked_add(self.vaccinated)
            .and_then(|n| n.checked_add(self.high_risk));
        if seeded.map_or(true, |n| n > self.population) {
            return Err(ConfigError::SeedCountsExceedPopulation {
                infected: self.infected,
                vaccinated: self.vaccinated,
                high_risk: self.high_risk,
                population: self.population,
            });
        }
        if let Some(index) = self.group_capacities.iter().position(|&c| c == 0) {
            return Err(ConfigError::ZeroCapacity { index });
        }
        Ok(())
    }

    /// Individuals that start out plain `Healthy`.
    pub fn healthy(&self) -> usize {
        self.population - self.infected - self.vaccinated - self.high_risk
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_spread_mode(mut self, spread_mode: SpreadMode) -> Self {
        self.spread_mode = spread_mode;
        self
    }

    pub fn with_group_capacities(mut self, group_capacities: Vec<usize>) -> Self {
        self.group_capacities = group_capacities;
        self
    }
}

// ─── Batch Config ────────────────────────────────────────────────────────────

/// Monte Carlo settings. With a `base_seed`, run `i` is seeded with
/// `base_seed + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub runs: usize,
    #[serde(default)]
    pub base_seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { runs: DEFAULT_RUNS, base_seed: None }
    }
}

impl BatchConfig {
    pub fn seeded(runs: usize, base_seed: u64) -> Self {
        Self { runs, base_seed: Some(base_seed) }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
