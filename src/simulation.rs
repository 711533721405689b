// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Simulation Core

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::aggregate::{BucketCounts, HighRiskTracker};
use crate::config::{SimulationConfig, ROUNDS};
use crate::errors::Result;
use crate::population::Population;
use crate::round::simulate_round;
use crate::types::RoundRecord;

// ─── Simulation struct ───────────────────────────────────────────────────────

/// One run of the town: a generated population advanced for `ROUNDS` days.
#[derive(Debug, Clone)]
pub struct Simulation<R = ChaCha8Rng> {
    config: SimulationConfig,
    population: Population,
    round: u32,
    tracker: HighRiskTracker,
    rng: R,
}

impl Simulation<ChaCha8Rng> {
    /// Unseeded run.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Reproducible run.
    pub fn seeded(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let population = Population::generate(&config);
        let tracker = HighRiskTracker::new(&BucketCounts::from_population(&population));
        Ok(Self { config, population, round: 0, tracker, rng })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.round >= ROUNDS
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts::from_population(&self.population)
    }

    /// Census of the population before any round has run.
    pub fn initial_record(&self) -> RoundRecord {
        record(0, &self.counts(), None, 0, 0)
    }

    /// Advance one day. Returns `None` once all rounds are done.
    pub fn step(&mut self) -> Option<RoundRecord> {
        if self.is_finished() {
            return None;
        }
        let outcome = simulate_round(&mut self.population, &self.config, &mut self.rng);
        self.round += 1;

        let counts = self.counts();
        let newly_infected_high_risk = self.tracker.observe(&counts);
        debug!(
            "round {}: groups={} unplaced={} newly_infected={} healthy={} asymptomatic={} symptomatic={}",
            self.round,
            outcome.groups_formed,
            outcome.unplaced,
            outcome.newly_infected,
            counts.total_healthy,
            counts.infected_asymptomatic,
            counts.symptomatic
        );
        if let Some(delta) = newly_infected_high_risk {
            debug!("round {}: {} high-risk individuals newly infected", self.round, delta);
        }
        Some(record(self.round, &counts, newly_infected_high_risk, outcome.newly_infected, outcome.groups_formed))
    }

    /// Records for round 0 through the last round.
    pub fn run(mut self) -> Vec<RoundRecord> {
        let mut records = Vec::with_capacity(ROUNDS as usize + 1);
        records.push(self.initial_record());
        while let Some(r) = self.step() {
            records.push(r);
        }
        records
    }

    /// Run the remaining rounds without recording history.
    pub fn run_to_end(mut self) -> BucketCounts {
        while !self.is_finished() {
            simulate_round(&mut self.population, &self.config, &mut self.rng);
            self.round += 1;
        }
        self.counts()
    }
}

fn record(
    round: u32,
    counts: &BucketCounts,
    newly_infected_high_risk: Option<usize>,
    newly_infected: usize,
    groups_formed: usize,
) -> RoundRecord {
    RoundRecord {
        round,
        healthy_high_risk: counts.healthy_high_risk,
        total_healthy: counts.total_healthy,
        infected_asymptomatic: counts.infected_asymptomatic,
        symptomatic: counts.symptomatic,
        newly_infected_high_risk,
        newly_infected,
        groups_formed,
    }
}

// ─── Single Run ──────────────────────────────────────────────────────────────

/// Validate `config` and return the per-round history of one run.
pub fn run_single(config: &SimulationConfig, seed: Option<u64>) -> Result<Vec<RoundRecord>> {
    let sim = match seed {
        Some(seed) => Simulation::seeded(config.clone(), seed)?,
        None => Simulation::new(config.clone())?,
    };
    Ok(sim.run())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
