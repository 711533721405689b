// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Population

use std::collections::HashMap;
use std::ops::Index;

use crate::config::SimulationConfig;
use crate::types::HealthState;

/// Health state of every individual, indexed by identity. The length never
/// changes after generation; only states are rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    states: Vec<HealthState>,
}

impl Population {
    /// Build the starting population: vaccinated, high-risk, freshly infected,
    /// then plain healthy. Order is irrelevant since all later selection is by
    /// uniform random index.
    pub fn generate(config: &SimulationConfig) -> Self {
        let mut states = Vec::with_capacity(config.population);
        states.extend(std::iter::repeat(HealthState::Vaccinated).take(config.vaccinated));
        states.extend(std::iter::repeat(HealthState::HighRiskHealthy).take(config.high_risk));
        states.extend(std::iter::repeat(HealthState::Stage1).take(config.infected));
        states.resize(config.population, HealthState::Healthy);
        Self { states }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[HealthState] {
        &self.states
    }

    pub(crate) fn set(&mut self, index: usize, state: HealthState) {
        debug_assert!(state.stage_index() >= self.states[index].stage_index());
        self.states[index] = state;
    }

    /// Indices of everyone still going out, i.e. not yet symptomatic.
    pub fn eligible_pool(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_symptomatic())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn counting(&self, query: HealthState) -> usize {
        self.states.iter().filter(|&&s| s == query).count()
    }

    /// Count of every state, including those with no individuals.
    pub fn counting_all(&self) -> HashMap<HealthState, usize> {
        let mut counts: HashMap<HealthState, usize> =
            HealthState::ALL.iter().map(|&s| (s, 0)).collect();
        for state in &self.states {
            *counts.entry(*state).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<HealthState>> for Population {
    fn from(states: Vec<HealthState>) -> Self {
        Self { states }
    }
}

impl Index<usize> for Population {
    type Output = HealthState;

    fn index(&self, index: usize) -> &HealthState {
        &self.states[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpreadMode;

    #[test]
    fn generate_matches_category_counts() {
        let config = SimulationConfig {
            population: 20,
            infected: 3,
            vaccinated: 5,
            high_risk: 4,
            group_capacities: vec![],
            spread_mode: SpreadMode::InfectOne,
        };
        let population = Population::generate(&config);
        assert_eq!(population.len(), 20);
        let counts = population.counting_all();
        assert_eq!(counts[&HealthState::Vaccinated], 5);
        assert_eq!(counts[&HealthState::HighRiskHealthy], 4);
        assert_eq!(counts[&HealthState::Stage1], 3);
        assert_eq!(counts[&HealthState::Healthy], 8);
        assert_eq!(counts[&HealthState::Symptomatic], 0);
    }

    #[test]
    fn generate_empty_population() {
        let config = SimulationConfig {
            population: 0,
            infected: 0,
            vaccinated: 0,
            high_risk: 0,
            group_capacities: vec![3],
            spread_mode: SpreadMode::InfectAll,
        };
        assert!(Population::generate(&config).is_empty());
    }

    #[test]
    fn eligible_pool_skips_symptomatic() {
        let population = Population::from(vec![
            HealthState::Healthy,
            HealthState::Symptomatic,
            HealthState::Stage3,
            HealthState::Vaccinated,
            HealthState::Symptomatic,
        ]);
        assert_eq!(population.eligible_pool(), vec![0, 2, 3]);
    }

    #[test]
    fn counting_default_board() {
        let population = Population::generate(&SimulationConfig::default());
        assert_eq!(population.counting(HealthState::Healthy), 98);
        assert_eq!(population.counting(HealthState::Stage1), 2);
    }
}
