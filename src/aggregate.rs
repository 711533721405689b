// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - State Aggregation

use serde::{Deserialize, Serialize};

use crate::population::Population;
use crate::types::HealthState;

/// The four reporting buckets. `total_healthy` already includes the high-risk
/// healthy count, so the partition of the population is
/// `total_healthy + infected_asymptomatic + symptomatic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketCounts {
    pub healthy_high_risk: usize,
    pub total_healthy: usize,
    pub infected_asymptomatic: usize,
    pub symptomatic: usize,
}

impl BucketCounts {
    pub fn from_population(population: &Population) -> Self {
        population.states().iter().fold(Self::default(), |mut counts, state| {
            if *state == HealthState::HighRiskHealthy {
                counts.healthy_high_risk += 1;
            }
            if state.is_healthy() {
                counts.total_healthy += 1;
            } else if state.is_incubating() {
                counts.infected_asymptomatic += 1;
            } else {
                counts.symptomatic += 1;
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.total_healthy + self.infected_asymptomatic + self.symptomatic
    }

    /// Asymptomatic plus symptomatic.
    pub fn ever_infected(&self) -> usize {
        self.infected_asymptomatic + self.symptomatic
    }
}

/// Remembers the last observed high-risk healthy count and reports drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighRiskTracker {
    baseline: usize,
}

impl HighRiskTracker {
    pub fn new(initial: &BucketCounts) -> Self {
        Self { baseline: initial.healthy_high_risk }
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// Newly infected high-risk individuals since the last observation, if any.
    pub fn observe(&mut self, counts: &BucketCounts) -> Option<usize> {
        if counts.healthy_high_risk < self.baseline {
            let delta = self.baseline - counts.healthy_high_risk;
            self.baseline = counts.healthy_high_risk;
            Some(delta)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthState::*;

    #[test]
    fn buckets_partition_population() {
        let population = Population::from(vec![
            Vaccinated,
            HighRiskHealthy,
            HighRiskHealthy,
            Healthy,
            Stage1,
            Stage2,
            Stage3,
            Symptomatic,
        ]);
        let counts = BucketCounts::from_population(&population);
        assert_eq!(
            counts,
            BucketCounts { healthy_high_risk: 2, total_healthy: 4, infected_asymptomatic: 3, symptomatic: 1 }
        );
        assert_eq!(counts.total(), population.len());
        assert_eq!(counts.ever_infected(), 4);
    }

    #[test]
    fn tracker_reports_only_drops() {
        let at = |n| BucketCounts { healthy_high_risk: n, ..BucketCounts::default() };
        let mut tracker = HighRiskTracker::new(&at(10));
        assert_eq!(tracker.observe(&at(10)), None);
        assert_eq!(tracker.observe(&at(7)), Some(3));
        assert_eq!(tracker.baseline(), 7);
        assert_eq!(tracker.observe(&at(7)), None);
        assert_eq!(tracker.observe(&at(2)), Some(5));
        assert_eq!(tracker.baseline(), 2);
    }
}
