// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Round Driver

use log::trace;
use rand::Rng;

use crate::config::SimulationConfig;
use crate::partition::GroupPartitioner;
use crate::population::Population;
use crate::propagation::{progress_unplaced, propagate_group};

/// Tallies of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOutcome {
    pub eligible: usize,
    pub groups_formed: usize,
    pub unplaced: usize,
    pub newly_infected: usize,
    pub newly_infected_high_risk: usize,
}

/// Run one day: everyone not yet symptomatic goes out, venues are filled at
/// random, infection spreads inside each venue, and those left without a
/// venue still progress.
pub fn simulate_round<R: Rng + ?Sized>(
    population: &mut Population,
    config: &SimulationConfig,
    rng: &mut R,
) -> RoundOutcome {
    let pool = population.eligible_pool();
    let mut outcome = RoundOutcome { eligible: pool.len(), ..RoundOutcome::default() };

    let mut partitioner = GroupPartitioner::new(pool, config.group_capacities.clone());
    while let Some(group) = partitioner.next_group(rng) {
        let group_outcome = propagate_group(population, &group.members, config.spread_mode);
        trace!(
            "group capacity={} size={} infectious={} newly_infected={}",
            group.capacity,
            group.members.len(),
            group_outcome.infectious,
            group_outcome.newly_infected
        );
        outcome.groups_formed += 1;
        outcome.newly_infected += group_outcome.newly_infected;
        outcome.newly_infected_high_risk += group_outcome.newly_infected_high_risk;
    }

    let remainder = partitioner.into_remainder();
    progress_unplaced(population, &remainder);
    outcome.unplaced = remainder.len();
    outcome
}
