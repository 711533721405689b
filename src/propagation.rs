// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Infection Propagation

use crate::population::Population;
use crate::types::{HealthState, SpreadMode};

/// What happened inside one venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupOutcome {
    /// Members incubating before progression ran.
    pub infectious: usize,
    pub newly_infected: usize,
    pub newly_infected_high_risk: usize,
}

/// Advance one individual a day along the disease course. Returns whether the
/// individual was incubating beforehand.
fn progress(population: &mut Population, index: usize) -> bool {
    let state = population[index];
    if state.is_incubating() {
        population.set(index, state.progressed());
        true
    } else {
        false
    }
}

/// Progression then transmission for the members of one venue.
///
/// Members infected here enter `Stage1` after progression, so they do not
/// advance again on the same day.
pub fn propagate_group(population: &mut Population, members: &[usize], mode: SpreadMode) -> GroupOutcome {
    let infectious = members.iter().filter(|&&i| progress(population, i)).count();
    let mut outcome = GroupOutcome { infectious, ..GroupOutcome::default() };
    if infectious == 0 {
        return outcome;
    }

    let mut budget = match mode {
        SpreadMode::InfectAll => usize::MAX,
        SpreadMode::InfectOne => infectious,
    };
    for &index in members {
        if budget == 0 {
            break;
        }
        let state = population[index];
        if !state.is_susceptible() {
            continue;
        }
        population.set(index, HealthState::Stage1);
        outcome.newly_infected += 1;
        if state == HealthState::HighRiskHealthy {
            outcome.newly_infected_high_risk += 1;
        }
        if mode == SpreadMode::InfectOne {
            budget -= 1;
        }
    }
    outcome
}

/// Progression only, for individuals who attended no venue. Returns how many
/// were incubating.
pub fn progress_unplaced(population: &mut Population, unplaced: &[usize]) -> usize {
    unplaced.iter().filter(|&&i| progress(population, i)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthState::*;

    fn everyone(population: &Population) -> Vec<usize> {
        (0..population.len()).collect()
    }

    #[test]
    fn infect_all_reaches_every_susceptible() {
        let mut population =
            Population::from(vec![Stage1, Healthy, HighRiskHealthy, Vaccinated, Healthy]);
        let members = everyone(&population);
        let outcome = propagate_group(&mut population, &members, SpreadMode::InfectAll);
        assert_eq!(outcome, GroupOutcome { infectious: 1, newly_infected: 3, newly_infected_high_risk: 1 });
        assert_eq!(population.states(), &[Stage2, Stage1, Stage1, Vaccinated, Stage1]);
    }

    #[test]
    fn infect_one_limits_to_infectious_count() {
        let mut population =
            Population::from(vec![Stage2, Stage3, Healthy, Healthy, Healthy, HighRiskHealthy]);
        let members = everyone(&population);
        let outcome = propagate_group(&mut population, &members, SpreadMode::InfectOne);
        assert_eq!(outcome.infectious, 2);
        assert_eq!(outcome.newly_infected, 2);
        assert_eq!(population.counting(Stage1), 2);
        assert_eq!(population.counting(Stage3), 1);
        assert_eq!(population.counting(Symptomatic), 1);
    }

    #[test]
    fn infect_one_with_few_susceptibles() {
        let mut population = Population::from(vec![Stage1, Stage1, Stage1, Healthy]);
        let members = everyone(&population);
        let outcome = propagate_group(&mut population, &members, SpreadMode::InfectOne);
        assert_eq!(outcome.infectious, 3);
        assert_eq!(outcome.newly_infected, 1);
    }

    #[test]
    fn no_incubating_member_means_no_transmission() {
        let mut population = Population::from(vec![Healthy, HighRiskHealthy, Vaccinated]);
        let members = everyone(&population);
        let outcome = propagate_group(&mut population, &members, SpreadMode::InfectAll);
        assert_eq!(outcome, GroupOutcome::default());
        assert_eq!(population.states(), &[Healthy, HighRiskHealthy, Vaccinated]);
    }

    #[test]
    fn vaccinated_never_infected() {
        let mut population = Population::from(vec![Stage1, Vaccinated, Vaccinated]);
        let members = everyone(&population);
        let outcome = propagate_group(&mut population, &members, SpreadMode::InfectAll);
        assert_eq!(outcome.newly_infected, 0);
        assert_eq!(population.counting(Vaccinated), 2);
    }

    #[test]
    fn only_members_are_touched() {
        let mut population = Population::from(vec![Stage1, Healthy, Stage1, Healthy]);
        let outcome = propagate_group(&mut population, &[0, 1], SpreadMode::InfectAll);
        assert_eq!(outcome.newly_infected, 1);
        assert_eq!(population.states(), &[Stage2, Stage1, Stage1, Healthy]);
    }

    #[test]
    fn unplaced_progress_without_transmission() {
        let mut population = Population::from(vec![Stage1, Healthy, Stage3, Symptomatic]);
        let incubating = progress_unplaced(&mut population, &[0, 1, 2, 3]);
        assert_eq!(incubating, 2);
        assert_eq!(population.states(), &[Stage2, Healthy, Symptomatic, Symptomatic]);
    }
}
