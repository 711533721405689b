// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Health State ────────────────────────────────────────────────────────────

/// Health state of one individual.
///
/// Infection only moves forward: a susceptible individual is infected into
/// `Stage1`, then incubates through `Stage2` and `Stage3` before becoming
/// `Symptomatic`. `Vaccinated` never changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthState {
    Vaccinated = 0,
    HighRiskHealthy = 1,
    Healthy = 2,
    Stage1 = 3,
    Stage2 = 4,
    Stage3 = 5,
    Symptomatic = 6, // TERMINAL: stays home from now on
}

impl HealthState {
    pub const ALL: [HealthState; 7] = [
        Self::Vaccinated,
        Self::HighRiskHealthy,
        Self::Healthy,
        Self::Stage1,
        Self::Stage2,
        Self::Stage3,
        Self::Symptomatic,
    ];

    /// Position along the disease course. Never decreases for an individual.
    pub fn stage_index(&self) -> u8 {
        *self as u8
    }

    /// Can be infected by an incubating group member.
    pub fn is_susceptible(&self) -> bool {
        matches!(self, Self::HighRiskHealthy | Self::Healthy)
    }

    /// Asymptomatic but infectious.
    pub fn is_incubating(&self) -> bool {
        matches!(self, Self::Stage1 | Self::Stage2 | Self::Stage3)
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Vaccinated | Self::HighRiskHealthy | Self::Healthy)
    }

    pub fn is_symptomatic(&self) -> bool {
        matches!(self, Self::Symptomatic)
    }

    /// One day of disease progression. Non-incubating states are fixed points.
    pub fn progressed(self) -> Self {
        match self {
            Self::Stage1 => Self::Stage2,
            Self::Stage2 => Self::Stage3,
            Self::Stage3 => Self::Symptomatic,
            other => other,
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ─── Spread Mode ─────────────────────────────────────────────────────────────

/// How many susceptible attendees a group's incubating members can infect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SpreadMode {
    /// Every susceptible attendee of a group with an incubating member.
    InfectAll,
    /// Each incubating attendee infects at most one other attendee.
    #[default]
    InfectOne,
}

// ─── Round Record ────────────────────────────────────────────────────────────

/// Aggregated census of one round of a single run. Round 0 is the initial
/// population.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub healthy_high_risk: usize,
    pub total_healthy: usize,
    pub infected_asymptomatic: usize,
    pub symptomatic: usize,
    /// Set only when the high-risk healthy count dropped this round.
    #[serde(default)]
    pub newly_infected_high_risk: Option<usize>,
    #[serde(default)]
    pub newly_infected: usize,
    #[serde(default)]
    pub groups_formed: usize,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_follows_incubation_course() {
        assert_eq!(HealthState::Stage1.progressed(), HealthState::Stage2);
        assert_eq!(HealthState::Stage2.progressed(), HealthState::Stage3);
        assert_eq!(HealthState::Stage3.progressed(), HealthState::Symptomatic);
    }

    #[test]
    fn non_incubating_states_are_fixed_points() {
        for state in [
            HealthState::Vaccinated,
            HealthState::HighRiskHealthy,
            HealthState::Healthy,
            HealthState::Symptomatic,
        ] {
            assert_eq!(state.progressed(), state);
        }
    }

    #[test]
    fn progression_never_lowers_stage_index() {
        for state in HealthState::ALL {
            assert!(state.progressed().stage_index() >= state.stage_index());
        }
    }

    #[test]
    fn vaccinated_is_healthy_but_not_susceptible() {
        assert!(HealthState::Vaccinated.is_healthy());
        assert!(!HealthState::Vaccinated.is_susceptible());
        assert!(HealthState::HighRiskHealthy.is_susceptible());
        assert!(HealthState::Healthy.is_susceptible());
    }

    #[test]
    fn every_state_falls_in_exactly_one_bucket() {
        for state in HealthState::ALL {
            let buckets = [state.is_healthy(), state.is_incubating(), state.is_symptomatic()];
            assert_eq!(buckets.iter().filter(|&&b| b).count(), 1, "{state}");
        }
    }

    #[test]
    fn default_spread_mode_is_infect_one() {
        assert_eq!(SpreadMode::default(), SpreadMode::InfectOne);
    }
}
