// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Error Types

/// A configuration that breaks the population-count invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "seed counts exceed population: {infected} infected + {vaccinated} vaccinated \
         + {high_risk} high-risk > {population}"
    )]
    SeedCountsExceedPopulation {
        infected: usize,
        vaccinated: usize,
        high_risk: usize,
        population: usize,
    },

    #[error("population {population} exceeds the supported maximum of {max}")]
    PopulationTooLarge { population: usize, max: usize },

    #[error("group capacity at position {index} is zero")]
    ZeroCapacity { index: usize },

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// Errors returned by the public run entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
