// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Monte Carlo Statistics

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round to two decimal places, half away from zero.
pub fn round_cents(v: f64) -> Decimal {
    Decimal::from_f64(v)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ─── Statistics (per-bucket Monte Carlo aggregation) ────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}
