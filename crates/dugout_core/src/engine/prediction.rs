//! Next-half win-probability heuristic.
//!
//! An illustrative, uncalibrated model. The run differential is always taken
//! from the away team's point of view (`away − home`).

use serde::{Deserialize, Serialize};

use crate::config::PredictionConfig;
use crate::models::Bases;

/// State the heuristic reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInputs {
    pub score_diff: i64,
    pub bases: Bases,
    pub outs: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub win_prob: f64,
    /// Expected change of the run differential over the next half-inning.
    pub predicted_delta: f64,
    pub base_value: f64,
    pub outs_penalty: f64,
}

impl Prediction {
    /// Whole-number percentage shown in the readout.
    pub fn percent(&self) -> u32 {
        (self.win_prob * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WinProbabilityModel {
    config: PredictionConfig,
}

impl WinProbabilityModel {
    pub fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    pub fn base_value(&self, bases: Bases) -> f64 {
        bases
            .as_array()
            .iter()
            .zip(self.config.base_weights)
            .filter(|(occupied, _)| **occupied)
            .map(|(_, weight)| weight)
            .sum()
    }

    pub fn outs_penalty(&self, outs: u8) -> f64 {
        self.config.outs_penalty_per_out * outs as f64
    }

    pub fn predict(&self, inputs: PredictionInputs) -> Prediction {
        let cfg = &self.config;
        let diff = inputs.score_diff as f64;
        let base_value = self.base_value(inputs.bases);
        let outs_penalty = self.outs_penalty(inputs.outs);

        let raw = cfg.baseline + (diff / cfg.tanh_divisor).tanh() * cfg.tanh_weight + base_value
            - outs_penalty;
        let win_prob = raw.max(cfg.min_win_prob).min(cfg.max_win_prob);

        // Leaders regress toward the mean; a tie counts as trailing.
        let direction = if inputs.score_diff > 0 { -1.0 } else { 1.0 };
        let magnitude = (diff.abs() * cfg.delta_run_weight + base_value * cfg.delta_base_weight
            - outs_penalty)
            .min(cfg.delta_cap);
        let predicted_delta = direction * magnitude;

        Prediction { win_prob, predicted_delta, base_value, outs_penalty }
    }
}

/// Two-decimal rendering with an explicit `+` on non-negative values.
pub fn signed_fixed2(value: f64) -> String {
    // Normalise -0.0 so it does not print as "+-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}
