use serde::{Deserialize, Serialize};

/// Coefficients of the next-half win-probability heuristic.
///
/// The defaults reproduce the demo formula:
/// `0.5 + 0.15·tanh(diff/2) + bases − 0.03·outs`, clamped to `[0.05, 0.95]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PredictionConfig {
    /// Win probability before any half-inning has been played.
    pub initial_win_prob: f64,
    pub baseline: f64,
    /// Weight of `tanh(diff / tanh_divisor)`.
    pub tanh_weight: f64,
    pub tanh_divisor: f64,
    /// Per-runner value for first, second and third.
    pub base_weights: [f64; 3],
    pub outs_penalty_per_out: f64,
    pub min_win_prob: f64,
    pub max_win_prob: f64,
    /// Cap on the magnitude of the predicted run-differential change.
    pub delta_cap: f64,
    /// Weight of `|diff|` in the predicted change.
    pub delta_run_weight: f64,
    /// Weight of the base value in the predicted change.
    pub delta_base_weight: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            initial_win_prob: 0.5,
            baseline: 0.5,
            tanh_weight: 0.15,
            tanh_divisor: 2.0,
            base_weights: [0.02, 0.04, 0.06],
            outs_penalty_per_out: 0.03,
            min_win_prob: 0.05,
            max_win_prob: 0.95,
            delta_cap: 0.6,
            delta_run_weight: 0.2,
            delta_base_weight: 2.0,
        }
    }
}

impl PredictionConfig {
    pub fn validate(&self) -> Result<(), String> {
        let coefficients = [
            ("initial_win_prob", self.initial_win_prob),
            ("baseline", self.baseline),
            ("tanh_weight", self.tanh_weight),
            ("tanh_divisor", self.tanh_divisor),
            ("base_weights[0]", self.base_weights[0]),
            ("base_weights[1]", self.base_weights[1]),
            ("base_weights[2]", self.base_weights[2]),
            ("outs_penalty_per_out", self.outs_penalty_per_out),
            ("min_win_prob", self.min_win_prob),
            ("max_win_prob", self.max_win_prob),
            ("delta_cap", self.delta_cap),
            ("delta_run_weight", self.delta_run_weight),
            ("delta_base_weight", self.delta_base_weight),
        ];
        if let Some((name, value)) = coefficients.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be finite, got {value}"));
        }
        if self.tanh_divisor == 0.0 {
            return Err("tanh_divisor must be non-zero".to_string());
        }
        if !(0.0..=1.0).contains(&self.min_win_prob) || !(0.0..=1.0).contains(&self.max_win_prob)
        {
            return Err(format!(
                "win probability bounds must lie in [0, 1], got [{}, {}]",
                self.min_win_prob, self.max_win_prob
            ));
        }
        if self.min_win_prob > self.max_win_prob {
            return Err(format!(
                "min_win_prob {} exceeds max_win_prob {}",
                self.min_win_prob, self.max_win_prob
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_win_prob) {
            return Err(format!("initial_win_prob must be in [0, 1], got {}", self.initial_win_prob));
        }
        if self.delta_cap < 0.0 {
            return Err(format!("delta_cap must be non-negative, got {}", self.delta_cap));
        }
        Ok(())
    }
}
