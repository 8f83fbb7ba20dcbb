//! # Scoreboard configuration
//!
//! Display locale, default team names and the prediction coefficients.
//! Every field has a default, so `{}` is a valid config document.
//!
//! ```rust
//! use dugout_core::config::ScoreboardConfig;
//!
//! let cfg = ScoreboardConfig::from_json(r#"{"default_away_name":"Visitors"}"#).unwrap();
//! assert_eq!(cfg.default_away_name, "Visitors");
//! assert_eq!(cfg.default_home_name, "Home");
//! ```

mod env;
mod prediction_config;

pub use env::{config_from_env, CONFIG_PATH_ENV};
pub use prediction_config::PredictionConfig;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreboardError};
use crate::labels::Locale;
use crate::models::{TeamNames, TeamSide, DEFAULT_AWAY_NAME, DEFAULT_HOME_NAME};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreboardConfig {
    pub locale: Locale,
    /// Used at start-up and whenever the away name input is cleared.
    pub default_away_name: String,
    /// Used at start-up and whenever the home name input is cleared.
    pub default_home_name: String,
    pub prediction: PredictionConfig,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_away_name: DEFAULT_AWAY_NAME.to_string(),
            default_home_name: DEFAULT_HOME_NAME.to_string(),
            prediction: PredictionConfig::default(),
        }
    }
}

impl ScoreboardConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (side, name) in [
            (TeamSide::Away, &self.default_away_name),
            (TeamSide::Home, &self.default_home_name),
        ] {
            if name.trim().is_empty() {
                return Err(ScoreboardError::InvalidConfig(format!(
                    "default {side:?} team name must not be empty"
                )));
            }
        }
        self.prediction.validate().map_err(ScoreboardError::InvalidConfig)
    }

    pub fn default_team_names(&self) -> TeamNames {
        TeamNames::new(&self.default_away_name, &self.default_home_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let cfg = ScoreboardConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ScoreboardConfig::default());
    }

    #[test]
    fn test_partial_prediction_override() {
        let cfg = ScoreboardConfig::from_json(r#"{"prediction":{"delta_cap":0.4}}"#).unwrap();
        assert!((cfg.prediction.delta_cap - 0.4).abs() < 1e-12);
        assert!((cfg.prediction.tanh_weight - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_blank_default_name_rejected() {
        let err = ScoreboardConfig::from_json(r#"{"default_home_name":"  "}"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::InvalidConfig(ref msg) if msg.contains("Home")));
    }

    #[test]
    fn test_malformed_json() {
        let err = ScoreboardConfig::from_json("{locale").unwrap_err();
        assert_eq!(err.code(), "MALFORMED_JSON");
    }

    #[test]
    fn test_default_team_names() {
        let cfg = ScoreboardConfig {
            default_away_name: "Visitors".to_string(),
            ..Default::default()
        };
        let names = cfg.default_team_names();
        assert_eq!(names.away, "Visitors");
        assert_eq!(names.home, "Home");
    }
}
