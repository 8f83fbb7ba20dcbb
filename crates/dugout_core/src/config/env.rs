use std::{env, fs};

use super::ScoreboardConfig;
use crate::error::{Result, ScoreboardError};

pub const CONFIG_PATH_ENV: &str = "DUGOUT_CONFIG_PATH";

/// Load the config file named by `DUGOUT_CONFIG_PATH`.
///
/// An unset or blank variable yields the defaults.
pub fn config_from_env() -> Result<ScoreboardConfig> {
    match env::var(CONFIG_PATH_ENV) {
        Ok(path) => config_from_path_value(&path),
        Err(_) => Ok(ScoreboardConfig::default()),
    }
}

pub(crate) fn config_from_path_value(path: &str) -> Result<ScoreboardConfig> {
    let path = path.trim();
    if path.is_empty() {
        return Ok(ScoreboardConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|source| ScoreboardError::ConfigRead { path: path.to_string(), source })?;

    let config = ScoreboardConfig::from_json(&content)?;
    tracing::info!(path, locale = ?config.locale, "loaded scoreboard config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;
    use std::io::Write;

    #[test]
    fn test_blank_path_uses_defaults() {
        let cfg = config_from_path_value("   ").unwrap();
        assert_eq!(cfg, ScoreboardConfig::default());
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"locale":"traditional_chinese","default_home_name":"Hawks"}}"#).unwrap();

        let cfg = config_from_path_value(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.locale, Locale::TraditionalChinese);
        assert_eq!(cfg.default_home_name, "Hawks");
        assert_eq!(cfg.default_away_name, "Away");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let err = config_from_path_value(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ScoreboardError::ConfigRead { .. }));
        assert_eq!(err.code(), "CONFIG_READ_FAILED");
    }

    #[test]
    fn test_invalid_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"prediction":{{"min_win_prob":0.8,"max_win_prob":0.2}}}}"#).unwrap();

        let err = config_from_path_value(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ScoreboardError::InvalidConfig(_)));
    }
}
