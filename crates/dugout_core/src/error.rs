use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScoreboardError {
    /// Stable code for host-side error reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ScoreboardError::Json(err) if err.is_data() => "INVALID_COMMAND",
            ScoreboardError::Json(_) => "MALFORMED_JSON",
            ScoreboardError::InvalidConfig(_) => "INVALID_CONFIG",
            ScoreboardError::ConfigRead { .. } => "CONFIG_READ_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
