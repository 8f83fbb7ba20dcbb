//! # dugout_core - Amateur Baseball/Softball Scoreboard Engine
//!
//! Game-state engine and presentation layer for a browser scoreboard widget.
//!
//! ## Features
//! - Inning / half / outs / base-runner state with simplified advancement
//! - Per-inning line score and rendered HTML scoreboard
//! - Toy next-half win-probability heuristic
//! - Host-agnostic rendering through [`render::RenderTarget`]
//! - JSON command API for non-web hosts
//! - Independent tab-switcher widget model

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod labels;
pub mod models;
pub mod render;
pub mod session;
pub mod state;
pub mod widget;

// Re-export main API functions
pub use api::{apply_command_json, command_schema_json, snapshot_json, Command, GameSnapshot};
pub use config::{config_from_env, PredictionConfig, ScoreboardConfig};
pub use engine::{Prediction, WinProbabilityModel};
pub use error::{Result, ScoreboardError};
pub use labels::{Labels, Locale};
pub use models::{AtBatEvent, Bases, Half, LineScore, TeamNames, TeamSide};
pub use render::{MemorySurface, Region, RenderTarget};
pub use session::{ActionOutcome, Session, UiAction};
pub use state::{EventOutcome, GameState, HalfInningSummary};
pub use widget::{TabActivation, TabSwitcher};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
