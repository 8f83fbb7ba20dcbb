pub mod bases;
pub mod events;
pub mod line_score;
pub mod team;
pub mod timeline;

pub use bases::{Advance, Bases};
pub use events::AtBatEvent;
pub use line_score::LineScore;
pub use team::{Half, TeamNames, TeamSide, DEFAULT_AWAY_NAME, DEFAULT_HOME_NAME};
pub use timeline::{Timeline, TimelineEntry};
