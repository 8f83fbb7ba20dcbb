use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AWAY_NAME: &str = "Away";
pub const DEFAULT_HOME_NAME: &str = "Home";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Away,
    Home,
}

impl TeamSide {
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Away => TeamSide::Home,
            TeamSide::Home => TeamSide::Away,
        }
    }
}

/// Half of an inning. The away team bats in the top, the home team in the bottom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    #[default]
    Top,
    Bottom,
}

impl Half {
    #[inline]
    pub const fn batting_side(self) -> TeamSide {
        match self {
            Half::Top => TeamSide::Away,
            Half::Bottom => TeamSide::Home,
        }
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Half::Top => Half::Bottom,
            Half::Bottom => Half::Top,
        }
    }
}

/// Display names for both clubs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamNames {
    pub away: String,
    pub home: String,
}

impl Default for TeamNames {
    fn default() -> Self {
        Self::new(DEFAULT_AWAY_NAME, DEFAULT_HOME_NAME)
    }
}

impl TeamNames {
    pub fn new(away: impl Into<String>, home: impl Into<String>) -> Self {
        Self { away: away.into(), home: home.into() }
    }

    pub fn get(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Away => &self.away,
            TeamSide::Home => &self.home,
        }
    }

    pub fn set(&mut self, side: TeamSide, name: impl Into<String>) {
        match side {
            TeamSide::Away => self.away = name.into(),
            TeamSide::Home => self.home = name.into(),
        }
    }
}
