//! User-visible text.
//!
//! Every string the scoreboard writes to the page comes from a [`Labels`]
//! table selected by [`Locale`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{AtBatEvent, Half};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    TraditionalChinese,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub top: &'static str,
    pub bottom: &'static str,
    /// Placed between inning number and half inside timeline prefixes.
    pub timeline_separator: &'static str,
    pub single: &'static str,
    pub double: &'static str,
    pub walk: &'static str,
    pub out: &'static str,
    pub game_started: &'static str,
    pub half_ended: &'static str,
    pub delta_prefix: &'static str,
    pub win_prob_suffix: &'static str,
    pub team_header: &'static str,
    pub runs_header: &'static str,
}

pub static ENGLISH: Labels = Labels {
    top: "Top",
    bottom: "Bottom",
    timeline_separator: " ",
    single: "Single 1B",
    double: "Double 2B",
    walk: "Walk BB",
    out: "Out",
    game_started: "Game started",
    half_ended: "End of",
    delta_prefix: "Change",
    win_prob_suffix: "next-half win probability (demo model)",
    team_header: "Team",
    runs_header: "R",
};

pub static TRADITIONAL_CHINESE: Labels = Labels {
    top: "上",
    bottom: "下",
    timeline_separator: "",
    single: "安打 1B",
    double: "二壘安打 2B",
    walk: "保送 BB",
    out: "出局",
    game_started: "比賽開始",
    half_ended: "結束",
    delta_prefix: "變動",
    win_prob_suffix: "下局勝率（示意模型）",
    team_header: "Team",
    runs_header: "R",
};

impl Labels {
    pub fn half(&self, half: Half) -> &'static str {
        match half {
            Half::Top => self.top,
            Half::Bottom => self.bottom,
        }
    }

    pub fn event(&self, event: AtBatEvent) -> &'static str {
        match event {
            AtBatEvent::Single => self.single,
            AtBatEvent::Double => self.double,
            AtBatEvent::Walk => self.walk,
            AtBatEvent::Out => self.out,
        }
    }

    /// `"3 Top"`
    pub fn inning(&self, inning: u32, half: Half) -> String {
        format!("{} {}", inning, self.half(half))
    }

    /// `"End of 3 Top"`
    pub fn half_ended_text(&self, inning: u32, half: Half) -> String {
        format!("{} {}", self.half_ended, self.inning(inning, half))
    }

    /// `"[3 Top] "` in English, `"[3上] "` in Chinese.
    pub fn timeline_prefix(&self, inning: u32, half: Half) -> String {
        format!("[{}{}{}] ", inning, self.timeline_separator, self.half(half))
    }

    pub fn win_prob_label(&self, team: &str) -> String {
        format!("{} {}", team, self.win_prob_suffix)
    }

    pub fn delta_badge(&self, signed_delta: &str) -> String {
        format!("{} {}", self.delta_prefix, signed_delta)
    }
}
