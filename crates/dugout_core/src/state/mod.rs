//! Game State Engine
//!
//! `GameState` owns everything the scoreboard shows: inning, half, outs,
//! base runners, the line score, team names, the play-by-play timeline and the
//! last published win probability. It is owned by the host and mutated only
//! through the operations below; rendering reads it afterwards.

use serde::{Deserialize, Serialize};

use crate::config::ScoreboardConfig;
use crate::engine::{Prediction, PredictionInputs, WinProbabilityModel};
use crate::labels::Labels;
use crate::models::{AtBatEvent, Bases, Half, LineScore, TeamNames, TeamSide, Timeline};

/// Outs are clamped here; a third out never registers.
pub const MAX_OUTS: u8 = 2;

/// What an at-bat did to the game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventOutcome {
    pub event: AtBatEvent,
    pub batting: TeamSide,
    pub runs: u32,
    pub outs: u8,
}

/// Result of closing a half-inning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HalfInningSummary {
    /// Inning and half that just ended.
    pub inning: u32,
    pub half: Half,
    pub prediction: Prediction,
    /// `prediction.win_prob` minus the previously published probability.
    pub win_prob_change: f64,
    /// Team coming up to bat.
    pub next_batting: TeamSide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    inning: u32,
    half: Half,
    outs: u8,
    bases: Bases,
    score: LineScore,
    teams: TeamNames,
    timeline: Timeline,
    last_win_prob: f64,
    default_names: TeamNames,
    labels: &'static Labels,
    model: WinProbabilityModel,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state with the default config and an empty timeline.
    pub fn new() -> Self {
        Self::with_config(&ScoreboardConfig::default())
    }

    pub fn with_config(config: &ScoreboardConfig) -> Self {
        let default_names = config.default_team_names();
        Self {
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: Bases::EMPTY,
            score: LineScore::new(),
            teams: default_names.clone(),
            timeline: Timeline::new(),
            last_win_prob: config.prediction.initial_win_prob,
            default_names,
            labels: config.locale.labels(),
            model: WinProbabilityModel::new(config.prediction.clone()),
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn inning(&self) -> u32 {
        self.inning
    }

    pub fn half(&self) -> Half {
        self.half
    }

    pub fn outs(&self) -> u8 {
        self.outs
    }

    pub fn bases(&self) -> Bases {
        self.bases
    }

    pub fn score(&self) -> &LineScore {
        &self.score
    }

    pub fn teams(&self) -> &TeamNames {
        &self.teams
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn last_win_prob(&self) -> f64 {
        self.last_win_prob
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    pub fn model(&self) -> &WinProbabilityModel {
        &self.model
    }

    pub fn batting_side(&self) -> TeamSide {
        self.half.batting_side()
    }

    // ========================
    // At-bat events
    // ========================

    /// Apply the event named by a control tag. Unknown tags are ignored.
    pub fn apply_tag(&mut self, tag: &str) -> Option<EventOutcome> {
        match AtBatEvent::from_tag(tag) {
            Some(event) => Some(self.apply_event(event)),
            None => {
                tracing::warn!(tag, "ignoring unknown at-bat event");
                None
            }
        }
    }

    pub fn apply_event(&mut self, event: AtBatEvent) -> EventOutcome {
        let runs = match event.advance(self.bases) {
            Some(advance) => {
                self.bases = advance.bases;
                self.score_runs(advance.runs);
                advance.runs
            }
            None => {
                self.outs = (self.outs + 1).min(MAX_OUTS);
                0
            }
        };
        self.log(self.labels.event(event));

        tracing::debug!(
            event = event.tag(),
            inning = self.inning,
            half = ?self.half,
            runs,
            outs = self.outs,
            "applied at-bat event"
        );

        EventOutcome { event, batting: self.batting_side(), runs, outs: self.outs }
    }

    /// Credit `runs` to the batting side in the current inning.
    pub fn score_runs(&mut self, runs: u32) {
        let side = self.batting_side();
        self.score.score(side, self.inning, runs);
    }

    // ========================
    // Half-inning transition
    // ========================

    /// Close the current half-inning and hand the bat to the other team.
    ///
    /// The prediction is computed after bases and outs are cleared but before
    /// the half flips.
    pub fn end_half(&mut self) -> HalfInningSummary {
        let (inning, half) = (self.inning, self.half);
        self.log(self.labels.half_ended_text(inning, half));

        self.bases = Bases::EMPTY;
        self.outs = 0;
        let batting = self.batting_side();
        self.score.close_frame(batting, inning);

        let prediction = self.model.predict(PredictionInputs {
            score_diff: self.score.run_differential(),
            bases: self.bases,
            outs: self.outs,
        });
        let win_prob_change = prediction.win_prob - self.last_win_prob;
        self.last_win_prob = prediction.win_prob;

        self.half = half.flipped();
        if self.half == Half::Top {
            self.inning += 1;
        }

        tracing::info!(
            inning,
            half = ?half,
            away = self.score.total(TeamSide::Away),
            home = self.score.total(TeamSide::Home),
            win_prob = prediction.win_prob,
            "half-inning ended"
        );

        HalfInningSummary {
            inning,
            half,
            prediction,
            win_prob_change,
            next_batting: self.batting_side(),
        }
    }

    // ========================
    // Reset / team names
    // ========================

    /// Start a new game. Team names survive the reset.
    pub fn reset(&mut self) {
        self.inning = 1;
        self.half = Half::Top;
        self.outs = 0;
        self.bases = Bases::EMPTY;
        self.score = LineScore::new();
        self.timeline.clear();
        self.last_win_prob = self.model.config().initial_win_prob;
        self.log(self.labels.game_started);
        tracing::info!(away = %self.teams.away, home = %self.teams.home, "game reset");
    }

    /// Rename a team. An empty name restores the configured default.
    /// Returns the name now in effect.
    pub fn set_team_name(&mut self, side: TeamSide, name: &str) -> &str {
        if name.is_empty() {
            let fallback = self.default_names.get(side).to_string();
            self.teams.set(side, fallback);
        } else {
            self.teams.set(side, name);
        }
        self.teams.get(side)
    }

    fn log(&mut self, text: impl Into<String>) {
        self.timeline.push(self.inning, self.half, text);
    }
}
