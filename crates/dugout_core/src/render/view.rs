use crate::engine::signed_fixed2;
use crate::labels::Labels;
use crate::models::TimelineEntry;
use crate::state::{GameState, HalfInningSummary};

pub const ACTIVE_CLASS: &str = "active";
pub const BADGE_CLASS: &str = "badge";
pub const BADGE_DOWN_CLASS: &str = "badge down";

/// Inning, outs and base indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub inning: String,
    pub outs: String,
    pub bases: [bool; 3],
}

impl StatusView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            inning: state.labels().inning(state.inning(), state.half()),
            outs: state.outs().to_string(),
            bases: state.bases().as_array(),
        }
    }
}

/// Readouts published when a half-inning ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionView {
    pub percent: String,
    pub label: String,
    pub badge_text: String,
    pub badge_class: &'static str,
    pub predicted_delta: String,
}

impl PredictionView {
    pub fn from_summary(summary: &HalfInningSummary, state: &GameState) -> Self {
        let labels = state.labels();
        let team = state.teams().get(summary.next_batting);
        let badge_class =
            if summary.win_prob_change < 0.0 { BADGE_DOWN_CLASS } else { BADGE_CLASS };
        Self {
            percent: summary.prediction.percent().to_string(),
            label: labels.win_prob_label(team),
            badge_text: labels.delta_badge(&signed_fixed2(summary.win_prob_change)),
            badge_class,
            predicted_delta: signed_fixed2(summary.prediction.predicted_delta),
        }
    }
}

pub fn timeline_item(entry: &TimelineEntry, labels: &Labels) -> String {
    format!("{}{}", labels.timeline_prefix(entry.inning, entry.half), entry.text)
}
