//! UI action dispatch.
//!
//! A `Session` owns the game for one page and turns control input into engine
//! operations followed by the re-render each operation calls for:
//!
//! | action        | renders                                        |
//! |---------------|------------------------------------------------|
//! | at-bat event  | timeline entry, inning/outs/bases              |
//! | end half      | prediction, timeline entry, status, scoreboard |
//! | reset         | scoreboard, status, whole timeline             |
//! | team name     | scoreboard                                     |

use serde::{Deserialize, Serialize};

use crate::config::ScoreboardConfig;
use crate::models::TeamSide;
use crate::render::{self, RenderTarget};
use crate::state::{EventOutcome, GameState, HalfInningSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// A control carrying a `data-evt` tag was clicked.
    AtBat(String),
    EndHalf,
    Reset,
    /// A team-name input changed.
    TeamName { side: TeamSide, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    Event(EventOutcome),
    HalfEnded(HalfInningSummary),
    Reset,
    TeamRenamed { side: TeamSide, name: String },
    /// The action named something the engine does not know.
    Ignored,
}

/// Apply an action to the game without rendering anything.
pub fn apply_action(state: &mut GameState, action: &UiAction) -> ActionOutcome {
    match action {
        UiAction::AtBat(tag) => match state.apply_tag(tag) {
            Some(outcome) => ActionOutcome::Event(outcome),
            None => ActionOutcome::Ignored,
        },
        UiAction::EndHalf => ActionOutcome::HalfEnded(state.end_half()),
        UiAction::Reset => {
            state.reset();
            ActionOutcome::Reset
        }
        UiAction::TeamName { side, value } => {
            let name = state.set_team_name(*side, value).to_string();
            ActionOutcome::TeamRenamed { side: *side, name }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ScoreboardConfig::default())
    }
}

impl Session {
    pub fn new(config: &ScoreboardConfig) -> Self {
        Self { state: GameState::with_config(config) }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Page load: reset the game and paint every region.
    pub fn start(&mut self, target: &mut impl RenderTarget) {
        self.handle(&UiAction::Reset, target);
    }

    pub fn handle(&mut self, action: &UiAction, target: &mut impl RenderTarget) -> ActionOutcome {
        let logged_before = self.state.timeline().len();
        let outcome = apply_action(&mut self.state, action);
        self.render_outcome(&outcome, logged_before, target);
        outcome
    }

    /// Paint whatever `outcome` changed. `logged_before` is the timeline
    /// length before the action ran.
    pub fn render_outcome(
        &self,
        outcome: &ActionOutcome,
        logged_before: usize,
        target: &mut impl RenderTarget,
    ) {
        let state = &self.state;
        let fresh = state.timeline().len().saturating_sub(logged_before);
        match outcome {
            ActionOutcome::Event(_) => {
                render::prepend_timeline(state, fresh, target);
                render::render_status(state, target);
            }
            ActionOutcome::HalfEnded(summary) => {
                render::render_prediction(summary, state, target);
                render::prepend_timeline(state, fresh, target);
                render::render_status(state, target);
                render::render_scoreboard(state, target);
            }
            ActionOutcome::Reset => render::render_all(state, target),
            ActionOutcome::TeamRenamed { .. } => render::render_scoreboard(state, target),
            ActionOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MemorySurface, Region, ACTIVE_CLASS};

    fn started() -> (Session, MemorySurface) {
        let mut session = Session::default();
        let mut surface = MemorySurface::new();
        session.start(&mut surface);
        (session, surface)
    }

    #[test]
    fn test_start_paints_everything() {
        let (_, surface) = started();
        assert_eq!(surface.text(Region::InningLabel), Some("1 Top"));
        assert_eq!(surface.text(Region::OutsLabel), Some("0"));
        assert!(surface.html(Region::ScoreTable).is_some());
        assert_eq!(surface.items(Region::Timeline), ["[1 Top] Game started"]);
    }

    #[test]
    fn test_event_updates_labels_not_scoreboard() {
        let (mut session, mut surface) = started();
        let before = surface.html(Region::ScoreTable).map(str::to_string);

        for _ in 0..4 {
            session.handle(&UiAction::AtBat("walk".to_string()), &mut surface);
        }
        assert_eq!(session.state().score().away, vec![1]);
        assert_eq!(surface.html(Region::ScoreTable).map(str::to_string), before);
        assert!(surface.has_class(Region::ThirdBase, ACTIVE_CLASS));
        assert_eq!(surface.items(Region::Timeline).len(), 5);
    }

    #[test]
    fn test_unknown_tag_renders_nothing() {
        let (mut session, mut surface) = started();
        let outcome = session.handle(&UiAction::AtBat("bunt".to_string()), &mut surface);
        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(surface.items(Region::Timeline).len(), 1);
    }

    #[test]
    fn test_team_name_rerenders_scoreboard() {
        let (mut session, mut surface) = started();
        let action = UiAction::TeamName { side: TeamSide::Away, value: "Cubs".to_string() };
        session.handle(&action, &mut surface);
        assert!(surface.html(Region::ScoreTable).is_some_and(|h| h.contains(">Cubs<")));

        let action = UiAction::TeamName { side: TeamSide::Away, value: String::new() };
        let outcome = session.handle(&action, &mut surface);
        assert_eq!(
            outcome,
            ActionOutcome::TeamRenamed { side: TeamSide::Away, name: "Away".to_string() }
        );
        assert!(surface.html(Region::ScoreTable).is_some_and(|h| h.contains(">Away<")));
    }

    #[test]
    fn test_end_half_paints_prediction_and_scoreboard() {
        let (mut session, mut surface) = started();
        session.handle(&UiAction::AtBat("double".to_string()), &mut surface);
        session.handle(&UiAction::EndHalf, &mut surface);

        assert_eq!(surface.text(Region::InningLabel), Some("1 Bottom"));
        assert_eq!(surface.text(Region::WinProbPercent), Some("50"));
        assert!(!surface.has_class(Region::SecondBase, ACTIVE_CLASS));
        assert_eq!(surface.items(Region::Timeline)[0], "[1 Top] End of 1 Top");
        assert!(surface.html(Region::ScoreTable).is_some_and(|h| h.contains("<td>0</td>")));
    }

    #[test]
    fn test_reset_rebuilds_timeline() {
        let (mut session, mut surface) = started();
        session.handle(&UiAction::AtBat("out".to_string()), &mut surface);
        session.handle(&UiAction::EndHalf, &mut surface);
        session.handle(&UiAction::Reset, &mut surface);
        assert_eq!(surface.items(Region::Timeline), ["[1 Top] Game started"]);
        assert_eq!(surface.text(Region::InningLabel), Some("1 Top"));
    }
}
