//! Presentation layer.
//!
//! Each function re-reads the state it needs and overwrites its regions; none
//! of them mutate the game.

pub mod html;
pub mod surface;
pub mod view;

pub use surface::{MemorySurface, Region, RegionState, RenderTarget};
pub use view::{timeline_item, PredictionView, StatusView, ACTIVE_CLASS};

use crate::state::{GameState, HalfInningSummary};

pub fn render_scoreboard(state: &GameState, target: &mut impl RenderTarget) {
    let table =
        html::scoreboard_table(state.score(), state.teams(), state.inning(), state.labels());
    target.set_html(Region::ScoreTable, &table);
}

/// Inning and outs labels plus the base indicators.
pub fn render_status(state: &GameState, target: &mut impl RenderTarget) {
    let view = StatusView::from_state(state);
    target.set_text(Region::InningLabel, &view.inning);
    target.set_text(Region::OutsLabel, &view.outs);
    for (region, occupied) in Region::BASES.into_iter().zip(view.bases) {
        target.toggle_class(region, ACTIVE_CLASS, occupied);
    }
}

pub fn render_prediction(
    summary: &HalfInningSummary,
    state: &GameState,
    target: &mut impl RenderTarget,
) {
    let view = PredictionView::from_summary(summary, state);
    target.set_text(Region::WinProbPercent, &view.percent);
    target.set_text(Region::WinProbLabel, &view.label);
    target.set_text(Region::DeltaBadge, &view.badge_text);
    target.set_class_name(Region::DeltaBadge, view.badge_class);
    target.set_text(Region::PredictedDelta, &view.predicted_delta);
}

/// Prepend the `count` newest timeline entries, oldest of them first, so the
/// list ends up newest-on-top.
pub fn prepend_timeline(state: &GameState, count: usize, target: &mut impl RenderTarget) {
    for entry in state.timeline().newest_chronological(count) {
        target.prepend_item(Region::Timeline, &timeline_item(entry, state.labels()));
    }
}

/// Rebuild the whole timeline list from state.
pub fn render_timeline(state: &GameState, target: &mut impl RenderTarget) {
    target.clear(Region::Timeline);
    prepend_timeline(state, state.timeline().len(), target);
}

pub fn render_all(state: &GameState, target: &mut impl RenderTarget) {
    render_scoreboard(state, target);
    render_status(state, target);
    render_timeline(state, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AtBatEvent;

    #[test]
    fn test_render_status_toggles_bases() {
        let mut state = GameState::new();
        let mut surface = MemorySurface::new();
        state.apply_event(AtBatEvent::Single);
        render_status(&state, &mut surface);
        assert!(surface.has_class(Region::FirstBase, ACTIVE_CLASS));
        assert!(!surface.has_class(Region::SecondBase, ACTIVE_CLASS));

        state.apply_event(AtBatEvent::Double);
        render_status(&state, &mut surface);
        assert!(!surface.has_class(Region::FirstBase, ACTIVE_CLASS));
        assert!(surface.has_class(Region::SecondBase, ACTIVE_CLASS));
        assert!(surface.has_class(Region::ThirdBase, ACTIVE_CLASS));
        assert_eq!(surface.text(Region::InningLabel), Some("1 Top"));
        assert_eq!(surface.text(Region::OutsLabel), Some("0"));
    }

    #[test]
    fn test_render_timeline_newest_on_top() {
        let mut state = GameState::new();
        let mut surface = MemorySurface::new();
        state.reset();
        state.apply_event(AtBatEvent::Walk);
        state.apply_event(AtBatEvent::Out);
        render_timeline(&state, &mut surface);
        assert_eq!(
            surface.items(Region::Timeline),
            ["[1 Top] Out", "[1 Top] Walk BB", "[1 Top] Game started"]
        );

        state.end_half();
        prepend_timeline(&state, 1, &mut surface);
        assert_eq!(surface.items(Region::Timeline)[0], "[1 Top] End of 1 Top");
        assert_eq!(surface.items(Region::Timeline).len(), 4);
    }

    #[test]
    fn test_render_prediction_regions() {
        let mut state = GameState::new();
        let mut surface = MemorySurface::new();
        let summary = state.end_half();
        render_prediction(&summary, &state, &mut surface);
        assert_eq!(surface.text(Region::WinProbPercent), Some("50"));
        assert_eq!(surface.text(Region::DeltaBadge), Some("Change +0.00"));
        assert!(surface.has_class(Region::DeltaBadge, "badge"));
        assert!(!surface.has_class(Region::DeltaBadge, "down"));
        assert_eq!(surface.text(Region::PredictedDelta), Some("+0.00"));
        assert_eq!(
            surface.text(Region::WinProbLabel),
            Some("Home next-half win probability (demo model)")
        );
    }
}
