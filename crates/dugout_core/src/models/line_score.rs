use serde::{Deserialize, Serialize};

use super::team::TeamSide;

/// Runs per inning for both teams. Index `i` holds inning `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LineScore {
    pub away: Vec<u32>,
    pub home: Vec<u32>,
}

impl LineScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn innings(&self, side: TeamSide) -> &[u32] {
        match side {
            TeamSide::Away => &self.away,
            TeamSide::Home => &self.home,
        }
    }

    fn innings_mut(&mut self, side: TeamSide) -> &mut Vec<u32> {
        match side {
            TeamSide::Away => &mut self.away,
            TeamSide::Home => &mut self.home,
        }
    }

    /// Runs credited to `side` in `inning` (1-based), if that frame has an entry.
    pub fn runs_in(&self, side: TeamSide, inning: u32) -> Option<u32> {
        let idx = inning.checked_sub(1)? as usize;
        self.innings(side).get(idx).copied()
    }

    pub fn total(&self, side: TeamSide) -> u32 {
        self.innings(side).iter().sum()
    }

    /// Away total minus home total.
    pub fn run_differential(&self) -> i64 {
        self.total(TeamSide::Away) as i64 - self.total(TeamSide::Home) as i64
    }

    /// Credit `runs` to `side` in `inning`. Zero runs leave the line untouched.
    pub fn score(&mut self, side: TeamSide, inning: u32, runs: u32) {
        if runs == 0 {
            return;
        }
        let frame = self.frame_mut(side, inning);
        *frame += runs;
    }

    /// Make sure `side` has an entry for `inning`, recording 0 if it had none.
    pub fn close_frame(&mut self, side: TeamSide, inning: u32) {
        self.frame_mut(side, inning);
    }

    fn frame_mut(&mut self, side: TeamSide, inning: u32) -> &mut u32 {
        let inning = inning.max(1) as usize;
        let line = self.innings_mut(side);
        if line.len() < inning {
            line.resize(inning, 0);
        }
        &mut line[inning - 1]
    }

    /// Number of inning columns needed to show both lines and the current inning.
    pub fn column_count(&self, current_inning: u32) -> usize {
        self.away.len().max(self.home.len()).max(current_inning as usize)
    }
}
