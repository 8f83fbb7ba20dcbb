use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::team::Half;

/// One line of the play-by-play feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub inning: u32,
    pub half: Half,
    pub text: String,
}

/// Play-by-play feed, newest entry first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Timeline {
    entries: VecDeque<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, inning: u32, half: Half, text: impl Into<String>) {
        self.entries.push_front(TimelineEntry { inning, half, text: text.into() });
    }

    pub fn latest(&self) -> Option<&TimelineEntry> {
        self.entries.front()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    /// The `n` most recent entries, oldest of them first.
    pub fn newest_chronological(&self, n: usize) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter().take(n).rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut timeline = Timeline::new();
        timeline.push(1, Half::Top, "a");
        timeline.push(1, Half::Top, "b");
        timeline.push(1, Half::Bottom, "c");

        let texts: Vec<_> = timeline.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["c", "b", "a"]);
        assert_eq!(timeline.latest().map(|e| e.half), Some(Half::Bottom));
    }

    #[test]
    fn test_newest_chronological() {
        let mut timeline = Timeline::new();
        for text in ["a", "b", "c", "d"] {
            timeline.push(2, Half::Top, text);
        }
        let texts: Vec<_> = timeline.newest_chronological(2).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["c", "d"]);
        assert_eq!(timeline.newest_chronological(10).count(), 4);
    }
}
