//! Render targets.
//!
//! The engine never touches the page directly. It writes into named
//! [`Region`]s of a [`RenderTarget`]; the browser host maps regions to DOM
//! elements, tests use [`MemorySurface`]. Writes to a region the target cannot
//! resolve are dropped silently.

use std::collections::{BTreeSet, HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    ScoreTable,
    InningLabel,
    OutsLabel,
    FirstBase,
    SecondBase,
    ThirdBase,
    WinProbPercent,
    WinProbLabel,
    DeltaBadge,
    PredictedDelta,
    Timeline,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Region::ScoreTable,
        Region::InningLabel,
        Region::OutsLabel,
        Region::FirstBase,
        Region::SecondBase,
        Region::ThirdBase,
        Region::WinProbPercent,
        Region::WinProbLabel,
        Region::DeltaBadge,
        Region::PredictedDelta,
        Region::Timeline,
    ];

    pub const BASES: [Region; 3] = [Region::FirstBase, Region::SecondBase, Region::ThirdBase];

    /// Element id in the host page markup.
    pub const fn element_id(self) -> &'static str {
        match self {
            Region::ScoreTable => "scoreTable",
            Region::InningLabel => "inningLbl",
            Region::OutsLabel => "outsLbl",
            Region::FirstBase => "base1",
            Region::SecondBase => "base2",
            Region::ThirdBase => "base3",
            Region::WinProbPercent => "winProbNext",
            Region::WinProbLabel => "winProbLabel",
            Region::DeltaBadge => "deltaBadge",
            Region::PredictedDelta => "predDelta",
            Region::Timeline => "timeline",
        }
    }
}

pub trait RenderTarget {
    fn set_text(&mut self, region: Region, text: &str);

    fn set_html(&mut self, region: Region, html: &str);

    /// Add or remove a single class.
    fn toggle_class(&mut self, region: Region, class: &str, on: bool);

    /// Replace the whole class attribute.
    fn set_class_name(&mut self, region: Region, class_name: &str);

    /// Insert a list item at the top of a list region.
    fn prepend_item(&mut self, region: Region, text: &str);

    /// Remove all children of a region.
    fn clear(&mut self, region: Region);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionState {
    pub text: Option<String>,
    pub html: Option<String>,
    pub classes: BTreeSet<String>,
    pub items: VecDeque<String>,
}

/// In-memory render target.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    regions: HashMap<Region, RegionState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, region: Region) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.region(region)?.text.as_deref()
    }

    pub fn html(&self, region: Region) -> Option<&str> {
        self.region(region)?.html.as_deref()
    }

    pub fn has_class(&self, region: Region, class: &str) -> bool {
        self.region(region).is_some_and(|r| r.classes.contains(class))
    }

    /// List items top to bottom.
    pub fn items(&self, region: Region) -> Vec<&str> {
        self.region(region)
            .map(|r| r.items.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn entry(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_default()
    }
}

impl RenderTarget for MemorySurface {
    fn set_text(&mut self, region: Region, text: &str) {
        let state = self.entry(region);
        state.text = Some(text.to_string());
        state.html = None;
        state.items.clear();
    }

    fn set_html(&mut self, region: Region, html: &str) {
        let state = self.entry(region);
        state.html = Some(html.to_string());
        state.text = None;
        state.items.clear();
    }

    fn toggle_class(&mut self, region: Region, class: &str, on: bool) {
        let classes = &mut self.entry(region).classes;
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_class_name(&mut self, region: Region, class_name: &str) {
        self.entry(region).classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    fn prepend_item(&mut self, region: Region, text: &str) {
        self.entry(region).items.push_front(text.to_string());
    }

    fn clear(&mut self, region: Region) {
        let state = self.entry(region);
        state.text = None;
        state.html = None;
        state.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_unique() {
        let ids: BTreeSet<_> = Region::ALL.iter().map(|r| r.element_id()).collect();
        assert_eq!(ids.len(), Region::ALL.len());
        assert_eq!(Region::BASES.map(Region::element_id), ["base1", "base2", "base3"]);
    }

    #[test]
    fn test_memory_surface_classes() {
        let mut surface = MemorySurface::new();
        surface.set_class_name(Region::DeltaBadge, "badge down");
        assert!(surface.has_class(Region::DeltaBadge, "down"));
        surface.toggle_class(Region::DeltaBadge, "down", false);
        assert!(surface.has_class(Region::DeltaBadge, "badge"));
        assert!(!surface.has_class(Region::DeltaBadge, "down"));
        assert!(!surface.has_class(Region::FirstBase, "active"));
    }

    #[test]
    fn test_memory_surface_list() {
        let mut surface = MemorySurface::new();
        surface.prepend_item(Region::Timeline, "first");
        surface.prepend_item(Region::Timeline, "second");
        assert_eq!(surface.items(Region::Timeline), ["second", "first"]);
        surface.clear(Region::Timeline);
        assert!(surface.items(Region::Timeline).is_empty());
    }
}
