//! Tab switcher for the navigation bar.
//!
//! Nav buttons carry a `data-tab` name; the matching panel has id
//! `tab-{name}`. Clicking a button deactivates every button and panel, then
//! activates the clicked button and its panel. The model mirrors that class
//! membership so the host only has to apply it.

pub const PANEL_ID_PREFIX: &str = "tab-";
pub const TAB_ATTRIBUTE: &str = "data-tab";

pub fn panel_id(name: &str) -> String {
    format!("{PANEL_ID_PREFIX}{name}")
}

/// Which nav buttons and panels carry the active class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabActivation {
    pub buttons: Vec<bool>,
    pub panels: Vec<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct TabSwitcher {
    /// `data-tab` value of each nav button, in document order.
    buttons: Vec<String>,
    /// Panel element ids, in document order.
    panels: Vec<String>,
}

impl TabSwitcher {
    pub fn new(
        buttons: impl IntoIterator<Item = impl Into<String>>,
        panels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            buttons: buttons.into_iter().map(Into::into).collect(),
            panels: panels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Class membership after clicking button `index`. `None` if no such button.
    ///
    /// A button whose panel is missing still becomes active; every panel is
    /// then inactive.
    pub fn activate(&self, index: usize) -> Option<TabActivation> {
        let name = self.buttons.get(index)?;
        let target = panel_id(name);
        let activation = TabActivation {
            buttons: (0..self.buttons.len()).map(|i| i == index).collect(),
            panels: self.panels.iter().map(|id| *id == target).collect(),
        };
        if !activation.panels.contains(&true) {
            tracing::debug!(tab = %name, "no panel for tab");
        }
        Some(activation)
    }

    /// Click the first button named `name`.
    pub fn activate_named(&self, name: &str) -> Option<TabActivation> {
        let index = self.buttons.iter().position(|b| b == name)?;
        self.activate(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> TabSwitcher {
        TabSwitcher::new(
            ["scoreboard", "stats", "about"],
            ["tab-scoreboard", "tab-stats", "tab-about"],
        )
    }

    #[test]
    fn test_panel_id() {
        assert_eq!(panel_id("stats"), "tab-stats");
    }

    #[test]
    fn test_activate_exclusive() {
        let activation = switcher().activate(1).unwrap();
        assert_eq!(activation.buttons, [false, true, false]);
        assert_eq!(activation.panels, [false, true, false]);
    }

    #[test]
    fn test_activate_named() {
        let activation = switcher().activate_named("about").unwrap();
        assert_eq!(activation.panels, [false, false, true]);
        assert!(switcher().activate_named("missing").is_none());
    }

    #[test]
    fn test_missing_panel_still_activates_button() {
        let tabs = TabSwitcher::new(["a", "b"], ["tab-a"]);
        let activation = tabs.activate(1).unwrap();
        assert_eq!(activation.buttons, [false, true]);
        assert_eq!(activation.panels, [false]);
    }

    #[test]
    fn test_out_of_range() {
        assert!(switcher().activate(7).is_none());
        assert_eq!(switcher().button_count(), 3);
        assert_eq!(switcher().panel_count(), 3);
    }
}
