pub mod tabs;

pub use tabs::{panel_id, TabActivation, TabSwitcher, PANEL_ID_PREFIX, TAB_ATTRIBUTE};
