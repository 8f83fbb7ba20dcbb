use std::rc::Rc;

use dugout_core::render::ACTIVE_CLASS;
use dugout_core::widget::{TabSwitcher, TAB_ATTRIBUTE};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::{elements, on};

pub const PANEL_SELECTOR: &str = ".tab-panel";

struct TabDom {
    switcher: TabSwitcher,
    buttons: Vec<Element>,
    panels: Vec<Element>,
}

impl TabDom {
    fn select(&self, index: usize) {
        let Some(activation) = self.switcher.activate(index) else {
            return;
        };
        for (el, on) in self.buttons.iter().zip(activation.buttons) {
            let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
        }
        for (el, on) in self.panels.iter().zip(activation.panels) {
            let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
        }
    }
}

/// Hook every `[data-tab]` button up to the `.tab-panel` elements.
pub fn wire_tabs(document: &Document) -> Result<(), JsValue> {
    let buttons = elements(document, &format!("[{TAB_ATTRIBUTE}]"))?;
    if buttons.is_empty() {
        return Ok(());
    }
    let panels = elements(document, PANEL_SELECTOR)?;

    let names: Vec<String> =
        buttons.iter().map(|b| b.get_attribute(TAB_ATTRIBUTE).unwrap_or_default()).collect();
    let ids: Vec<String> = panels.iter().map(Element::id).collect();
    let tabs = Rc::new(TabDom { switcher: TabSwitcher::new(names, ids), buttons, panels });

    for (index, button) in tabs.buttons.iter().enumerate() {
        let tabs_cb = Rc::clone(&tabs);
        on(button, "click", move |_| tabs_cb.select(index))?;
    }
    log::debug!(
        "wired {} tab buttons over {} panels",
        tabs.switcher.button_count(),
        tabs.switcher.panel_count()
    );
    Ok(())
}
