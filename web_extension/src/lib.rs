//! Browser host for the dugout scoreboard.
//!
//! Wires the page's controls to a [`Session`], paints through [`DomSurface`]
//! and hooks up the tab switcher. JS can also drive the same session with
//! JSON commands through [`dispatch_json`].

use std::cell::RefCell;
use std::rc::Rc;

use dugout_core::api::{self, parse_command};
use dugout_core::models::TeamSide;
use dugout_core::{ActionOutcome, ScoreboardConfig, ScoreboardError, Session, UiAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

mod console_logger;
mod dom_surface;
mod tabs;

pub use dom_surface::DomSurface;

pub const EVENT_ATTRIBUTE: &str = "data-evt";
pub const CONFIG_ATTRIBUTE: &str = "data-scoreboard-config";
const END_HALF_ID: &str = "endHalf";
const RESET_ID: &str = "reset";
const TEAM_INPUTS: [(TeamSide, &str); 2] = [(TeamSide::Away, "teamAway"), (TeamSide::Home, "teamHome")];

struct App {
    session: Session,
    surface: DomSurface,
}

impl App {
    fn handle(&mut self, action: &UiAction) -> ActionOutcome {
        let App { session, surface } = self;
        let outcome = session.handle(action, surface);
        log::debug!("{:?} -> {:?}", action, outcome);
        outcome
    }
}

type SharedApp = Rc<RefCell<App>>;

thread_local! {
    static APP: RefCell<Option<SharedApp>> = RefCell::new(None);
}

/// Entry point: runs once the wasm module is instantiated.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("scoreboard requires a browser document"))?;

    let config = read_config(&document);
    let surface = DomSurface::new(document.clone());
    let missing = surface.missing_regions();
    if !missing.is_empty() {
        log::warn!("scoreboard regions missing from page: {}", missing.join(", "));
    }

    let app = Rc::new(RefCell::new(App { session: Session::new(&config), surface }));
    wire_controls(&document, &app)?;
    tabs::wire_tabs(&document)?;

    {
        let mut guard = app.borrow_mut();
        let App { session, surface } = &mut *guard;
        session.start(surface);
    }
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    log::info!("dugout scoreboard {} started", dugout_core::VERSION);
    Ok(())
}

/// Apply a JSON command (see `dugout_core::api::Command`) and repaint.
#[wasm_bindgen]
pub fn dispatch_json(command: &str) -> Result<String, JsValue> {
    let action: UiAction = parse_command(command).map_err(to_js)?.into();
    with_app(|app| {
        let outcome = app.handle(&action);
        api::response_json(app.session.state(), outcome).map_err(to_js)
    })
}

#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsValue> {
    with_app(|app| api::snapshot_json(app.session.state()).map_err(to_js))
}

#[wasm_bindgen]
pub fn command_schema_json() -> Result<String, JsValue> {
    api::command_schema_json().map_err(to_js)
}

fn with_app<T>(f: impl FnOnce(&mut App) -> Result<T, JsValue>) -> Result<T, JsValue> {
    APP.with(|slot| {
        let slot = slot.borrow();
        let app = slot.as_ref().ok_or_else(|| JsValue::from_str("scoreboard not started"))?;
        let mut app = app.try_borrow_mut().map_err(|_| JsValue::from_str("scoreboard busy"))?;
        f(&mut app)
    })
}

fn to_js(err: ScoreboardError) -> JsValue {
    log::warn!("{}", err);
    JsValue::from_str(&format!("{}: {}", err.code(), err))
}

fn read_config(document: &Document) -> ScoreboardConfig {
    let raw = document.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    match raw {
        Some(json) => ScoreboardConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring {}: {}", CONFIG_ATTRIBUTE, err);
            ScoreboardConfig::default()
        }),
        None => ScoreboardConfig::default(),
    }
}

fn wire_controls(document: &Document, app: &SharedApp) -> Result<(), JsValue> {
    for button in elements(document, &format!("[{EVENT_ATTRIBUTE}]"))? {
        let tag = button.get_attribute(EVENT_ATTRIBUTE).unwrap_or_default();
        let app_cb = Rc::clone(app);
        on(&button, "click", move |_| {
            app_cb.borrow_mut().handle(&UiAction::AtBat(tag.clone()));
        })?;
    }

    if let Some(button) = document.get_element_by_id(END_HALF_ID) {
        let app_cb = Rc::clone(app);
        on(&button, "click", move |_| {
            app_cb.borrow_mut().handle(&UiAction::EndHalf);
        })?;
    }

    if let Some(button) = document.get_element_by_id(RESET_ID) {
        let app_cb = Rc::clone(app);
        on(&button, "click", move |_| {
            app_cb.borrow_mut().handle(&UiAction::Reset);
        })?;
    }

    for (side, id) in TEAM_INPUTS {
        let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let app_cb = Rc::clone(app);
        let source = input.clone();
        on(&input, "input", move |_| {
            let value = source.value();
            app_cb.borrow_mut().handle(&UiAction::TeamName { side, value });
        })?;
    }

    Ok(())
}

/// All elements matching `selector`, in document order.
pub(crate) fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach a listener that lives as long as the page.
pub(crate) fn on(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
