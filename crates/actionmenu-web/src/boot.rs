//! Page bootstrap: bind every matching container when the module starts.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::selectors;
use crate::widget::MenuButton;

thread_local! {
    // Widgets bound at startup; parked here so their listeners stay
    // registered for the page's lifetime.
    static WIDGETS: RefCell<Vec<MenuButton>> = const { RefCell::new(Vec::new()) };
}

/// Bind every `.menu-button-actions` container in `document`.
///
/// Resets the output field to `"none"` first. Containers that fail to
/// bind are logged and skipped so the rest of the page still works.
/// Returns the number of widgets bound.
pub fn init_document(document: &Document) -> usize {
    if let Some(output) = document.get_element_by_id(selectors::OUTPUT_ID) {
        if let Ok(input) = output.dyn_into::<HtmlInputElement>() {
            input.set_value("none");
        }
    }

    let containers = match document.query_selector_all(selectors::CONTAINER) {
        Ok(list) => list,
        Err(e) => {
            log::error!("container query failed: {e:?}");
            return 0;
        }
    };

    let mut bound = 0;
    for i in 0..containers.length() {
        let Some(node) = containers.item(i) else {
            continue;
        };
        let Ok(container) = node.dyn_into::<Element>() else {
            continue;
        };
        match MenuButton::bind(document, container) {
            Ok(widget) => {
                WIDGETS.with(|w| w.borrow_mut().push(widget));
                bound += 1;
            }
            Err(e) => log::warn!("skipping menu button container: {e}"),
        }
    }
    bound
}

/// WASM entry point, runs once the module is instantiated.
///
/// Pages load the module with `defer` (or after `DOMContentLoaded`), so
/// the containers are already in the document by the time this runs.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();
    // The harness may have installed a logger already (e.g. under
    // wasm-bindgen-test), so a failed init is fine.
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no window/document; not running in a browser?");
        return;
    };

    let bound = init_document(&document);
    log::info!("bound {bound} menu button widget(s)");
}
