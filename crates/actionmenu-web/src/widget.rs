//! One bound menu button: resolved elements, listeners, effect application.

use std::cell::RefCell;
use std::rc::Rc;

use actionmenu_core::{Effect, MenuController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::error::BindError;
use crate::selectors;

/// Resolved element handles for one widget instance.
struct MenuDom {
    container: Element,
    trigger: HtmlElement,
    panel: HtmlElement,
    items: Vec<HtmlElement>,
    output: HtmlInputElement,
}

impl MenuDom {
    fn resolve(document: &Document, container: Element) -> Result<Self, BindError> {
        let trigger = container
            .query_selector(selectors::TRIGGER)?
            .ok_or(BindError::MissingTrigger)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindError::MissingTrigger)?;

        let panel = container
            .query_selector(selectors::MENU)?
            .ok_or(BindError::MissingMenu)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindError::MissingMenu)?;

        let list = container.query_selector_all(selectors::ITEM)?;
        let mut items = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(item) = node.dyn_into::<HtmlElement>() {
                    items.push(item);
                }
            }
        }
        if items.is_empty() {
            return Err(BindError::NoItems);
        }

        // The output field is page-level, shared by all widgets.
        let output = document
            .get_element_by_id(selectors::OUTPUT_ID)
            .ok_or(BindError::MissingOutput(selectors::OUTPUT_ID))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| BindError::MissingOutput(selectors::OUTPUT_ID))?;

        Ok(Self {
            container,
            trigger,
            panel,
            items,
            output,
        })
    }

    /// Seed the roving tabindex (item 0 in the tab order, the rest out)
    /// and start with the panel hidden.
    fn seed(&self) -> Result<(), BindError> {
        for (i, item) in self.items.iter().enumerate() {
            let tabindex = if i == 0 { "0" } else { "-1" };
            item.set_attribute("tabindex", tabindex)?;
        }
        self.panel.style().set_property("display", "none")?;
        Ok(())
    }

    fn apply_all(&self, effects: &[Effect]) {
        for effect in effects {
            if let Err(e) = self.apply(effect) {
                log::warn!("menu effect {effect:?} failed: {e:?}");
            }
        }
    }

    fn apply(&self, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::OpenPanel => {
                self.panel.style().set_property("display", "block")?;
                self.panel.class_list().add_1(selectors::OPEN_CLASS)?;
                self.trigger.set_attribute("aria-expanded", "true")?;
            }
            Effect::ClosePanel => {
                self.panel.class_list().remove_1(selectors::OPEN_CLASS)?;
                self.panel.style().set_property("display", "none")?;
                self.trigger.remove_attribute("aria-expanded")?;
            }
            Effect::MoveFocus { from, to } => {
                if let Some(old) = self.items.get(*from) {
                    old.set_attribute("tabindex", "-1")?;
                }
                if let Some(new) = self.items.get(*to) {
                    new.set_attribute("tabindex", "0")?;
                    new.focus()?;
                }
            }
            Effect::FocusTrigger => {
                self.trigger.focus()?;
            }
            Effect::SelectItem(index) => {
                if let Some(item) = self.items.get(*index) {
                    let text = item.text_content().unwrap_or_default();
                    self.output.set_value(text.trim());
                }
            }
        }
        Ok(())
    }
}

/// A menu button bound to one container element.
///
/// The widget stays interactive for as long as the value is alive;
/// dropping it unregisters every listener, including the capture-phase
/// window mousedown. Widgets bound by the bootstrap are parked in a
/// registry so they live for the page's lifetime.
pub struct MenuButton {
    dom: Rc<MenuDom>,
    // Closures are held so the JS side keeps valid function pointers.
    _on_trigger_keydown: Closure<dyn Fn(KeyboardEvent)>,
    _on_trigger_click: Closure<dyn Fn(MouseEvent)>,
    _on_item_keydown: Closure<dyn Fn(KeyboardEvent)>,
    _on_item_clicks: Vec<Closure<dyn Fn(MouseEvent)>>,
    _on_outside_mousedown: Closure<dyn Fn(MouseEvent)>,
}

impl MenuButton {
    /// Resolve the container's elements and wire up all listeners.
    pub fn bind(document: &Document, container: Element) -> Result<Self, BindError> {
        let dom = Rc::new(MenuDom::resolve(document, container)?);
        dom.seed()?;
        let controller = Rc::new(RefCell::new(MenuController::new(dom.items.len())));

        let dom_tk = dom.clone();
        let ctrl_tk = controller.clone();
        let on_trigger_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(effects) = ctrl_tk.borrow_mut().on_trigger_key(&event.key()) {
                event.prevent_default();
                dom_tk.apply_all(&effects);
            }
        }) as Box<dyn Fn(KeyboardEvent)>);
        dom.trigger
            .add_event_listener_with_callback("keydown", on_trigger_keydown.as_ref().unchecked_ref())?;

        let dom_tc = dom.clone();
        let ctrl_tc = controller.clone();
        let on_trigger_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            let effects = ctrl_tc.borrow_mut().on_trigger_click();
            dom_tc.apply_all(&effects);
        }) as Box<dyn Fn(MouseEvent)>);
        dom.trigger
            .add_event_listener_with_callback("click", on_trigger_click.as_ref().unchecked_ref())?;

        // One shared keydown handler; the controller tracks which item
        // holds the tabstop, so the handler needs no per-item index.
        let dom_ik = dom.clone();
        let ctrl_ik = controller.clone();
        let on_item_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(effects) = ctrl_ik.borrow_mut().on_item_key(&event.key()) {
                event.prevent_default();
                dom_ik.apply_all(&effects);
            }
        }) as Box<dyn Fn(KeyboardEvent)>);
        for item in &dom.items {
            item.add_event_listener_with_callback("keydown", on_item_keydown.as_ref().unchecked_ref())?;
        }

        let mut on_item_clicks = Vec::with_capacity(dom.items.len());
        for (index, item) in dom.items.iter().enumerate() {
            let dom_ic = dom.clone();
            let ctrl_ic = controller.clone();
            let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
                let effects = ctrl_ic.borrow_mut().on_item_click(index);
                dom_ic.apply_all(&effects);
            }) as Box<dyn Fn(MouseEvent)>);
            item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_item_clicks.push(on_click);
        }

        // Capture-phase window listener so the press is seen before any
        // target handler can stop propagation.
        let window = web_sys::window().ok_or_else(|| BindError::Dom("no window".into()))?;
        let dom_om = dom.clone();
        let ctrl_om = controller;
        let on_outside_mousedown = Closure::wrap(Box::new(move |event: MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = target.is_some_and(|node| dom_om.container.contains(Some(&node)));
            if !inside {
                let effects = ctrl_om.borrow_mut().on_outside_press();
                dom_om.apply_all(&effects);
            }
        }) as Box<dyn Fn(MouseEvent)>);
        window.add_event_listener_with_callback_and_bool(
            "mousedown",
            on_outside_mousedown.as_ref().unchecked_ref(),
            true,
        )?;

        Ok(Self {
            dom,
            _on_trigger_keydown: on_trigger_keydown,
            _on_trigger_click: on_trigger_click,
            _on_item_keydown: on_item_keydown,
            _on_item_clicks: on_item_clicks,
            _on_outside_mousedown: on_outside_mousedown,
        })
    }

    /// Number of menu items the widget was bound with.
    pub fn item_count(&self) -> usize {
        self.dom.items.len()
    }
}

impl Drop for MenuButton {
    // Unregister everything so the JS side never calls a destroyed
    // closure; the window listener in particular outlives the container.
    fn drop(&mut self) {
        let _ = self.dom.trigger.remove_event_listener_with_callback(
            "keydown",
            self._on_trigger_keydown.as_ref().unchecked_ref(),
        );
        let _ = self.dom.trigger.remove_event_listener_with_callback(
            "click",
            self._on_trigger_click.as_ref().unchecked_ref(),
        );
        for item in &self.dom.items {
            let _ = item.remove_event_listener_with_callback(
                "keydown",
                self._on_item_keydown.as_ref().unchecked_ref(),
            );
        }
        for (item, on_click) in self.dom.items.iter().zip(&self._on_item_clicks) {
            let _ = item
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                "mousedown",
                self._on_outside_mousedown.as_ref().unchecked_ref(),
                true,
            );
        }
    }
}
