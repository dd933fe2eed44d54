//! Event entry points for one menu button instance.

use crate::keymap::{item_action, trigger_action, ItemAction, TriggerAction};
use crate::state::{Effect, MenuState};

/// Turns widget events into lists of [`Effect`]s, updating the tracked
/// state as it goes.
///
/// Keydown entry points return `None` when the key is not part of the
/// pattern, so the caller knows not to call `preventDefault`.
#[derive(Debug, Clone)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    /// Controller for a menu with `len` items.
    pub fn new(len: usize) -> Self {
        Self {
            state: MenuState::new(len),
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Key pressed while the trigger button has focus.
    pub fn on_trigger_key(&mut self, key: &str) -> Option<Vec<Effect>> {
        let effects = match trigger_action(key)? {
            TriggerAction::OpenFirst => self.open_to(0),
            TriggerAction::OpenLast => self.open_to(self.state.len().saturating_sub(1)),
            // Focus is already on the trigger, no refocus needed.
            TriggerAction::Close => self.state.close().into_iter().collect(),
        };
        Some(effects)
    }

    /// Key pressed while a menu item has focus.
    pub fn on_item_key(&mut self, key: &str) -> Option<Vec<Effect>> {
        let effects = match item_action(key)? {
            ItemAction::Select => self.select_and_close(self.state.focused()),
            ItemAction::FocusNext => self.state.focus_next().into_iter().collect(),
            ItemAction::FocusPrev => self.state.focus_prev().into_iter().collect(),
            ItemAction::Close => self.close_to_trigger(),
        };
        Some(effects)
    }

    /// The trigger button was clicked: toggle the panel.
    pub fn on_trigger_click(&mut self) -> Vec<Effect> {
        if self.state.is_open() {
            self.close_to_trigger()
        } else {
            self.open_to(0)
        }
    }

    /// A menu item was clicked. Out-of-range indices are ignored.
    pub fn on_item_click(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.state.len() {
            return Vec::new();
        }
        self.select_and_close(index)
    }

    /// A pointer went down outside the widget's container.
    pub fn on_outside_press(&mut self) -> Vec<Effect> {
        if !self.state.is_open() {
            return Vec::new();
        }
        log::debug!("closing menu on outside press");
        self.close_to_trigger()
    }

    fn open_to(&mut self, index: usize) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self.state.open().into_iter().collect();
        effects.extend(self.state.move_focus(index));
        effects
    }

    fn close_to_trigger(&mut self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self.state.close().into_iter().collect();
        effects.push(Effect::FocusTrigger);
        effects
    }

    fn select_and_close(&mut self, index: usize) -> Vec<Effect> {
        let mut effects = vec![Effect::SelectItem(index)];
        effects.extend(self.close_to_trigger());
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(ctrl: &mut MenuController) {
        let _ = ctrl.on_trigger_key("ArrowDown");
        assert!(ctrl.state().is_open());
    }

    #[test]
    fn test_open_keys_focus_first_item() {
        for key in ["Enter", " ", "ArrowDown"] {
            let mut ctrl = MenuController::new(3);
            let effects = ctrl.on_trigger_key(key).unwrap();
            assert_eq!(
                effects,
                vec![Effect::OpenPanel, Effect::MoveFocus { from: 0, to: 0 }],
                "key: {key:?}"
            );
            assert_eq!(ctrl.state().focused(), 0);
        }
    }

    #[test]
    fn test_arrow_up_opens_on_last_item() {
        let mut ctrl = MenuController::new(3);
        let effects = ctrl.on_trigger_key("ArrowUp").unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenPanel, Effect::MoveFocus { from: 0, to: 2 }]
        );
        assert_eq!(ctrl.state().focused(), 2);
    }

    #[test]
    fn test_trigger_escape_closes_without_refocus() {
        let mut ctrl = MenuController::new(3);
        open(&mut ctrl);
        assert_eq!(
            ctrl.on_trigger_key("Escape").unwrap(),
            vec![Effect::ClosePanel]
        );
        assert!(!ctrl.state().is_open());

        // Escape on a closed menu is handled but does nothing.
        assert_eq!(ctrl.on_trigger_key("Escape").unwrap(), vec![]);
    }

    #[test]
    fn test_unmapped_trigger_key_is_unhandled() {
        let mut ctrl = MenuController::new(3);
        assert_eq!(ctrl.on_trigger_key("Tab"), None);
        assert_eq!(ctrl.on_item_key("Home"), None);
    }

    #[test]
    fn test_item_arrows_cycle_focus() {
        let mut ctrl = MenuController::new(3);
        open(&mut ctrl);

        for expected in [1, 2, 0] {
            let _ = ctrl.on_item_key("ArrowDown").unwrap();
            assert_eq!(ctrl.state().focused(), expected);
        }
        let _ = ctrl.on_item_key("ArrowUp").unwrap();
        assert_eq!(ctrl.state().focused(), 2);
    }

    #[test]
    fn test_n_arrow_downs_equal_n_mod_count() {
        let count = 4;
        let mut ctrl = MenuController::new(count);
        open(&mut ctrl);
        for n in 1..=11 {
            let _ = ctrl.on_item_key("ArrowDown").unwrap();
            assert_eq!(ctrl.state().focused(), n % count);
        }
    }

    #[test]
    fn test_item_select_closes_and_refocuses_trigger() {
        for key in ["Enter", " "] {
            let mut ctrl = MenuController::new(3);
            open(&mut ctrl);
            let _ = ctrl.on_item_key("ArrowDown");
            let effects = ctrl.on_item_key(key).unwrap();
            assert_eq!(
                effects,
                vec![
                    Effect::SelectItem(1),
                    Effect::ClosePanel,
                    Effect::FocusTrigger
                ],
                "key: {key:?}"
            );
            assert!(!ctrl.state().is_open());
        }
    }

    #[test]
    fn test_item_escape_closes_and_refocuses_trigger() {
        let mut ctrl = MenuController::new(3);
        open(&mut ctrl);
        assert_eq!(
            ctrl.on_item_key("Escape").unwrap(),
            vec![Effect::ClosePanel, Effect::FocusTrigger]
        );
    }

    #[test]
    fn test_trigger_click_toggles() {
        let mut ctrl = MenuController::new(2);
        assert_eq!(
            ctrl.on_trigger_click(),
            vec![Effect::OpenPanel, Effect::MoveFocus { from: 0, to: 0 }]
        );
        assert_eq!(
            ctrl.on_trigger_click(),
            vec![Effect::ClosePanel, Effect::FocusTrigger]
        );
    }

    #[test]
    fn test_item_click_selects_that_item() {
        let mut ctrl = MenuController::new(3);
        open(&mut ctrl);
        assert_eq!(
            ctrl.on_item_click(2),
            vec![
                Effect::SelectItem(2),
                Effect::ClosePanel,
                Effect::FocusTrigger
            ]
        );
    }

    #[test]
    fn test_item_click_out_of_range_is_ignored() {
        let mut ctrl = MenuController::new(3);
        open(&mut ctrl);
        assert_eq!(ctrl.on_item_click(3), vec![]);
        assert!(ctrl.state().is_open());
    }

    #[test]
    fn test_outside_press_closes_only_open_menus() {
        let mut ctrl = MenuController::new(3);
        assert_eq!(ctrl.on_outside_press(), vec![]);

        open(&mut ctrl);
        assert_eq!(
            ctrl.on_outside_press(),
            vec![Effect::ClosePanel, Effect::FocusTrigger]
        );
    }
}
