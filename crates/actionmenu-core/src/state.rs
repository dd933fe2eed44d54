//! Menu open/close state and the focused-item index.

use serde::{Deserialize, Serialize};

/// A host-side mutation requested by the state machine.
///
/// The embedding layer applies these in order; the state machine itself
/// never touches the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Show the menu panel and mark the trigger expanded.
    OpenPanel,
    /// Hide the menu panel and clear the expanded state.
    ClosePanel,
    /// Move the roving tabstop from one item to another and focus the new one.
    MoveFocus { from: usize, to: usize },
    /// Return input focus to the trigger button.
    FocusTrigger,
    /// Copy the item's trimmed text into the output field.
    SelectItem(usize),
}

/// Open flag plus the index of the item holding the roving tabstop.
///
/// Invariant: `focused < len` whenever `len > 0`. Focus requests outside
/// that range are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    focused: usize,
    len: usize,
}

impl MenuState {
    /// State for a menu with `len` items: closed, tabstop on item 0.
    pub fn new(len: usize) -> Self {
        Self {
            open: false,
            focused: 0,
            len,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the item currently holding the tabstop.
    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark the panel shown.
    ///
    /// Re-opening an open menu re-emits the effect; the DOM writes are
    /// idempotent and the original widget behaves the same way.
    pub fn open(&mut self) -> Option<Effect> {
        self.open = true;
        Some(Effect::OpenPanel)
    }

    /// Mark the panel hidden. Emits nothing when already closed.
    pub fn close(&mut self) -> Option<Effect> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(Effect::ClosePanel)
    }

    /// Move the tabstop to `to`. Out-of-range targets are ignored.
    pub fn move_focus(&mut self, to: usize) -> Option<Effect> {
        if to >= self.len {
            return None;
        }
        let from = self.focused;
        self.focused = to;
        Some(Effect::MoveFocus { from, to })
    }

    /// Move the tabstop to the next item, wrapping past the end.
    pub fn focus_next(&mut self) -> Option<Effect> {
        if self.len == 0 {
            return None;
        }
        self.move_focus((self.focused + 1) % self.len)
    }

    /// Move the tabstop to the previous item, wrapping past the start.
    pub fn focus_prev(&mut self) -> Option<Effect> {
        if self.len == 0 {
            return None;
        }
        self.move_focus((self.focused + self.len - 1) % self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_closed_on_first_item() {
        let state = MenuState::new(3);
        assert!(!state.is_open());
        assert_eq!(state.focused(), 0);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_close_only_when_open() {
        let mut state = MenuState::new(3);
        assert_eq!(state.close(), None);

        assert_eq!(state.open(), Some(Effect::OpenPanel));
        assert_eq!(state.close(), Some(Effect::ClosePanel));
        assert_eq!(state.close(), None);
    }

    #[test]
    fn test_move_focus_out_of_range_is_ignored() {
        let mut state = MenuState::new(3);
        assert_eq!(state.move_focus(3), None);
        assert_eq!(state.move_focus(usize::MAX), None);
        assert_eq!(state.focused(), 0);
    }

    #[test]
    fn test_focus_next_wraps_modulo_len() {
        let mut state = MenuState::new(3);
        for expected in [1, 2, 0, 1] {
            let effect = state.focus_next().unwrap();
            assert!(matches!(effect, Effect::MoveFocus { to, .. } if to == expected));
            assert_eq!(state.focused(), expected);
        }
    }

    #[test]
    fn test_focus_prev_wraps_to_last() {
        let mut state = MenuState::new(4);
        assert_eq!(
            state.focus_prev(),
            Some(Effect::MoveFocus { from: 0, to: 3 })
        );
        assert_eq!(state.focused(), 3);
    }

    #[test]
    fn test_n_next_presses_land_on_n_mod_len() {
        let len = 5;
        let mut state = MenuState::new(len);
        for n in 1..=17 {
            let _ = state.focus_next();
            assert_eq!(state.focused(), n % len);
        }
    }

    #[test]
    fn test_empty_menu_never_moves_focus() {
        let mut state = MenuState::new(0);
        assert_eq!(state.focus_next(), None);
        assert_eq!(state.focus_prev(), None);
        assert_eq!(state.move_focus(0), None);
    }
}
