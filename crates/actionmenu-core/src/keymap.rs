//! Mapping from DOM `KeyboardEvent.key` strings to menu actions.

use serde::{Deserialize, Serialize};

/// What a key press on the trigger button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerAction {
    /// Open the menu with the tabstop on the first item.
    OpenFirst,
    /// Open the menu with the tabstop on the last item.
    OpenLast,
    /// Close the menu; focus stays on the trigger.
    Close,
}

/// What a key press on a menu item asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemAction {
    /// Activate the focused item, close, and refocus the trigger.
    Select,
    /// Move the tabstop to the next item (wrapping).
    FocusNext,
    /// Move the tabstop to the previous item (wrapping).
    FocusPrev,
    /// Close and refocus the trigger.
    Close,
}

/// Action for a key pressed while the trigger has focus.
///
/// `None` means the key is not part of the pattern and the default
/// browser behavior should run.
pub fn trigger_action(key: &str) -> Option<TriggerAction> {
    match key {
        "Enter" | " " | "ArrowDown" => Some(TriggerAction::OpenFirst),
        "ArrowUp" => Some(TriggerAction::OpenLast),
        "Escape" => Some(TriggerAction::Close),
        _ => None,
    }
}

/// Action for a key pressed while a menu item has focus.
pub fn item_action(key: &str) -> Option<ItemAction> {
    match key {
        "Enter" | " " => Some(ItemAction::Select),
        "ArrowDown" => Some(ItemAction::FocusNext),
        "ArrowUp" => Some(ItemAction::FocusPrev),
        "Escape" => Some(ItemAction::Close),
        _ => None,
    }
}
