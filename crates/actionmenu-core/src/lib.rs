//! ActionMenu Core Library
//!
//! Platform-agnostic state and event logic for an accessible menu button:
//! a trigger that opens a list of action items with keyboard navigation,
//! a roving tabstop, and close-on-selection/outside-press behavior.
//!
//! Nothing here touches a document. Event entry points return [`Effect`]
//! values that an embedding layer (DOM, test harness) applies in order.

pub mod controller;
pub mod keymap;
pub mod state;

pub use controller::MenuController;
pub use keymap::{item_action, trigger_action, ItemAction, TriggerAction};
pub use state::{Effect, MenuState};
