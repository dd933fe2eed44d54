//! ActionMenu DOM Binding
//!
//! Binds the platform-agnostic menu button logic from `actionmenu-core`
//! to a live DOM subtree, and bootstraps every matching container when
//! the WASM module starts.
//!
//! The expected markup, per widget:
//!
//! ```html
//! <div class="menu-button-actions">
//!   <button type="button" aria-haspopup="true">Actions</button>
//!   <ul role="menu">
//!     <li role="menuitem">Action 1</li>
//!     ...
//!   </ul>
//! </div>
//! ```
//!
//! plus one page-level `<input id="action_output">` the selected item's
//! text is written to.

mod error;

pub use error::BindError;

#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use boot::{init_document, run_wasm};
#[cfg(target_arch = "wasm32")]
pub use widget::MenuButton;

/// Selectors and attribute values making up the widget's DOM contract.
pub mod selectors {
    /// Containers the bootstrap binds a widget to.
    pub const CONTAINER: &str = ".menu-button-actions";
    /// The trigger button, looked up inside the container.
    pub const TRIGGER: &str = "button";
    /// The menu panel, looked up inside the container.
    pub const MENU: &str = "[role=\"menu\"]";
    /// The selectable action entries, looked up inside the container.
    pub const ITEM: &str = "[role=\"menuitem\"]";
    /// Id of the page-level output field.
    pub const OUTPUT_ID: &str = "action_output";
    /// Class toggled on the panel while it is shown.
    pub const OPEN_CLASS: &str = "menu-open";
}
