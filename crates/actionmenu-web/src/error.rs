//! Binding errors.

use thiserror::Error;

/// Why a container could not be bound as a menu button.
///
/// Binding is the only fallible surface; after a successful bind the
/// widget ignores bad input (out-of-range indices, detached targets)
/// instead of erroring.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("container has no trigger <button>")]
    MissingTrigger,
    #[error("container has no [role=\"menu\"] panel")]
    MissingMenu,
    #[error("container has no [role=\"menuitem\"] entries")]
    NoItems,
    #[error("output field #{0} not found or not an <input>")]
    MissingOutput(&'static str),
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
