//! Theme error types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Theme error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Theme accessor called from a component not mounted under a `ThemeProvider`
    #[error("use_theme must be used within a ThemeProvider")]
    OutsideProvider,

    /// Theme name other than `light` or `dark`
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// DOM operation failed
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
