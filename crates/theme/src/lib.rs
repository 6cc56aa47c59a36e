//! Theme context, provider and toggle control for Yew frontends.
//!
//! Wrap a subtree in [`ThemeProvider`] and any descendant can read the current
//! [`Theme`] or flip it through [`use_theme`]. The provider also renders the
//! root container whose class tracks the theme, so stylesheets only need to
//! key on `.app.light` / `.app.dark`.

pub mod components;
pub mod config;
pub mod error;
pub mod styles;
pub mod theme;

pub use components::ThemeToggle;
pub use config::ThemeConfig;
pub use error::ThemeError;
pub use theme::{
    Theme, ThemeAction, ThemeContext, ThemeHandle, ThemeProvider, try_use_theme,
    use_current_theme, use_theme, use_theme_toggle,
};
