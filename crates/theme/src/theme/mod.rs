//! Theme management module

mod context;
mod provider;

pub use context::{Theme, ThemeAction, ThemeContext, ThemeHandle};
pub use provider::{ThemeProvider, ThemeProviderProps};

use crate::error::ThemeError;
use yew::prelude::*;

/// Hook to access theme context, reporting a missing provider as an error
#[hook]
pub fn try_use_theme() -> Result<ThemeHandle, ThemeError> {
    use_context::<ThemeHandle>().ok_or(ThemeError::OutsideProvider)
}

/// Hook to access theme context
///
/// # Panics
///
/// Panics with [`ThemeError::OutsideProvider`] when the calling component is
/// not mounted under a [`ThemeProvider`].
#[hook]
pub fn use_theme() -> ThemeHandle {
    let handle = try_use_theme();
    handle.unwrap_or_else(|err| panic!("{err}"))
}

/// Hook to get current theme
#[hook]
pub fn use_current_theme() -> Theme {
    use_theme().theme()
}

/// Hook to get theme toggle callback
#[hook]
pub fn use_theme_toggle() -> Callback<()> {
    use_theme().toggle_callback()
}
