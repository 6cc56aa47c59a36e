//! Theme context definition

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme. Applying it twice yields the original.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name, also used as the variant's CSS class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Button text, naming the mode a click switches to
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }

    /// Class list of the root container rendered by `ThemeProvider`
    #[must_use]
    pub fn container_class(self) -> String {
        format!("{} {}", ThemeConfig::ROOT_CLASS, self.as_str())
    }

    /// Class list of the toggle button
    #[must_use]
    pub fn button_class(self) -> String {
        format!("{} {}", ThemeConfig::BUTTON_CLASS, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Reducer state owned by `ThemeProvider`
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

/// The only way to change the theme held by `ThemeContext`
pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => {
                let theme = self.theme.toggled();
                tracing::debug!(from = %self.theme, to = %theme, "theme toggled");
                Rc::new(Self { theme })
            }
        }
    }
}

/// Context value handed to descendants of `ThemeProvider`
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    inner: UseReducerHandle<ThemeContext>,
}

impl ThemeHandle {
    pub(crate) fn new(inner: UseReducerHandle<ThemeContext>) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.inner.theme
    }

    /// Flip the theme; every consumer re-renders with the new value.
    pub fn toggle(&self) {
        self.inner.dispatch(ThemeAction::Toggle);
    }

    #[must_use]
    pub fn toggle_callback(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |()| handle.toggle())
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("theme", &self.theme())
            .finish()
    }
}
