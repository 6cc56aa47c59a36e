//! Frontend configuration

/// Theme UI configuration
pub struct ThemeConfig;

impl ThemeConfig {
    /// Class carried by the root container, alongside the theme name
    pub const ROOT_CLASS: &'static str = "app";

    /// Class carried by the toggle button, alongside the theme name
    pub const BUTTON_CLASS: &'static str = "theme-button";

    /// Heading shown by the page shell
    pub const PAGE_TITLE: &'static str = "Theme Toggle Example";

    /// Element id the app mounts into; falls back to `<body>` when absent
    pub const MOUNT_ID: &'static str = "app";

    /// Id of the injected `<style>` element
    pub const STYLESHEET_ID: &'static str = "theme-toggle-styles";
}
