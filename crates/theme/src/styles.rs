//! Stylesheet for the two theme variants, keyed on the classes rendered by
//! `ThemeProvider` and `ThemeToggle`

use crate::config::ThemeConfig;
use crate::error::ThemeError;

pub const STYLESHEET: &str = r"
.app {
  min-height: 100vh;
  padding: 2rem;
  font-family: system-ui, sans-serif;
}

.app.light {
  background-color: #ffffff;
  color: #111827;
}

.app.dark {
  background-color: #111827;
  color: #f3f4f6;
}

.theme-button {
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid transparent;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
}

.theme-button.light {
  background-color: #1f2937;
  color: #f9fafb;
}

.theme-button.dark {
  background-color: #f3f4f6;
  color: #111827;
}
";

/// Append [`STYLESHEET`] to the document head. Calling it again is a no-op.
///
/// # Errors
///
/// Returns [`ThemeError::Dom`] when there is no document or head, or when the
/// `<style>` element cannot be created or inserted.
pub fn inject_stylesheet() -> Result<(), ThemeError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("document is unavailable".to_string()))?;

    if document.get_element_by_id(ThemeConfig::STYLESHEET_ID).is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| ThemeError::Dom("document has no <head>".to_string()))?;

    let style = document.create_element("style")?;
    style.set_id(ThemeConfig::STYLESHEET_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;

    tracing::debug!(id = ThemeConfig::STYLESHEET_ID, "theme stylesheet injected");
    Ok(())
}
