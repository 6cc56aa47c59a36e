//! Theme toggle button

use crate::theme::{use_current_theme, use_theme_toggle};
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let current = use_current_theme();
    let toggle = use_theme_toggle();

    let onclick = toggle.reform(|_: MouseEvent| ());

    html! {
        <button type="button" class={current.button_class()} {onclick}>
            { current.toggle_label() }
        </button>
    }
}
