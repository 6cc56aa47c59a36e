use theme_toggle_common::{ThemeConfig, ThemeProvider, ThemeToggle};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <Page />
        </ThemeProvider>
    }
}

#[function_component(Page)]
pub fn page() -> Html {
    html! {
        <div>
            <h1>{ ThemeConfig::PAGE_TITLE }</h1>
            <ThemeToggle />
        </div>
    }
}
