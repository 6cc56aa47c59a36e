//! Theme provider component

use super::context::{Theme, ThemeContext, ThemeHandle};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
    /// Theme at mount; later changes to this prop are ignored.
    #[prop_or_default]
    pub initial: Theme,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let initial = props.initial;
    let state = use_reducer(move || ThemeContext { theme: initial });
    let handle = ThemeHandle::new(state);
    let class = handle.theme().container_class();

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            <div {class}>
                { props.children.clone() }
            </div>
        </ContextProvider<ThemeHandle>>
    }
}
