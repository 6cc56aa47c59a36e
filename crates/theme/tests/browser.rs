#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use theme_toggle_common::{ThemeProvider, ThemeToggle};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Harness)]
fn harness() -> Html {
    html! {
        <ThemeProvider>
            <h1>{ "Theme Toggle Example" }</h1>
            <ThemeToggle />
        </ThemeProvider>
    }
}

async fn settle() {
    sleep(Duration::ZERO).await;
}

fn mount() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<Harness>::with_root(root.clone()).render();
    root
}

fn button(root: &Element) -> HtmlButtonElement {
    root.query_selector("button")
        .unwrap()
        .expect("toggle button rendered")
        .dyn_into()
        .unwrap()
}

fn container_class(root: &Element) -> String {
    root.query_selector("div.app")
        .unwrap()
        .expect("root container rendered")
        .class_name()
}

#[wasm_bindgen_test]
async fn click_flips_label_and_class_then_restores() {
    let root = mount();
    settle().await;

    assert_eq!(button(&root).text_content().as_deref(), Some("Switch to Dark Mode"));
    assert_eq!(container_class(&root), "app light");

    button(&root).click();
    settle().await;

    assert_eq!(button(&root).text_content().as_deref(), Some("Switch to Light Mode"));
    assert_eq!(container_class(&root), "app dark");
    assert_eq!(button(&root).class_name(), "theme-button dark");

    button(&root).click();
    settle().await;

    assert_eq!(button(&root).text_content().as_deref(), Some("Switch to Dark Mode"));
    assert_eq!(container_class(&root), "app light");
    assert_eq!(button(&root).class_name(), "theme-button light");
}

#[wasm_bindgen_test]
async fn stylesheet_injection_is_idempotent() {
    theme_toggle_common::styles::inject_stylesheet().unwrap();
    theme_toggle_common::styles::inject_stylesheet().unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let styles = document
        .query_selector_all(&format!("#{}", theme_toggle_common::ThemeConfig::STYLESHEET_ID))
        .unwrap();
    assert_eq!(styles.length(), 1);
}
