use theme_toggle_app::App;
use theme_toggle_common::{ThemeConfig, styles};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    if let Err(err) = styles::inject_stylesheet() {
        tracing::warn!(error = %err, "failed to inject theme stylesheet");
    }

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ThemeConfig::MOUNT_ID));

    match root {
        Some(element) => yew::Renderer::<App>::with_root(element).render(),
        None => {
            tracing::warn!(
                id = ThemeConfig::MOUNT_ID,
                "mount element not found, rendering into body"
            );
            yew::Renderer::<App>::new().render()
        }
    };
}
