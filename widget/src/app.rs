//! Root component and host-page mounting.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mount` runs once at module start. It reads the embed payload, injects
//! the stylesheet, creates the host element, and mounts [`WidgetRoot`] into
//! it. Configuration errors are fatal: the widget logs them and renders
//! nothing.

use leptos::prelude::*;

use crate::components::launcher::Launcher;
use crate::components::panel::Panel;
use crate::config::WidgetConfig;
use crate::net::HttpBackend;
use crate::shell::Shell;
use crate::state::ui::Theme;
use crate::util::style;

/// Id of the element the widget mounts into. Its presence marks the page as
/// already embedded.
pub const HOST_ELEMENT_ID: &str = "qdw-host";

/// The shell as provided to components.
pub type WidgetShell = Shell<HttpBackend>;

/// Root component. Provides the shell context for every child component.
#[component]
pub fn WidgetRoot(config: WidgetConfig, theme: Theme) -> impl IntoView {
    let backend = HttpBackend::new(&config);
    let root_class = format!("qdw-root qdw-root--{}", config.corner.class_suffix());
    let root_style = style::root_style(&config.accent_color);
    let shell = Shell::new(config, backend, theme);
    let state = shell.state();
    provide_context(shell);

    let is_open = Memo::new(move |_| state.with(|s| s.ui.is_open));
    let is_dark = Memo::new(move |_| state.with(|s| s.ui.theme.is_dark()));

    view! {
        <div class=root_class class:qdw-root--dark=move || is_dark.get() style=root_style>
            <Show when=move || is_open.get()>
                <Panel/>
            </Show>
            <Launcher/>
        </div>
    }
}

/// Read the embed payload and mount the widget. Safe to call more than once
/// per page; later calls are no-ops.
#[cfg(feature = "csr")]
pub fn mount() {
    use wasm_bindgen::JsCast;

    use crate::config::CONFIG_ATTRIBUTE;
    use crate::util::theme;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.get_element_by_id(HOST_ELEMENT_ID).is_some() {
        leptos::logging::warn!("widget already mounted on this page; ignoring second embed");
        return;
    }

    let raw = doc
        .query_selector(&format!("[{CONFIG_ATTRIBUTE}]"))
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE));
    let config = match WidgetConfig::from_attribute(raw.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("widget not rendered: {e}");
            return;
        }
    };

    style::inject();

    let Some(body) = doc.body() else {
        return;
    };
    let Some(host) = doc.create_element("div").ok().and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    host.set_id(HOST_ELEMENT_ID);
    if body.append_child(&host).is_err() {
        leptos::logging::error!("widget not rendered: could not attach host element");
        return;
    }

    let theme = theme::read_preference();
    leptos::logging::log!("widget mounted for account {}", config.account_id);
    leptos::mount::mount_to(host, move || view! { <WidgetRoot config=config theme=theme/> }).forget();
}
