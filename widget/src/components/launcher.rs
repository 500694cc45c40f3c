//! Floating launcher button that opens and closes the panel.

use leptos::prelude::*;

use super::spawn_intent;
use crate::app::WidgetShell;

#[component]
pub fn Launcher() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();
    let is_open = Memo::new(move |_| state.with(|s| s.ui.is_open));
    let label = format!("Open {}", shell.config().display_name);

    let on_click = move |_| {
        let shell = shell.clone();
        spawn_intent(async move {
            shell.toggle_open().await;
        });
    };

    view! {
        <button
            class="qdw-launcher"
            class:qdw-launcher--open=move || is_open.get()
            aria-label=label
            aria-expanded=move || is_open.get().to_string()
            on:click=on_click
        >
            {move || if is_open.get() { "\u{2715}" } else { "?" }}
        </button>
    }
}
