//! Panel chrome: header actions, tab strip, and the active tab body.

use leptos::prelude::*;

use super::chat_panel::ChatPanel;
use super::faq_panel::FaqPanel;
use super::quiz_panel::QuizPanel;
use super::spawn_intent;
use super::token_banner::{OutOfTokens, TokenBanner};
use crate::app::WidgetShell;
use crate::state::{PanelBody, WidgetState};
use crate::state::ui::Tab;

#[component]
pub fn Panel() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();
    let name = shell.config().display_name.clone();
    let title = name.clone();

    // Memos so the body is only rebuilt when what it shows actually changes.
    let active_tab = Memo::new(move |_| state.with(|s| s.ui.active_tab));
    let body = Memo::new(move |_| state.with(WidgetState::panel_body));
    let is_dark = Memo::new(move |_| state.with(|s| s.ui.theme.is_dark()));

    let theme_shell = shell.clone();
    let reset_shell = shell.clone();
    let close_shell = shell.clone();

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            let shell = shell.clone();
            let on_click = move |_| {
                let shell = shell.clone();
                spawn_intent(async move {
                    shell.select_tab(tab).await;
                });
            };
            view! {
                <button
                    class="qdw-tab"
                    class:qdw-tab--active=move || active_tab.get() == tab
                    role="tab"
                    aria-selected=move || (active_tab.get() == tab).to_string()
                    on:click=on_click
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="qdw-panel" role="dialog" aria-label=name>
            <header class="qdw-panel__header">
                <span class="qdw-panel__title">{title}</span>
                <div class="qdw-panel__actions">
                    <button
                        class="qdw-icon-btn"
                        title="Toggle theme"
                        on:click=move |_| theme_shell.toggle_theme()
                    >
                        {move || if is_dark.get() { "\u{2600}" } else { "\u{263E}" }}
                    </button>
                    <button class="qdw-icon-btn" title="Start over" on:click=move |_| reset_shell.reset()>
                        "\u{21BA}"
                    </button>
                    <button
                        class="qdw-icon-btn"
                        title="Close"
                        on:click=move |_| {
                            let shell = close_shell.clone();
                            spawn_intent(async move {
                                shell.toggle_open().await;
                            });
                        }
                    >
                        "\u{2715}"
                    </button>
                </div>
            </header>

            <nav class="qdw-tabs" role="tablist">
                {tabs}
            </nav>

            <TokenBanner/>

            <div class="qdw-panel__body">
                {move || match body.get() {
                    PanelBody::Chat => view! { <ChatPanel/> }.into_any(),
                    PanelBody::Quiz => view! { <QuizPanel/> }.into_any(),
                    PanelBody::Faq => view! { <FaqPanel/> }.into_any(),
                    PanelBody::OutOfTokens => view! { <OutOfTokens/> }.into_any(),
                }}
            </div>
        </section>
    }
}
