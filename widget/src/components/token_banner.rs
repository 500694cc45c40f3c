//! Low-balance warning and zero-balance call-to-action.

use leptos::prelude::*;

use crate::app::WidgetShell;
use crate::state::PanelBody;
use crate::state::tokens::TokenStatus;

/// Strip above the panel body. Warns on a low balance; when the balance is
/// exhausted it only appears on the FAQ tab, since the spending tabs are
/// replaced by [`OutOfTokens`].
#[component]
pub fn TokenBanner() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();
    let billing_url = shell.config().billing_url();
    let status = Memo::new(move |_| {
        state.with(|s| (s.tokens.status(), s.tokens.available_tokens, s.panel_body() == PanelBody::Faq))
    });

    move || match status.get() {
        (TokenStatus::Low, available, _) => view! {
            <div class="qdw-banner qdw-banner--low" role="status">
                {format!("Running low: {available} tokens left.")}
            </div>
        }
        .into_any(),
        (TokenStatus::Exhausted, _, true) => view! {
            <div class="qdw-banner qdw-banner--exhausted" role="alert">
                <span>"You're out of tokens."</span>
                <a class="qdw-btn qdw-btn--primary" href=billing_url.clone() target="_blank" rel="noopener noreferrer">
                    "Purchase more"
                </a>
            </div>
        }
        .into_any(),
        _ => ().into_any(),
    }
}

/// Replaces the chat and quiz panels while the balance is exhausted.
#[component]
pub fn OutOfTokens() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let billing_url = shell.config().billing_url();

    view! {
        <div class="qdw-empty-balance" role="alert">
            <p class="qdw-empty-balance__title">"You're out of tokens."</p>
            <p class="qdw-empty-balance__hint">"Purchase more to keep chatting and generating quizzes."</p>
            <a class="qdw-btn qdw-btn--primary" href=billing_url target="_blank" rel="noopener noreferrer">
                "Purchase more"
            </a>
        </div>
    }
}
