//! Chat transcript and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Messages are rendered through `util::format`, which escapes raw HTML before
//! the result is injected with `inner_html`. The composer stays editable while
//! a reply is pending; only sending is suppressed.

use leptos::prelude::*;

use super::spawn_intent;
use crate::app::WidgetShell;
use crate::state::chat::{Message, Origin};
use crate::util::format::render_message_html;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let messages = Memo::new(move |_| state.with(|s| s.chat.messages.clone()));
    let pending = Memo::new(move |_| state.with(|s| s.chat.pending));

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = pending.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let accepted = state.with_untracked(|s| s.chat.check_send(&text).is_ok() && s.tokens.can_spend());
        if accepted {
            input.set(String::new());
        }
        let shell = shell.clone();
        spawn_intent(async move {
            shell.send_chat(&text).await;
        });
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !pending.get();

    view! {
        <div class="qdw-chat">
            <div class="qdw-chat__messages" node_ref=messages_ref>
                <For each=move || messages.get() key=|m| m.id children=message_view/>
                {move || {
                    pending
                        .get()
                        .then(|| {
                            view! {
                                <div class="qdw-typing" aria-label="Assistant is typing">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="qdw-chat__composer">
                <textarea
                    class="qdw-input qdw-chat__input"
                    rows="2"
                    placeholder="Type your question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="qdw-btn qdw-btn--primary" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn message_view(message: Message) -> impl IntoView {
    let is_user = message.origin == Origin::User;
    let is_assistant = !is_user;
    let rendered = render_message_html(&message.text);
    view! {
        <div class="qdw-msg" class:qdw-msg--user=is_user class:qdw-msg--assistant=is_assistant>
            <div class="qdw-msg__body" inner_html=rendered></div>
        </div>
    }
}
