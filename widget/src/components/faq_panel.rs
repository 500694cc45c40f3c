//! FAQ tab: filter box, match count, and single-open accordion.

use leptos::prelude::*;

use crate::app::WidgetShell;
use crate::state::faq::FaqLoad;

#[component]
pub fn FaqPanel() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();
    let faq = Memo::new(move |_| state.with(|s| s.faq.clone()));
    let filter_shell = shell.clone();

    view! {
        <div class="qdw-faq">
            <div class="qdw-faq__toolbar">
                <input
                    class="qdw-input"
                    type="search"
                    placeholder="Search questions..."
                    prop:value=move || faq.with(|f| f.filter.clone())
                    on:input=move |ev| filter_shell.set_faq_filter(event_target_value(&ev))
                />
                <span class="qdw-faq__count">{move || faq.with(|f| f.count_label())}</span>
            </div>

            {move || {
                let shell = shell.clone();
                faq.with(|f| match &f.load {
                    FaqLoad::NotLoaded | FaqLoad::Loading => {
                        view! { <p class="qdw-placeholder">"Loading questions..."</p> }.into_any()
                    }
                    FaqLoad::Unavailable => {
                        view! { <p class="qdw-placeholder">"FAQ is unavailable right now."</p> }.into_any()
                    }
                    FaqLoad::Loaded(entries) if entries.is_empty() => {
                        view! { <p class="qdw-placeholder">"No questions yet."</p> }.into_any()
                    }
                    FaqLoad::Loaded(_) => {
                        let visible = f.visible();
                        if visible.is_empty() {
                            return view! { <p class="qdw-placeholder">"No questions match your search."</p> }
                                .into_any();
                        }
                        visible
                            .into_iter()
                            .map(|(index, entry)| {
                                let open = f.is_open(index);
                                let shell = shell.clone();
                                view! {
                                    <div class="qdw-faq__item" class:qdw-faq__item--open=open>
                                        <button
                                            class="qdw-faq__question"
                                            aria-expanded=open.to_string()
                                            on:click=move |_| shell.toggle_faq(index)
                                        >
                                            {entry.question.clone()}
                                        </button>
                                        {open.then(|| view! { <p class="qdw-faq__answer">{entry.answer.clone()}</p> })}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                })
            }}
        </div>
    }
}
