//! Quiz tab: generation form, progress state, and the active test.

use leptos::prelude::*;

use super::spawn_intent;
use crate::app::WidgetShell;
use crate::state::quiz::{Difficulty, OptionMark, QuizPhase, QuizSession};

#[component]
pub fn QuizPanel() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();
    let phase = Memo::new(move |_| state.with(|s| s.quiz.phase.clone()));

    view! {
        <div class="qdw-quiz">
            {move || match phase.get() {
                QuizPhase::Idle => view! { <QuizForm/> }.into_any(),
                QuizPhase::Generating => view! {
                    <div class="qdw-quiz__generating" role="status">
                        <div class="qdw-spinner"></div>
                        <p>"Generating your quiz..."</p>
                    </div>
                }
                .into_any(),
                QuizPhase::Active(session) => view! { <QuizSessionView session=session/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn QuizForm() -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let state = shell.state();
    let notice = Memo::new(move |_| state.with(|s| s.quiz.notice.clone()));

    let topic_shell = shell.clone();
    let difficulty_shell = shell.clone();
    let exam_shell = shell.clone();
    let notes_shell = shell.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let shell = shell.clone();
        spawn_intent(async move {
            shell.generate_quiz().await;
        });
    };

    view! {
        <form class="qdw-quiz__form" on:submit=on_submit>
            {move || notice.get().map(|text| view! { <p class="qdw-notice" role="alert">{text}</p> })}

            <label class="qdw-field">
                <span>"Topic"</span>
                <input
                    class="qdw-input"
                    type="text"
                    placeholder="e.g. Photosynthesis"
                    prop:value=move || state.with(|s| s.quiz.form.topic.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        topic_shell.update_quiz_form(|f| f.topic = value);
                    }
                />
            </label>

            <label class="qdw-field">
                <span>"Difficulty"</span>
                <select
                    class="qdw-input"
                    prop:value=move || state.with(|s| s.quiz.form.difficulty.map_or("", Difficulty::as_str))
                    on:change=move |ev| {
                        let value = Difficulty::parse(&event_target_value(&ev));
                        difficulty_shell.update_quiz_form(|f| f.difficulty = value);
                    }
                >
                    <option value="">"Choose..."</option>
                    {Difficulty::ALL
                        .into_iter()
                        .map(|d| view! { <option value=d.as_str()>{difficulty_label(d)}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="qdw-field">
                <span>"Exam context (optional)"</span>
                <input
                    class="qdw-input"
                    type="text"
                    placeholder="e.g. AP Biology final"
                    prop:value=move || state.with(|s| s.quiz.form.exam_context.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        exam_shell.update_quiz_form(|f| f.exam_context = value);
                    }
                />
            </label>

            <label class="qdw-field">
                <span>"Notes (optional)"</span>
                <textarea
                    class="qdw-input"
                    rows="3"
                    prop:value=move || state.with(|s| s.quiz.form.notes.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        notes_shell.update_quiz_form(|f| f.notes = value);
                    }
                ></textarea>
            </label>

            <button class="qdw-btn qdw-btn--primary" type="submit">
                "Generate Quiz"
            </button>
        </form>
    }
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

#[component]
fn QuizSessionView(session: QuizSession) -> impl IntoView {
    let shell = expect_context::<WidgetShell>();
    let submitted = session.is_submitted();
    let total = session.questions.len();

    let questions = session
        .questions
        .iter()
        .enumerate()
        .map(|(qi, question)| {
            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(oi, option)| {
                    let mark = session.option_mark(qi, oi);
                    let selected = mark == OptionMark::Selected;
                    let correct = mark == OptionMark::Correct;
                    let incorrect = mark == OptionMark::Incorrect;
                    let shell = shell.clone();
                    view! {
                        <button
                            class="qdw-option"
                            class:qdw-option--selected=selected
                            class:qdw-option--correct=correct
                            class:qdw-option--incorrect=incorrect
                            disabled=submitted
                            on:click=move |_| {
                                shell.select_option(qi, oi);
                            }
                        >
                            <span class="qdw-option__letter">{option_letter(oi)}</span>
                            <span>{option.clone()}</span>
                        </button>
                    }
                })
                .collect_view();

            let explanation = (submitted && !question.explanation.is_empty()).then(|| {
                view! { <p class="qdw-question__explanation">{question.explanation.clone()}</p> }
            });

            view! {
                <li class="qdw-question">
                    <p class="qdw-question__prompt">{format!("{}. {}", qi + 1, question.prompt)}</p>
                    <div class="qdw-question__options">{options}</div>
                    {explanation}
                </li>
            }
        })
        .collect_view();

    let footer = match session.score() {
        Some(score) => {
            let shell = shell.clone();
            view! {
                <div class="qdw-quiz__result">
                    <p class="qdw-quiz__score">{format!("You scored {score} / {total}")}</p>
                    <button class="qdw-btn qdw-btn--primary" on:click=move |_| shell.new_test()>
                        "New Test"
                    </button>
                </div>
            }
            .into_any()
        }
        None => {
            let label = session.submit_label();
            let submit_shell = shell.clone();
            let new_shell = shell.clone();
            view! {
                <div class="qdw-quiz__actions">
                    <button
                        class="qdw-btn qdw-btn--primary"
                        on:click=move |_| {
                            submit_shell.submit_quiz();
                        }
                    >
                        {label}
                    </button>
                    <button class="qdw-btn" on:click=move |_| new_shell.new_test()>
                        "New Test"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="qdw-quiz__session">
            <h3 class="qdw-quiz__topic">{session.topic.clone()}</h3>
            <ol class="qdw-quiz__questions">{questions}</ol>
            {footer}
        </div>
    }
}

fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or_else(|| (index + 1).to_string(), |i| char::from(b'A' + i).to_string())
}
