use super::chat::Origin;
use super::quiz::{QuizPhase, QuizQuestion, QuizSession};
use super::ui::Tab;
use super::*;

fn session() -> QuizSession {
    QuizSession::new(
        "t",
        vec![QuizQuestion {
            prompt: "p".to_owned(),
            options: vec!["a".to_owned(), "b".to_owned()],
            correct_option_index: 0,
            explanation: String::new(),
        }],
    )
}

#[test]
fn new_state_seeds_welcome_and_unknown_balance() {
    let state = WidgetState::new("Hello!", Theme::Dark, 1.0);
    assert_eq!(state.chat.messages.len(), 1);
    assert_eq!(state.chat.messages[0].text, "Hello!");
    assert_eq!(state.tokens.available_tokens, 0);
    assert_eq!(state.ui.theme, Theme::Dark);
    assert_eq!(state.epoch, 0);
}

#[test]
fn reset_clears_panels_but_keeps_tokens_and_chrome() {
    let mut state = WidgetState::new("Hello!", Theme::Light, 1.0);
    state.ui.is_open = true;
    state.ui.active_tab = Tab::Chat;
    state.tokens.begin_refresh();
    state.tokens.apply_balance(750, 2.0);
    state.chat.push(Origin::User, "hi", 3.0);
    state.quiz.generation_succeeded(session());
    state.faq.finish_load(Some(Vec::new()));
    state.faq.set_filter("x");

    let tokens_before = state.tokens.clone();
    state.reset("Hello!", 4.0);

    assert_eq!(state.chat.messages.len(), 1);
    assert_eq!(state.chat.messages[0].text, "Hello!");
    assert_eq!(state.quiz.phase, QuizPhase::Idle);
    assert_eq!(state.faq.active, None);
    assert!(state.faq.filter.is_empty());
    assert_eq!(state.tokens, tokens_before);
    assert!(state.ui.is_open);
    assert_eq!(state.ui.active_tab, Tab::Chat);
    assert_eq!(state.epoch, 1);
}

#[test]
fn exhausted_balance_replaces_spending_panels_with_purchase_prompt() {
    let mut state = WidgetState::new("Hello!", Theme::Light, 1.0);
    state.tokens.begin_refresh();
    state.tokens.apply_balance(1_000, 2.0);
    state.ui.active_tab = Tab::Chat;
    assert_eq!(state.panel_body(), PanelBody::Chat);

    state.tokens.mark_exhausted();
    assert_eq!(state.panel_body(), PanelBody::OutOfTokens);
    state.ui.active_tab = Tab::Quiz;
    assert_eq!(state.panel_body(), PanelBody::OutOfTokens);
    state.ui.active_tab = Tab::Faq;
    assert_eq!(state.panel_body(), PanelBody::Faq);
}

#[test]
fn unknown_balance_keeps_panels_visible() {
    let mut state = WidgetState::new("Hello!", Theme::Light, 1.0);
    state.ui.active_tab = Tab::Quiz;
    assert_eq!(state.panel_body(), PanelBody::Quiz);
}
