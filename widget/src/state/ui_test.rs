use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_closed_on_quiz_tab() {
    let state = UiState::default();
    assert!(!state.is_open);
    assert_eq!(state.active_tab, Tab::Quiz);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_new_keeps_theme() {
    assert_eq!(UiState::new(Theme::Dark).theme, Theme::Dark);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn opening_without_quiz_lands_on_quiz_tab() {
    let mut state = UiState { active_tab: Tab::Faq, ..UiState::default() };
    assert!(state.toggle_open(false));
    assert!(state.is_open);
    assert_eq!(state.active_tab, Tab::Quiz);
}

#[test]
fn opening_while_resuming_quiz_keeps_tab() {
    let mut state = UiState { active_tab: Tab::Chat, ..UiState::default() };
    assert!(state.toggle_open(true));
    assert_eq!(state.active_tab, Tab::Chat);
}

#[test]
fn closing_reports_no_open_transition_and_keeps_tab() {
    let mut state = UiState { is_open: true, active_tab: Tab::Faq, ..UiState::default() };
    assert!(!state.toggle_open(false));
    assert!(!state.is_open);
    assert_eq!(state.active_tab, Tab::Faq);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_theme_flips_back_and_forth() {
    let mut state = UiState::default();
    assert_eq!(state.toggle_theme(), Theme::Dark);
    assert!(state.theme.is_dark());
    assert_eq!(state.toggle_theme(), Theme::Light);
}

#[test]
fn toggle_theme_leaves_other_fields_alone() {
    let mut state = UiState { is_open: true, active_tab: Tab::Chat, theme: Theme::Light };
    state.toggle_theme();
    assert!(state.is_open);
    assert_eq!(state.active_tab, Tab::Chat);
}

#[test]
fn tab_labels_are_distinct() {
    assert_eq!(Tab::ALL.map(Tab::label), ["Chat", "Quiz", "FAQ"]);
}
