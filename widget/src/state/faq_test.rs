use super::*;

fn entry(question: &str) -> FaqEntry {
    FaqEntry { question: question.to_owned(), answer: format!("{question} answer") }
}

fn loaded() -> FaqState {
    let mut state = FaqState::default();
    assert!(state.begin_load());
    state.finish_load(Some(vec![
        entry("How do tokens work?"),
        entry("Can I export my quiz?"),
        entry("What TOKEN plans exist?"),
    ]));
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_is_claimed_once() {
    let mut state = FaqState::default();
    assert!(state.begin_load());
    assert!(!state.begin_load());
    state.finish_load(Some(vec![entry("q")]));
    assert!(!state.begin_load());
}

#[test]
fn failed_load_is_unavailable_with_no_entries() {
    let mut state = FaqState::default();
    state.begin_load();
    state.finish_load(None);
    assert_eq!(state.load, FaqLoad::Unavailable);
    assert!(state.entries().is_empty());
    assert_eq!(state.count_label(), "0 of 0");
    assert!(!state.begin_load());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_filter_shows_everything() {
    let state = loaded();
    assert_eq!(state.visible().len(), 3);
    assert_eq!(state.count_label(), "3 of 3");
}

#[test]
fn filter_is_case_insensitive_substring_on_question() {
    let mut state = loaded();
    state.set_filter("token");
    let indices: Vec<usize> = state.visible().iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(state.count_label(), "2 of 3");
}

#[test]
fn filter_ignores_answer_text() {
    let mut state = loaded();
    state.set_filter("answer");
    assert!(state.visible().is_empty());
    assert_eq!(state.count_label(), "0 of 3");
}

#[test]
fn filter_whitespace_is_part_of_the_needle() {
    let mut state = loaded();
    state.set_filter("  tok");
    assert_eq!(state.count_label(), "0 of 3");

    state.set_filter(" token");
    let indices: Vec<usize> = state.visible().iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 2]);
}

// =============================================================
// Accordion
// =============================================================

#[test]
fn toggle_opens_and_closes_single_entry() {
    let mut state = loaded();
    state.toggle(1);
    assert!(state.is_open(1));
    state.toggle(1);
    assert_eq!(state.active, None);
}

#[test]
fn opening_another_entry_closes_the_first() {
    let mut state = loaded();
    state.toggle(0);
    state.toggle(2);
    assert!(!state.is_open(0));
    assert!(state.is_open(2));
    let open = (0..3).filter(|i| state.is_open(*i)).count();
    assert_eq!(open, 1);
}

#[test]
fn toggle_out_of_range_is_ignored() {
    let mut state = loaded();
    state.toggle(0);
    state.toggle(7);
    assert!(state.is_open(0));
}

#[test]
fn reset_closes_entry_and_clears_filter_but_keeps_index() {
    let mut state = loaded();
    state.toggle(0);
    state.set_filter("quiz");
    state.reset();
    assert_eq!(state.active, None);
    assert!(state.filter.is_empty());
    assert_eq!(state.entries().len(), 3);
}
