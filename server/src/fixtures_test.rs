use super::*;

#[test]
fn quiz_reply_parses_with_widget_parser() {
    let reply = quiz_reply("Generate an easy quiz about science.").unwrap();
    let questions = protocol::parse_quiz(&reply).unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].correct_option_index, 1);
    assert!(reply.starts_with("Here is a practice quiz"));
}

#[test]
fn quiz_reply_uses_first_line_of_request() {
    let reply = quiz_reply("Generate a hard quiz about rivers.\nNotes: focus on Europe").unwrap();
    assert!(reply.contains("(Generate a hard quiz about rivers.)"));
    assert!(!reply.contains("focus on Europe"));
}

#[test]
fn chat_reply_echoes_trimmed_input() {
    let reply = chat_reply(FeatureType::Chat, "  hello  ");
    assert!(reply.contains("_hello_"));
}

#[test]
fn faq_entries_are_non_empty() {
    let entries = faq_entries();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
}
