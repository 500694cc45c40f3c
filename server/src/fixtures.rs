//! Canned content returned by the dev backend.
//!
//! The dev server performs no inference. Chat replies echo the input and
//! generation requests always return the same three-question quiz, emitted in
//! the fenced form the widget parser expects.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use protocol::quiz::QuizPayload;
use protocol::{FaqEntry, FeatureType, QuizQuestion};

/// Reply text for a non-generation `converse` turn.
#[must_use]
pub fn chat_reply(feature: FeatureType, user_input: &str) -> String {
    let input = user_input.trim();
    match feature {
        FeatureType::Quiz => format!(
            "Quiz help for **{input}**: switch to the Quiz tab and describe a topic to generate a practice test."
        ),
        FeatureType::Chat | FeatureType::Faq => format!(
            "You said: _{input}_\n\nThis is the development backend, so replies are canned. See https://example.com/docs for setup notes."
        ),
    }
}

/// Fenced `quiz-json` reply for a generation request.
///
/// # Errors
///
/// Propagates the serializer error.
pub fn quiz_reply(user_input: &str) -> Result<String, serde_json::Error> {
    let block = quiz_payload().to_fenced_block()?;
    let subject = user_input.lines().next().unwrap_or_default().trim();
    Ok(format!("Here is a practice quiz based on your request ({subject}).\n\n{block}"))
}

fn quiz_payload() -> QuizPayload {
    let question = |prompt: &str, options: [&str; 4], correct: usize, explanation: &str| QuizQuestion {
        prompt: prompt.to_owned(),
        options: options.iter().map(|o| (*o).to_owned()).collect(),
        correct_option_index: correct,
        explanation: explanation.to_owned(),
    };
    QuizPayload {
        questions: vec![
            question(
                "Which planet is known as the Red Planet?",
                ["Venus", "Mars", "Jupiter", "Mercury"],
                1,
                "Iron oxide on its surface gives Mars its red color.",
            ),
            question(
                "What is the chemical symbol for water?",
                ["H2O", "O2", "CO2", "NaCl"],
                0,
                "Water is two hydrogen atoms bonded to one oxygen atom.",
            ),
            question(
                "How many sides does a hexagon have?",
                ["Five", "Seven", "Six", "Eight"],
                2,
                "\"Hex\" is Greek for six.",
            ),
        ],
    }
}

/// The fixed FAQ index.
#[must_use]
pub fn faq_entries() -> Vec<FaqEntry> {
    let entry = |question: &str, answer: &str| FaqEntry { question: question.to_owned(), answer: answer.to_owned() };
    vec![
        entry(
            "How do tokens work?",
            "Every chat reply and generated quiz consumes tokens from your account balance.",
        ),
        entry(
            "What happens when I run out of tokens?",
            "Sending is paused and a link to purchase more tokens appears at the top of the panel.",
        ),
        entry(
            "Can I retake a quiz?",
            "Yes. Choose \"New Test\" to return to the form; your previous topic stays filled in.",
        ),
        entry(
            "Does starting over refund tokens?",
            "No. Starting over clears the conversation and quiz, but your balance is unchanged.",
        ),
        entry(
            "Is my conversation saved?",
            "No. The transcript lives only in this page and is cleared when you reload or start over.",
        ),
    ]
}
