//! Quiz payload extraction and validation.
//!
//! Generation responses carry the quiz inside free-form model text, either as
//! a fenced code block or as raw JSON. Parsing happens once here so the widget
//! only ever sees validated questions.

use serde::{Deserialize, Serialize};

/// Info string the backend uses for fenced quiz blocks.
pub const QUIZ_FENCE_TAG: &str = "quiz-json";

/// Error returned by [`parse_quiz`].
#[derive(Debug, thiserror::Error)]
pub enum QuizParseError {
    /// No JSON object, array, or fenced block was found in the content.
    #[error("no quiz JSON found in response")]
    NoJson,
    /// JSON was found but does not match the quiz shape.
    #[error("quiz JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload parsed but contained no questions.
    #[error("quiz contains no questions")]
    Empty,
    /// A question violates a structural rule.
    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// A validated multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    /// At least two options, in display order.
    pub options: Vec<String>,
    /// Always a valid index into `options`.
    pub correct_option_index: usize,
    #[serde(default)]
    pub explanation: String,
}

/// Canonical wrapper the backend emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPayload {
    pub questions: Vec<QuizQuestion>,
}

impl QuizPayload {
    /// Render the payload as a fenced `quiz-json` block.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; in practice plain structs always serialize.
    pub fn to_fenced_block(&self) -> Result<String, serde_json::Error> {
        let body = serde_json::to_string_pretty(self)?;
        Ok(format!("```{QUIZ_FENCE_TAG}\n{body}\n```"))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPayload {
    Wrapped { questions: Vec<RawQuestion> },
    Bare(Vec<RawQuestion>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(alias = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswer", alias = "answer", alias = "correctIndex")]
    correct_option_index: RawAnswer,
    #[serde(default)]
    explanation: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Index(i64),
    Label(String),
}

/// Parse a generation response into validated quiz questions.
///
/// Accepts a fenced block (`quiz-json`, `json`, or untagged) or raw JSON, in
/// either `{"questions": [...]}` or bare-array form.
///
/// # Errors
///
/// Returns a [`QuizParseError`] when no JSON is present, the JSON does not
/// match the quiz shape, or any question fails validation.
pub fn parse_quiz(content: &str) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let json = extract_json(content).ok_or(QuizParseError::NoJson)?;
    let raw: RawPayload = serde_json::from_str(json)?;
    let raw_questions = match raw {
        RawPayload::Wrapped { questions } | RawPayload::Bare(questions) => questions,
    };
    if raw_questions.is_empty() {
        return Err(QuizParseError::Empty);
    }

    raw_questions
        .into_iter()
        .enumerate()
        .map(|(index, raw)| validate_question(index, raw))
        .collect()
}

fn validate_question(index: usize, raw: RawQuestion) -> Result<QuizQuestion, QuizParseError> {
    let invalid = |reason: &str| QuizParseError::InvalidQuestion { index, reason: reason.to_owned() };

    let prompt = raw.prompt.trim().to_owned();
    if prompt.is_empty() {
        return Err(invalid("empty prompt"));
    }
    if raw.options.len() < 2 {
        return Err(invalid("fewer than two options"));
    }
    let correct = resolve_answer(&raw.correct_option_index, &raw.options)
        .ok_or_else(|| invalid("correct answer does not name an option"))?;

    Ok(QuizQuestion {
        prompt,
        options: raw.options,
        correct_option_index: correct,
        explanation: raw.explanation.trim().to_owned(),
    })
}

fn resolve_answer(answer: &RawAnswer, options: &[String]) -> Option<usize> {
    match answer {
        RawAnswer::Index(i) => usize::try_from(*i).ok().filter(|i| *i < options.len()),
        RawAnswer::Label(label) => {
            let label = label.trim().trim_end_matches([')', '.']);
            if let Ok(i) = label.parse::<usize>() {
                return (i < options.len()).then_some(i);
            }
            let mut chars = label.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                if ch.is_ascii_alphabetic() {
                    let i = usize::from(ch.to_ascii_uppercase() as u8 - b'A');
                    return (i < options.len()).then_some(i);
                }
            }
            options.iter().position(|opt| opt.trim().eq_ignore_ascii_case(label))
        }
    }
}

/// Locate the JSON text inside `content`.
fn extract_json(content: &str) -> Option<&str> {
    if let Some(block) = fenced_block(content) {
        return Some(block);
    }
    let trimmed = content.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(trimmed);
    }
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    (start < end).then(|| &trimmed[start..=end])
}

/// Body of the best fenced block: a `quiz-json` or `json` block wins over an
/// untagged one; otherwise the first block is used.
fn fenced_block(content: &str) -> Option<&str> {
    let mut first: Option<&str> = None;
    let mut rest = content;
    while let Some(open) = rest.find("```") {
        let after_ticks = &rest[open + 3..];
        let line_end = after_ticks.find('\n')?;
        let tag = after_ticks[..line_end].trim();
        let body_start = &after_ticks[line_end + 1..];
        let close = body_start.find("```")?;
        let body = body_start[..close].trim();

        if tag == QUIZ_FENCE_TAG || tag == "json" {
            return Some(body);
        }
        first.get_or_insert(body);
        rest = &body_start[close + 3..];
    }
    first
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
