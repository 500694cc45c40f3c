//! Quiz engine: generation form, session, selection, and grading.
//!
//! DESIGN
//! ======
//! `Idle → Generating → Active → (submitted) → Idle`. A session keeps one
//! selection slot per question from the moment it is created, so the
//! "answered" count and the score are always computed over the full question
//! list. Once submitted the selections are frozen and the score is fixed.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

pub use protocol::QuizQuestion;

/// Difficulty requested from the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

/// Draft values of the generation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizForm {
    pub topic: String,
    pub difficulty: Option<Difficulty>,
    pub exam_context: String,
    pub notes: String,
}

/// Missing mandatory form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter a topic for your quiz.")]
    MissingTopic,
    #[error("Choose a difficulty.")]
    MissingDifficulty,
}

/// A validated generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub exam_context: Option<String>,
    pub notes: Option<String>,
}

impl QuizForm {
    /// Validate the draft. Topic and difficulty are mandatory.
    ///
    /// # Errors
    ///
    /// Returns the first missing mandatory field.
    pub fn validate(&self) -> Result<QuizRequest, FormError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(FormError::MissingTopic);
        }
        let difficulty = self.difficulty.ok_or(FormError::MissingDifficulty)?;
        let optional = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
        Ok(QuizRequest {
            topic: topic.to_owned(),
            difficulty,
            exam_context: optional(&self.exam_context),
            notes: optional(&self.notes),
        })
    }
}

impl QuizRequest {
    /// The chat turn narrating this request; also sent as the generator input.
    #[must_use]
    pub fn narration(&self) -> String {
        let mut text = format!(
            "Generate a {} multiple-choice quiz about {}.",
            self.difficulty.as_str(),
            self.topic
        );
        if let Some(exam) = &self.exam_context {
            text.push_str(&format!("\nExam context: {exam}"));
        }
        if let Some(notes) = &self.notes {
            text.push_str(&format!("\nNotes: {notes}"));
        }
        text
    }

    /// Assistant turn announcing a ready quiz.
    #[must_use]
    pub fn ready_message(&self, question_count: usize) -> String {
        format!(
            "Your {} quiz on {} is ready with {question_count} questions. Head to the Quiz tab to begin!",
            self.difficulty.as_str(),
            self.topic
        )
    }
}

/// How an option should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    None,
    /// Chosen, not yet graded.
    Selected,
    Correct,
    Incorrect,
}

/// One generated test and its grading state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    /// Exactly one slot per question; `None` means unanswered.
    selected: Vec<Option<usize>>,
    score: Option<usize>,
}

impl QuizSession {
    #[must_use]
    pub fn new(topic: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        let selected = vec![None; questions.len()];
        Self { topic: topic.into(), questions, selected, score: None }
    }

    #[must_use]
    pub fn selected(&self) -> &[Option<usize>] {
        &self.selected
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.score.is_some()
    }

    /// Score fixed at submission; `None` before.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// Select `option` for `question`, replacing any earlier choice.
    /// Returns `false` (and changes nothing) once submitted or out of range.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        if self.is_submitted() {
            return false;
        }
        let Some(q) = self.questions.get(question) else {
            return false;
        };
        if option >= q.options.len() {
            return false;
        }
        self.selected[question] = Some(option);
        true
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selected.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn submit_label(&self) -> String {
        format!("Submit Answers ({}/{})", self.answered_count(), self.questions.len())
    }

    /// Grade the session. Idempotent: a second call returns the first score.
    pub fn submit(&mut self) -> usize {
        if let Some(score) = self.score {
            return score;
        }
        let score = self
            .questions
            .iter()
            .zip(&self.selected)
            .filter(|(q, sel)| **sel == Some(q.correct_option_index))
            .count();
        self.score = Some(score);
        score
    }

    #[must_use]
    pub fn option_mark(&self, question: usize, option: usize) -> OptionMark {
        let (Some(q), Some(sel)) = (self.questions.get(question), self.selected.get(question)) else {
            return OptionMark::None;
        };
        let chosen = *sel == Some(option);
        if !self.is_submitted() {
            return if chosen { OptionMark::Selected } else { OptionMark::None };
        }
        if option == q.correct_option_index {
            OptionMark::Correct
        } else if chosen {
            OptionMark::Incorrect
        } else {
            OptionMark::None
        }
    }
}

/// Lifecycle of the quiz panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Idle,
    Generating,
    Active(QuizSession),
}

/// Scripted notice shown on the form after a failed generation.
pub const GENERATION_FAILED_NOTICE: &str = "We couldn't build a quiz from that request. Please try again.";

/// Scripted notice shown on the form when tokens ran out mid-request.
pub const OUT_OF_TOKENS_NOTICE: &str = "You're out of tokens. Purchase more to generate new quizzes.";

/// Assistant turn appended when a generation response could not be parsed.
pub const MALFORMED_QUIZ_REPLY: &str =
    "I couldn't turn that into a quiz this time. Try rephrasing the topic and generate again.";

/// Quiz panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    pub phase: QuizPhase,
    pub form: QuizForm,
    /// Validation or generation notice shown above the form.
    pub notice: Option<String>,
}

impl QuizState {
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.phase {
            QuizPhase::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.phase {
            QuizPhase::Active(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.phase == QuizPhase::Generating
    }

    /// Enter `Generating`. Refused while a generation is already running or a
    /// session is active.
    pub fn begin_generation(&mut self) -> bool {
        if self.phase != QuizPhase::Idle {
            return false;
        }
        self.phase = QuizPhase::Generating;
        self.notice = None;
        true
    }

    /// Install a freshly parsed session.
    pub fn generation_succeeded(&mut self, session: QuizSession) {
        self.phase = QuizPhase::Active(session);
        self.notice = None;
    }

    /// Return to the form with a notice.
    pub fn generation_failed(&mut self, notice: &str) {
        self.phase = QuizPhase::Idle;
        self.notice = Some(notice.to_owned());
    }

    /// Drop the session and show the form again, keeping the draft.
    pub fn new_test(&mut self) {
        if matches!(self.phase, QuizPhase::Active(_)) {
            self.phase = QuizPhase::Idle;
        }
        self.notice = None;
    }

    /// Widget reset: drop the session and the draft. A generation still in
    /// flight is abandoned; its result is discarded by the shell.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
