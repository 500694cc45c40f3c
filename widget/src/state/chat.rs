//! Chat transcript and send lifecycle.
//!
//! DESIGN
//! ======
//! The transcript is append-only within a session. A send moves through
//! `composing → pending → resolved`; while `pending` is set no further send is
//! accepted, so there is never more than one chat request in flight.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Reply appended when the backend reports an exhausted balance.
pub const INSUFFICIENT_TOKENS_REPLY: &str =
    "You're out of tokens for now. Purchase more to keep chatting and generating quizzes.";

/// Reply appended when a request fails in transit.
pub const FAILURE_REPLY: &str = "Sorry, something went wrong while reaching the assistant. Please try again.";

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Stable key for keyed list rendering.
    pub id: u64,
    pub origin: Origin,
    pub text: String,
    pub rendered_at: f64,
}

/// Why a send was refused before any request was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendRejection {
    Empty,
    Pending,
}

/// Transcript plus the chat panel's in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub pending: bool,
    next_id: u64,
}

impl ChatState {
    /// A transcript seeded with the welcome message.
    #[must_use]
    pub fn new(welcome: &str, now: f64) -> Self {
        let mut state = Self::default();
        state.push(Origin::Assistant, welcome, now);
        state
    }

    pub fn push(&mut self, origin: Origin, text: impl Into<String>, now: f64) {
        self.next_id += 1;
        self.messages.push(Message { id: self.next_id, origin, text: text.into(), rendered_at: now });
    }

    /// Whether `text` would be accepted by [`ChatState::begin_send`].
    ///
    /// # Errors
    ///
    /// Refuses blank input and input submitted while a send is in flight.
    pub fn check_send(&self, text: &str) -> Result<(), SendRejection> {
        if text.trim().is_empty() {
            return Err(SendRejection::Empty);
        }
        if self.pending {
            return Err(SendRejection::Pending);
        }
        Ok(())
    }

    /// Accept a user message: append it optimistically and mark the panel
    /// pending. Returns the trimmed text to send.
    ///
    /// # Errors
    ///
    /// Refuses blank input and input submitted while a send is in flight.
    pub fn begin_send(&mut self, text: &str, now: f64) -> Result<String, SendRejection> {
        self.check_send(text)?;
        let text = text.trim();
        self.push(Origin::User, text, now);
        self.pending = true;
        Ok(text.to_owned())
    }

    pub fn finish_send(&mut self) {
        self.pending = false;
    }

    /// Clear the transcript back to the welcome message. The in-flight flag is
    /// left alone: a request already issued still owns it until it resolves.
    pub fn reset(&mut self, welcome: &str, now: f64) {
        self.messages.clear();
        self.push(Origin::Assistant, welcome, now);
    }
}
