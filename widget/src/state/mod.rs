//! Widget state, split by panel.
//!
//! DESIGN
//! ======
//! `WidgetState` is the single owned state object. The shell is its only
//! writer; components read it and emit intents. Each panel's slice (`chat`,
//! `quiz`, `faq`) carries its own in-flight flag so a slow request in one
//! panel never blocks another.

pub mod chat;
pub mod faq;
pub mod quiz;
pub mod tokens;
pub mod ui;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use chat::ChatState;
use faq::FaqState;
use quiz::QuizState;
use tokens::{TokenState, TokenStatus};
use ui::{Tab, Theme, UiState};

/// What the panel body shows below the tab strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelBody {
    Chat,
    Quiz,
    Faq,
    /// Purchase call-to-action in place of a token-spending panel.
    OutOfTokens,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState {
    pub ui: UiState,
    pub tokens: TokenState,
    pub chat: ChatState,
    pub quiz: QuizState,
    pub faq: FaqState,
    /// Bumped by every reset; async results tagged with an older epoch are
    /// not applied to the fresh session.
    pub epoch: u64,
}

impl WidgetState {
    #[must_use]
    pub fn new(welcome: &str, theme: Theme, now: f64) -> Self {
        Self {
            ui: UiState::new(theme),
            tokens: TokenState::default(),
            chat: ChatState::new(welcome, now),
            quiz: QuizState::default(),
            faq: FaqState::default(),
            epoch: 0,
        }
    }

    /// Clear transcript, quiz, and FAQ expansion. Token state and chrome
    /// (open/tab/theme) are untouched.
    pub fn reset(&mut self, welcome: &str, now: f64) {
        self.epoch += 1;
        self.chat.reset(welcome, now);
        self.quiz.reset();
        self.faq.reset();
    }

    /// Chat and quiz spend tokens, so an exhausted balance replaces them with
    /// the purchase call-to-action. The FAQ stays reachable.
    #[must_use]
    pub fn panel_body(&self) -> PanelBody {
        match self.ui.active_tab {
            Tab::Faq => PanelBody::Faq,
            _ if self.tokens.status() == TokenStatus::Exhausted => PanelBody::OutOfTokens,
            Tab::Chat => PanelBody::Chat,
            Tab::Quiz => PanelBody::Quiz,
        }
    }
}
