//! Shell controller: the single writer of [`WidgetState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the state signal and call the intent methods here; nothing
//! else mutates state. Each async intent follows the same shape: one
//! synchronous state step (gate checks, optimistic append, in-flight flag),
//! the backend call, then one synchronous step applying the result.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is converted here into a scripted transcript entry,
//! a form notice, or the zero-balance presentation. Raw error text only goes
//! to the console.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::sync::Arc;

use leptos::prelude::*;
use protocol::{ConverseRequest, FeatureType, UsageRequest, parse_quiz};

use crate::config::WidgetConfig;
use crate::net::{ApiError, Backend};
use crate::state::WidgetState;
use crate::state::chat::{FAILURE_REPLY, INSUFFICIENT_TOKENS_REPLY, Origin, SendRejection};
use crate::state::quiz::{
    FormError, GENERATION_FAILED_NOTICE, MALFORMED_QUIZ_REPLY, OUT_OF_TOKENS_NOTICE, QuizForm, QuizPhase,
    QuizSession,
};
use crate::state::ui::{Tab, Theme};
use crate::util::clock::now_ms;
use crate::util::theme;

/// Result of [`Shell::refresh_balance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A refresh was already in flight; no request was issued.
    Skipped,
    Updated(u64),
    Failed,
}

/// Result of [`Shell::send_chat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Refused client-side; no request was issued.
    Rejected(SendRejection),
    /// The token guard refused; no request was issued.
    Blocked,
    Delivered,
    OutOfTokens,
    Failed,
}

/// Result of [`Shell::generate_quiz`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    Invalid(FormError),
    /// A generation is already running or a quiz is active.
    Busy,
    Blocked,
    Ready(usize),
    Malformed,
    OutOfTokens,
    Failed,
    /// The widget was reset while the request was in flight.
    Discarded,
}

/// Owns the widget state signal and the backend handle.
#[derive(Clone)]
pub struct Shell<B> {
    config: Arc<WidgetConfig>,
    state: RwSignal<WidgetState>,
    backend: B,
}

impl<B: Backend> Shell<B> {
    pub fn new(config: WidgetConfig, backend: B, theme: Theme) -> Self {
        let state = RwSignal::new(WidgetState::new(&config.welcome_text, theme, now_ms()));
        Self { config: Arc::new(config), state, backend }
    }

    /// Read-only handle for rendering.
    pub fn state(&self) -> ReadSignal<WidgetState> {
        self.state.read_only()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        self.state.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    fn converse_request(&self, feature: FeatureType, input: String, is_generation: bool) -> ConverseRequest {
        ConverseRequest {
            account_id: self.config.account_id.clone(),
            feature_type: feature,
            user_input: input,
            is_generation_request: is_generation,
        }
    }

    // =========================================================================
    // CHROME
    // =========================================================================

    /// Launcher click. Opening refreshes the balance and, when the FAQ tab is
    /// the landing tab, loads the FAQ.
    pub async fn toggle_open(&self) {
        let opened = self
            .write(|s| {
                let resuming = s.quiz.session().is_some();
                s.ui.toggle_open(resuming)
            })
            .unwrap_or(false);
        if !opened {
            return;
        }
        self.refresh_balance().await;
        if self.read(|s| s.ui.active_tab == Tab::Faq).unwrap_or(false) {
            self.load_faq().await;
        }
    }

    /// Switch tabs. Other panels' state is never touched.
    pub async fn select_tab(&self, tab: Tab) {
        self.write(|s| s.ui.active_tab = tab);
        if tab == Tab::Faq {
            self.load_faq().await;
        }
    }

    pub fn toggle_theme(&self) {
        if let Some(next) = self.write(|s| s.ui.toggle_theme()) {
            theme::persist(next);
        }
    }

    /// Clear transcript, quiz, and FAQ expansion. The token balance stays.
    pub fn reset(&self) {
        let now = now_ms();
        self.write(|s| s.reset(&self.config.welcome_text, now));
    }

    // =========================================================================
    // TOKEN GUARD
    // =========================================================================

    /// Re-read the balance from the backend. Coalesces with a refresh already
    /// in flight; a failure keeps the previous balance.
    pub async fn refresh_balance(&self) -> RefreshOutcome {
        if !self.write(|s| s.tokens.begin_refresh()).unwrap_or(false) {
            return RefreshOutcome::Skipped;
        }
        match self.backend.balance(&self.config.account_id).await {
            Ok(balance) => {
                let now = now_ms();
                self.write(|s| {
                    s.tokens.apply_balance(balance, now);
                    s.tokens.available_tokens
                })
                .map_or(RefreshOutcome::Skipped, RefreshOutcome::Updated)
            }
            Err(e) => {
                leptos::logging::warn!("balance refresh failed: {e}");
                self.write(|s| s.tokens.refresh_failed());
                RefreshOutcome::Failed
            }
        }
    }

    /// Record consumption after a successful call, then re-derive the balance
    /// from the backend ledger. Runs after the triggering action has already
    /// updated its own UI.
    pub async fn report_usage(&self, feature: FeatureType, tokens_used: Option<u64>) {
        if let Some(tokens_used) = tokens_used.filter(|n| *n > 0) {
            let request = UsageRequest {
                account_id: self.config.account_id.clone(),
                feature_type: feature,
                tokens_used,
            };
            if let Err(e) = self.backend.report_usage(&request).await {
                leptos::logging::warn!("usage report failed: {e}");
            }
        }
        self.refresh_balance().await;
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    /// Send a chat message: gate, optimistic append, request, then reply.
    pub async fn send_chat(&self, text: &str) -> SendOutcome {
        let now = now_ms();
        let started = self.write(|s| {
            s.chat.check_send(text).map_err(SendOutcome::Rejected)?;
            if !s.tokens.can_spend() {
                s.tokens.mark_exhausted();
                return Err(SendOutcome::Blocked);
            }
            let input = s.chat.begin_send(text, now).map_err(SendOutcome::Rejected)?;
            Ok((input, s.epoch))
        });
        let (input, epoch) = match started {
            Some(Ok(started)) => started,
            Some(Err(outcome)) => return outcome,
            None => return SendOutcome::Failed,
        };

        let request = self.converse_request(FeatureType::Chat, input, false);
        let result = self.backend.converse(&request).await;
        let now = now_ms();

        match result {
            Ok(response) => {
                self.write(|s| {
                    s.chat.finish_send();
                    if s.epoch == epoch {
                        s.chat.push(Origin::Assistant, response.content, now);
                    }
                });
                self.report_usage(FeatureType::Chat, response.tokens_used).await;
                SendOutcome::Delivered
            }
            Err(ApiError::InsufficientTokens) => {
                self.write(|s| {
                    s.chat.finish_send();
                    s.tokens.mark_exhausted();
                    if s.epoch == epoch {
                        s.chat.push(Origin::Assistant, INSUFFICIENT_TOKENS_REPLY, now);
                    }
                });
                SendOutcome::OutOfTokens
            }
            Err(e) => {
                leptos::logging::warn!("chat request failed: {e}");
                self.write(|s| {
                    s.chat.finish_send();
                    if s.epoch == epoch {
                        s.chat.push(Origin::Assistant, FAILURE_REPLY, now);
                    }
                });
                SendOutcome::Failed
            }
        }
    }

    // =========================================================================
    // QUIZ
    // =========================================================================

    pub fn update_quiz_form(&self, f: impl FnOnce(&mut QuizForm)) {
        self.write(|s| f(&mut s.quiz.form));
    }

    /// Submit the generation form. The request is narrated in the transcript
    /// before it is sent; the outcome is narrated when it resolves.
    pub async fn generate_quiz(&self) -> GenerateOutcome {
        let now = now_ms();
        let started = self.write(|s| {
            let request = s.quiz.form.validate().map_err(|e| {
                s.quiz.notice = Some(e.to_string());
                GenerateOutcome::Invalid(e)
            })?;
            if s.quiz.phase != QuizPhase::Idle {
                return Err(GenerateOutcome::Busy);
            }
            if !s.tokens.can_spend() {
                s.tokens.mark_exhausted();
                return Err(GenerateOutcome::Blocked);
            }
            s.quiz.begin_generation();
            let narration = request.narration();
            s.chat.push(Origin::User, narration.clone(), now);
            Ok((request, narration, s.epoch))
        });
        let (request, narration, epoch) = match started {
            Some(Ok(started)) => started,
            Some(Err(outcome)) => return outcome,
            None => return GenerateOutcome::Failed,
        };

        let converse = self.converse_request(FeatureType::Quiz, narration, true);
        let result = self.backend.converse(&converse).await;
        let now = now_ms();

        match result {
            Ok(response) => {
                let parsed = parse_quiz(&response.content);
                let outcome = self
                    .write(|s| {
                        if s.epoch != epoch {
                            return GenerateOutcome::Discarded;
                        }
                        match parsed {
                            Ok(questions) => {
                                let count = questions.len();
                                s.chat.push(Origin::Assistant, request.ready_message(count), now);
                                s.quiz.generation_succeeded(QuizSession::new(request.topic, questions));
                                s.ui.active_tab = Tab::Quiz;
                                GenerateOutcome::Ready(count)
                            }
                            Err(e) => {
                                leptos::logging::warn!("quiz payload rejected: {e}");
                                s.chat.push(Origin::Assistant, MALFORMED_QUIZ_REPLY, now);
                                s.quiz.generation_failed(GENERATION_FAILED_NOTICE);
                                GenerateOutcome::Malformed
                            }
                        }
                    })
                    .unwrap_or(GenerateOutcome::Discarded);
                self.report_usage(FeatureType::Quiz, response.tokens_used).await;
                outcome
            }
            Err(ApiError::InsufficientTokens) => self
                .write(|s| {
                    s.tokens.mark_exhausted();
                    if s.epoch != epoch {
                        return GenerateOutcome::Discarded;
                    }
                    s.chat.push(Origin::Assistant, INSUFFICIENT_TOKENS_REPLY, now);
                    s.quiz.generation_failed(OUT_OF_TOKENS_NOTICE);
                    GenerateOutcome::OutOfTokens
                })
                .unwrap_or(GenerateOutcome::Discarded),
            Err(e) => {
                leptos::logging::warn!("quiz generation failed: {e}");
                self.write(|s| {
                    if s.epoch != epoch {
                        return GenerateOutcome::Discarded;
                    }
                    s.chat.push(Origin::Assistant, FAILURE_REPLY, now);
                    s.quiz.generation_failed(GENERATION_FAILED_NOTICE);
                    GenerateOutcome::Failed
                })
                .unwrap_or(GenerateOutcome::Discarded)
            }
        }
    }

    /// Choose `option` for `question`. A no-op once the quiz is submitted.
    pub fn select_option(&self, question: usize, option: usize) -> bool {
        self.write(|s| s.quiz.session_mut().is_some_and(|session| session.select(question, option)))
            .unwrap_or(false)
    }

    /// Grade the active quiz.
    pub fn submit_quiz(&self) -> Option<usize> {
        self.write(|s| s.quiz.session_mut().map(QuizSession::submit)).flatten()
    }

    /// Discard the active quiz and show the generation form.
    pub fn new_test(&self) {
        self.write(|s| s.quiz.new_test());
    }

    // =========================================================================
    // FAQ
    // =========================================================================

    /// Load the FAQ index once per session. Failure leaves the panel in its
    /// "unavailable" placeholder.
    pub async fn load_faq(&self) {
        if !self.write(|s| s.faq.begin_load()).unwrap_or(false) {
            return;
        }
        let entries = match self.backend.faq(&self.config.account_id, FeatureType::Faq).await {
            Ok(entries) => Some(entries),
            Err(e) => {
                leptos::logging::warn!("FAQ load failed: {e}");
                None
            }
        };
        self.write(|s| s.faq.finish_load(entries));
    }

    pub fn toggle_faq(&self, index: usize) {
        self.write(|s| s.faq.toggle(index));
    }

    pub fn set_faq_filter(&self, text: String) {
        self.write(|s| s.faq.set_filter(text));
    }
}
