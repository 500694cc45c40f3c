//! Shared request/response model for the widget backend contract.
//!
//! This crate owns the wire representation used by both `widget` and `server`.
//! Every endpoint gets its own typed request/response struct so malformed
//! payloads are rejected at the serde boundary instead of wherever a field
//! happens to be read.

pub mod quiz;

use serde::{Deserialize, Serialize};

pub use quiz::{QuizParseError, QuizQuestion, parse_quiz};

/// HTTP status the backend uses to signal an exhausted token balance.
pub const STATUS_INSUFFICIENT_TOKENS: u16 = 402;

/// Route prefix shared by every widget endpoint.
pub const API_PREFIX: &str = "/api/widget";

/// Product surface a request is billed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Free-form conversation.
    Chat,
    /// Generated multiple-choice tests.
    Quiz,
    /// Frequently asked questions.
    Faq,
}

impl FeatureType {
    /// Wire name used in query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Quiz => "quiz",
            Self::Faq => "faq",
        }
    }
}

/// Response body of `GET balance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Tokens the account may still spend. The backend ledger is authoritative.
    pub available_tokens: i64,
}

/// Request body of `POST usage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRequest {
    pub account_id: String,
    pub feature_type: FeatureType,
    pub tokens_used: u64,
}

/// Request body of `POST converse`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    pub account_id: String,
    pub feature_type: FeatureType,
    pub user_input: String,
    /// When true, `content` of the response must carry a quiz payload.
    pub is_generation_request: bool,
}

/// Successful response body of `POST converse`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseResponse {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
}

/// Error body returned alongside non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One question/answer pair of the FAQ index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Response body of `GET faq`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqResponse {
    #[serde(default)]
    pub questions: Vec<FaqEntry>,
}

/// `GET` path for the balance of `account_id`.
#[must_use]
pub fn balance_path(account_id: &str) -> String {
    format!("{API_PREFIX}/balance/{account_id}")
}

/// `POST` path for usage reports.
#[must_use]
pub fn usage_path() -> String {
    format!("{API_PREFIX}/usage")
}

/// `POST` path for chat turns and quiz generation.
#[must_use]
pub fn converse_path() -> String {
    format!("{API_PREFIX}/converse")
}

/// `GET` path (with query) for the FAQ index of `account_id`.
#[must_use]
pub fn faq_path(account_id: &str, feature: FeatureType) -> String {
    format!("{API_PREFIX}/faq/{account_id}?featureType={}", feature.as_str())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
