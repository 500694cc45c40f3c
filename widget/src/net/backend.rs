//! Backend seam used by the shell.
//!
//! DESIGN
//! ======
//! The shell is generic over [`Backend`] so the state machines can be driven
//! against a scripted backend in native tests and against `HttpBackend` in
//! the browser. Every failure is folded into [`ApiError`] at this boundary.

#![allow(async_fn_in_trait)]

use protocol::{ConverseRequest, ConverseResponse, FaqEntry, FeatureType, UsageRequest};

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status other than token exhaustion.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// `converse` answered 402.
    #[error("insufficient tokens")]
    InsufficientTokens,
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No browser transport in this build.
    #[error("backend not available outside the browser")]
    Unavailable,
}

/// The four endpoints of the widget backend contract.
pub trait Backend: Clone + 'static {
    /// Current balance for `account_id`.
    async fn balance(&self, account_id: &str) -> Result<i64, ApiError>;

    /// Report consumed tokens. Callers ignore everything but success/failure.
    async fn report_usage(&self, request: &UsageRequest) -> Result<(), ApiError>;

    /// A chat turn or a quiz generation request.
    async fn converse(&self, request: &ConverseRequest) -> Result<ConverseResponse, ApiError>;

    /// The FAQ index for `account_id`.
    async fn faq(&self, account_id: &str, feature: FeatureType) -> Result<Vec<FaqEntry>, ApiError>;
}
