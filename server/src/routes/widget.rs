//! Widget backend contract: balance, usage, converse, and FAQ.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`], rendered as a status code plus a JSON
//! `{"error": ...}` body. Token exhaustion is `402 Payment Required`, the one
//! status the widget treats specially.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use protocol::{
    BalanceResponse, ConverseRequest, ConverseResponse, ErrorResponse, FaqResponse, FeatureType, UsageRequest,
};
use serde::Deserialize;

use crate::fixtures;
use crate::state::AppState;

/// Errors returned by widget endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("insufficient tokens")]
    InsufficientTokens,
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InsufficientTokens => StatusCode::PAYMENT_REQUIRED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Routes mounted under `protocol::API_PREFIX`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/balance/{account_id}", get(balance))
        .route("/usage", post(usage))
        .route("/converse", post(converse))
        .route("/faq/{account_id}", get(faq))
}

fn wire_balance(tokens: u64) -> BalanceResponse {
    BalanceResponse { available_tokens: i64::try_from(tokens).unwrap_or(i64::MAX) }
}

/// `GET /api/widget/balance/:account_id`: current ledger balance.
pub async fn balance(State(state): State<AppState>, Path(account_id): Path<String>) -> Json<BalanceResponse> {
    Json(wire_balance(state.balance(&account_id).await))
}

/// `POST /api/widget/usage`: deduct reported consumption.
pub async fn usage(
    State(state): State<AppState>,
    Json(body): Json<UsageRequest>,
) -> Result<Json<BalanceResponse>, ApiError> {
    if body.account_id.trim().is_empty() {
        return Err(ApiError::BadRequest("accountId must not be empty"));
    }
    let remaining = state.spend(&body.account_id, body.tokens_used).await;
    tracing::debug!(
        account_id = %body.account_id,
        feature = body.feature_type.as_str(),
        tokens_used = body.tokens_used,
        remaining,
        "usage recorded"
    );
    Ok(Json(wire_balance(remaining)))
}

/// `POST /api/widget/converse`: chat turn or quiz generation.
pub async fn converse(
    State(state): State<AppState>,
    Json(body): Json<ConverseRequest>,
) -> Result<Json<ConverseResponse>, ApiError> {
    if body.user_input.trim().is_empty() {
        return Err(ApiError::BadRequest("userInput must not be empty"));
    }
    if state.balance(&body.account_id).await == 0 {
        tracing::info!(account_id = %body.account_id, "converse refused: balance exhausted");
        return Err(ApiError::InsufficientTokens);
    }

    let content = if body.is_generation_request {
        fixtures::quiz_reply(&body.user_input).map_err(|e| ApiError::Internal(e.to_string()))?
    } else {
        fixtures::chat_reply(body.feature_type, &body.user_input)
    };

    Ok(Json(ConverseResponse { content, tokens_used: Some(state.config.tokens_per_reply) }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqQuery {
    pub feature_type: Option<FeatureType>,
}

/// `GET /api/widget/faq/:account_id?featureType=faq`: the FAQ index.
pub async fn faq(Path(account_id): Path<String>, Query(query): Query<FaqQuery>) -> Json<FaqResponse> {
    tracing::debug!(%account_id, feature = ?query.feature_type, "faq requested");
    Json(FaqResponse { questions: fixtures::faq_entries() })
}
