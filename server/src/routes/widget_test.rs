use axum::body::{Body, Bytes, to_bytes};
use axum::http::Request;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

fn router(state: AppState) -> Router {
    Router::new().nest(protocol::API_PREFIX, routes()).with_state(state)
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

fn converse_request(input: &str, generation: bool) -> ConverseRequest {
    ConverseRequest {
        account_id: "acct".into(),
        feature_type: if generation { FeatureType::Quiz } else { FeatureType::Chat },
        user_input: input.into(),
        is_generation_request: generation,
    }
}

#[tokio::test]
async fn balance_reports_starting_tokens() {
    let state = test_app_state(1234);
    let (status, body) = send(&state, get_req(&protocol::balance_path("acct"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decode::<BalanceResponse>(&body).available_tokens, 1234);
}

#[tokio::test]
async fn usage_deducts_from_balance() {
    let state = test_app_state(100);
    let usage = UsageRequest { account_id: "acct".into(), feature_type: FeatureType::Chat, tokens_used: 40 };
    let (status, body) = send(&state, post_json(&protocol::usage_path(), &usage)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decode::<BalanceResponse>(&body).available_tokens, 60);
    assert_eq!(state.balance("acct").await, 60);
}

#[tokio::test]
async fn usage_rejects_blank_account() {
    let state = test_app_state(100);
    let usage = UsageRequest { account_id: " ".into(), feature_type: FeatureType::Chat, tokens_used: 1 };
    let (status, _) = send(&state, post_json(&protocol::usage_path(), &usage)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_converse_echoes_and_reports_usage() {
    let state = test_app_state(100);
    let (status, body) = send(&state, post_json(&protocol::converse_path(), &converse_request("hi there", false))).await;
    assert_eq!(status, StatusCode::OK);
    let reply: ConverseResponse = decode(&body);
    assert!(reply.content.contains("hi there"));
    assert_eq!(reply.tokens_used, Some(state.config.tokens_per_reply));
    // Converse itself never deducts; the widget reports usage separately.
    assert_eq!(state.balance("acct").await, 100);
}

#[tokio::test]
async fn generation_converse_returns_parseable_quiz() {
    let state = test_app_state(100);
    let request = converse_request("Generate an easy multiple-choice quiz about space.", true);
    let (status, body) = send(&state, post_json(&protocol::converse_path(), &request)).await;
    assert_eq!(status, StatusCode::OK);
    let reply: ConverseResponse = decode(&body);
    assert_eq!(protocol::parse_quiz(&reply.content).unwrap().len(), 3);
}

#[tokio::test]
async fn converse_at_zero_balance_is_payment_required() {
    let state = test_app_state(100);
    state.set_balance("acct", 0).await;
    let (status, body) = send(&state, post_json(&protocol::converse_path(), &converse_request("hi", false))).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(status.as_u16(), protocol::STATUS_INSUFFICIENT_TOKENS);
    assert_eq!(decode::<ErrorResponse>(&body).error, "insufficient tokens");
}

#[tokio::test]
async fn converse_rejects_blank_input() {
    let state = test_app_state(100);
    let (status, _) = send(&state, post_json(&protocol::converse_path(), &converse_request("   ", false))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_rejected_by_extractor() {
    let state = test_app_state(100);
    let request = Request::builder()
        .method("POST")
        .uri(protocol::converse_path())
        .header("content-type", "application/json")
        .body(Body::from(r#"{"accountId":"acct"}"#))
        .unwrap();
    let (status, _) = send(&state, request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn faq_returns_fixture_list() {
    let state = test_app_state(100);
    let (status, body) = send(&state, get_req(&protocol::faq_path("acct", FeatureType::Faq))).await;
    assert_eq!(status, StatusCode::OK);
    let faq: FaqResponse = decode(&body);
    assert_eq!(faq.questions, fixtures::faq_entries());
}

#[test]
fn api_error_maps_to_status() {
    assert_eq!(ApiError::InsufficientTokens.status(), StatusCode::PAYMENT_REQUIRED);
    assert_eq!(ApiError::BadRequest("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}
