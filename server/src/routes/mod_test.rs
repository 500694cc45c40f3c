use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get_text(app(test_app_state(10)), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn demo_page_embeds_escaped_config() {
    let (status, body) = get_text(app(test_app_state(10)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-widget-config='{&quot;accountId&quot;:&quot;demo&quot;"));
    assert!(body.contains("&quot;backendUrl&quot;:&quot;http://localhost:3000&quot;"));
    assert!(!body.contains("{{WIDGET_CONFIG}}"));
}

#[tokio::test]
async fn api_routes_are_nested_under_prefix() {
    let (status, body) = get_text(app(test_app_state(42)), &protocol::balance_path("demo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"availableTokens":42}"#);
}

#[tokio::test]
async fn billing_refill_restores_starting_balance() {
    let state = test_app_state(500);
    state.set_balance("demo", 0).await;

    let response = app(state.clone())
        .oneshot(Request::builder().method("POST").uri("/billing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.balance("demo").await, 500);

    let (_, page) = get_text(app(state), "/billing").await;
    assert!(page.contains("<strong>500</strong>"));
}

#[test]
fn attribute_escape_covers_quotes_and_markup() {
    assert_eq!(attribute_escape(r#"a'b"c<d>&"#), "a&#39;b&quot;c&lt;d&gt;&amp;");
}
