//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the widget backend contract under `/api/widget`, the compiled widget
//! bundle under `/pkg`, and a demo host page at `/` that embeds the widget the
//! way a third-party page would.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod widget;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use protocol::API_PREFIX;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const DEMO_PAGE: &str = include_str!("../../static/demo.html");
const BILLING_PAGE: &str = include_str!("../../static/billing.html");

/// Full application router.
pub fn app(state: AppState) -> Router {
    // The widget runs on third-party origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let pkg = ServeDir::new(&state.config.widget_pkg_dir);

    Router::new()
        .route("/", get(demo_page))
        .route("/billing", get(billing_page).post(refill_demo_balance))
        .route("/healthz", get(healthz))
        .nest(API_PREFIX, widget::routes())
        .nest_service("/pkg", pkg)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Demo host page with the embed tag filled in from config.
async fn demo_page(State(state): State<AppState>) -> Html<String> {
    let embed = serde_json::json!({
        "accountId": state.config.demo_account_id,
        "authorized": true,
        "displayName": "Study Assistant",
        "backendUrl": state.config.public_url,
    });
    Html(DEMO_PAGE.replace("{{WIDGET_CONFIG}}", &attribute_escape(&embed.to_string())))
}

async fn billing_page(State(state): State<AppState>) -> Html<String> {
    let balance = state.balance(&state.config.demo_account_id).await;
    Html(render_billing(&state, balance, false))
}

/// Reset the demo account to its starting balance.
async fn refill_demo_balance(State(state): State<AppState>) -> Html<String> {
    let account = &state.config.demo_account_id;
    state.set_balance(account, state.config.starting_tokens).await;
    tracing::info!(account_id = %account, tokens = state.config.starting_tokens, "demo balance refilled");
    Html(render_billing(&state, state.config.starting_tokens, true))
}

fn render_billing(state: &AppState, balance: u64, refilled: bool) -> String {
    let notice = if refilled { "<p class=\"notice\">Balance refilled.</p>" } else { "" };
    BILLING_PAGE
        .replace("{{ACCOUNT}}", &attribute_escape(&state.config.demo_account_id))
        .replace("{{BALANCE}}", &balance.to_string())
        .replace("{{NOTICE}}", notice)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Escape text for a single-quoted HTML attribute or element body.
fn attribute_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
