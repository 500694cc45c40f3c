//! Development backend for the assistant widget.
//!
//! Serves the compiled widget bundle, a demo host page that embeds it, and an
//! in-memory implementation of the widget backend contract.

mod config;
mod fixtures;
mod routes;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if !config.widget_pkg_dir.is_dir() {
        tracing::warn!(
            dir = %config.widget_pkg_dir.display(),
            "widget bundle directory not found; build the widget with wasm-pack first"
        );
    }

    let port = config.port;
    tracing::info!(
        public_url = %config.public_url,
        demo_account = %config.demo_account_id,
        starting_tokens = config.starting_tokens,
        "widget dev server configured"
    );

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!(%port, "widget dev server listening");
    axum::serve(listener, app).await
}
