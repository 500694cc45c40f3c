//! Dev server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WIDGET_PKG_DIR: &str = "widget/pkg";
pub const DEFAULT_DEMO_ACCOUNT_ID: &str = "demo";
pub const DEFAULT_STARTING_TOKENS: u64 = 5000;
pub const DEFAULT_TOKENS_PER_REPLY: u64 = 25;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    /// A variable was set but empty.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the `wasm-bindgen` output for the widget.
    pub widget_pkg_dir: PathBuf,
    /// Origin the demo page points the widget at.
    pub public_url: String,
    pub demo_account_id: String,
    /// Balance a previously unseen account starts with.
    pub starting_tokens: u64,
    /// `tokensUsed` reported on every `converse` reply.
    pub tokens_per_reply: u64,
}

impl ServerConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WIDGET_PKG_DIR`: default `widget/pkg`
    /// - `PUBLIC_URL`: default `http://localhost:{PORT}`
    /// - `DEMO_ACCOUNT_ID`: default `demo`
    /// - `DEMO_STARTING_TOKENS`: default 5000
    /// - `DEMO_TOKENS_PER_REPLY`: default 25
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparsable numbers or empty strings.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// As [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let widget_pkg_dir = PathBuf::from(non_empty(&lookup, "WIDGET_PKG_DIR", DEFAULT_WIDGET_PKG_DIR)?);
        let public_url = non_empty(&lookup, "PUBLIC_URL", &format!("http://localhost:{port}"))?
            .trim_end_matches('/')
            .to_owned();
        let demo_account_id = non_empty(&lookup, "DEMO_ACCOUNT_ID", DEFAULT_DEMO_ACCOUNT_ID)?;
        let starting_tokens = parse_number(&lookup, "DEMO_STARTING_TOKENS", DEFAULT_STARTING_TOKENS)?;
        let tokens_per_reply = parse_number(&lookup, "DEMO_TOKENS_PER_REPLY", DEFAULT_TOKENS_PER_REPLY)?;

        Ok(Self { port, widget_pkg_dir, public_url, demo_account_id, starting_tokens, tokens_per_reply })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            widget_pkg_dir: PathBuf::from(DEFAULT_WIDGET_PKG_DIR),
            public_url: format!("http://localhost:{DEFAULT_PORT}"),
            demo_account_id: DEFAULT_DEMO_ACCOUNT_ID.to_owned(),
            starting_tokens: DEFAULT_STARTING_TOKENS,
            tokens_per_reply: DEFAULT_TOKENS_PER_REPLY,
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    match lookup(var) {
        None => Ok(default.to_owned()),
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(raw) => Ok(raw.trim().to_owned()),
    }
}
