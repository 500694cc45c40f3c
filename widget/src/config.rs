//! Embed-time configuration.
//!
//! The host page supplies one JSON payload in a `data-widget-config`
//! attribute. It is parsed once into an immutable [`WidgetConfig`]; unknown
//! keys, missing required keys, and invalid values are rejected so the widget
//! never renders half-configured.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Attribute on the embed tag that carries the JSON payload.
pub const CONFIG_ATTRIBUTE: &str = "data-widget-config";

pub const DEFAULT_DISPLAY_NAME: &str = "Assistant";
pub const DEFAULT_WELCOME_TEXT: &str = "Hi! Ask me anything, generate a practice quiz, or browse the FAQ.";
pub const DEFAULT_ACCENT_COLOR: &str = "#4f46e5";

/// Error returned by [`WidgetConfig::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No element on the page carries the configuration attribute.
    #[error("no element with a data-widget-config attribute found")]
    NotEmbedded,
    /// The payload is not valid JSON or has unknown keys.
    #[error("invalid widget config JSON: {0}")]
    Json(String),
    #[error("widget config is missing required field `{0}`")]
    Missing(&'static str),
    #[error("widget config field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
    /// The owning account is not authorized to embed the widget.
    #[error("widget is not authorized for this account")]
    Unauthorized,
}

/// Screen corner the launcher is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Corner {
    /// Modifier class suffix used by the stylesheet.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
        }
    }
}

/// Validated, immutable widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub account_id: String,
    pub authorized: bool,
    pub display_name: String,
    pub welcome_text: String,
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub accent_color: String,
    pub corner: Corner,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    account_id: Option<String>,
    authorized: Option<bool>,
    backend_url: Option<String>,
    display_name: Option<String>,
    welcome_text: Option<String>,
    accent_color: Option<String>,
    corner: Option<Corner>,
}

impl WidgetConfig {
    /// Parse and validate the embed payload.
    ///
    /// Required: `accountId`, `authorized`, `backendUrl`.
    /// Optional: `displayName`, `welcomeText`, `accentColor`, `corner`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed JSON, unknown keys, missing
    /// required keys, invalid values, or an unauthorized account.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(raw).map_err(|e| ConfigError::Json(e.to_string()))?;

        let account_id = raw.account_id.ok_or(ConfigError::Missing("accountId"))?;
        let authorized = raw.authorized.ok_or(ConfigError::Missing("authorized"))?;
        let backend_url = raw.backend_url.ok_or(ConfigError::Missing("backendUrl"))?;

        let account_id = validate_account_id(&account_id)?;
        if !authorized {
            return Err(ConfigError::Unauthorized);
        }
        let backend_url = validate_backend_url(&backend_url)?;
        let display_name = optional_text("displayName", raw.display_name, DEFAULT_DISPLAY_NAME)?;
        let welcome_text = optional_text("welcomeText", raw.welcome_text, DEFAULT_WELCOME_TEXT)?;
        let accent_color = match raw.accent_color {
            Some(color) => validate_accent_color(&color)?,
            None => DEFAULT_ACCENT_COLOR.to_owned(),
        };

        Ok(Self {
            account_id,
            authorized,
            display_name,
            welcome_text,
            backend_url,
            accent_color,
            corner: raw.corner.unwrap_or_default(),
        })
    }

    /// Parse the value of the configuration attribute, if one was found.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotEmbedded`] when `raw` is `None`, otherwise as
    /// [`WidgetConfig::from_json`].
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_json(raw.ok_or(ConfigError::NotEmbedded)?)
    }

    /// Where the "purchase more" call-to-action points.
    #[must_use]
    pub fn billing_url(&self) -> String {
        format!("{}/billing", self.backend_url)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_owned() }
}

fn validate_account_id(raw: &str) -> Result<String, ConfigError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(invalid("accountId", "must not be empty"));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(invalid("accountId", "may only contain letters, digits, '-' and '_'"));
    }
    Ok(id.to_owned())
}

fn validate_backend_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| invalid("backendUrl", "must start with http:// or https://"))?;
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(invalid("backendUrl", "must name a host"));
    }
    Ok(url.to_owned())
}

fn validate_accent_color(raw: &str) -> Result<String, ConfigError> {
    let color = raw.trim();
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| invalid("accentColor", "must be a #rgb or #rrggbb hex color"))?;
    if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("accentColor", "must be a #rgb or #rrggbb hex color"));
    }
    Ok(color.to_ascii_lowercase())
}

fn optional_text(field: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    match raw {
        None => Ok(default.to_owned()),
        Some(text) if text.trim().is_empty() => Err(invalid(field, "must not be blank when provided")),
        Some(text) => Ok(text.trim().to_owned()),
    }
}
