//! HTTP implementation of [`Backend`].
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call returns [`ApiError::Unavailable`], since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, unexpected statuses, and undecodable bodies are all
//! mapped to [`ApiError`] here so callers never see a raw `gloo-net` error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use protocol::{ConverseRequest, ConverseResponse, FaqEntry, FeatureType, UsageRequest};

use super::backend::{ApiError, Backend};
use crate::config::WidgetConfig;

/// Browser HTTP client for the widget backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self { base_url: config.backend_url.clone() }
    }

    #[cfg(any(test, feature = "csr"))]
    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
/// Map a non-2xx `converse` status. 402 is the one status with its own meaning.
fn converse_status_error(status: u16) -> ApiError {
    if status == protocol::STATUS_INSUFFICIENT_TOKENS {
        ApiError::InsufficientTokens
    } else {
        ApiError::Status(status)
    }
}

#[cfg(feature = "csr")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "csr")]
fn decode_error(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

impl Backend for HttpBackend {
    async fn balance(&self, account_id: &str) -> Result<i64, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&protocol::balance_path(account_id));
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(network_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: protocol::BalanceResponse = resp.json().await.map_err(decode_error)?;
            Ok(body.available_tokens)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = account_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn report_usage(&self, request: &UsageRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&protocol::usage_path());
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(decode_error)?
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn converse(&self, request: &ConverseRequest) -> Result<ConverseResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&protocol::converse_path());
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(decode_error)?
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(converse_status_error(resp.status()));
            }
            resp.json::<ConverseResponse>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn faq(&self, account_id: &str, feature: FeatureType) -> Result<Vec<FaqEntry>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&protocol::faq_path(account_id, feature));
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(network_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: protocol::FaqResponse = resp.json().await.map_err(decode_error)?;
            Ok(body.questions)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (account_id, feature);
            Err(ApiError::Unavailable)
        }
    }
}
