//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the configuration and an in-memory token ledger keyed by account id.
//! Accounts are created lazily at the configured starting balance the first
//! time they are seen.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum; all inner fields are
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    ledger: Arc<RwLock<HashMap<String, u64>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), ledger: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Current balance of `account_id`.
    pub async fn balance(&self, account_id: &str) -> u64 {
        let ledger = self.ledger.read().await;
        ledger.get(account_id).copied().unwrap_or(self.config.starting_tokens)
    }

    /// Deduct `tokens` from `account_id`, flooring at zero. Returns the new
    /// balance.
    pub async fn spend(&self, account_id: &str, tokens: u64) -> u64 {
        let mut ledger = self.ledger.write().await;
        let balance = ledger.entry(account_id.to_owned()).or_insert(self.config.starting_tokens);
        *balance = balance.saturating_sub(tokens);
        *balance
    }

    /// Overwrite the balance of `account_id`.
    pub async fn set_balance(&self, account_id: &str, tokens: u64) {
        self.ledger.write().await.insert(account_id.to_owned(), tokens);
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// An `AppState` with default config and the given starting balance.
    #[must_use]
    pub fn test_app_state(starting_tokens: u64) -> AppState {
        AppState::new(ServerConfig { starting_tokens, ..ServerConfig::default() })
    }
}
