//! Token balance cache and spend gate.
//!
//! DESIGN
//! ======
//! The balance is a read-through cache of the backend ledger. It is only ever
//! written by a completed refresh; there is no local subtraction. The
//! `check_in_flight` flag coalesces duplicate refresh triggers, and the
//! `exhausted` flag records a backend "insufficient tokens" verdict until a
//! refresh reports a positive balance again.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

/// Balances below this (but above zero) show the low-balance warning.
pub const LOW_BALANCE_THRESHOLD: u64 = 200;

/// Cached token balance and refresh bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenState {
    pub available_tokens: u64,
    /// Milliseconds since the Unix epoch of the last successful refresh.
    pub last_checked_at: Option<f64>,
    pub check_in_flight: bool,
    pub exhausted: bool,
}

/// Presentation derived from [`TokenState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    /// No refresh has completed yet.
    Unknown,
    Healthy,
    /// Positive but under [`LOW_BALANCE_THRESHOLD`].
    Low,
    /// Zero balance or a backend exhaustion verdict; spending is suppressed.
    Exhausted,
}

impl TokenState {
    /// Whether a token-consuming request may be issued.
    #[must_use]
    pub fn can_spend(&self) -> bool {
        !self.exhausted && self.available_tokens > 0
    }

    #[must_use]
    pub fn status(&self) -> TokenStatus {
        if self.exhausted {
            return TokenStatus::Exhausted;
        }
        if self.last_checked_at.is_none() {
            return TokenStatus::Unknown;
        }
        match self.available_tokens {
            0 => TokenStatus::Exhausted,
            n if n < LOW_BALANCE_THRESHOLD => TokenStatus::Low,
            _ => TokenStatus::Healthy,
        }
    }

    /// Claim the refresh slot. Returns `false` when a refresh is already in
    /// flight, in which case the caller must not issue a request.
    pub fn begin_refresh(&mut self) -> bool {
        if self.check_in_flight {
            return false;
        }
        self.check_in_flight = true;
        true
    }

    /// Record a successful balance query and release the refresh slot.
    pub fn apply_balance(&mut self, balance: i64, now: f64) {
        self.check_in_flight = false;
        self.available_tokens = u64::try_from(balance).unwrap_or(0);
        self.last_checked_at = Some(now);
        if self.available_tokens > 0 {
            self.exhausted = false;
        }
    }

    /// Release the refresh slot after a failed query, keeping the stale balance.
    pub fn refresh_failed(&mut self) {
        self.check_in_flight = false;
    }

    /// Switch into the zero-balance presentation.
    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
