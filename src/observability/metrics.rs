//! Counters for the token lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory counters shared by the token slot and the call wrapper.
#[derive(Debug, Default)]
pub struct ClientMetrics {
    token_fetches: AtomicU64,
    token_refreshes: AtomicU64,
    retried_calls: AtomicU64,
    failed_calls: AtomicU64,
}

/// Point-in-time copy of [`ClientMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Token endpoint calls, including the initial one.
    pub token_fetches: u64,
    /// Slot replacements after a failed call.
    pub token_refreshes: u64,
    /// Calls that needed their second attempt.
    pub retried_calls: u64,
    /// Calls whose error reached the caller.
    pub failed_calls: u64,
}

impl ClientMetrics {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a call to the token endpoint.
    pub fn record_token_fetch(&self) {
        self.token_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a slot replacement.
    pub fn record_token_refresh(&self) {
        self.token_refreshes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a second attempt.
    pub fn record_retry(&self) {
        self.retried_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an error handed to the caller.
    pub fn record_failure(&self) {
        self.failed_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the current values.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            token_fetches: self.token_fetches.load(Ordering::Relaxed),
            token_refreshes: self.token_refreshes.load(Ordering::Relaxed),
            retried_calls: self.retried_calls.load(Ordering::Relaxed),
            failed_calls: self.failed_calls.load(Ordering::Relaxed),
        }
    }
}
