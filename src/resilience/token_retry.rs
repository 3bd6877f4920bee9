//! Refresh-once-and-retry around every API call.

use std::future::Future;
use std::sync::Arc;

use crate::auth::{AccessToken, TokenSlot};
use crate::errors::{DotykackaError, DotykackaResult};
use crate::observability::ClientMetrics;

/// Which failures trigger a token refresh and a second attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryTrigger {
    /// Every failure, including ones unrelated to the token.
    #[default]
    AnyFailure,
    /// Only a failed token slot or an HTTP 401/403 answer.
    AuthFailureOnly,
}

impl RetryTrigger {
    fn should_retry(self, error: &DotykackaError) -> bool {
        match self {
            RetryTrigger::AnyFailure => true,
            RetryTrigger::AuthFailureOnly => error.is_auth_failure(),
        }
    }
}

/// How concurrent refreshes interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Each failing call fetches its own token and overwrites the slot.
    #[default]
    Independent,
    /// A call reuses a refresh started after it read the slot.
    Coalesce,
}

/// Token refresh and retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// Failures that trigger the second attempt.
    pub trigger: RetryTrigger,
    /// Refresh coalescing.
    pub refresh: RefreshMode,
}

impl RetryPolicy {
    /// Sets the retry trigger.
    pub fn with_trigger(mut self, trigger: RetryTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Sets the refresh mode.
    pub fn with_refresh(mut self, refresh: RefreshMode) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Runs API calls with the current token, refreshing and retrying once.
pub struct TokenRefreshExecutor {
    slot: Arc<TokenSlot>,
    policy: RetryPolicy,
    metrics: Arc<ClientMetrics>,
}

impl TokenRefreshExecutor {
    /// Creates an executor over `slot`.
    pub fn new(slot: Arc<TokenSlot>, policy: RetryPolicy, metrics: Arc<ClientMetrics>) -> Self {
        Self {
            slot,
            policy,
            metrics,
        }
    }

    /// Returns the token slot.
    pub fn slot(&self) -> &TokenSlot {
        &self.slot
    }

    /// Executes `call` at most twice.
    ///
    /// The first attempt uses the token in the slot; a slot holding a failed
    /// fetch counts as a failed attempt. If the policy allows, the slot is
    /// refreshed and `call` runs once more with the new token. That second
    /// result is returned as is.
    pub async fn execute<F, Fut, T>(&self, operation: &str, call: F) -> DotykackaResult<T>
    where
        F: Fn(AccessToken) -> Fut + Send,
        Fut: Future<Output = DotykackaResult<T>> + Send,
        T: Send,
    {
        let (generation, token) = self.slot.current().await;

        let error = match token {
            Ok(token) => match call(token).await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            },
            Err(error) => error,
        };

        if !self.policy.trigger.should_retry(&error) {
            self.metrics.record_failure();
            return Err(error);
        }

        tracing::info!(
            operation,
            error = %error,
            "Call failed, refreshing access token and retrying once"
        );
        self.metrics.record_retry();

        let result = match self.slot.refresh(generation, self.policy.refresh).await {
            Ok(token) => call(token).await,
            Err(error) => Err(error),
        };

        if let Err(error) = &result {
            tracing::warn!(operation, error = %error, "Retry failed");
            self.metrics.record_failure();
        }

        result
    }
}

impl std::fmt::Debug for TokenRefreshExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRefreshExecutor")
            .field("slot", &self.slot)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
