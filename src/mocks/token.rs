//! Scripted token provider.

use async_trait::async_trait;
use secrecy::SecretString;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::auth::{AccessToken, TokenProvider};
use crate::errors::{DotykackaError, DotykackaResult};

/// Token provider returning scripted results in order.
///
/// Once the script is exhausted every call fails.
#[derive(Default)]
pub struct MockTokenProvider {
    script: Mutex<VecDeque<Result<String, String>>>,
    calls: AtomicUsize,
}

impl MockTokenProvider {
    /// Creates a provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends successful fetches returning `tokens` in order.
    pub fn with_tokens<I, S>(self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(tokens.into_iter().map(|t| Ok(t.into())));
        self
    }

    /// Appends one failing fetch.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(message.into()));
        self
    }

    /// Number of fetches performed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn fetch_access_token(
        &self,
        cloud_id: u64,
        _refresh_token: &SecretString,
    ) -> DotykackaResult<AccessToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(Ok(token)) => Ok(AccessToken::new(token, cloud_id)),
            Some(Err(message)) => Err(DotykackaError::Auth { message }),
            None => Err(DotykackaError::Auth {
                message: "No mock token configured".to_string(),
            }),
        }
    }
}
