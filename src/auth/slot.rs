//! The single slot holding the latest in-flight or resolved access token.

use futures::future::{BoxFuture, FutureExt, Shared};
use secrecy::SecretString;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{AccessToken, TokenProvider};
use crate::errors::{DotykackaError, DotykackaResult};
use crate::observability::ClientMetrics;
use crate::resilience::RefreshMode;

type TokenFuture = Shared<BoxFuture<'static, DotykackaResult<AccessToken>>>;

struct SlotState {
    generation: u64,
    token: TokenFuture,
}

/// Holds one shared token future, overwritten on every refresh.
///
/// Waiters clone the future and await it outside the lock, so a token value
/// captured by one call is never affected by a later overwrite.
pub struct TokenSlot {
    provider: Arc<dyn TokenProvider>,
    cloud_id: u64,
    refresh_token: SecretString,
    metrics: Arc<ClientMetrics>,
    state: Mutex<SlotState>,
}

impl TokenSlot {
    /// Creates the slot and starts the first token fetch.
    ///
    /// Inside a Tokio runtime the fetch is spawned immediately; otherwise it
    /// starts on the first await. Never blocks.
    pub fn new(
        provider: Arc<dyn TokenProvider>,
        cloud_id: u64,
        refresh_token: SecretString,
        metrics: Arc<ClientMetrics>,
    ) -> Self {
        let token = issue(&provider, cloud_id, &refresh_token, &metrics);

        Self {
            provider,
            cloud_id,
            refresh_token,
            metrics,
            state: Mutex::new(SlotState {
                generation: 0,
                token,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of times the slot has been replaced.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Awaits the current slot contents.
    ///
    /// Returns the generation that was read along with the result.
    pub async fn current(&self) -> (u64, DotykackaResult<AccessToken>) {
        let (generation, token) = {
            let state = self.lock();
            (state.generation, state.token.clone())
        };

        (generation, token.await)
    }

    /// Replaces the slot with a fresh fetch and awaits it.
    ///
    /// With [`RefreshMode::Coalesce`], a caller that read generation
    /// `seen_generation` reuses the slot if someone else replaced it since.
    pub async fn refresh(
        &self,
        seen_generation: u64,
        mode: RefreshMode,
    ) -> DotykackaResult<AccessToken> {
        let token = {
            let mut state = self.lock();

            if mode == RefreshMode::Coalesce && state.generation != seen_generation {
                tracing::debug!(
                    generation = state.generation,
                    "Reusing access token refresh already in flight"
                );
                state.token.clone()
            } else {
                let token = issue(
                    &self.provider,
                    self.cloud_id,
                    &self.refresh_token,
                    &self.metrics,
                );
                state.generation += 1;
                state.token = token.clone();
                self.metrics.record_token_refresh();
                token
            }
        };

        token.await
    }
}

fn issue(
    provider: &Arc<dyn TokenProvider>,
    cloud_id: u64,
    refresh_token: &SecretString,
    metrics: &ClientMetrics,
) -> TokenFuture {
    metrics.record_token_fetch();

    let provider = Arc::clone(provider);
    let refresh_token = refresh_token.clone();
    let fetch = async move {
        provider
            .fetch_access_token(cloud_id, &refresh_token)
            .await
    };

    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            let task = handle.spawn(fetch);
            async move {
                task.await.unwrap_or_else(|e| {
                    Err(DotykackaError::Auth {
                        message: format!("Access token task failed: {}", e),
                    })
                })
            }
            .boxed()
            .shared()
        }
        Err(_) => fetch.boxed().shared(),
    }
}

impl std::fmt::Debug for TokenSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSlot")
            .field("cloud_id", &self.cloud_id)
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}
