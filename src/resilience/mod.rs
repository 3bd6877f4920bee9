//! Resilience for the Dotykacka client.
//!
//! Access tokens are reused until a call fails; the failing call refreshes
//! the token once and tries again.

mod token_retry;

pub use token_retry::{RefreshMode, RetryPolicy, RetryTrigger, TokenRefreshExecutor};
