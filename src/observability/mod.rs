//! Observability module for the Dotykacka client.
//!
//! Structured logging through `tracing` and a small set of counters around
//! the token lifecycle.

mod logging;
mod metrics;

pub use logging::{log_request, log_response, LogFormat, LogLevel, LoggingConfig};
pub use metrics::{ClientMetrics, MetricsSnapshot};
