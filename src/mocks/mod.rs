//! Mock implementations for testing.

mod token;
mod transport;

pub use token::MockTokenProvider;
pub use transport::{MockResponse, MockTransport, RecordedRequest};
