//! Mock transport for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::{DotykackaError, DotykackaResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// A recorded request for verification.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Bytes>,
}

impl RecordedRequest {
    /// Parses the body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A response with the given status and body.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: Bytes,
    },
    /// A transport failure.
    ConnectionError(String),
}

impl MockResponse {
    /// Creates a 200 response with a JSON body.
    pub fn json(body: &serde_json::Value) -> Self {
        MockResponse::Http {
            status: 200,
            body: Bytes::from(body.to_string()),
        }
    }

    /// Creates a response with an arbitrary status and body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        MockResponse::Http {
            status,
            body: Bytes::from(body.into()),
        }
    }

    /// Creates a transport failure.
    pub fn connection_error(message: impl Into<String>) -> Self {
        MockResponse::ConnectionError(message.into())
    }
}

/// Mock transport answering from per-path queues.
///
/// A request is matched against the registered paths by URL suffix, ignoring
/// the query string. Unmatched or exhausted routes answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<(String, VecDeque<MockResponse>)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for requests whose path ends with `path`.
    pub fn enqueue(&self, path: &str, response: MockResponse) {
        let mut routes = lock(&self.routes);
        match routes.iter_mut().find(|(p, _)| p == path) {
            Some((_, queue)) => queue.push_back(response),
            None => routes.push((path.to_string(), VecDeque::from([response]))),
        }
    }

    /// Gets all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the recorded requests whose path ends with `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| path_of(&r.url).ends_with(path))
            .cloned()
            .collect()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn next_response(&self, url: &str) -> MockResponse {
        let path = path_of(url);
        lock(&self.routes)
            .iter_mut()
            .find(|(p, _)| path.ends_with(p.as_str()))
            .and_then(|(_, queue)| queue.pop_front())
            .unwrap_or_else(|| MockResponse::status(404, "No mock response configured"))
    }
}

fn path_of(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> DotykackaResult<HttpResponse> {
        lock(&self.requests).push(RecordedRequest {
            method: request.method,
            url: request.url.clone(),
            headers: request.headers.clone(),
            body: request.body.clone(),
        });

        match self.next_response(&request.url) {
            MockResponse::Http { status, body } => Ok(HttpResponse {
                status,
                headers: HashMap::new(),
                body,
            }),
            MockResponse::ConnectionError(message) => Err(DotykackaError::Connection { message }),
        }
    }
}
