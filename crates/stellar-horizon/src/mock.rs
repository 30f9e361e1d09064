//! # In-memory Transport
//!
//! `MockTransport` implements [`HttpTransport`] without any network access.
//! Responses are registered per method and URL ahead of time and handed out
//! in order; every call is recorded so tests can assert what was (or was
//! not) sent.
//!
//! ```ignore
//! let mock = Arc::new(MockTransport::new());
//! mock.expect_get("https://horizon.example/ledgers?limit=1")
//!     .return_ok(RawResponse::new(200).with_body(LEDGER_PAGE));
//!
//! let server = Server::with_transport("https://horizon.example", mock.clone())?;
//! let page = server.ledgers().limit(1).execute().await?;
//! assert_eq!(mock.request_count(), 1);
//! ```

use crate::error::HorizonError;
use crate::transport::{HttpTransport, RawResponse};
use crate::Result;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use url::Url;

type Replies = Arc<Mutex<HashMap<(Method, String), VecDeque<Result<RawResponse>>>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A call observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub form: Vec<(String, String)>,
}

#[derive(Default)]
pub struct MockTransport {
    replies: Replies,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a GET of exactly `url`.
    pub fn expect_get(&self, url: &str) -> ReplyBuilder {
        ReplyBuilder {
            key: (Method::Get, url.to_string()),
            replies: self.replies.clone(),
        }
    }

    /// Expects a form POST to exactly `url`.
    pub fn expect_post(&self, url: &str) -> ReplyBuilder {
        ReplyBuilder {
            key: (Method::Post, url.to_string()),
            replies: self.replies.clone(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Panics if any registered reply was never consumed.
    pub fn verify(&self) {
        let replies = lock(&self.replies);
        let remaining: usize = replies.values().map(VecDeque::len).sum();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn reply(&self, method: Method, url: &Url, form: &[(&str, &str)]) -> Result<RawResponse> {
        lock(&self.requests).push(RecordedRequest {
            method,
            url: url.to_string(),
            form: form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        lock(&self.replies)
            .get_mut(&(method, url.to_string()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(HorizonError::connection(format!(
                    "no mock reply registered for {:?} {}",
                    method, url
                )))
            })
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse> {
        self.reply(Method::Get, url, &[])
    }

    async fn post_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<RawResponse> {
        self.reply(Method::Post, url, fields)
    }
}

/// Registers the reply for one expected call.
pub struct ReplyBuilder {
    key: (Method, String),
    replies: Replies,
}

impl ReplyBuilder {
    /// Answer with this response, whatever its status.
    pub fn return_ok(self, response: RawResponse) {
        self.push(Ok(response));
    }

    /// Simulate a transport failure (refused connection, reset, timeout).
    pub fn return_connection_error(self, message: &str) {
        self.push(Err(HorizonError::connection(message)));
    }

    fn push(self, reply: Result<RawResponse>) {
        lock(&self.replies)
            .entry(self.key)
            .or_default()
            .push_back(reply);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
