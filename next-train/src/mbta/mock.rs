//! Scripted transport for testing without network access.
//!
//! Responses are queued per URL path and served in order; the last one
//! queued for a path is repeated once the others are used up. Every request
//! is recorded so tests can count round trips.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};

use super::error::ApiError;
use super::gateway::{RawResponse, Transport};

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl MockResponse {
    /// A 200 with the given JSON body.
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    /// An empty response with the given status.
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    /// Attach rate-limit headers.
    pub fn rate_limit(mut self, remaining: u32, reset_epoch_secs: i64) -> Self {
        self.headers.insert(
            HeaderName::from_static("x-ratelimit-remaining"),
            HeaderValue::from(remaining),
        );
        self.headers.insert(
            HeaderName::from_static("x-ratelimit-reset"),
            HeaderValue::from(reset_epoch_secs),
        );
        self
    }
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, VecDeque<MockResponse>>,
    requests: Vec<Url>,
}

/// Transport that serves [`MockResponse`]s. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for requests to `path`, e.g. `/stops`.
    pub fn respond(self, path: &str, response: MockResponse) -> Self {
        self.lock()
            .responses
            .entry(path.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<Url> {
        self.lock().requests.clone()
    }

    /// Number of requests made to `path`.
    pub fn request_count(&self, path: &str) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|u| u.path() == path)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, ApiError> {
        let mut state = self.lock();
        state.requests.push(url.clone());

        let queue = state.responses.get_mut(url.path());
        let response = match queue {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        let response = response.unwrap_or_else(|| MockResponse::status(StatusCode::NOT_FOUND));

        Ok(RawResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url(path: &str) -> Url {
        Url::parse("https://api-v3.mbta.com").unwrap().join(path).unwrap()
    }

    #[tokio::test]
    async fn serves_queue_then_repeats_last() {
        let transport = MockTransport::new()
            .respond("/routes", MockResponse::status(StatusCode::TOO_MANY_REQUESTS))
            .respond("/routes", MockResponse::json(json!({"data": []})));

        let first = transport.get(&url("/routes")).await.unwrap();
        let second = transport.get(&url("/routes")).await.unwrap();
        let third = transport.get(&url("/routes")).await.unwrap();

        assert_eq!(first.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(second.status, StatusCode::OK);
        assert_eq!(third.status, StatusCode::OK);
        assert_eq!(transport.request_count("/routes"), 3);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let transport = MockTransport::new();
        let response = transport.get(&url("/vehicles")).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn rate_limit_headers() {
        let response = MockResponse::json(json!({})).rate_limit(3, 1_622_570_400);
        assert_eq!(response.headers["x-ratelimit-remaining"], "3");
        assert_eq!(response.headers["x-ratelimit-reset"], "1622570400");
    }
}
