//! Transports that actually move requests over the wire.

use crate::{FetchError, Request, Response};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Sends a [`Request`] and reads the whole response.
///
/// A non-2xx status is still `Ok`; callers decide with
/// [`Response::error_for_status`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// Transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with a default timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let mut builder = self.client.get(request.full_url()?);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// In-memory transport serving canned responses by URL.
///
/// Unknown URLs answer 404. Each route may carry a delay, which lets tests
/// control the order in which overlapping requests resolve.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, MockRoute>,
    requests: Mutex<Vec<String>>,
}

#[derive(Debug, Clone)]
struct MockRoute {
    status: u16,
    body: Vec<u8>,
    delay: Option<Duration>,
}

impl MockTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with `status` for `url` (including any query string).
    pub fn route(mut self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.into(),
            MockRoute {
                status,
                body: body.into(),
                delay: None,
            },
        );
        self
    }

    /// Like [`route`](Self::route), resolving only after `delay`.
    pub fn delayed_route(
        mut self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
        delay: Duration,
    ) -> Self {
        self.routes.insert(
            url.into(),
            MockRoute {
                status,
                body: body.into(),
                delay: Some(delay),
            },
        );
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let url = request.full_url()?.to_string();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }

        let Some(route) = self.routes.get(&url).cloned() else {
            return Ok(Response::new(404, Vec::new(), b"Not Found".to_vec()));
        };
        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Response::new(
            route.status,
            vec![("Content-Type".to_string(), "application/json".to_string())],
            route.body,
        ))
    }
}
