//! HTTP client utilities for ShoppyGlobe.
//!
//! Provides a small builder API over a pluggable [`Transport`], with JSON
//! decoding and status checking.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoppy_data::{FetchClient, HttpTransport};
//! use std::time::Duration;
//!
//! #[derive(serde::Deserialize)]
//! struct Product {
//!     id: u64,
//!     title: String,
//! }
//!
//! let transport = HttpTransport::new(Duration::from_secs(10), "shoppy")?;
//! let client = FetchClient::new(transport).with_base_url("https://dummyjson.com");
//!
//! let product: Product = client.get("/products/1").send().await?.json()?;
//! ```

mod error;
mod request;
mod response;
mod transport;

pub use error::FetchError;
pub use request::Request;
pub use response::Response;
pub use transport::{HttpTransport, MockTransport, Transport};

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// HTTP client for making outbound requests.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client over a transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a client over a shared transport.
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: Vec::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Create a GET request. Relative paths are joined onto the base URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        };

        let mut request = Request::new(full_url);
        for (key, value) in &self.default_headers {
            request = request.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self,
            request,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    request: Request,
}

impl ClientRequestBuilder<'_> {
    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.request = self.request.query(key, value);
        self
    }

    /// The request as built so far.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Send the request and return the response, whatever its status.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(url = %self.request.url, query = ?self.request.query, "sending GET request");
        self.client.transport.send(self.request).await
    }

    /// Send the request, require a 2xx status and decode the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        self.send().await?.error_for_status()?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpTransport, Response, Transport};
}
