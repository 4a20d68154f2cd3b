//! HTTP transport seam.
//!
//! The dispatcher only needs a blocking `GET` that hands back a status code
//! and a body. [`Transport`] captures that, so tests can substitute a fake
//! and hosts can wrap the real client with their own timeout or retry
//! policy. [`ReqwestTransport`] is the default implementation.

use std::sync::Arc;

use thiserror::Error;
use tracing::trace;

use crate::config::Credentials;

/// Status code and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure to obtain a response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client reported an error.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Blocking HTTP `GET`.
pub trait Transport: Send + Sync {
    /// Fetch `url`, sending HTTP Basic auth when `credentials` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained. Non-success
    /// status codes are not errors at this level.
    fn get(&self, url: &str, credentials: Option<&Credentials>) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, credentials: Option<&Credentials>) -> Result<HttpResponse, TransportError> {
        (**self).get(url, credentials)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str, credentials: Option<&Credentials>) -> Result<HttpResponse, TransportError> {
        (**self).get(url, credentials)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str, credentials: Option<&Credentials>) -> Result<HttpResponse, TransportError> {
        (**self).get(url, credentials)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Transport with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport using a preconfigured `reqwest` client, e.g. one with
    /// timeouts or custom TLS roots.
    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, credentials: Option<&Credentials>) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url);
        if let Some(credentials) = credentials {
            request = request.basic_auth(credentials.username(), Some(credentials.password()));
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        trace!(url = %url, status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}
