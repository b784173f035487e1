//! HTTP transport used by the provider clients.
//!
//! Clients only ever issue a GET and look at the status code and body, so
//! the seam is a single method. Production code uses a blocking reqwest
//! client; tests swap in a recording stub.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub trait Transport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// Blocking reqwest client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build the client. `timeout` of `None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("concierge/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Build `base` + `segments` + `query` with proper percent-encoding.
pub(crate) fn endpoint(
    base: &str,
    segments: &[&str],
    query: &[(&str, &str)],
) -> Result<Url, TransportError> {
    let mut url =
        Url::parse(base).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| TransportError::InvalidUrl(format!("{}: cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}
