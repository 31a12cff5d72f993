//! Blocking `reqwest` implementation of `HttpClient`.

use std::time::Duration;

use bytes::Bytes;
use http::{Request, Response};

use gauge_exporter_core::TransportError;

use super::HttpClient;

/// HTTP/1.1 blocking client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let inner = reqwest::blocking::Client::builder()
            .http1_only()
            .timeout(timeout)
            .build()
            .map_err(TransportError::new)?;
        Ok(Self { inner })
    }

    /// Wrap a preconfigured client.
    pub fn from_client(inner: reqwest::blocking::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    fn send_request(&self, request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
        let (parts, body) = request.into_parts();

        let resp = self
            .inner
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body.to_vec())
            .send()
            .map_err(TransportError::new)?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().map_err(TransportError::new)?;

        let mut out = Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
