//! HTTP capability consumed by the export client.
//!
//! The client never talks to the network directly; it hands a fully built
//! `http::Request` to an `HttpClient` and inspects the `http::Response` it
//! gets back. Connection pooling, TLS, and timeouts belong to the
//! implementation.

pub mod blocking;

use std::sync::Arc;

use bytes::Bytes;
use http::{Request, Response};

use gauge_exporter_core::TransportError;

pub use blocking::ReqwestClient;

/// Send one request and return the response, whatever its status.
pub trait HttpClient {
    fn send_request(&self, request: Request<Bytes>) -> Result<Response<Bytes>, TransportError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn send_request(&self, request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
        (**self).send_request(request)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    fn send_request(&self, request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
        (**self).send_request(request)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn send_request(&self, request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
        (**self).send_request(request)
    }
}
