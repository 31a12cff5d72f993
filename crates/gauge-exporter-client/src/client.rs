//! Export client: pushes one `MetricBag` snapshot to the collector.
//!
//! Each `send` is a single `PUT {domain}/gauge/{metric}` carrying the whole
//! bag. System labels configured on the client are sent once, in the
//! top-level `system_labels` field, and are never merged into the entries.
//! Only status 200 counts as success; there are no retries.

use bytes::Bytes;
use http::{header, Method, Request, StatusCode};
use tracing::{debug, warn};

use gauge_exporter_core::error::{Error, Result};
use gauge_exporter_core::labels::{IntoLabels, LabelSet};
use gauge_exporter_core::metric::MetricBag;
use gauge_exporter_core::protocol::encode_payload;

use crate::config::ClientConfig;
use crate::transport::HttpClient;

/// Strip surrounding whitespace, NUL, and slashes from a base URL.
pub(crate) fn trim_domain(domain: &str) -> &str {
    domain.trim_matches(|c: char| matches!(c, ' ' | '\n' | '\r' | '\t' | '\x0B' | '\0' | '/'))
}

pub struct ExportClient<C> {
    http: C,
    domain: String,
    system_labels: LabelSet,
}

impl<C: HttpClient> ExportClient<C> {
    pub fn new(http: C, domain: &str) -> Self {
        Self {
            http,
            domain: trim_domain(domain).to_string(),
            system_labels: LabelSet::new(),
        }
    }

    /// Client that attaches fixed labels to every request.
    pub fn with_system_labels<L: IntoLabels>(http: C, domain: &str, labels: L) -> Result<Self> {
        let mut client = Self::new(http, domain);
        client.system_labels = labels.into_labels()?;
        Ok(client)
    }

    pub fn from_config(http: C, cfg: &ClientConfig) -> Result<Self> {
        Self::with_system_labels(http, &cfg.exporter.domain, cfg.exporter.labels()?)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn system_labels(&self) -> &LabelSet {
        &self.system_labels
    }

    /// Target URL for a metric.
    pub fn endpoint(&self, metric_name: &str) -> String {
        format!("{}/gauge/{}", self.domain, metric_name)
    }

    /// Build the `PUT` request for a bag without sending it.
    pub fn build_request(&self, bag: &MetricBag, ttl_sec: u64) -> Result<Request<Bytes>> {
        let body = encode_payload(bag, ttl_sec, &self.system_labels)?;
        Request::builder()
            .method(Method::PUT)
            .uri(self.endpoint(bag.metric_name()))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))
            .map_err(|e| Error::Validation(format!("invalid request: {e}")))
    }

    /// Push the bag. Transport failures are returned unchanged; any status
    /// other than 200 becomes `Error::BadResponse` with the full response.
    pub fn send(&self, bag: &MetricBag, ttl_sec: u64) -> Result<()> {
        let request = self.build_request(bag, ttl_sec)?;
        debug!(
            metric = bag.metric_name(),
            url = %request.uri(),
            entries = bag.len(),
            system_labels = %self.system_labels,
            ttl_sec,
            "pushing gauge"
        );

        let response = self.http.send_request(request)?;

        if response.status() != StatusCode::OK {
            warn!(
                metric = bag.metric_name(),
                status = %response.status(),
                "collector rejected gauge push"
            );
            return Err(Error::BadResponse(Box::new(response)));
        }

        debug!(metric = bag.metric_name(), "gauge pushed");
        Ok(())
    }
}
