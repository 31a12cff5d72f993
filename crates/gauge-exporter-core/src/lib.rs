//! Gauge exporter core: label sets, the metric bag, the wire payload, and the
//! shared error type.
//!
//! This crate holds the aggregation data model and the request body format
//! used by the export client. It carries no transport or runtime
//! dependencies; the HTTP exchange lives in `gauge-exporter-client`.
//!
//! # Panic-free
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `Error`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod labels;
pub mod metric;
pub mod protocol;

/// Shared result type.
pub use error::{Error, ErrorKind, Result, TransportError};
pub use labels::{normalize, IntoLabels, LabelSet};
pub use metric::{MetricBag, MetricLine, METRIC_NAME_PATTERN};
