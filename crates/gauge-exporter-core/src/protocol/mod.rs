//! Wire format for the collector's `PUT /gauge/{metric}` endpoint.
//!
//! Request bodies are built from a borrowed `MetricBag` snapshot and a set of
//! system labels; nothing here performs I/O.

pub mod payload;

pub use payload::{encode_payload, GaugePayload, PayloadLine};
