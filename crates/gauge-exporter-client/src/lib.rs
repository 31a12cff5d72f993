//! Gauge exporter client library entry.
//!
//! This crate wires the export client, the HTTP capability it sends through,
//! and the YAML configuration loader. It is consumed by the `gauge-push`
//! binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod client;
pub mod config;
pub mod transport;

pub use client::ExportClient;
pub use config::ClientConfig;
pub use transport::{HttpClient, ReqwestClient};
