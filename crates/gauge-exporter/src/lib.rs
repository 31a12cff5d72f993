//! Top-level facade crate for the gauge exporter.
//!
//! Re-exports the core data model and the export client so users can depend
//! on a single crate.

pub mod core {
    pub use gauge_exporter_core::*;
}

pub mod client {
    pub use gauge_exporter_client::*;
}

pub use gauge_exporter_client::{ExportClient, HttpClient, ReqwestClient};
pub use gauge_exporter_core::{Error, LabelSet, MetricBag, Result};
