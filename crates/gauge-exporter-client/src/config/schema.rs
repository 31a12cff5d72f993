use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use gauge_exporter_core::error::{Error, Result};
use gauge_exporter_core::labels::{normalize, LabelSet};

use crate::client::trim_domain;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    pub exporter: ExporterSection,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::UnsupportedVersion);
        }

        self.exporter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    /// Collector base URL, e.g. `https://collector.example.com`.
    pub domain: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_ttl_sec")]
    pub ttl_sec: u64,

    #[serde(default)]
    pub system_labels: BTreeMap<String, String>,
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if trim_domain(&self.domain).is_empty() {
            return Err(Error::Config("exporter.domain must not be empty".into()));
        }
        if !(100..=120000).contains(&self.timeout_ms) {
            return Err(Error::Config(
                "exporter.timeout_ms must be between 100 and 120000".into(),
            ));
        }
        if self.ttl_sec == 0 {
            return Err(Error::Config("exporter.ttl_sec must be greater than 0".into()));
        }
        self.labels()?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// System labels in normalized form.
    pub fn labels(&self) -> Result<LabelSet> {
        normalize(&self.system_labels)
    }
}

fn default_timeout_ms() -> u64 {
    5000
}
fn default_ttl_sec() -> u64 {
    300
}
