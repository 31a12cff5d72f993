//! JSON test vector loader shared by payload tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

use gauge_exporter_core::metric::MetricBag;
use gauge_exporter_core::Result;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub metric: String,
    #[serde(default = "default_ttl")]
    pub ttl: u64,
    #[serde(default)]
    pub system_labels: Option<serde_json::Value>,
    #[serde(default)]
    pub ops: Vec<Op>,
    #[serde(default)]
    pub expect_body: Option<String>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Set { labels: serde_json::Value, value: f64 },
    Increment { labels: serde_json::Value, value: f64 },
}

fn default_ttl() -> u64 {
    100
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

impl TestVector {
    /// Build the bag by replaying every op in order.
    pub fn build_bag(&self) -> Result<MetricBag> {
        let mut bag = MetricBag::new(self.metric.as_str())?;
        for op in &self.ops {
            match op {
                Op::Set { labels, value } => bag.set(labels, *value)?,
                Op::Increment { labels, value } => bag.increment(labels, *value)?,
            }
        }
        Ok(bag)
    }
}
