//! Metric bag: one gauge metric name with values per label set.
//!
//! Values are keyed by the canonical key of the normalized label set, so
//! insertion order of the labels never creates a second series. Distinct
//! label sets are exported in the order they were first seen.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::labels::{IntoLabels, LabelSet};

/// Accepted metric names (Prometheus style, dots allowed).
pub const METRIC_NAME_PATTERN: &str = r"^[a-zA-Z_:][a-zA-Z0-9_:.]*$";

// compile-time constant pattern
#[allow(clippy::expect_used)]
static METRIC_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(METRIC_NAME_PATTERN).expect("metric name pattern must compile")
});

/// One exported (labels, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    labels: LabelSet,
    value: f64,
}

impl MetricLine {
    pub fn new(labels: LabelSet, value: f64) -> Self {
        Self { labels, value }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Slot for one distinct label set.
#[derive(Debug)]
struct Series {
    labels: LabelSet,
    value: f64,
}

/// In-memory accumulator for a single gauge metric.
///
/// Mutation takes `&mut self`; share a bag across threads by wrapping it in
/// a lock of your own.
#[derive(Debug)]
pub struct MetricBag {
    metric: String,
    index: HashMap<String, usize>,
    series: Vec<Series>,
}

impl MetricBag {
    /// Create an empty bag. Fails if `metric_name` does not match
    /// [`METRIC_NAME_PATTERN`].
    pub fn new(metric_name: impl Into<String>) -> Result<Self> {
        let metric = metric_name.into();
        if !METRIC_NAME_REGEX.is_match(&metric) {
            return Err(Error::Validation(format!(
                "metric name \"{metric}\" does not match {METRIC_NAME_PATTERN}"
            )));
        }
        Ok(Self {
            metric,
            index: HashMap::new(),
            series: Vec::new(),
        })
    }

    pub fn metric_name(&self) -> &str {
        &self.metric
    }

    /// Overwrite the value for `labels`.
    pub fn set<L: IntoLabels>(&mut self, labels: L, value: f64) -> Result<()> {
        let slot = self.slot(labels.into_labels()?);
        slot.value = value;
        Ok(())
    }

    /// Add `value` to the current value for `labels`, starting from 0.
    pub fn increment<L: IntoLabels>(&mut self, labels: L, value: f64) -> Result<()> {
        let slot = self.slot(labels.into_labels()?);
        slot.value += value;
        Ok(())
    }

    /// `increment(labels, 1.0)`.
    pub fn increment_by_one<L: IntoLabels>(&mut self, labels: L) -> Result<()> {
        self.increment(labels, 1.0)
    }

    /// Number of distinct label sets.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Snapshot of every series in first-seen order.
    pub fn export(&self) -> Vec<MetricLine> {
        self.series
            .iter()
            .map(|s| MetricLine::new(s.labels.clone(), s.value))
            .collect()
    }

    fn slot(&mut self, labels: LabelSet) -> &mut Series {
        let key = labels.canonical_key();
        let idx = match self.index.get(&key).copied() {
            Some(idx) => idx,
            None => {
                let idx = self.series.len();
                self.series.push(Series { labels, value: 0.0 });
                self.index.insert(key, idx);
                idx
            }
        };
        &mut self.series[idx]
    }
}
