//! Gauge request body (JSON).
//!
//! `data` is always an array and every label set is always an object, both
//! possibly empty. `system_labels` is written only when present. Values
//! must be finite.

use serde::{ser, Serialize, Serializer};

use crate::error::Result;
use crate::labels::LabelSet;
use crate::metric::{MetricBag, MetricLine};

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Request body for one metric.
#[derive(Debug, Serialize)]
pub struct GaugePayload<'a> {
    /// Seconds until the collector expires the values.
    pub ttl: u64,
    pub data: Vec<PayloadLine>,
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub system_labels: &'a LabelSet,
}

/// One `{labels, value}` element of `data`.
#[derive(Debug, Serialize)]
pub struct PayloadLine {
    pub labels: LabelSet,
    #[serde(serialize_with = "serialize_value")]
    pub value: f64,
}

impl From<MetricLine> for PayloadLine {
    fn from(line: MetricLine) -> Self {
        Self {
            value: line.value(),
            labels: line.labels().clone(),
        }
    }
}

impl<'a> GaugePayload<'a> {
    pub fn new(bag: &MetricBag, ttl: u64, system_labels: &'a LabelSet) -> Self {
        Self {
            ttl,
            data: bag.export().into_iter().map(PayloadLine::from).collect(),
            system_labels,
        }
    }
}

/// Serialize a bag snapshot to JSON bytes.
pub fn encode_payload(bag: &MetricBag, ttl: u64, system_labels: &LabelSet) -> Result<Vec<u8>> {
    let payload = GaugePayload::new(bag, ttl, system_labels);
    Ok(serde_json::to_vec(&payload)?)
}

/// Whole numbers go out as JSON integers (`10`, not `10.0`). NaN and
/// infinities have no JSON number form and fail the encode.
fn serialize_value<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let v = *value;
    if !v.is_finite() {
        return Err(ser::Error::custom(format!("gauge value must be finite, got {v}")));
    }
    if v.fract() == 0.0 && v.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}
