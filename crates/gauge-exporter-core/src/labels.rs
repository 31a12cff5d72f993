//! Label sets and their normalization.
//!
//! A `LabelSet` is always stored sorted by label name (byte order), so two
//! mappings holding the same pairs in a different insertion order compare
//! equal, derive the same canonical key, and serialize identically. Label
//! sets always serialize as a JSON object, `{}` when empty.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Normalized label set: unique, non-empty names sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
    /// Empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name/value pairs. Empty names and repeated names are
    /// rejected: the input must describe a mapping.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (k, v) in pairs {
            let k = k.into();
            if k.is_empty() {
                return Err(Error::Validation("label name must not be empty".into()));
            }
            if map.contains_key(&k) {
                return Err(Error::Validation(format!("duplicate label name: {k}")));
            }
            map.insert(k, v.into());
        }
        Ok(Self(map))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Deterministic deduplication key.
    ///
    /// Each name and value is length-prefixed, so no pair of distinct label
    /// sets can collide regardless of the characters they contain.
    pub fn canonical_key(&self) -> String {
        let mut key = String::new();
        for (k, v) in &self.0 {
            key.push_str(&format!("{}:{}={}:{};", k.len(), k, v.len(), v));
        }
        key
    }
}

/// Escape a label value for the `{name="value"}` display form.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_str = self
            .0
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{{{}}}", label_str)
    }
}

/// Anything that can be normalized into a `LabelSet`.
///
/// Implemented for the associative containers (`HashMap`, `BTreeMap`),
/// lists of `(name, value)` pairs, and dynamic JSON values. A JSON value
/// that is not an object is positional data and is rejected.
pub trait IntoLabels {
    fn into_labels(self) -> Result<LabelSet>;
}

/// Canonicalize a label mapping into its sorted form.
pub fn normalize<L: IntoLabels>(labels: L) -> Result<LabelSet> {
    labels.into_labels()
}

impl IntoLabels for LabelSet {
    fn into_labels(self) -> Result<LabelSet> {
        Ok(self)
    }
}

impl IntoLabels for &LabelSet {
    fn into_labels(self) -> Result<LabelSet> {
        Ok(self.clone())
    }
}

impl<K, V, S> IntoLabels for HashMap<K, V, S>
where
    K: Into<String>,
    V: Into<String>,
    S: BuildHasher,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self)
    }
}

impl<K, V, S> IntoLabels for &HashMap<K, V, S>
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K, V> IntoLabels for BTreeMap<K, V>
where
    K: Into<String>,
    V: Into<String>,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self)
    }
}

impl<K, V> IntoLabels for &BTreeMap<K, V>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K, V> IntoLabels for Vec<(K, V)>
where
    K: Into<String>,
    V: Into<String>,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self)
    }
}

impl<K, V, const N: usize> IntoLabels for [(K, V); N]
where
    K: Into<String>,
    V: Into<String>,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self)
    }
}

impl<K, V> IntoLabels for &[(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn into_labels(self) -> Result<LabelSet> {
        LabelSet::from_pairs(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K, V, const N: usize> IntoLabels for &[(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn into_labels(self) -> Result<LabelSet> {
        self.as_slice().into_labels()
    }
}

impl IntoLabels for &Value {
    fn into_labels(self) -> Result<LabelSet> {
        match self {
            Value::Object(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (k, v) in map {
                    let v = v.as_str().ok_or_else(|| {
                        Error::Validation(format!("label {k} must have a string value"))
                    })?;
                    pairs.push((k.as_str(), v));
                }
                LabelSet::from_pairs(pairs)
            }
            // no positions to speak of, same as an empty mapping
            Value::Array(items) if items.is_empty() => Ok(LabelSet::new()),
            _ => Err(Error::Validation(
                "labels must be an associative mapping".into(),
            )),
        }
    }
}

impl IntoLabels for Value {
    fn into_labels(self) -> Result<LabelSet> {
        (&self).into_labels()
    }
}
