//! The nested output document a populate pass produces.
//!
//! The tree's only outbound format: string keys mapping to scalar, [`Value`],
//! or nested-map leaves, directly serializable with no further formatting.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::{Numeric, Percent, Value};

/// One entry in a populated document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
    Value(Value),
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Map(Document),
}

/// A populated (sub)tree: the mapping mirror of the configuration tree.
pub type Document = BTreeMap<String, Fragment>;

impl Fragment {
    /// Crosses the serialization boundary for downstream renderers.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl From<Value> for Fragment {
    fn from(v: Value) -> Self {
        Fragment::Value(v)
    }
}

impl From<Numeric> for Fragment {
    fn from(n: Numeric) -> Self {
        Fragment::Value(Value::Numeric(n))
    }
}

impl From<Percent> for Fragment {
    fn from(p: Percent) -> Self {
        Fragment::Value(Value::Percent(p))
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Text(s)
    }
}

impl From<i64> for Fragment {
    fn from(i: i64) -> Self {
        Fragment::Int(i)
    }
}

impl From<f64> for Fragment {
    fn from(f: f64) -> Self {
        Fragment::Float(f)
    }
}

impl From<bool> for Fragment {
    fn from(b: bool) -> Self {
        Fragment::Bool(b)
    }
}

impl From<Document> for Fragment {
    fn from(d: Document) -> Self {
        Fragment::Map(d)
    }
}

/// Lifts an evaluated value mapping into a document subtree.
pub(crate) fn values_to_document(values: BTreeMap<String, Value>) -> Document {
    values
        .into_iter()
        .map(|(k, v)| (k, Fragment::Value(v)))
        .collect()
}
