//! Module input variable values
//!
//! Terraform variables are typed: scalars, sequences, and nested mappings
//! (e.g. per-node-group settings). `VarValue` models that domain and knows
//! how to render itself into `-var` argument syntax.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single module input variable value
///
/// Scalars render bare on the command line; lists and maps render as JSON,
/// which Terraform accepts as collection literal syntax in `-var` arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// String scalar
    String(String),
    /// Ordered sequence of values
    List(Vec<VarValue>),
    /// Nested mapping from name to value
    Map(BTreeMap<String, VarValue>),
}

impl VarValue {
    /// Build a list value from anything convertible to `VarValue`
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VarValue>,
    {
        VarValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value from `(name, value)` pairs
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VarValue>,
    {
        VarValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Render the value for a `-var name=value` argument.
    ///
    /// Strings pass through unquoted (the argument value is taken
    /// literally); numbers and booleans render bare; lists and maps render
    /// as JSON collection literals.
    pub fn to_arg_value(&self) -> String {
        match self {
            VarValue::Bool(b) => b.to_string(),
            VarValue::Int(i) => i.to_string(),
            VarValue::Float(f) => f.to_string(),
            VarValue::String(s) => s.clone(),
            VarValue::List(_) | VarValue::Map(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        VarValue::Bool(value)
    }
}

impl From<i32> for VarValue {
    fn from(value: i32) -> Self {
        VarValue::Int(i64::from(value))
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Int(value)
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Float(value)
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::String(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::String(value)
    }
}

impl<V: Into<VarValue>> From<Vec<V>> for VarValue {
    fn from(value: Vec<V>) -> Self {
        VarValue::list(value)
    }
}

impl From<BTreeMap<String, VarValue>> for VarValue {
    fn from(value: BTreeMap<String, VarValue>) -> Self {
        VarValue::Map(value)
    }
}
