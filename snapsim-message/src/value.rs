use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::ProcessId;

/// Key of a piggy-back field attached to a [message][crate::Message].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Whether the sender had already recorded its local snapshot.
    Flag,
    /// Free-form label, mostly used by hook templates.
    Label,
    /// Field with a protocol-chosen name.
    Named(String),
}

/// Heterogeneous field value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Process reference.
    Process(ProcessId),
}

/// Ordered field map.
pub type Fields = BTreeMap<FieldKey, Value>;

impl Value {
    /// Returns the boolean if the value holds one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer if the value holds one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float if the value holds one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text if the value holds one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the process id if the value holds one.
    pub fn as_process(&self) -> Option<ProcessId> {
        match self {
            Value::Process(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<ProcessId> for Value {
    fn from(value: ProcessId) -> Self {
        Value::Process(value)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Flag => f.write_str("flag"),
            FieldKey::Label => f.write_str("label"),
            FieldKey::Named(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Process(v) => write!(f, "{v}"),
        }
    }
}
