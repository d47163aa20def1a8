//! The untyped candidate value inspected by the classifiers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An arbitrary in-memory value, as an external parser would hand it over.
///
/// Calc programs are nested tagged sequences: lists whose first element,
/// when a string, names the construct (`["set", "x", 5]`). A `Value` can
/// hold any shape, well-formed or not; the classifiers in [`crate::ast`]
/// decide which grammar production, if any, a given value matches.
///
/// The serde representation is untagged, so values deserialize directly
/// from their JSON form:
///
/// ```
/// use calc_ast::Value;
///
/// let v: Value = serde_json::from_str(r#"["set", "x", 5]"#).unwrap();
/// assert_eq!(v.tag(), Some("set"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    /// Creates a number value.
    pub fn number(value: impl Into<f64>) -> Self {
        Value::Number(value.into())
    }

    /// Creates a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// Creates a list value.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Creates a tagged sequence: a list opening with `tag`, followed by
    /// `children`.
    pub fn tagged(tag: impl Into<String>, children: Vec<Value>) -> Self {
        let mut items = vec![Value::String(tag.into())];
        items.extend(children);
        Value::List(items)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a tagged sequence (a non-empty list whose
    /// first element is a string).
    pub fn is_tagged(&self) -> bool {
        self.tag().is_some()
    }

    /// Returns the leading tag if this is a tagged sequence.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Value::List(items) => items.first().and_then(Value::as_str),
            _ => None,
        }
    }

    /// Returns true if this is a tagged sequence opening with `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// Returns the elements after the tag if this is a tagged sequence.
    pub fn children(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) if items.first().is_some_and(|v| v.as_str().is_some()) => {
                Some(&items[1..])
            }
            _ => None,
        }
    }

    /// Returns the inner boolean if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner number if this is a Number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the inner string if this is a String.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is a List.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the inner map if this is an Object.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(value: HashMap<String, Value>) -> Self {
        Value::Object(value)
    }
}
