//! Animatable values
//!
//! A [`Value`] is the payload a transition animates. Numbers interpolate
//! linearly, sequences and mappings recurse into their elements, and any
//! other pair of equal kinds steps from `from` to `to` halfway through.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitionError};

/// String-keyed mapping of values, kept in insertion order
pub type Mapping = IndexMap<String, Value>;

/// An animated value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Build a mapping from key/value pairs
    pub fn mapping<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Mapping(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Name of this value's variant, as used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// See [`interpolate`]
    pub fn interpolate(&self, to: &Value, t: f64) -> Result<Value> {
        interpolate(self, to, t)
    }

    /// See [`merge_values`]
    pub fn merge(&self, to: &Value) -> Result<Value> {
        merge_values(self, to)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

/// Interpolate between `from` and `to` at progress `t`.
///
/// `t` is not clamped, so easings that overshoot carry through to the
/// result. Both sides must be the same kind at every nesting level.
pub fn interpolate(from: &Value, to: &Value, t: f64) -> Result<Value> {
    match (from, to) {
        (Value::Number(_), Value::Number(b)) if t == 1.0 => Ok(Value::Number(*b)),
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + (b - a) * t)),
        (Value::Sequence(a), Value::Sequence(b)) => {
            if a.len() != b.len() {
                return Err(TransitionError::ShapeMismatch {
                    from: a.len(),
                    to: b.len(),
                });
            }
            a.iter()
                .zip(b)
                .map(|(a, b)| interpolate(a, b, t))
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence)
        }
        (Value::Mapping(a), Value::Mapping(b)) => interpolate_mapping(a, b, t).map(Value::Mapping),
        (Value::Bool(_), Value::Bool(_)) | (Value::Text(_), Value::Text(_)) => {
            Ok(if t < 0.5 { from.clone() } else { to.clone() })
        }
        _ => Err(TransitionError::TypeMismatch {
            from: from.kind(),
            to: to.kind(),
        }),
    }
}

/// Keys missing on one side hold the other side's value.
fn interpolate_mapping(from: &Mapping, to: &Mapping, t: f64) -> Result<Mapping> {
    let mut out = Mapping::with_capacity(from.len().max(to.len()));

    for (key, a) in from {
        let value = match to.get(key) {
            Some(b) => interpolate(a, b, t)?,
            None => a.clone(),
        };
        out.insert(key.clone(), value);
    }

    for (key, b) in to {
        if !from.contains_key(key) {
            out.insert(key.clone(), b.clone());
        }
    }

    Ok(out)
}

/// Resolve the target state of a keyframe by overlaying `to` onto `from`.
///
/// Mappings are merged one level deep; every other kind is replaced by `to`.
pub fn merge_values(from: &Value, to: &Value) -> Result<Value> {
    match (from, to) {
        (Value::Mapping(a), Value::Mapping(b)) => {
            let mut merged = a.clone();
            for (key, value) in b {
                merged.insert(key.clone(), value.clone());
            }
            Ok(Value::Mapping(merged))
        }
        (Value::Number(_), Value::Number(_))
        | (Value::Sequence(_), Value::Sequence(_))
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Text(_), Value::Text(_)) => Ok(to.clone()),
        _ => Err(TransitionError::TypeMismatch {
            from: from.kind(),
            to: to.kind(),
        }),
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
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

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}
