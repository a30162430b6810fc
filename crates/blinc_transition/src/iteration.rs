//! Iteration counts

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;

use crate::error::TransitionError;

/// How many times a transition repeats its duration
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IterationCount {
    /// Runs this many times; always a non-negative whole number, and zero
    /// never becomes active
    Finite(f64),
    /// Repeats forever
    Infinite,
}

impl IterationCount {
    /// Total active time for iterations of `duration` each
    pub fn total(&self, duration: f64) -> f64 {
        match self {
            IterationCount::Finite(count) => duration * count,
            // 0 × ∞ would be NaN; an instantaneous transition ends where it starts
            IterationCount::Infinite if duration <= 0.0 => 0.0,
            IterationCount::Infinite => f64::INFINITY,
        }
    }
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Finite(1.0)
    }
}

impl TryFrom<f64> for IterationCount {
    type Error = TransitionError;

    /// Accepts non-negative integers and positive infinity
    fn try_from(count: f64) -> Result<Self, Self::Error> {
        if count == f64::INFINITY {
            return Ok(IterationCount::Infinite);
        }
        if !count.is_finite() || count < 0.0 || count.fract() != 0.0 {
            return Err(TransitionError::InvalidIterationCount(count));
        }
        Ok(IterationCount::Finite(count))
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Finite(count) => write!(f, "{count}"),
            IterationCount::Infinite => f.write_str("infinite"),
        }
    }
}

/// Serde adapter for raw iteration counts in configuration documents.
///
/// Counts are plain numbers, or the string `"infinite"`. Range checks happen
/// in [`IterationCount::try_from`] when the transition is built.
pub(crate) mod raw_count {
    use super::*;

    pub fn serialize<S: Serializer>(count: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *count == f64::INFINITY {
            serializer.serialize_str("infinite")
        } else {
            serializer.serialize_f64(*count)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        struct CountVisitor;

        impl<'de> Visitor<'de> for CountVisitor {
            type Value = f64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or \"infinite\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
                Ok(v as f64)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
                Ok(v as f64)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
                Ok(v)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
                match v {
                    "infinite" | "Infinity" => Ok(f64::INFINITY),
                    _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(CountVisitor)
    }
}
