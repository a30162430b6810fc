//! Transition error types

use std::fmt;

use thiserror::Error;

/// Which name table a failed lookup went through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Easing,
    Direction,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Easing => f.write_str("easing"),
            NameKind::Direction => f.write_str("direction"),
        }
    }
}

/// Errors raised while building or sampling transitions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// Iteration count was negative or a finite non-integer
    #[error("iterationCount expects a positive integer. Got {0}.")]
    InvalidIterationCount(f64),

    /// `from` and `to` have different top-level kinds
    #[error("Interpolation failed. The from ({from}) and to ({to}) values need to be of the same type.")]
    TypeMismatch {
        from: &'static str,
        to: &'static str,
    },

    /// Sequences of different lengths
    #[error("When interpolating sequences they need to have the same length ({from} vs {to}).")]
    ShapeMismatch { from: usize, to: usize },

    /// No easing or direction registered under this name
    #[error("Unknown {kind} name: {name:?}")]
    UnknownName { kind: NameKind, name: String },

    /// A document referenced a transition it does not define
    #[error("Unknown transition reference: {0:?}")]
    UnknownReference(String),

    /// A configuration document could not be parsed
    #[error("Failed to parse animation document: {0}")]
    Parse(String),
}

/// Result type for transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;
