//! Playback directions
//!
//! A direction turns elapsed time into raw progress for the current
//! iteration, deciding whether that iteration runs forward or backward.

use std::str::FromStr;

use tracing::debug;

use crate::error::{NameKind, TransitionError};
use crate::iteration::IterationCount;

/// Playback direction for transitions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Play forward (0.0 -> 1.0)
    #[default]
    Forward,
    /// Play in reverse (1.0 -> 0.0)
    Reverse,
    /// Alternate between forward and reverse each iteration
    Alternate,
    /// Alternate, starting with a reverse iteration
    AlternateReverse,
}

const NAMES: &[&str] = &["forward", "reverse", "alternate", "alternateReverse"];

/// Every direction name accepted by [`Direction::from_name`]
pub fn named_directions() -> &'static [&'static str] {
    NAMES
}

impl Direction {
    /// Resolve a direction by name
    pub fn from_name(name: &str) -> Result<Self, TransitionError> {
        match name {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            "alternate" => Ok(Direction::Alternate),
            "alternateReverse" => Ok(Direction::AlternateReverse),
            _ => {
                debug!(name, "Unknown direction name");
                Err(TransitionError::UnknownName {
                    kind: NameKind::Direction,
                    name: name.to_owned(),
                })
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
            Direction::Alternate => "alternate",
            Direction::AlternateReverse => "alternateReverse",
        }
    }

    /// Raw progress after `elapsed` time units of a transition lasting
    /// `duration` per iteration.
    ///
    /// Once every iteration has run, progress stays at the end of the last
    /// one. A zero iteration count never starts, and a zero duration is
    /// finished as soon as it is sampled.
    pub fn progress(&self, elapsed: f64, duration: f64, iterations: IterationCount) -> f64 {
        let (iteration, local) = match iterations {
            IterationCount::Finite(count) if count == 0.0 => (0.0, 0.0),
            IterationCount::Finite(count) => {
                let total = duration * count;
                if duration <= 0.0 || elapsed >= total {
                    (count - 1.0, 1.0)
                } else {
                    split(elapsed, duration)
                }
            }
            IterationCount::Infinite => {
                if duration <= 0.0 {
                    (0.0, 1.0)
                } else {
                    split(elapsed, duration)
                }
            }
        };

        let reversed = match self {
            Direction::Forward => false,
            Direction::Reverse => true,
            Direction::Alternate => iteration % 2.0 == 1.0,
            Direction::AlternateReverse => iteration % 2.0 == 0.0,
        };

        if reversed {
            1.0 - local
        } else {
            local
        }
    }
}

/// Iteration index and progress within it, for `elapsed < total`
fn split(elapsed: f64, duration: f64) -> (f64, f64) {
    let iteration = (elapsed / duration).floor();
    let local = (elapsed - iteration * duration) / duration;
    (iteration, local.clamp(0.0, 1.0))
}

impl FromStr for Direction {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_name(s)
    }
}
