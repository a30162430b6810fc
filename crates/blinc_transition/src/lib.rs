//! Blinc Transitions
//!
//! Tick-driven value interpolation. A transition is a pure function of time:
//! sample it with a tick and it returns the interpolated value, with no
//! internal clock or state between calls.
//!
//! # Features
//!
//! - **Structured Values**: Numbers, sequences and keyed mappings interpolate
//!   recursively; other equal-kind values step at the halfway point
//! - **Named Easings and Directions**: Resolved once when a transition is built
//! - **Iterations**: Repeat, reverse and alternate, including infinite loops
//! - **Composition**: Chain keyframes sequentially or sample several
//!   animations in parallel, and nest the results
//! - **Documents**: Declare named animations in TOML or JSON
//!
//! # Example
//!
//! ```
//! use blinc_transition::{Keyframe, SequenceStart, SequentialTransition, Value};
//!
//! let slide = SequentialTransition::new(
//!     SequenceStart::new(Value::mapping([("x", 0.0), ("y", 0.0)])).duration(1.0),
//!     [Keyframe::new(Value::mapping([("x", 1.0)]))],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     slide.sample(0.5).unwrap(),
//!     Value::mapping([("x", 0.5), ("y", 0.0)])
//! );
//! ```

pub mod config;
pub mod direction;
pub mod easing;
pub mod error;
pub mod iteration;
pub mod parallel;
pub mod sequence;
pub mod transition;
pub mod value;

pub use config::{AnimationDocument, AnimationSet};
pub use direction::{named_directions, Direction};
pub use easing::{named_easings, Easing};
pub use error::{NameKind, Result, TransitionError};
pub use iteration::IterationCount;
pub use parallel::{ParallelItem, ParallelTransition};
pub use sequence::{Keyframe, SequenceStart, SequentialTransition};
pub use transition::{Animation, Transition, TransitionConfig};
pub use value::{interpolate, merge_values, Mapping, Value};
