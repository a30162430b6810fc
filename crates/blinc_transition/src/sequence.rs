//! Sequential transitions
//!
//! Chains keyframes one after another. Each keyframe only states what
//! changes; duration, delay and easing fall back to the sequence start, and
//! mapping targets are overlaid onto the previous segment's end state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::transition::{Animation, Transition, TransitionConfig};
use crate::value::{merge_values, Value};

/// Starting state and defaults for a sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceStart {
    /// Value before the first keyframe
    pub from: Value,
    /// Default segment duration
    pub duration: f64,
    /// Ticks before the first segment
    pub delay: f64,
    /// Default segment easing
    pub easing: String,
}

impl Default for SequenceStart {
    fn default() -> Self {
        Self {
            from: Value::Number(0.0),
            duration: 0.0,
            delay: 0.0,
            easing: "linear".to_owned(),
        }
    }
}

impl SequenceStart {
    pub fn new(from: impl Into<Value>) -> Self {
        Self {
            from: from.into(),
            ..Default::default()
        }
    }

    /// Builder: set the default segment duration
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Builder: set delay before the first segment
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Builder: set the default segment easing
    pub fn easing(mut self, name: impl Into<String>) -> Self {
        self.easing = name.into();
        self
    }
}

impl From<&TransitionConfig> for SequenceStart {
    fn from(config: &TransitionConfig) -> Self {
        Self {
            from: config.from.clone(),
            duration: config.duration,
            delay: config.delay,
            easing: config.easing.clone(),
        }
    }
}

/// One step of a sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Target, overlaid onto the previous state
    pub to: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Gap after the previous segment ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

impl Keyframe {
    pub fn new(to: impl Into<Value>) -> Self {
        Self {
            to: to.into(),
            duration: None,
            delay: None,
            easing: None,
        }
    }

    /// Builder: override the segment duration
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Builder: wait this long after the previous segment
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Builder: override the segment easing
    pub fn easing(mut self, name: impl Into<String>) -> Self {
        self.easing = Some(name.into());
        self
    }
}

/// Keyframes played back to back
#[derive(Clone, Debug, PartialEq)]
pub struct SequentialTransition {
    origin: Value,
    segments: Vec<Transition>,
    starts_at: f64,
    ends_at: f64,
}

impl SequentialTransition {
    /// Resolve every keyframe into a segment
    pub fn new(start: SequenceStart, keyframes: impl IntoIterator<Item = Keyframe>) -> Result<Self> {
        let mut current_time = start.delay;
        let mut segments: Vec<Transition> = Vec::new();

        for keyframe in keyframes {
            let from = match segments.last() {
                Some(previous) => previous.to().clone(),
                None => start.from.clone(),
            };
            let to = merge_values(&from, &keyframe.to)?;
            let gap = keyframe.delay.unwrap_or(0.0);
            let duration = keyframe.duration.unwrap_or(start.duration);
            let easing = keyframe.easing.unwrap_or_else(|| start.easing.clone());

            let segment = TransitionConfig {
                from,
                to,
                duration,
                delay: current_time + gap,
                easing,
                ..Default::default()
            }
            .build()?;

            current_time += duration + gap;
            segments.push(segment);
        }

        let (starts_at, ends_at) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (first.starts_at(), last.ends_at()),
            _ => (start.delay, start.delay),
        };

        debug!(
            segments = segments.len(),
            starts_at, ends_at, "Sequential transition built"
        );

        Ok(Self {
            origin: start.from,
            segments,
            starts_at,
            ends_at,
        })
    }

    /// Resolved segments, in playback order
    pub fn segments(&self) -> &[Transition] {
        &self.segments
    }

    pub fn starts_at(&self) -> f64 {
        self.starts_at
    }

    pub fn ends_at(&self) -> f64 {
        self.ends_at
    }

    /// Value at `tick`
    ///
    /// Finished segments hand over to the next one. The last segment has no
    /// successor, so it keeps answering after its end and holds the final state.
    pub fn sample(&self, tick: f64) -> Result<Value> {
        let Some((last, rest)) = self.segments.split_last() else {
            return Ok(self.origin.clone());
        };

        for segment in rest {
            if tick < segment.ends_at() {
                return segment.sample(tick);
            }
        }

        last.sample(tick)
    }
}

impl Animation for SequentialTransition {
    fn sample(&self, tick: f64) -> Result<Value> {
        SequentialTransition::sample(self, tick)
    }

    fn starts_at(&self) -> f64 {
        self.starts_at
    }

    fn ends_at(&self) -> f64 {
        self.ends_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransitionError;
    use pretty_assertions::assert_eq;

    fn numbers() -> SequentialTransition {
        SequentialTransition::new(
            SequenceStart::new(0.0).duration(1.0),
            [Keyframe::new(1.0), Keyframe::new(2.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_number_hand_off() {
        let seq = numbers();
        assert_eq!(seq.sample(0.0).unwrap(), Value::Number(0.0));
        assert_eq!(seq.sample(0.5).unwrap(), Value::Number(0.5));
        assert_eq!(seq.sample(1.0).unwrap(), Value::Number(1.0));
        assert_eq!(seq.sample(1.5).unwrap(), Value::Number(1.5));
        assert_eq!(seq.sample(2.0).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn test_last_segment_holds() {
        let seq = numbers();
        assert_eq!(seq.sample(50.0).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn test_window() {
        let seq = numbers();
        assert_eq!(seq.starts_at(), 0.0);
        assert_eq!(seq.ends_at(), 2.0);
        assert_eq!(seq.segments().len(), 2);
    }

    #[test]
    fn test_partial_mappings_carry_forward() {
        let seq = SequentialTransition::new(
            SequenceStart::new(Value::mapping([("x", 0.0), ("y", 0.0)])).duration(1.0),
            [
                Keyframe::new(Value::mapping([("x", 1.0)])),
                Keyframe::new(Value::mapping([("x", 2.0)])),
            ],
        )
        .unwrap();

        assert_eq!(
            seq.sample(0.0).unwrap(),
            Value::mapping([("x", 0.0), ("y", 0.0)])
        );
        assert_eq!(
            seq.sample(0.5).unwrap(),
            Value::mapping([("x", 0.5), ("y", 0.0)])
        );
        assert_eq!(
            seq.sample(1.0).unwrap(),
            Value::mapping([("x", 1.0), ("y", 0.0)])
        );
        assert_eq!(
            seq.sample(2.0).unwrap(),
            Value::mapping([("x", 2.0), ("y", 0.0)])
        );
    }

    #[test]
    fn test_held_keys_do_not_drift() {
        let seq = SequentialTransition::new(
            SequenceStart::new(Value::mapping([("x", 0.0), ("y", 0.1)])).duration(1.0),
            [Keyframe::new(Value::mapping([("x", 1.0)]))],
        )
        .unwrap();

        for step in 0..=100 {
            let tick = step as f64 / 100.0;
            let value = seq.sample(tick).unwrap();
            assert_eq!(value.get("y"), Some(&Value::Number(0.1)), "tick {tick}");
        }
    }

    #[test]
    fn test_only_the_answering_segment_is_sampled() {
        // Merging replaces sequences wholesale, so the first segment's
        // lengths disagree and it can only fail when sampled.
        let seq = SequentialTransition::new(
            SequenceStart::new([0.0, 0.0]).duration(1.0),
            [Keyframe::new([1.0, 2.0, 3.0]), Keyframe::new([4.0, 5.0, 6.0])],
        )
        .unwrap();

        assert_eq!(
            seq.sample(0.5).unwrap_err(),
            TransitionError::ShapeMismatch { from: 2, to: 3 }
        );
        assert_eq!(seq.sample(2.0).unwrap(), Value::from([4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_keyframe_overrides_and_gaps() {
        let seq = SequentialTransition::new(
            SequenceStart::new(0.0).duration(1.0).delay(0.5).easing("easeInQuad"),
            [
                Keyframe::new(10.0).easing("linear"),
                Keyframe::new(20.0).delay(1.0).duration(2.0),
            ],
        )
        .unwrap();

        let [first, second] = seq.segments() else {
            panic!("expected two segments");
        };
        assert_eq!(first.starts_at(), 0.5);
        assert_eq!(first.ends_at(), 1.5);
        assert_eq!(second.starts_at(), 2.5);
        assert_eq!(second.ends_at(), 4.5);
        assert_eq!(second.from(), &Value::Number(10.0));

        // Linear override on the first segment
        assert_eq!(seq.sample(1.0).unwrap(), Value::Number(5.0));
        // Gap between segments holds the second segment's start
        assert_eq!(seq.sample(2.0).unwrap(), Value::Number(10.0));
        // Second segment falls back to the default easing
        assert_eq!(seq.sample(3.5).unwrap(), Value::Number(12.5));
    }

    #[test]
    fn test_empty_sequence_holds_origin() {
        let seq = SequentialTransition::new(SequenceStart::new(7.0).delay(1.0), []).unwrap();
        assert_eq!(seq.sample(0.0).unwrap(), Value::Number(7.0));
        assert_eq!(seq.sample(9.0).unwrap(), Value::Number(7.0));
        assert_eq!(seq.starts_at(), 1.0);
        assert_eq!(seq.ends_at(), 1.0);
    }

    #[test]
    fn test_mismatched_keyframe_fails_to_build() {
        let err = SequentialTransition::new(SequenceStart::new(0.0), [Keyframe::new([1.0, 2.0])])
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::TypeMismatch {
                from: "number",
                to: "sequence"
            }
        );
    }

    #[test]
    fn test_unknown_keyframe_easing_fails_to_build() {
        let err = SequentialTransition::new(
            SequenceStart::new(0.0),
            [Keyframe::new(1.0).easing("bogus")],
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::UnknownName { .. }));
    }

    #[test]
    fn test_start_from_transition_config() {
        let config = TransitionConfig::new(3.0, 9.0)
            .duration(2.0)
            .delay(1.0)
            .easing("easeOutQuad");
        let start = SequenceStart::from(&config);

        assert_eq!(start.from, Value::Number(3.0));
        assert_eq!(start.duration, 2.0);
        assert_eq!(start.delay, 1.0);
        assert_eq!(start.easing, "easeOutQuad");
    }
}
