//! Transitions
//!
//! A [`Transition`] is an immutable description of one `from -> to`
//! interpolation. Sampling it at a tick runs the tick through delay,
//! direction and easing, then interpolates the values. Nothing is mutated,
//! so the same transition can be sampled from any number of threads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::direction::Direction;
use crate::easing::Easing;
use crate::error::Result;
use crate::iteration::{raw_count, IterationCount};
use crate::value::{interpolate, Value};

/// Anything that produces a value for a tick
///
/// Implemented by [`Transition`] and the sequential and parallel composers,
/// so composed animations can be nested inside each other.
pub trait Animation: std::fmt::Debug + Send + Sync {
    /// Value at `tick` (caller-defined time units, seconds by convention)
    fn sample(&self, tick: f64) -> Result<Value>;

    /// Tick at which the animation starts moving
    fn starts_at(&self) -> f64;

    /// Tick at which the animation has played every iteration
    fn ends_at(&self) -> f64;
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn sample(&self, tick: f64) -> Result<Value> {
        (**self).sample(tick)
    }

    fn starts_at(&self) -> f64 {
        (**self).starts_at()
    }

    fn ends_at(&self) -> f64 {
        (**self).ends_at()
    }
}

impl<A: Animation + ?Sized> Animation for Arc<A> {
    fn sample(&self, tick: f64) -> Result<Value> {
        (**self).sample(tick)
    }

    fn starts_at(&self) -> f64 {
        (**self).starts_at()
    }

    fn ends_at(&self) -> f64 {
        (**self).ends_at()
    }
}

/// Unresolved transition settings
///
/// Easing and direction are referenced by name and the iteration count is a
/// raw number; [`Transition::new`] validates all three.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionConfig {
    pub from: Value,
    pub to: Value,
    /// Length of one iteration
    pub duration: f64,
    /// Ticks before the transition starts moving
    pub delay: f64,
    pub easing: String,
    /// Non-negative integer, or `f64::INFINITY`
    #[serde(with = "raw_count")]
    pub iteration_count: f64,
    pub direction: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            from: Value::Number(0.0),
            to: Value::Number(0.0),
            duration: 0.0,
            delay: 0.0,
            easing: "linear".to_owned(),
            iteration_count: 1.0,
            direction: "forward".to_owned(),
        }
    }
}

impl TransitionConfig {
    /// Create a config animating `from` to `to` with default settings
    pub fn new(from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }

    /// Builder: set duration of one iteration
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Builder: set delay before the transition starts
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Builder: set easing by name
    pub fn easing(mut self, name: impl Into<String>) -> Self {
        self.easing = name.into();
        self
    }

    /// Builder: set direction by name
    pub fn direction(mut self, name: impl Into<String>) -> Self {
        self.direction = name.into();
        self
    }

    /// Builder: set the number of iterations
    pub fn iteration_count(mut self, count: f64) -> Self {
        self.iteration_count = count;
        self
    }

    /// Builder: repeat forever
    pub fn infinite(self) -> Self {
        self.iteration_count(f64::INFINITY)
    }

    /// Validate and build the transition
    pub fn build(self) -> Result<Transition> {
        Transition::new(self)
    }
}

/// A resolved, immutable transition
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    from: Value,
    to: Value,
    duration: f64,
    delay: f64,
    easing: Easing,
    direction: Direction,
    iterations: IterationCount,
    starts_at: f64,
    ends_at: f64,
}

impl Transition {
    /// Build a transition, resolving its easing and direction names
    pub fn new(config: TransitionConfig) -> Result<Self> {
        let iterations = IterationCount::try_from(config.iteration_count)?;
        let easing = Easing::from_name(&config.easing)?;
        let direction = Direction::from_name(&config.direction)?;

        Ok(Self::with_parts(
            config.from,
            config.to,
            config.duration,
            config.delay,
            easing,
            direction,
            iterations,
        ))
    }

    /// Build a transition from already-resolved parts
    pub fn with_parts(
        from: Value,
        to: Value,
        duration: f64,
        delay: f64,
        easing: Easing,
        direction: Direction,
        iterations: IterationCount,
    ) -> Self {
        let starts_at = delay;
        let ends_at = delay + iterations.total(duration);

        debug!(
            starts_at,
            ends_at,
            easing = ?easing,
            direction = direction.name(),
            iterations = %iterations,
            "Transition built"
        );

        Self {
            from,
            to,
            duration,
            delay,
            easing,
            direction,
            iterations,
            starts_at,
            ends_at,
        }
    }

    pub fn from(&self) -> &Value {
        &self.from
    }

    pub fn to(&self) -> &Value {
        &self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn iterations(&self) -> IterationCount {
        self.iterations
    }

    pub fn starts_at(&self) -> f64 {
        self.starts_at
    }

    pub fn ends_at(&self) -> f64 {
        self.ends_at
    }

    /// Eased progress at `tick`
    pub fn progress(&self, tick: f64) -> f64 {
        // Ticks before the delay hold the start value
        let elapsed = (tick - self.delay).max(0.0);

        // Seconds -> milliseconds so the direction's wraparound works on whole units
        let raw = self
            .direction
            .progress(elapsed * 1000.0, self.duration * 1000.0, self.iterations);

        self.easing.apply(raw)
    }

    /// Interpolated value at `tick`
    pub fn sample(&self, tick: f64) -> Result<Value> {
        interpolate(&self.from, &self.to, self.progress(tick))
    }
}

impl Animation for Transition {
    fn sample(&self, tick: f64) -> Result<Value> {
        Transition::sample(self, tick)
    }

    fn starts_at(&self) -> f64 {
        self.starts_at
    }

    fn ends_at(&self) -> f64 {
        self.ends_at
    }
}

impl TryFrom<TransitionConfig> for Transition {
    type Error = crate::error::TransitionError;

    fn try_from(config: TransitionConfig) -> Result<Self> {
        Transition::new(config)
    }
}
