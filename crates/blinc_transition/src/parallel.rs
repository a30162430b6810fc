//! Parallel transitions
//!
//! Samples several animations at the same tick and returns their values in
//! input order.

use smallvec::SmallVec;
use tracing::debug;

use crate::error::Result;
use crate::sequence::SequentialTransition;
use crate::transition::{Animation, Transition, TransitionConfig};
use crate::value::Value;

/// An input to [`ParallelTransition::new`]
#[derive(Debug)]
pub enum ParallelItem {
    /// An animation that is already built
    Animation(Box<dyn Animation>),
    /// Settings promoted through the transition factory
    Config(TransitionConfig),
}

impl ParallelItem {
    fn into_animation(self) -> Result<Box<dyn Animation>> {
        match self {
            ParallelItem::Animation(animation) => Ok(animation),
            ParallelItem::Config(config) => Ok(Box::new(Transition::new(config)?)),
        }
    }
}

impl From<TransitionConfig> for ParallelItem {
    fn from(config: TransitionConfig) -> Self {
        ParallelItem::Config(config)
    }
}

impl From<Transition> for ParallelItem {
    fn from(transition: Transition) -> Self {
        ParallelItem::Animation(Box::new(transition))
    }
}

impl From<SequentialTransition> for ParallelItem {
    fn from(sequence: SequentialTransition) -> Self {
        ParallelItem::Animation(Box::new(sequence))
    }
}

impl From<ParallelTransition> for ParallelItem {
    fn from(parallel: ParallelTransition) -> Self {
        ParallelItem::Animation(Box::new(parallel))
    }
}

impl From<Box<dyn Animation>> for ParallelItem {
    fn from(animation: Box<dyn Animation>) -> Self {
        ParallelItem::Animation(animation)
    }
}

/// Animations sampled side by side
#[derive(Debug)]
pub struct ParallelTransition {
    items: SmallVec<[Box<dyn Animation>; 4]>,
}

impl ParallelTransition {
    /// Build from animations and configs, keeping their order
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<ParallelItem>,
    {
        let items = items
            .into_iter()
            .map(|item| item.into().into_animation())
            .collect::<Result<SmallVec<_>>>()?;

        debug!(items = items.len(), "Parallel transition built");

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every item's value at `tick`; the first failing item aborts the sample
    pub fn sample_all(&self, tick: f64) -> Result<Vec<Value>> {
        self.items.iter().map(|item| item.sample(tick)).collect()
    }

    /// Earliest start among the items
    pub fn starts_at(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.starts_at())
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Latest end among the items
    pub fn ends_at(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.ends_at())
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

impl Animation for ParallelTransition {
    fn sample(&self, tick: f64) -> Result<Value> {
        self.sample_all(tick).map(Value::Sequence)
    }

    fn starts_at(&self) -> f64 {
        ParallelTransition::starts_at(self)
    }

    fn ends_at(&self) -> f64 {
        ParallelTransition::ends_at(self)
    }
}
