//! Animation documents
//!
//! Named transitions, sequences and parallel groups can be declared in TOML
//! or JSON and built in one pass:
//!
//! ```toml
//! [transitions.fade]
//! from = 0
//! to = 1
//! duration = 0.3
//!
//! [sequences.slide]
//! start = { from = { x = 0, y = 0 }, duration = 0.5 }
//! keyframes = [{ to = { x = 100 } }, { to = { y = 40 }, easing = "easeOutBack" }]
//!
//! [parallels.enter]
//! items = ["fade", "slide", { from = 0.8, to = 1, duration = 0.3 }]
//! ```
//!
//! Parallel groups may reference transitions and sequences by name, but not
//! other parallel groups.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TransitionError};
use crate::parallel::{ParallelItem, ParallelTransition};
use crate::sequence::{Keyframe, SequenceStart, SequentialTransition};
use crate::transition::{Animation, Transition, TransitionConfig};
use crate::value::Value;

/// A sequence declared in a document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceDocument {
    #[serde(default)]
    pub start: SequenceStart,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

/// An entry in a parallel group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParallelEntry {
    /// Name of a transition or sequence in the same document
    Reference(String),
    Inline(TransitionConfig),
}

/// A parallel group declared in a document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParallelDocument {
    #[serde(default)]
    pub items: Vec<ParallelEntry>,
}

/// Declarative set of named animations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationDocument {
    #[serde(default)]
    pub transitions: IndexMap<String, TransitionConfig>,
    #[serde(default)]
    pub sequences: IndexMap<String, SequenceDocument>,
    #[serde(default)]
    pub parallels: IndexMap<String, ParallelDocument>,
}

impl AnimationDocument {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| TransitionError::Parse(e.to_string()))
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| TransitionError::Parse(e.to_string()))
    }

    /// Build every declared animation
    pub fn build(&self) -> Result<AnimationSet> {
        let mut set = AnimationSet::default();

        for (name, config) in &self.transitions {
            set.insert(name, Arc::new(Transition::new(config.clone())?))?;
        }

        for (name, sequence) in &self.sequences {
            let built =
                SequentialTransition::new(sequence.start.clone(), sequence.keyframes.clone())?;
            set.insert(name, Arc::new(built))?;
        }

        // Parallel groups only see what was built above
        let mut parallels = Vec::with_capacity(self.parallels.len());
        for (name, group) in &self.parallels {
            let items = group
                .items
                .iter()
                .map(|entry| match entry {
                    ParallelEntry::Reference(target) => set
                        .get(target)
                        .map(|animation| ParallelItem::Animation(Box::new(animation)))
                        .ok_or_else(|| TransitionError::UnknownReference(target.clone())),
                    ParallelEntry::Inline(config) => Ok(ParallelItem::Config(config.clone())),
                })
                .collect::<Result<Vec<_>>>()?;
            parallels.push((name, ParallelTransition::new(items)?));
        }
        for (name, parallel) in parallels {
            set.insert(name, Arc::new(parallel))?;
        }

        debug!(animations = set.len(), "Animation document built");
        Ok(set)
    }
}

/// Built animations, keyed by name in declaration order
#[derive(Debug, Default)]
pub struct AnimationSet {
    animations: IndexMap<String, Arc<dyn Animation>>,
}

impl AnimationSet {
    fn insert(&mut self, name: &str, animation: Arc<dyn Animation>) -> Result<()> {
        if self.animations.contains_key(name) {
            return Err(TransitionError::Parse(format!(
                "duplicate animation name {name:?}"
            )));
        }
        self.animations.insert(name.to_owned(), animation);
        Ok(())
    }

    /// Shared handle to a named animation
    pub fn get(&self, name: &str) -> Option<Arc<dyn Animation>> {
        self.animations.get(name).cloned()
    }

    /// Sample a named animation
    pub fn sample(&self, name: &str, tick: f64) -> Result<Value> {
        self.animations
            .get(name)
            .ok_or_else(|| TransitionError::UnknownReference(name.to_owned()))?
            .sample(tick)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
[transitions.fade]
from = 0
to = 1
duration = 0.5

[transitions.spin]
from = 0
to = 360
duration = 1
iterationCount = "infinite"

[sequences.slide]
start = { from = { x = 0, y = 0 }, duration = 1 }
keyframes = [{ to = { x = 1 } }, { to = { x = 2 } }]

[parallels.enter]
items = ["fade", "slide", { from = 1, to = 3, duration = 1 }]
"#;

    #[test]
    fn test_build_from_toml() {
        let set = AnimationDocument::from_toml_str(DOC).unwrap().build().unwrap();

        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["fade", "spin", "slide", "enter"]);

        assert_eq!(set.sample("fade", 0.25).unwrap(), Value::Number(0.5));
        assert_eq!(set.sample("spin", 10.5).unwrap(), Value::Number(180.0));
        assert_eq!(
            set.sample("slide", 1.5).unwrap(),
            Value::mapping([("x", 1.5), ("y", 0.0)])
        );
    }

    #[test]
    fn test_parallel_references() {
        let set = AnimationDocument::from_toml_str(DOC).unwrap().build().unwrap();

        assert_eq!(
            set.sample("enter", 0.5).unwrap(),
            Value::Sequence(vec![
                Value::Number(1.0),
                Value::mapping([("x", 0.5), ("y", 0.0)]),
                Value::Number(2.0),
            ])
        );

        let enter = set.get("enter").unwrap();
        assert_eq!(enter.starts_at(), 0.0);
        assert_eq!(enter.ends_at(), 2.0);
    }

    #[test]
    fn test_build_from_json() {
        let doc = AnimationDocument::from_json_str(
            r#"{"transitions": {"blink": {"from": true, "to": false, "duration": 1}}}"#,
        )
        .unwrap();
        let set = doc.build().unwrap();
        assert_eq!(set.sample("blink", 0.25).unwrap(), Value::Bool(true));
        assert_eq!(set.sample("blink", 0.75).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_unknown_reference() {
        let doc = AnimationDocument::from_toml_str(
            r#"
[parallels.broken]
items = ["missing"]
"#,
        )
        .unwrap();
        assert_eq!(
            doc.build().unwrap_err(),
            TransitionError::UnknownReference("missing".into())
        );

        let set = AnimationDocument::default().build().unwrap();
        assert!(set.is_empty());
        assert!(matches!(
            set.sample("nothing", 0.0),
            Err(TransitionError::UnknownReference(_))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let doc = AnimationDocument::from_toml_str(
            r#"
[transitions.a]
to = 1

[sequences.a]
keyframes = [{ to = 1 }]
"#,
        )
        .unwrap();
        assert!(matches!(doc.build(), Err(TransitionError::Parse(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            AnimationDocument::from_toml_str("[transitions.a\n"),
            Err(TransitionError::Parse(_))
        ));
        assert!(matches!(
            AnimationDocument::from_json_str("{"),
            Err(TransitionError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_config_surfaces_at_build() {
        let doc = AnimationDocument::from_toml_str(
            r#"
[transitions.bad]
to = 1
iterationCount = 2.5
"#,
        )
        .unwrap();
        assert_eq!(
            doc.build().unwrap_err(),
            TransitionError::InvalidIterationCount(2.5)
        );
    }
}
