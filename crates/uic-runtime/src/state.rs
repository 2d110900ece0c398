//! The per-instance mutable state container and its transition log.
//!
//! The transition log is the one shared mutable resource in this core.
//! Discipline: hold the lock for the shortest possible critical section;
//! never observe a partial enqueue or a partially-cleared drain. `enqueue`
//! and `drain` are mutually exclusive with each other and with themselves,
//! so no transition is ever returned twice or lost: a transition enqueued
//! concurrently with a drain is either in that drain's snapshot or deferred
//! to the next one.

use parking_lot::Mutex;
use std::collections::BTreeMap;

use uic_derive::StateContainerModel;

use crate::error::{Result, RuntimeError};
use crate::update::StateUpdateRequest;
use crate::value::Value;

/// An opaque value emitted by a state update, queued for batch consumption
/// by the rendering/commit pipeline.
#[derive(Debug, Clone)]
pub struct Transition(pub Value);

/// Ordered, append-only transition sequence guarded by a lock.
#[derive(Debug, Default)]
pub struct TransitionLog {
    entries: Mutex<Vec<Transition>>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transition. O(1) under the lock; callable concurrently
    /// from any number of update operations.
    pub fn enqueue(&self, transition: Transition) {
        self.entries.lock().push(transition);
    }

    /// Atomically take the accumulated transitions and clear the log.
    ///
    /// An empty log returns an empty sequence without copying.
    pub fn drain(&self) -> Vec<Transition> {
        let mut entries = self.entries.lock();
        if entries.is_empty() {
            return Vec::new();
        }
        std::mem::take(&mut *entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// The runtime state record: one slot per declared state value, plus the
/// transition log when any update operation emits transitions.
///
/// Instantiated once per component instance; a copy of the component always
/// starts from a fresh, empty container.
#[derive(Debug)]
pub struct StateContainer {
    values: Mutex<BTreeMap<String, Value>>,
    log: Option<TransitionLog>,
}

impl StateContainer {
    /// Build a default-initialized container for the derived shape.
    pub fn from_model(model: &StateContainerModel) -> Self {
        let values = model
            .fields
            .iter()
            .map(|field| (field.name.clone(), Value::Null))
            .collect();
        Self {
            values: Mutex::new(values),
            log: model.has_transition_log.then(TransitionLog::new),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.lock().get(name).cloned()
    }

    /// Set a declared state value. Unknown names indicate a dispatch bug and
    /// are rejected rather than silently growing the record.
    pub fn set(&self, name: &str, value: Value) -> Result<()> {
        let mut values = self.values.lock();
        match values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::UnknownStateValue {
                name: name.to_string(),
            }),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.values.lock().clone()
    }

    pub fn has_transition_log(&self) -> bool {
        self.log.is_some()
    }

    /// Enqueue a transition; returns false when the container carries no log
    /// (no declared update operation emits transitions).
    pub fn enqueue_transition(&self, transition: Transition) -> bool {
        match &self.log {
            Some(log) => {
                log.enqueue(transition);
                true
            }
            None => false,
        }
    }

    /// Atomic copy-and-clear of the accumulated transitions.
    pub fn drain_transitions(&self) -> Vec<Transition> {
        self.log.as_ref().map(TransitionLog::drain).unwrap_or_default()
    }

    pub fn has_pending_transitions(&self) -> bool {
        self.log.as_ref().is_some_and(|log| !log.is_empty())
    }

    /// Apply a captured update: `operation` mutates the state storage under
    /// the lock and may emit a transition, which is enqueued afterwards.
    ///
    /// The request itself carries only the captured arguments; all mutation
    /// happens here, at application time.
    pub fn apply<F>(&self, request: &StateUpdateRequest, operation: F)
    where
        F: FnOnce(&mut BTreeMap<String, Value>, &StateUpdateRequest) -> Option<Transition>,
    {
        let transition = {
            let mut values = self.values.lock();
            operation(&mut values, request)
        };
        if let Some(transition) = transition {
            self.enqueue_transition(transition);
        }
    }
}
