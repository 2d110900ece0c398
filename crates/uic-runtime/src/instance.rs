//! A live component instance, carrying its own derived descriptor so nested
//! structural-equivalence and copy delegation work without a global registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use uic_derive::{ComponentDescriptor, FieldComparison, FieldSource, StateUpdateDescriptor};

use crate::error::{Result, RuntimeError};
use crate::state::StateContainer;
use crate::update::StateUpdateRequest;
use crate::value::Value;

/// Shared handle to an instance. Identity (the equivalence fast-accept) is
/// pointer identity of this handle.
pub type ComponentHandle = Arc<ComponentInstance>;

/// One materialized component instance.
#[derive(Debug)]
pub struct ComponentInstance {
    descriptor: Arc<ComponentDescriptor>,
    id: Option<i64>,
    pub(crate) props: BTreeMap<String, Value>,
    pub(crate) tree_props: BTreeMap<String, Value>,
    pub(crate) inter_stage: BTreeMap<String, Value>,
    pub(crate) state: Option<Arc<StateContainer>>,
}

impl ComponentInstance {
    pub fn builder(descriptor: Arc<ComponentDescriptor>) -> ComponentBuilder {
        ComponentBuilder {
            descriptor,
            id: None,
            props: BTreeMap::new(),
            tree_props: BTreeMap::new(),
            inter_stage: BTreeMap::new(),
        }
    }

    /// The component's runtime type name; the equivalence type guard
    /// compares these exactly.
    pub fn type_name(&self) -> &str {
        &self.descriptor.component
    }

    pub fn descriptor(&self) -> &Arc<ComponentDescriptor> {
        &self.descriptor
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    pub fn tree_prop(&self, name: &str) -> Option<&Value> {
        self.tree_props.get(name)
    }

    pub fn inter_stage_input(&self, name: &str) -> Option<&Value> {
        self.inter_stage.get(name)
    }

    pub fn state(&self) -> Option<&Arc<StateContainer>> {
        self.state.as_ref()
    }

    /// Fetch the value a comparison step reads, through the access path the
    /// plan recorded (direct field vs state container).
    pub(crate) fn field_value(&self, comparison: &FieldComparison) -> Value {
        match comparison.source {
            FieldSource::Prop => self
                .props
                .get(&comparison.name)
                .cloned()
                .unwrap_or(Value::Null),
            FieldSource::State => self
                .state
                .as_ref()
                .and_then(|state| state.get(&comparison.name))
                .unwrap_or(Value::Null),
            FieldSource::TreeProp => self
                .tree_props
                .get(&comparison.name)
                .cloned()
                .unwrap_or(Value::Null),
        }
    }

    /// Field-for-field duplicate; the base step of every copy plan.
    pub(crate) fn clone_shallow(&self) -> ComponentInstance {
        ComponentInstance {
            descriptor: Arc::clone(&self.descriptor),
            id: self.id,
            props: self.props.clone(),
            tree_props: self.tree_props.clone(),
            inter_stage: self.inter_stage.clone(),
            state: self.state.clone(),
        }
    }

    /// Look up a declared update operation by name.
    pub fn update_descriptor(&self, operation: &str) -> Result<&StateUpdateDescriptor> {
        self.descriptor
            .updates
            .iter()
            .find(|update| update.operation == operation)
            .ok_or_else(|| RuntimeError::UnknownOperation {
                operation: operation.to_string(),
            })
    }

    /// Capture a state-update invocation as a replayable request, dispatched
    /// by operation name.
    pub fn capture_update(&self, operation: &str, args: Vec<Value>) -> Result<StateUpdateRequest> {
        let descriptor = self.update_descriptor(operation)?;
        StateUpdateRequest::capture(descriptor, args)
    }
}

/// Builds an instance field by field; `build` materializes the state
/// container from the derived shape.
pub struct ComponentBuilder {
    descriptor: Arc<ComponentDescriptor>,
    id: Option<i64>,
    props: BTreeMap<String, Value>,
    tree_props: BTreeMap<String, Value>,
    inter_stage: BTreeMap<String, Value>,
}

impl ComponentBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    pub fn tree_prop(mut self, name: impl Into<String>, value: Value) -> Self {
        self.tree_props.insert(name.into(), value);
        self
    }

    pub fn inter_stage_input(mut self, name: impl Into<String>, value: Value) -> Self {
        self.inter_stage.insert(name.into(), value);
        self
    }

    pub fn build(self) -> ComponentHandle {
        let state = self
            .descriptor
            .state_container
            .as_ref()
            .map(|model| Arc::new(StateContainer::from_model(model)));
        Arc::new(ComponentInstance {
            descriptor: self.descriptor,
            id: self.id,
            props: self.props,
            tree_props: self.tree_props,
            inter_stage: self.inter_stage,
            state,
        })
    }
}
