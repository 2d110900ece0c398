use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};
use crate::semantic::SemanticType;

/// An external input ("prop"): passed explicitly by the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropModel {
    pub name: String,
    pub ty: SemanticType,
    #[serde(default)]
    pub optional: bool,
    /// Default initializer expression, when the spec declares one.
    #[serde(default)]
    pub default: Option<String>,
}

impl PropModel {
    pub fn required(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A mutable state value, private to the component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateModel {
    pub name: String,
    pub ty: SemanticType,
}

impl StateModel {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An input propagated implicitly down the containment tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePropModel {
    pub name: String,
    pub ty: SemanticType,
}

impl TreePropModel {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A value computed in one lifecycle phase and consumed in a later one.
/// Invalidated between layout passes unless a deep copy is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterStageInputModel {
    pub name: String,
    pub ty: SemanticType,
}

impl InterStageInputModel {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A named event-handler slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventHandlerModel {
    pub name: String,
}

impl EventHandlerModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named event-trigger slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTriggerModel {
    pub name: String,
}

impl EventTriggerModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A captured parameter of a state-update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamModel {
    pub name: String,
    pub ty: SemanticType,
}

impl ParamModel {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A state-update operation: name plus the parameters marked as captured,
/// in declared order. May additionally emit a transition value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStateModel {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamModel>,
    #[serde(default)]
    pub emits_transition: bool,
}

impl UpdateStateModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            emits_transition: false,
        }
    }

    pub fn with_param(mut self, param: ParamModel) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_transition(mut self) -> Self {
        self.emits_transition = true;
        self
    }
}

/// A named reference to a prop or state value whose previous and current
/// values must both be retained for diffing between render passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDataDiffModel {
    pub name: String,
}

impl RenderDataDiffModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The section in which a referenced name was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSection {
    Prop,
    State,
    TreeProp,
    InterStageInput,
}

impl fmt::Display for FieldSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldSection::Prop => "prop",
            FieldSection::State => "state",
            FieldSection::TreeProp => "tree prop",
            FieldSection::InterStageInput => "inter-stage input",
        };
        write!(f, "{label}")
    }
}

/// The root input to derivation: a complete, pre-validated component spec.
///
/// Sections are ordered sequences; declaration order is significant because
/// both the field layout and the equivalence plan preserve it. Names must be
/// unique across props, state, tree props, and inter-stage inputs; the
/// upstream validator guarantees this, and [`SpecModel::check_names`] defends
/// against it having failed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecModel {
    pub component: String,
    #[serde(default)]
    pub props: Vec<PropModel>,
    #[serde(default)]
    pub states: Vec<StateModel>,
    #[serde(default)]
    pub tree_props: Vec<TreePropModel>,
    #[serde(default)]
    pub inter_stage_inputs: Vec<InterStageInputModel>,
    #[serde(default)]
    pub event_handlers: Vec<EventHandlerModel>,
    #[serde(default)]
    pub event_triggers: Vec<EventTriggerModel>,
    #[serde(default)]
    pub update_state_operations: Vec<UpdateStateModel>,
    #[serde(default)]
    pub render_data_diffs: Vec<RenderDataDiffModel>,
    #[serde(default)]
    pub has_injected_dependencies: bool,
    #[serde(default = "default_true")]
    pub should_generate_copy_method: bool,
    #[serde(default)]
    pub has_deep_copy: bool,
    #[serde(default)]
    pub should_check_id_in_equivalence: bool,
}

fn default_true() -> bool {
    true
}

impl SpecModel {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: Vec::new(),
            states: Vec::new(),
            tree_props: Vec::new(),
            inter_stage_inputs: Vec::new(),
            event_handlers: Vec::new(),
            event_triggers: Vec::new(),
            update_state_operations: Vec::new(),
            render_data_diffs: Vec::new(),
            has_injected_dependencies: false,
            should_generate_copy_method: true,
            has_deep_copy: false,
            should_check_id_in_equivalence: false,
        }
    }

    pub fn with_prop(mut self, prop: PropModel) -> Self {
        self.props.push(prop);
        self
    }

    pub fn with_state(mut self, state: StateModel) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_tree_prop(mut self, tree_prop: TreePropModel) -> Self {
        self.tree_props.push(tree_prop);
        self
    }

    pub fn with_inter_stage_input(mut self, input: InterStageInputModel) -> Self {
        self.inter_stage_inputs.push(input);
        self
    }

    pub fn with_event_handler(mut self, handler: EventHandlerModel) -> Self {
        self.event_handlers.push(handler);
        self
    }

    pub fn with_event_trigger(mut self, trigger: EventTriggerModel) -> Self {
        self.event_triggers.push(trigger);
        self
    }

    pub fn with_update_state(mut self, operation: UpdateStateModel) -> Self {
        self.update_state_operations.push(operation);
        self
    }

    pub fn with_render_data_diff(mut self, diff: RenderDataDiffModel) -> Self {
        self.render_data_diffs.push(diff);
        self
    }

    pub fn with_deep_copy(mut self) -> Self {
        self.has_deep_copy = true;
        self
    }

    pub fn with_id_equivalence_shortcut(mut self) -> Self {
        self.should_check_id_in_equivalence = true;
        self
    }

    /// True when the component declares any private mutable state.
    pub fn has_state(&self) -> bool {
        !self.states.is_empty()
    }

    /// True when any update operation also emits a transition value, which
    /// obligates the state container to carry a transition log.
    pub fn has_update_state_with_transition(&self) -> bool {
        self.update_state_operations
            .iter()
            .any(|operation| operation.emits_transition)
    }

    /// Resolve a referenced name to its declaring section.
    ///
    /// Names are unique across sections, so the first match is the only one.
    pub fn resolve(&self, name: &str) -> Option<FieldSection> {
        if self.props.iter().any(|prop| prop.name == name) {
            return Some(FieldSection::Prop);
        }
        if self.states.iter().any(|state| state.name == name) {
            return Some(FieldSection::State);
        }
        if self.tree_props.iter().any(|tree_prop| tree_prop.name == name) {
            return Some(FieldSection::TreeProp);
        }
        if self
            .inter_stage_inputs
            .iter()
            .any(|input| input.name == name)
        {
            return Some(FieldSection::InterStageInput);
        }
        None
    }

    /// Look up the declared type of a resolvable field.
    pub fn field_type(&self, name: &str) -> Option<&SemanticType> {
        if let Some(prop) = self.props.iter().find(|prop| prop.name == name) {
            return Some(&prop.ty);
        }
        if let Some(state) = self.states.iter().find(|state| state.name == name) {
            return Some(&state.ty);
        }
        if let Some(tree_prop) = self.tree_props.iter().find(|tp| tp.name == name) {
            return Some(&tree_prop.ty);
        }
        self.inter_stage_inputs
            .iter()
            .find(|input| input.name == name)
            .map(|input| &input.ty)
    }

    /// Defend against a broken upstream validator: every declared field name
    /// must be unique across the four value-bearing sections.
    pub fn check_names(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        let names = self
            .props
            .iter()
            .map(|prop| prop.name.as_str())
            .chain(self.states.iter().map(|state| state.name.as_str()))
            .chain(self.tree_props.iter().map(|tp| tp.name.as_str()))
            .chain(self.inter_stage_inputs.iter().map(|input| input.name.as_str()));
        for name in names {
            if !seen.insert(name) {
                return Err(ModelError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::ScalarKind;

    fn sample() -> SpecModel {
        SpecModel::new("Counter")
            .with_prop(PropModel::required("label", SemanticType::text()))
            .with_state(StateModel::new(
                "count",
                SemanticType::Scalar(ScalarKind::Int32),
            ))
            .with_update_state(
                UpdateStateModel::new("increment")
                    .with_param(ParamModel::new(
                        "delta",
                        SemanticType::Scalar(ScalarKind::Int32),
                    ))
                    .with_transition(),
            )
    }

    #[test]
    fn transition_predicate() {
        assert!(sample().has_update_state_with_transition());
        assert!(!SpecModel::new("Empty").has_update_state_with_transition());
    }

    #[test]
    fn field_type_lookup() {
        let model = sample();
        assert_eq!(model.field_type("label"), Some(&SemanticType::text()));
        assert!(model.field_type("missing").is_none());
    }
}
