//! Field layout: the ordered list of fields the generated component carries.
//!
//! Order mirrors the generated body: state container, previous render data,
//! props, tree props, inter-stage inputs, event handlers, event triggers.

use serde::{Deserialize, Serialize};
use uic_model::SpecModel;

use crate::classify::{ComparisonCategory, classify};
use crate::error::Result;

/// What kind of generated field this is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    StateContainer,
    PreviousRenderData,
    Prop { optional: bool, default: Option<String> },
    TreeProp,
    InterStageInput,
    EventHandler,
    EventTrigger,
}

/// One generated field, with its comparison category where one applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedField {
    pub name: String,
    pub kind: FieldKind,
    pub category: Option<ComparisonCategory>,
}

/// The ordered field list for one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub fields: Vec<GeneratedField>,
    /// Marker only; dependency-injection wiring is an external concern.
    pub has_injected_dependencies: bool,
}

/// Derive the ordered field layout.
pub fn synthesize_layout(model: &SpecModel) -> Result<FieldLayout> {
    let mut fields = Vec::new();

    if model.has_state() {
        fields.push(GeneratedField {
            name: "state_container".to_string(),
            kind: FieldKind::StateContainer,
            category: None,
        });
    }
    if !model.render_data_diffs.is_empty() {
        fields.push(GeneratedField {
            name: "previous_render_data".to_string(),
            kind: FieldKind::PreviousRenderData,
            category: None,
        });
    }
    for prop in &model.props {
        fields.push(GeneratedField {
            name: prop.name.clone(),
            kind: FieldKind::Prop {
                optional: prop.optional,
                default: prop.default.clone(),
            },
            category: Some(classify(&prop.name, &prop.ty)?),
        });
    }
    for tree_prop in &model.tree_props {
        fields.push(GeneratedField {
            name: tree_prop.name.clone(),
            kind: FieldKind::TreeProp,
            category: Some(classify(&tree_prop.name, &tree_prop.ty)?),
        });
    }
    for input in &model.inter_stage_inputs {
        fields.push(GeneratedField {
            name: input.name.clone(),
            kind: FieldKind::InterStageInput,
            category: None,
        });
    }
    for handler in &model.event_handlers {
        fields.push(GeneratedField {
            name: format!("{}_handler", handler.name),
            kind: FieldKind::EventHandler,
            category: None,
        });
    }
    for trigger in &model.event_triggers {
        fields.push(GeneratedField {
            name: format!("{}_trigger", trigger.name),
            kind: FieldKind::EventTrigger,
            category: None,
        });
    }

    Ok(FieldLayout {
        fields,
        has_injected_dependencies: model.has_injected_dependencies,
    })
}
