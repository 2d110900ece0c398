//! Equivalence synthesis: the ordered comparison steps that implement
//! structural equivalence for a component type.
//!
//! The plan is a pure function of the spec model. Evaluation order is fixed:
//! identity fast-accept, null/type fast-reject, the optional id shortcut, and
//! then one field step per prop, state value, and tree prop, in declaration
//! order. The first mismatching field rejects without evaluating later steps.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uic_model::SpecModel;

use crate::classify::{ComparisonCategory, classify};
use crate::error::Result;

/// Where a compared field lives on the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// A direct field on the component.
    Prop,
    /// Accessed through the state container.
    State,
    /// A direct field, propagated down the tree.
    TreeProp,
}

/// A single field comparison, tagged with the rule that applies to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldComparison {
    pub name: String,
    pub source: FieldSource,
    pub category: ComparisonCategory,
}

/// One step of the equivalence predicate, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStep {
    /// Same instance: accept without evaluating any field.
    IdentityAccept,
    /// Other operand null or of a different runtime type: reject.
    TypeGuard,
    /// Opt-in: both operands carry the same identity-bearing id: accept.
    IdShortcut,
    /// Compare one field; a mismatch rejects immediately.
    Field(FieldComparison),
}

/// The full ordered equivalence predicate for one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalencePlan {
    pub component: String,
    pub steps: Vec<ComparisonStep>,
}

impl EquivalencePlan {
    /// The field steps, in evaluation order.
    pub fn field_steps(&self) -> impl Iterator<Item = &FieldComparison> {
        self.steps.iter().filter_map(|step| match step {
            ComparisonStep::Field(field) => Some(field),
            _ => None,
        })
    }
}

/// Synthesize the equivalence plan for a spec model.
///
/// Invokes the classifier once per declared prop, state value, and tree prop.
pub fn synthesize_equivalence(model: &SpecModel) -> Result<EquivalencePlan> {
    let mut steps = vec![ComparisonStep::IdentityAccept, ComparisonStep::TypeGuard];
    if model.should_check_id_in_equivalence {
        steps.push(ComparisonStep::IdShortcut);
    }

    for prop in &model.props {
        steps.push(field_step(&prop.name, FieldSource::Prop, classify(&prop.name, &prop.ty)?));
    }
    for state in &model.states {
        steps.push(field_step(
            &state.name,
            FieldSource::State,
            classify(&state.name, &state.ty)?,
        ));
    }
    for tree_prop in &model.tree_props {
        steps.push(field_step(
            &tree_prop.name,
            FieldSource::TreeProp,
            classify(&tree_prop.name, &tree_prop.ty)?,
        ));
    }

    debug!(
        component = %model.component,
        steps = steps.len(),
        "synthesized equivalence plan"
    );
    Ok(EquivalencePlan {
        component: model.component.clone(),
        steps,
    })
}

fn field_step(name: &str, source: FieldSource, category: ComparisonCategory) -> ComparisonStep {
    ComparisonStep::Field(FieldComparison {
        name: name.to_string(),
        source,
        category,
    })
}
