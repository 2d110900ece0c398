//! Copy/reset synthesis: the plan for duplicating a component instance.
//!
//! Executed semantics: shallow field-for-field duplication, then nested
//! copies for directly component-like props (null propagates), inter-stage
//! cache invalidation unless a supported deep copy was requested, and a
//! brand-new empty state container for stateful components.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uic_model::SpecModel;

use crate::classify::{ComparisonCategory, classify};
use crate::error::Result;

/// The derived copy plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyPlan {
    /// Props that are directly component-like (not through a container); the
    /// copy replaces each with the nested component's own copy.
    pub component_props: Vec<String>,
    /// Inter-stage inputs nulled on the copy unless deep copy is in effect.
    pub inter_stage_inputs: Vec<String>,
    /// Replace the copied state-container reference with a fresh, empty one.
    pub fresh_state: bool,
    /// Whether the component supports a caller-requested deep copy that
    /// retains inter-stage inputs.
    pub supports_deep_copy: bool,
}

/// Synthesize the copy plan, or `None` when no copy method is generated.
///
/// Mirrors the generation guard: nothing is emitted when the spec opts out,
/// or when there are no component-like props, no inter-stage inputs, and no
/// update operations, in which case a plain shallow copy suffices.
pub fn synthesize_copy(model: &SpecModel) -> Result<Option<CopyPlan>> {
    if !model.should_generate_copy_method {
        return Ok(None);
    }

    let mut component_props = Vec::new();
    for prop in &model.props {
        if classify(&prop.name, &prop.ty)? == ComparisonCategory::ComponentLike {
            component_props.push(prop.name.clone());
        }
    }

    if component_props.is_empty()
        && model.inter_stage_inputs.is_empty()
        && model.update_state_operations.is_empty()
    {
        return Ok(None);
    }

    let plan = CopyPlan {
        component_props,
        inter_stage_inputs: model
            .inter_stage_inputs
            .iter()
            .map(|input| input.name.clone())
            .collect(),
        fresh_state: model.has_state(),
        supports_deep_copy: model.has_deep_copy,
    };
    debug!(
        component = %model.component,
        nested = plan.component_props.len(),
        inter_stage = plan.inter_stage_inputs.len(),
        "synthesized copy plan"
    );
    Ok(Some(plan))
}
