//! State container shape: one field per declared state value plus, when any
//! update operation emits a transition, the concurrent transition log.

use serde::{Deserialize, Serialize};
use uic_model::SpecModel;

use crate::classify::{ComparisonCategory, classify};
use crate::error::Result;

/// One state field, with the category its comparison uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFieldModel {
    pub name: String,
    pub category: ComparisonCategory,
}

/// The derived shape of the per-instance mutable state record.
///
/// This describes a *runtime* object instantiated once per component
/// instance; the transition log, when present, is an ordered append-only
/// sequence guarded by a lock with a single atomic drain operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateContainerModel {
    pub fields: Vec<StateFieldModel>,
    pub has_transition_log: bool,
}

/// Derive the state container shape, or `None` for stateless components.
pub fn synthesize_state_container(model: &SpecModel) -> Result<Option<StateContainerModel>> {
    if !model.has_state() {
        return Ok(None);
    }
    let mut fields = Vec::with_capacity(model.states.len());
    for state in &model.states {
        fields.push(StateFieldModel {
            name: state.name.clone(),
            category: classify(&state.name, &state.ty)?,
        });
    }
    Ok(Some(StateContainerModel {
        fields,
        has_transition_log: model.has_update_state_with_transition(),
    }))
}
