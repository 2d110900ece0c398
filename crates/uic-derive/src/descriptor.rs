//! The bundled derivation output: everything the external emitter needs to
//! produce a concrete component implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug_span, info};
use uic_model::SpecModel;

use crate::copy::{CopyPlan, synthesize_copy};
use crate::equivalence::{EquivalencePlan, synthesize_equivalence};
use crate::error::Result;
use crate::layout::{FieldLayout, synthesize_layout};
use crate::render_data::{RenderDataPlan, synthesize_render_data};
use crate::state::{StateContainerModel, synthesize_state_container};
use crate::update::{StateUpdateDescriptor, synthesize_update_descriptors};

/// The complete, deterministic description of a component's runtime
/// implementation. A pure function of the spec model; cacheable per
/// component definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub component: String,
    pub layout: FieldLayout,
    pub equivalence: EquivalencePlan,
    pub state_container: Option<StateContainerModel>,
    pub copy: Option<CopyPlan>,
    pub updates: Vec<StateUpdateDescriptor>,
    pub render_data: Option<RenderDataPlan>,
}

/// Run every derivation pass over a spec model.
///
/// Fails fast on internal-consistency violations: duplicate declared names,
/// unresolved or ill-typed diff references, or container nesting beyond the
/// supported depth.
pub fn derive_descriptor(model: &SpecModel) -> Result<ComponentDescriptor> {
    let span = debug_span!("derive_descriptor", component = %model.component);
    let _guard = span.enter();

    model.check_names()?;

    let descriptor = ComponentDescriptor {
        component: model.component.clone(),
        layout: synthesize_layout(model)?,
        equivalence: synthesize_equivalence(model)?,
        state_container: synthesize_state_container(model)?,
        copy: synthesize_copy(model)?,
        updates: synthesize_update_descriptors(model),
        render_data: synthesize_render_data(model)?,
    };
    info!(
        component = %model.component,
        fields = descriptor.layout.fields.len(),
        updates = descriptor.updates.len(),
        has_state = descriptor.state_container.is_some(),
        "derived component descriptor"
    );
    Ok(descriptor)
}
