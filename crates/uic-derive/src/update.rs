//! State-update descriptors: the replayable request-object shape for each
//! update operation.
//!
//! A request object captures exactly the operation's captured parameters, in
//! declared order, with no additional fields. Capture is immutable; the
//! request performs no mutation itself and is dispatched by name later.

use serde::{Deserialize, Serialize};
use uic_model::{SemanticType, SpecModel};

/// One captured parameter, in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedParam {
    pub name: String,
    pub ty: SemanticType,
}

/// The request-object shape for one update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdateDescriptor {
    /// The operation's declared name; dispatch key at runtime.
    pub operation: String,
    /// The request shape's type name, e.g. `IncrementStateUpdate`.
    pub request_name: String,
    pub params: Vec<CapturedParam>,
    /// Whether applying this update also enqueues a transition value.
    pub emits_transition: bool,
}

/// Derive one descriptor per update operation, transition-emitting ones
/// included, in declaration order.
pub fn synthesize_update_descriptors(model: &SpecModel) -> Vec<StateUpdateDescriptor> {
    model
        .update_state_operations
        .iter()
        .map(|operation| StateUpdateDescriptor {
            operation: operation.name.clone(),
            request_name: request_name(&operation.name),
            params: operation
                .params
                .iter()
                .map(|param| CapturedParam {
                    name: param.name.clone(),
                    ty: param.ty.clone(),
                })
                .collect(),
            emits_transition: operation.emits_transition,
        })
        .collect()
}

fn request_name(operation: &str) -> String {
    let mut name = String::with_capacity(operation.len() + 11);
    for part in operation.split('_').filter(|part| !part.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name.push_str("StateUpdate");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use uic_model::{ParamModel, ScalarKind, UpdateStateModel};

    #[test]
    fn captures_params_in_declared_order() {
        let model = SpecModel::new("Counter").with_update_state(
            UpdateStateModel::new("set_range")
                .with_param(ParamModel::new("low", SemanticType::Scalar(ScalarKind::Int32)))
                .with_param(ParamModel::new("high", SemanticType::Scalar(ScalarKind::Int32))),
        );
        let descriptors = synthesize_update_descriptors(&model);
        assert_eq!(descriptors.len(), 1);
        let descriptor = &descriptors[0];
        assert_eq!(descriptor.request_name, "SetRangeStateUpdate");
        let names: Vec<&str> = descriptor.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["low", "high"]);
        assert!(!descriptor.emits_transition);
    }

    #[test]
    fn transition_flag_carries_through() {
        let model = SpecModel::new("Counter")
            .with_update_state(UpdateStateModel::new("expand").with_transition());
        let descriptors = synthesize_update_descriptors(&model);
        assert!(descriptors[0].emits_transition);
        assert!(descriptors[0].params.is_empty());
    }
}
