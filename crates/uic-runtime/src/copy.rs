//! Executes a derived copy plan against a live instance.

use std::sync::Arc;

use tracing::trace;

use crate::instance::ComponentHandle;
use crate::state::StateContainer;
use crate::value::Value;

/// Duplicate an instance per its descriptor's copy plan.
///
/// Without a plan the result is a plain shallow duplicate. With one:
/// directly component-like props are replaced by nested copies (null
/// propagates), inter-stage inputs are nulled unless a supported deep copy
/// was requested, and stateful components always start the copy from a
/// fresh, empty state container. Accumulated state and pending transitions
/// are never duplicated.
pub fn make_copy(instance: &ComponentHandle, deep: bool) -> ComponentHandle {
    let descriptor = Arc::clone(instance.descriptor());
    let mut copy = instance.clone_shallow();

    if let Some(plan) = &descriptor.copy {
        for name in &plan.component_props {
            if let Some(slot) = copy.props.get_mut(name) {
                *slot = match &*slot {
                    Value::Component(child) => Value::Component(make_copy(child, false)),
                    Value::Null => Value::Null,
                    other => (*other).clone(),
                };
            }
        }

        let deep_in_effect = deep && plan.supports_deep_copy;
        if !deep_in_effect {
            // Inter-stage caches are phase-scoped; they must not leak into a
            // shallow copy.
            for name in &plan.inter_stage_inputs {
                if let Some(slot) = copy.inter_stage.get_mut(name) {
                    *slot = Value::Null;
                }
            }
        }

        if plan.fresh_state {
            copy.state = descriptor
                .state_container
                .as_ref()
                .map(|model| Arc::new(StateContainer::from_model(model)));
        }
    }

    trace!(component = %descriptor.component, deep, "copied component instance");
    Arc::new(copy)
}
