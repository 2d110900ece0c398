//! Immutable capture of state-update invocations.

use uic_derive::StateUpdateDescriptor;

use crate::error::{Result, RuntimeError};
use crate::value::Value;

/// A replayable state-update request: the operation name plus exactly the
/// captured arguments, paired with their declared parameter names in order.
///
/// Capture performs no mutation; the request is applied later (possibly
/// batched) through [`crate::state::StateContainer::apply`].
#[derive(Debug, Clone)]
pub struct StateUpdateRequest {
    pub operation: String,
    pub args: Vec<(String, Value)>,
}

impl StateUpdateRequest {
    /// Capture an invocation against the operation's derived descriptor.
    /// Arity must match the captured-parameter list exactly.
    pub fn capture(descriptor: &StateUpdateDescriptor, args: Vec<Value>) -> Result<Self> {
        if args.len() != descriptor.params.len() {
            return Err(RuntimeError::ArityMismatch {
                operation: descriptor.operation.clone(),
                expected: descriptor.params.len(),
                actual: args.len(),
            });
        }
        Ok(Self {
            operation: descriptor.operation.clone(),
            args: descriptor
                .params
                .iter()
                .map(|param| param.name.clone())
                .zip(args)
                .collect(),
        })
    }

    /// Look up a captured argument by its declared parameter name.
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }
}
