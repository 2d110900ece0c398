//! Interprets a derived equivalence plan over two component instances.
//!
//! The plan's order is authoritative: identity fast-accept, type guard,
//! optional id shortcut, then field steps. The first mismatching field
//! rejects immediately; later fields are never evaluated.

use std::sync::Arc;

use uic_derive::{ComparisonCategory, ComparisonStep};

use crate::instance::ComponentHandle;
use crate::value::{Value, f32_equivalent, f64_equivalent};

/// Outcome of a traced evaluation: the verdict plus the names of the field
/// steps that were actually evaluated, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceTrace {
    pub equivalent: bool,
    pub fields_evaluated: Vec<String>,
}

/// Structural equivalence of two instances under `left`'s derived plan.
pub fn is_equivalent(left: &ComponentHandle, right: Option<&ComponentHandle>) -> bool {
    evaluate(left, right, None)
}

/// Like [`is_equivalent`], additionally reporting which fields were compared.
pub fn is_equivalent_traced(
    left: &ComponentHandle,
    right: Option<&ComponentHandle>,
) -> EquivalenceTrace {
    let mut fields = Vec::new();
    let equivalent = evaluate(left, right, Some(&mut fields));
    EquivalenceTrace {
        equivalent,
        fields_evaluated: fields,
    }
}

fn evaluate(
    left: &ComponentHandle,
    right: Option<&ComponentHandle>,
    mut observer: Option<&mut Vec<String>>,
) -> bool {
    for step in &left.descriptor().equivalence.steps {
        match step {
            ComparisonStep::IdentityAccept => {
                if let Some(other) = right {
                    if Arc::ptr_eq(left, other) {
                        return true;
                    }
                }
            }
            ComparisonStep::TypeGuard => {
                let Some(other) = right else { return false };
                if left.type_name() != other.type_name() {
                    return false;
                }
            }
            ComparisonStep::IdShortcut => {
                if let Some(other) = right {
                    if let (Some(left_id), Some(right_id)) = (left.id(), other.id()) {
                        if left_id == right_id {
                            return true;
                        }
                    }
                }
            }
            ComparisonStep::Field(comparison) => {
                // The type guard precedes every field step in a synthesized
                // plan, so a missing operand here is a rejection, not a bug.
                let Some(other) = right else { return false };
                if let Some(fields) = observer.as_deref_mut() {
                    fields.push(comparison.name.clone());
                }
                let left_value = left.field_value(comparison);
                let right_value = other.field_value(comparison);
                if !compare_by_category(comparison.category, &left_value, &right_value) {
                    return false;
                }
            }
        }
    }
    true
}

/// Apply one category's comparison rule to a pair of values.
pub fn compare_by_category(category: ComparisonCategory, left: &Value, right: &Value) -> bool {
    match category {
        ComparisonCategory::FloatingPoint32 => match (left, right) {
            (Value::Float32(a), Value::Float32(b)) => f32_equivalent(*a, *b),
            _ => value_eq(left, right),
        },
        ComparisonCategory::FloatingPoint64 => match (left, right) {
            (Value::Float64(a), Value::Float64(b)) => f64_equivalent(*a, *b),
            _ => value_eq(left, right),
        },
        ComparisonCategory::FixedArray => match (left, right) {
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| value_eq(x, y))
            }
            _ => value_eq(left, right),
        },
        ComparisonCategory::PrimitiveScalar => value_eq(left, right),
        ComparisonCategory::ReferenceWrapper => match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Reference(a), Value::Reference(b)) => !a.should_update(b),
            (Value::Null, _) | (_, Value::Null) => false,
            _ => value_eq(left, right),
        },
        ComparisonCategory::ComponentLike => match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Component(a), Value::Component(b)) => is_equivalent(a, Some(b)),
            _ => false,
        },
        ComparisonCategory::CallbackHandle | ComparisonCategory::CallbackHandleInContainer => {
            match (left, right) {
                (Value::Null, Value::Null) => true,
                (Value::Handle(a), Value::Handle(b)) => a.is_equivalent_to(b),
                _ => false,
            }
        }
        ComparisonCategory::NestedContainer { depth } => match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Container(a), Value::Container(b)) => {
                a.len() == b.len() && compare_nested(depth, a, b)
            }
            _ => false,
        },
        ComparisonCategory::Opaque => match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            _ => value_eq(left, right),
        },
    }
}

/// Positional comparison of nested containers of component-like leaves.
///
/// Both sides are already known non-null and the same length. At depth 1 the
/// elements are compared through component structural equivalence; deeper
/// levels compare sub-container sizes before descending. Reordered equal
/// elements are not equivalent; rendering order is part of the value.
pub fn compare_nested(depth: usize, left: &[Value], right: &[Value]) -> bool {
    for (left_elem, right_elem) in left.iter().zip(right) {
        if depth <= 1 {
            let matches = match (left_elem, right_elem) {
                (Value::Component(a), Value::Component(b)) => is_equivalent(a, Some(b)),
                _ => value_eq(left_elem, right_elem),
            };
            if !matches {
                return false;
            }
        } else {
            match (left_elem, right_elem) {
                (Value::Container(a), Value::Container(b)) => {
                    if a.len() != b.len() || !compare_nested(depth - 1, a, b) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
    true
}

/// Generic deep value equality, used for opaque fields and inside arrays.
pub fn value_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float32(a), Value::Float32(b)) => f32_equivalent(*a, *b),
        (Value::Float64(a), Value::Float64(b)) => f64_equivalent(*a, *b),
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Array(a), Value::Array(b)) | (Value::Container(a), Value::Container(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| value_eq(x, y))
        }
        (Value::Component(a), Value::Component(b)) => is_equivalent(a, Some(b)),
        (Value::Handle(a), Value::Handle(b)) => a.is_equivalent_to(b),
        (Value::Reference(a), Value::Reference(b)) => !a.should_update(b),
        (Value::Opaque(a), Value::Opaque(b)) => a.opaque_eq(b),
        _ => false,
    }
}
