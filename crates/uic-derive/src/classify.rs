//! Type classification: mapping a field's static type to its comparison
//! category.
//!
//! The category decides *how* two values of the field's type are compared for
//! structural equivalence. Classification is a pure function of the
//! [`SemanticType`] tree; the only failure mode is container nesting beyond
//! the supported depth bound, which is a fatal derivation error rather than a
//! silent truncation. Unrecognized types fall back to
//! [`ComparisonCategory::Opaque`] and derivation proceeds.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uic_model::{DeclaredType, SemanticType};

use crate::error::{DeriveError, Result};

/// Deepest supported container nesting for component-like leaves.
pub const MAX_CONTAINER_DEPTH: usize = 4;

/// How a field participates in structural equivalence. Exactly one category
/// per field, computed once per derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonCategory {
    /// Tolerance-aware 32-bit float comparison (total ordering, not `==`).
    FloatingPoint32,
    /// Tolerance-aware 64-bit float comparison (total ordering, not `==`).
    FloatingPoint64,
    /// Element-wise fixed-size array comparison.
    FixedArray,
    /// Raw equality on a primitive scalar.
    PrimitiveScalar,
    /// Delegates to the lazily-resolved reference's own should-update predicate.
    ReferenceWrapper,
    /// Positional recursion into nested containers of component-like leaves.
    NestedContainer { depth: usize },
    /// Null-safe delegation to the nested component's structural equivalence.
    ComponentLike,
    /// Null-safe delegation to the callback handle's structural equivalence.
    CallbackHandle,
    /// Same rule as [`ComparisonCategory::CallbackHandle`], reached through a
    /// parameterized wrapper.
    CallbackHandleInContainer,
    /// Null-safe generic value equality.
    Opaque,
}

/// Classify a field's static type.
///
/// `field` names the owning field so a depth-bound violation can identify it.
/// Rules are applied in priority order; see each arm. Total except for the
/// container depth bound.
pub fn classify(field: &str, ty: &SemanticType) -> Result<ComparisonCategory> {
    match ty {
        SemanticType::Float32 => Ok(ComparisonCategory::FloatingPoint32),
        SemanticType::Float64 => Ok(ComparisonCategory::FloatingPoint64),
        SemanticType::Array(_) => Ok(ComparisonCategory::FixedArray),
        SemanticType::Scalar(_) => Ok(ComparisonCategory::PrimitiveScalar),
        SemanticType::Reference => Ok(ComparisonCategory::ReferenceWrapper),
        SemanticType::Declared(decl) => classify_declared(field, decl),
    }
}

fn classify_declared(field: &str, decl: &DeclaredType) -> Result<ComparisonCategory> {
    if decl.is_container {
        return classify_container(field, decl);
    }
    if decl.is_component_like {
        return Ok(ComparisonCategory::ComponentLike);
    }
    if decl.is_callback_handle {
        return Ok(if decl.args.is_empty() {
            ComparisonCategory::CallbackHandle
        } else {
            ComparisonCategory::CallbackHandleInContainer
        });
    }
    Ok(ComparisonCategory::Opaque)
}

/// Descend through nested containers along the first declared type argument.
///
/// Counts how many container layers must be unwrapped to reach the leaf. A
/// component-like leaf yields `NestedContainer { depth }`; any other leaf (or
/// a container with no inspectable type argument) degrades the whole field to
/// `Opaque`, because nested-container equivalence is only specified for
/// component-like leaves.
fn classify_container(field: &str, decl: &DeclaredType) -> Result<ComparisonCategory> {
    let mut depth = 1usize;
    let mut current = decl;
    loop {
        if depth > MAX_CONTAINER_DEPTH {
            return Err(DeriveError::ContainerDepthExceeded {
                name: field.to_string(),
                depth,
            });
        }
        let Some(inner) = current.args.iter().find_map(SemanticType::as_declared) else {
            return Ok(ComparisonCategory::Opaque);
        };
        if inner.is_container {
            depth += 1;
            current = inner;
            continue;
        }
        if inner.is_component_like {
            return Ok(ComparisonCategory::NestedContainer { depth });
        }
        // Known soft spot: a nested container of non-component leaves falls
        // back to generic equality instead of failing.
        debug!(field, leaf = %inner.name, "container leaf is not component-like; degrading to opaque comparison");
        return Ok(ComparisonCategory::Opaque);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uic_model::ScalarKind;

    fn nested(levels: usize) -> SemanticType {
        let mut ty = SemanticType::component("Leaf");
        for _ in 0..levels {
            ty = SemanticType::container_of(ty);
        }
        ty
    }

    #[test]
    fn floats_before_everything_else() {
        assert_eq!(
            classify("x", &SemanticType::Float32).unwrap(),
            ComparisonCategory::FloatingPoint32
        );
        assert_eq!(
            classify("x", &SemanticType::Float64).unwrap(),
            ComparisonCategory::FloatingPoint64
        );
    }

    #[test]
    fn arrays_and_scalars() {
        let array = SemanticType::Array(Box::new(SemanticType::Float32));
        assert_eq!(
            classify("xs", &array).unwrap(),
            ComparisonCategory::FixedArray
        );
        assert_eq!(
            classify("n", &SemanticType::Scalar(ScalarKind::Int32)).unwrap(),
            ComparisonCategory::PrimitiveScalar
        );
    }

    #[test]
    fn reference_wrapper() {
        assert_eq!(
            classify("bg", &SemanticType::Reference).unwrap(),
            ComparisonCategory::ReferenceWrapper
        );
    }

    #[test]
    fn component_and_handles() {
        assert_eq!(
            classify("child", &SemanticType::component("Row")).unwrap(),
            ComparisonCategory::ComponentLike
        );
        assert_eq!(
            classify("on_click", &SemanticType::callback_handle()).unwrap(),
            ComparisonCategory::CallbackHandle
        );
        assert_eq!(
            classify(
                "on_click",
                &SemanticType::callback_handle_of(SemanticType::text())
            )
            .unwrap(),
            ComparisonCategory::CallbackHandleInContainer
        );
    }

    #[test]
    fn nested_containers_up_to_the_bound() {
        for depth in 1..=MAX_CONTAINER_DEPTH {
            assert_eq!(
                classify("children", &nested(depth)).unwrap(),
                ComparisonCategory::NestedContainer { depth }
            );
        }
    }

    #[test]
    fn nesting_beyond_the_bound_is_fatal() {
        let err = classify("children", &nested(5)).unwrap_err();
        match err {
            DeriveError::ContainerDepthExceeded { name, depth } => {
                assert_eq!(name, "children");
                assert_eq!(depth, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_component_leaf_degrades_to_opaque() {
        let strings = SemanticType::container_of(SemanticType::opaque("String"));
        assert_eq!(
            classify("names", &strings).unwrap(),
            ComparisonCategory::Opaque
        );
        // Containers of scalar arguments carry no declared leaf at all.
        let ints = SemanticType::container_of(SemanticType::Scalar(ScalarKind::Int32));
        assert_eq!(classify("ids", &ints).unwrap(), ComparisonCategory::Opaque);
    }

    #[test]
    fn unknown_declared_type_is_opaque() {
        assert_eq!(
            classify("drawable", &SemanticType::opaque("Drawable")).unwrap(),
            ComparisonCategory::Opaque
        );
    }
}
