//! Property tests for the type classifier.

use proptest::prelude::*;
use uic_derive::{ComparisonCategory, DeriveError, MAX_CONTAINER_DEPTH, classify};
use uic_model::{DeclaredType, ScalarKind, SemanticType};

fn leaf_type() -> impl Strategy<Value = SemanticType> {
    prop_oneof![
        Just(SemanticType::Float32),
        Just(SemanticType::Float64),
        Just(SemanticType::Reference),
        Just(SemanticType::Scalar(ScalarKind::Bool)),
        Just(SemanticType::Scalar(ScalarKind::Int64)),
        Just(SemanticType::text()),
        Just(SemanticType::component("Leaf")),
        Just(SemanticType::callback_handle()),
        Just(SemanticType::opaque("Blob")),
    ]
}

fn semantic_type() -> impl Strategy<Value = SemanticType> {
    leaf_type().prop_recursive(6, 32, 3, |inner| {
        prop_oneof![
            inner
                .clone()
                .prop_map(|elem| SemanticType::Array(Box::new(elem))),
            inner.clone().prop_map(SemanticType::container_of),
            (inner, any::<bool>(), any::<bool>()).prop_map(|(arg, component, handle)| {
                SemanticType::Declared(DeclaredType {
                    name: "Wrapper".to_string(),
                    args: vec![arg],
                    is_container: false,
                    is_component_like: component,
                    is_callback_handle: handle && !component,
                })
            }),
        ]
    })
}

proptest! {
    /// Classification is total: every generated type either classifies or
    /// reports the depth bound; it never panics and never fails otherwise.
    #[test]
    fn classify_is_total(ty in semantic_type()) {
        match classify("field", &ty) {
            Ok(_) => {}
            Err(DeriveError::ContainerDepthExceeded { depth, .. }) => {
                prop_assert!(depth > MAX_CONTAINER_DEPTH);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Containers of component-like leaves classify to exactly their depth,
    /// up to the bound; one more layer is fatal.
    #[test]
    fn container_depth_is_counted(depth in 1usize..=MAX_CONTAINER_DEPTH + 1) {
        let mut ty = SemanticType::component("Leaf");
        for _ in 0..depth {
            ty = SemanticType::container_of(ty);
        }
        let result = classify("children", &ty);
        if depth <= MAX_CONTAINER_DEPTH {
            prop_assert_eq!(result.unwrap(), ComparisonCategory::NestedContainer { depth });
        } else {
            prop_assert!(
                matches!(
                    result.unwrap_err(),
                    DeriveError::ContainerDepthExceeded { .. }
                ),
                "expected ContainerDepthExceeded error"
            );
        }
    }

    /// The fallback is deliberate: a container whose leaf is not
    /// component-like always degrades to opaque comparison.
    #[test]
    fn non_component_containers_degrade(levels in 1usize..=MAX_CONTAINER_DEPTH) {
        let mut ty = SemanticType::opaque("Blob");
        for _ in 0..levels {
            ty = SemanticType::container_of(ty);
        }
        prop_assert_eq!(classify("blobs", &ty).unwrap(), ComparisonCategory::Opaque);
    }
}
