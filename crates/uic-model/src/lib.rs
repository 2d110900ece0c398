//! Component spec model definitions.
//!
//! A [`SpecModel`] is the declarative, pre-validated description of a UI
//! component that the derivation core consumes: its external inputs (props),
//! private mutable state, tree-scoped inputs, inter-stage caches, event
//! handler slots, state-update operations, and render-data diff references.
//!
//! The model is produced by an upstream parser/validator and is read-only for
//! the duration of a derivation.

pub mod error;
pub mod semantic;
pub mod spec;

pub use error::{ModelError, Result};
pub use semantic::{DeclaredType, ScalarKind, SemanticType};
pub use spec::{
    EventHandlerModel, EventTriggerModel, FieldSection, InterStageInputModel, ParamModel,
    PropModel, RenderDataDiffModel, SpecModel, StateModel, TreePropModel, UpdateStateModel,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_declared_sections() {
        let model = SpecModel::new("Badge")
            .with_prop(PropModel::required("label", SemanticType::text()))
            .with_state(StateModel::new("count", SemanticType::Scalar(ScalarKind::Int32)))
            .with_tree_prop(TreePropModel::new("theme", SemanticType::opaque("Theme")));

        assert_eq!(model.resolve("label"), Some(FieldSection::Prop));
        assert_eq!(model.resolve("count"), Some(FieldSection::State));
        assert_eq!(model.resolve("theme"), Some(FieldSection::TreeProp));
        assert_eq!(model.resolve("missing"), None);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let model = SpecModel::new("Badge")
            .with_prop(PropModel::required("label", SemanticType::text()))
            .with_state(StateModel::new("label", SemanticType::text()));

        let err = model.check_names().expect_err("duplicate should fail");
        assert!(matches!(err, ModelError::DuplicateName { ref name } if name == "label"));
    }
}
