//! Render-data plan: which props and state values keep their previous value
//! alongside the current one for later diffing.
//!
//! Diff references are the one place derivation re-checks referential
//! integrity: a diff naming a field that does not exist, or that is neither a
//! prop nor a state value, aborts the derivation with a descriptive error
//! instead of silently emitting an empty plan.

use serde::{Deserialize, Serialize};
use uic_model::{FieldSection, SemanticType, SpecModel};

use crate::error::{DeriveError, Result};

/// Which section a diffed value is recorded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffSource {
    Prop,
    State,
}

/// One retained previous-value field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDataField {
    pub name: String,
    pub source: DiffSource,
    pub ty: SemanticType,
}

/// The previous-render-data record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDataPlan {
    pub fields: Vec<RenderDataField>,
}

/// Derive the render-data plan, or `None` when no diffs are declared.
pub fn synthesize_render_data(model: &SpecModel) -> Result<Option<RenderDataPlan>> {
    if model.render_data_diffs.is_empty() {
        return Ok(None);
    }

    let mut fields = Vec::with_capacity(model.render_data_diffs.len());
    for diff in &model.render_data_diffs {
        let section =
            model
                .resolve(&diff.name)
                .ok_or_else(|| DeriveError::UnresolvedReference {
                    name: diff.name.clone(),
                })?;
        let source = match section {
            FieldSection::Prop => DiffSource::Prop,
            FieldSection::State => DiffSource::State,
            FieldSection::TreeProp | FieldSection::InterStageInput => {
                return Err(DeriveError::InvalidDiffReference {
                    name: diff.name.clone(),
                    section,
                });
            }
        };
        let ty = model
            .field_type(&diff.name)
            .ok_or_else(|| DeriveError::UnresolvedReference {
                name: diff.name.clone(),
            })?
            .clone();
        fields.push(RenderDataField {
            name: diff.name.clone(),
            source,
            ty,
        });
    }
    Ok(Some(RenderDataPlan { fields }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uic_model::{PropModel, RenderDataDiffModel, StateModel, TreePropModel};

    #[test]
    fn resolves_props_and_state() {
        let model = SpecModel::new("Chart")
            .with_prop(PropModel::required("scale", SemanticType::Float64))
            .with_state(StateModel::new("offset", SemanticType::Float64))
            .with_render_data_diff(RenderDataDiffModel::new("scale"))
            .with_render_data_diff(RenderDataDiffModel::new("offset"));
        let plan = synthesize_render_data(&model).unwrap().expect("plan");
        assert_eq!(plan.fields[0].source, DiffSource::Prop);
        assert_eq!(plan.fields[1].source, DiffSource::State);
    }

    #[test]
    fn unresolved_diff_is_fatal() {
        let model =
            SpecModel::new("Chart").with_render_data_diff(RenderDataDiffModel::new("ghost"));
        let err = synthesize_render_data(&model).unwrap_err();
        assert!(matches!(err, DeriveError::UnresolvedReference { ref name } if name == "ghost"));
    }

    #[test]
    fn tree_prop_diff_is_fatal() {
        let model = SpecModel::new("Chart")
            .with_tree_prop(TreePropModel::new("theme", SemanticType::opaque("Theme")))
            .with_render_data_diff(RenderDataDiffModel::new("theme"));
        let err = synthesize_render_data(&model).unwrap_err();
        assert!(matches!(
            err,
            DeriveError::InvalidDiffReference { ref name, section: FieldSection::TreeProp }
                if name == "theme"
        ));
    }
}
