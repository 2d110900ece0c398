//! Previous-render-data record: retains the prior values of diffed props and
//! state values so the rendering pipeline can compare passes.

use std::collections::BTreeMap;

use uic_derive::{DiffSource, RenderDataPlan};

use crate::instance::ComponentInstance;
use crate::value::Value;

#[derive(Debug, Default)]
pub struct PreviousRenderData {
    values: BTreeMap<String, Value>,
}

impl PreviousRenderData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current values of every diffed field from an instance.
    pub fn record(&mut self, plan: &RenderDataPlan, instance: &ComponentInstance) {
        for field in &plan.fields {
            let value = match field.source {
                DiffSource::Prop => instance.prop(&field.name).cloned(),
                DiffSource::State => instance
                    .state()
                    .and_then(|state| state.get(&field.name)),
            };
            self.values
                .insert(field.name.clone(), value.unwrap_or(Value::Null));
        }
    }

    /// Take over another record's retained values.
    pub fn copy_from(&mut self, other: &PreviousRenderData) {
        self.values = other.values.clone();
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
