use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use uic_derive::{ComparisonCategory, ComponentDescriptor, FieldKind};

use crate::commands::CheckOutcome;

/// Print the derived field layout of one component.
pub fn print_layout(descriptor: &ComponentDescriptor) {
    println!("Component: {}", descriptor.component);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Comparison"),
    ]);
    apply_table_style(&mut table);
    for field in &descriptor.layout.fields {
        table.add_row(vec![
            Cell::new(&field.name),
            Cell::new(kind_label(&field.kind)),
            match &field.category {
                Some(category) => Cell::new(category_label(category)),
                None => Cell::new("-").fg(Color::DarkGrey),
            },
        ]);
    }
    println!("{table}");

    println!(
        "equivalence steps: {}, update operations: {}, state: {}, copy plan: {}, render data: {}",
        descriptor.equivalence.steps.len(),
        descriptor.updates.len(),
        flag(descriptor.state_container.is_some()),
        flag(descriptor.copy.is_some()),
        flag(descriptor.render_data.is_some()),
    );
}

/// Print one row per checked spec; returns true when any check failed.
pub fn print_check_results(outcomes: &[CheckOutcome]) -> bool {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Spec"),
        header_cell("Component"),
        header_cell("Fields"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut has_errors = false;
    for outcome in outcomes {
        match &outcome.result {
            Ok(descriptor) => {
                table.add_row(vec![
                    Cell::new(outcome.path.display()),
                    Cell::new(&descriptor.component),
                    Cell::new(descriptor.layout.fields.len()),
                    Cell::new("ok").fg(Color::Green),
                ]);
            }
            Err(error) => {
                has_errors = true;
                table.add_row(vec![
                    Cell::new(outcome.path.display()),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new("error").fg(Color::Red),
                ]);
                eprintln!("error: {}: {error}", outcome.path.display());
            }
        }
    }
    println!("{table}");
    has_errors
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn flag(set: bool) -> &'static str {
    if set { "yes" } else { "no" }
}

fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::StateContainer => "state container".to_string(),
        FieldKind::PreviousRenderData => "previous render data".to_string(),
        FieldKind::Prop { optional, default } => {
            let mut label = String::from("prop");
            if *optional {
                label.push_str(" (optional)");
            }
            if let Some(default) = default {
                label.push_str(&format!(" [default: {default}]"));
            }
            label
        }
        FieldKind::TreeProp => "tree prop".to_string(),
        FieldKind::InterStageInput => "inter-stage input".to_string(),
        FieldKind::EventHandler => "event handler".to_string(),
        FieldKind::EventTrigger => "event trigger".to_string(),
    }
}

fn category_label(category: &ComparisonCategory) -> String {
    match category {
        ComparisonCategory::FloatingPoint32 => "float32".to_string(),
        ComparisonCategory::FloatingPoint64 => "float64".to_string(),
        ComparisonCategory::FixedArray => "array".to_string(),
        ComparisonCategory::PrimitiveScalar => "scalar".to_string(),
        ComparisonCategory::ReferenceWrapper => "reference".to_string(),
        ComparisonCategory::NestedContainer { depth } => {
            format!("nested container (depth {depth})")
        }
        ComparisonCategory::ComponentLike => "component".to_string(),
        ComparisonCategory::CallbackHandle => "callback handle".to_string(),
        ComparisonCategory::CallbackHandleInContainer => "callback handles".to_string(),
        ComparisonCategory::Opaque => "opaque".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_label_carries_metadata() {
        let kind = FieldKind::Prop {
            optional: true,
            default: Some("1.0".to_string()),
        };
        assert_eq!(kind_label(&kind), "prop (optional) [default: 1.0]");
    }

    #[test]
    fn nested_container_label_reports_depth() {
        let label = category_label(&ComparisonCategory::NestedContainer { depth: 3 });
        assert_eq!(label, "nested container (depth 3)");
    }
}
