//! Structural-equivalence semantics, interpreted over derived plans.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use uic_derive::derive_descriptor;
use uic_model::{PropModel, ScalarKind, SemanticType, SpecModel, StateModel};
use uic_runtime::{
    ComponentHandle, ComponentInstance, EventHandlerValue, OpaqueToken, OpaqueValue,
    ReferenceValue, Value, is_equivalent, is_equivalent_traced,
};

fn cell_descriptor() -> Arc<uic_derive::ComponentDescriptor> {
    let model =
        SpecModel::new("Cell").with_prop(PropModel::required("label", SemanticType::text()));
    Arc::new(derive_descriptor(&model).expect("derive cell"))
}

fn cell(label: &str) -> Value {
    Value::Component(
        ComponentInstance::builder(cell_descriptor())
            .prop("label", Value::text(label))
            .build(),
    )
}

fn card_descriptor() -> Arc<uic_derive::ComponentDescriptor> {
    let model = SpecModel::new("Card")
        .with_prop(PropModel::required("title", SemanticType::text()))
        .with_prop(PropModel::required("weight", SemanticType::Float32))
        .with_prop(PropModel::required("badge", SemanticType::opaque("Badge")))
        .with_prop(PropModel::required(
            "rows",
            SemanticType::container_of(SemanticType::container_of(SemanticType::component(
                "Cell",
            ))),
        ))
        .with_prop(PropModel::optional("on_click", SemanticType::callback_handle()))
        .with_prop(PropModel::optional("background", SemanticType::Reference))
        .with_state(StateModel::new(
            "expanded",
            SemanticType::Scalar(ScalarKind::Bool),
        ));
    Arc::new(derive_descriptor(&model).expect("derive card"))
}

fn card() -> uic_runtime::ComponentBuilder {
    ComponentInstance::builder(card_descriptor())
        .prop("title", Value::text("hello"))
        .prop("weight", Value::Float32(1.5))
        .prop("badge", Value::opaque(OpaqueToken::new("badge")))
        .prop(
            "rows",
            Value::Container(vec![Value::Container(vec![cell("a"), cell("b")])]),
        )
        .prop("on_click", Value::Handle(EventHandlerValue::new(7)))
        .prop("background", Value::Reference(ReferenceValue::new("bg:1")))
}

#[test]
fn identity_accepts_without_field_evaluation() {
    let instance = card().build();
    let trace = is_equivalent_traced(&instance, Some(&instance));
    assert!(trace.equivalent);
    assert!(trace.fields_evaluated.is_empty());
}

#[test]
fn null_and_foreign_types_reject() {
    let instance = card().build();
    assert!(!is_equivalent(&instance, None));

    let other = ComponentInstance::builder(cell_descriptor())
        .prop("label", Value::text("hello"))
        .build();
    assert!(!is_equivalent(&instance, Some(&other)));
}

#[test]
fn distinct_instances_with_equal_fields_are_equivalent() {
    let left = card().build();
    let right = card().build();
    assert!(!Arc::ptr_eq(&left, &right));
    assert!(is_equivalent(&left, Some(&right)));
}

#[test]
fn first_mismatch_short_circuits() {
    let left = card().build();
    let right = card().prop("weight", Value::Float32(2.0)).build();

    let trace = is_equivalent_traced(&left, Some(&right));
    assert!(!trace.equivalent);
    // Comparison stopped at the mismatching field; badge, rows, handles were
    // never evaluated.
    assert_eq!(trace.fields_evaluated, vec!["title", "weight"]);
}

/// Opaque stub whose equality hook counts invocations.
#[derive(Debug)]
struct CountingStub {
    token: &'static str,
    compares: Arc<AtomicUsize>,
}

impl OpaqueValue for CountingStub {
    fn opaque_eq(&self, other: &dyn OpaqueValue) -> bool {
        self.compares.fetch_add(1, Ordering::SeqCst);
        other
            .as_any()
            .downcast_ref::<CountingStub>()
            .is_some_and(|stub| stub.token == self.token)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn later_rules_are_not_evaluated_after_a_reject() {
    let compares = Arc::new(AtomicUsize::new(0));
    let stub = |compares: &Arc<AtomicUsize>| {
        Value::opaque(CountingStub {
            token: "badge",
            compares: Arc::clone(compares),
        })
    };

    // Title differs, so the badge comparison stub must never run.
    let left = card().prop("badge", stub(&compares)).build();
    let right = card()
        .prop("badge", stub(&compares))
        .prop("title", Value::text("other"))
        .build();
    assert!(!is_equivalent(&left, Some(&right)));
    assert_eq!(compares.load(Ordering::SeqCst), 0);

    // With equal earlier fields the stub runs exactly once.
    let left = card().prop("badge", stub(&compares)).build();
    let right = card().prop("badge", stub(&compares)).build();
    assert!(is_equivalent(&left, Some(&right)));
    assert_eq!(compares.load(Ordering::SeqCst), 1);
}

#[test]
fn signed_zero_rejects_and_nan_accepts() {
    let zero = card().prop("weight", Value::Float32(0.0)).build();
    let negative_zero = card().prop("weight", Value::Float32(-0.0)).build();
    assert!(!is_equivalent(&zero, Some(&negative_zero)));

    let nan_left = card().prop("weight", Value::Float32(f32::NAN)).build();
    let nan_right = card().prop("weight", Value::Float32(f32::NAN)).build();
    assert!(is_equivalent(&nan_left, Some(&nan_right)));
}

#[test]
fn nested_container_size_mismatch_rejects() {
    let left = card()
        .prop(
            "rows",
            Value::Container(vec![
                Value::Container(vec![cell("a"), cell("b")]),
                Value::Container(vec![cell("c")]),
            ]),
        )
        .build();
    // Same outer size, differing inner size at position 1.
    let right = card()
        .prop(
            "rows",
            Value::Container(vec![
                Value::Container(vec![cell("a"), cell("b")]),
                Value::Container(vec![cell("c"), cell("d")]),
            ]),
        )
        .build();
    assert!(!is_equivalent(&left, Some(&right)));
}

#[test]
fn nested_container_comparison_is_positional() {
    let ordered = card()
        .prop(
            "rows",
            Value::Container(vec![Value::Container(vec![cell("a"), cell("b")])]),
        )
        .build();
    let reordered = card()
        .prop(
            "rows",
            Value::Container(vec![Value::Container(vec![cell("b"), cell("a")])]),
        )
        .build();
    let same = card()
        .prop(
            "rows",
            Value::Container(vec![Value::Container(vec![cell("a"), cell("b")])]),
        )
        .build();

    assert!(is_equivalent(&ordered, Some(&same)));
    assert!(!is_equivalent(&ordered, Some(&reordered)));
}

#[test]
fn callback_handles_compare_by_dispatch_target() {
    let left = card().build();
    let same_target = card().build();
    let other_target = card()
        .prop("on_click", Value::Handle(EventHandlerValue::new(8)))
        .build();
    assert!(is_equivalent(&left, Some(&same_target)));
    assert!(!is_equivalent(&left, Some(&other_target)));
}

#[test]
fn reference_wrapper_delegates_to_should_update() {
    let left = card().build();
    let changed = card()
        .prop("background", Value::Reference(ReferenceValue::new("bg:2")))
        .build();
    assert!(!is_equivalent(&left, Some(&changed)));
}

#[test]
fn state_values_participate_through_the_container() {
    let left = card().build();
    let right = card().build();
    left.state()
        .expect("state container")
        .set("expanded", Value::Bool(true))
        .expect("declared state value");
    right
        .state()
        .expect("state container")
        .set("expanded", Value::Bool(false))
        .expect("declared state value");
    assert!(!is_equivalent(&left, Some(&right)));
}

#[test]
fn id_shortcut_accepts_matching_ids() {
    let model = SpecModel::new("Tile")
        .with_prop(PropModel::required("label", SemanticType::text()))
        .with_id_equivalence_shortcut();
    let descriptor = Arc::new(derive_descriptor(&model).expect("derive"));

    let left = ComponentInstance::builder(Arc::clone(&descriptor))
        .id(42)
        .prop("label", Value::text("x"))
        .build();
    let right = ComponentInstance::builder(Arc::clone(&descriptor))
        .id(42)
        .prop("label", Value::text("entirely different"))
        .build();
    assert!(is_equivalent(&left, Some(&right)));

    let other_id = ComponentInstance::builder(descriptor)
        .id(43)
        .prop("label", Value::text("x"))
        .build();
    assert!(!is_equivalent(&right, Some(&other_id)));
}

fn _assert_handle_is_send_sync(handle: ComponentHandle) {
    fn assert_send_sync<T: Send + Sync>(_: T) {}
    assert_send_sync(handle);
}
