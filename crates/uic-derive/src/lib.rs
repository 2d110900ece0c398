//! Derivation core: compiles a [`uic_model::SpecModel`] into a complete
//! runtime implementation descriptor.
//!
//! The passes, leaves first:
//!
//! - **classify**: maps a field's static type to its comparison category,
//!   with recursive descent through nested containers
//! - **equivalence**: the ordered comparison steps implementing structural
//!   equivalence
//! - **state**: the mutable-state container shape, including the transition
//!   log obligation
//! - **copy**: shallow/deep copy semantics, inter-stage invalidation, and
//!   state reset
//! - **update**: replayable request shapes for state-update operations
//! - **render_data**: previous-value retention for declared diffs
//! - **layout** / **descriptor**: the assembled output consumed by an
//!   external emitter
//!
//! Derivation is a pure, single-threaded computation over an immutable model;
//! it performs no I/O and never blocks.

pub mod classify;
pub mod copy;
pub mod descriptor;
pub mod equivalence;
pub mod error;
pub mod layout;
pub mod render_data;
pub mod state;
pub mod update;

pub use classify::{ComparisonCategory, MAX_CONTAINER_DEPTH, classify};
pub use copy::{CopyPlan, synthesize_copy};
pub use descriptor::{ComponentDescriptor, derive_descriptor};
pub use equivalence::{
    ComparisonStep, EquivalencePlan, FieldComparison, FieldSource, synthesize_equivalence,
};
pub use error::{DeriveError, Result};
pub use layout::{FieldKind, FieldLayout, GeneratedField, synthesize_layout};
pub use render_data::{DiffSource, RenderDataField, RenderDataPlan, synthesize_render_data};
pub use state::{StateContainerModel, StateFieldModel, synthesize_state_container};
pub use update::{CapturedParam, StateUpdateDescriptor, synthesize_update_descriptors};
