//! Runtime contracts for derived component descriptors.
//!
//! The derivation core (`uic-derive`) produces plans; this crate defines the
//! data structures those plans are executed against and interprets them:
//!
//! - **value**: the dynamic value model, including total-order float
//!   equivalence and the opaque/handle/reference delegation targets
//! - **instance**: a live component carrying its own descriptor
//! - **equivalence**: the structural-equivalence interpreter, with a traced
//!   variant reporting which fields were evaluated
//! - **copy**: the copy-plan executor
//! - **state**: the per-instance state container and its lock-guarded
//!   transition log (the only concurrent surface in this core)
//! - **update**: immutable capture of state-update invocations
//! - **render_data**: previous-value retention for declared diffs

pub mod copy;
pub mod equivalence;
pub mod error;
pub mod instance;
pub mod render_data;
pub mod state;
pub mod update;
pub mod value;

pub use copy::make_copy;
pub use equivalence::{
    EquivalenceTrace, compare_by_category, compare_nested, is_equivalent, is_equivalent_traced,
    value_eq,
};
pub use error::{Result, RuntimeError};
pub use instance::{ComponentBuilder, ComponentHandle, ComponentInstance};
pub use render_data::PreviousRenderData;
pub use state::{StateContainer, Transition, TransitionLog};
pub use update::StateUpdateRequest;
pub use value::{
    EventHandlerValue, OpaqueHandle, OpaqueToken, OpaqueValue, ReferenceValue, Value,
    f32_equivalent, f64_equivalent,
};
