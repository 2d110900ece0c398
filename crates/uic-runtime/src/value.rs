//! The dynamic value model that derived plans are interpreted over.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::instance::ComponentHandle;

/// A runtime field value.
///
/// `Array` holds a fixed-size array's elements; `Container` holds a generic
/// (possibly nested) container's elements in iteration order. The remaining
/// variants carry the delegation targets the comparison rules dispatch to.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Array(Vec<Value>),
    Container(Vec<Value>),
    Component(ComponentHandle),
    Handle(EventHandlerValue),
    Reference(ReferenceValue),
    Opaque(OpaqueHandle),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn opaque<T: OpaqueValue + 'static>(value: T) -> Self {
        Value::Opaque(OpaqueHandle::new(value))
    }
}

/// 32-bit float equivalence: total ordering, so `-0.0` differs from `+0.0`,
/// with the explicit both-NaN accept mirroring canonicalized-bit comparison.
pub fn f32_equivalent(left: f32, right: f32) -> bool {
    (left.is_nan() && right.is_nan()) || left.total_cmp(&right) == Ordering::Equal
}

/// 64-bit counterpart of [`f32_equivalent`].
pub fn f64_equivalent(left: f64, right: f64) -> bool {
    (left.is_nan() && right.is_nan()) || left.total_cmp(&right) == Ordering::Equal
}

/// A callback handle; equivalence is by dispatch target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventHandlerValue {
    pub id: u64,
}

impl EventHandlerValue {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    /// Structural equivalence of handles: same dispatch target.
    pub fn is_equivalent_to(&self, other: &EventHandlerValue) -> bool {
        self.id == other.id
    }
}

/// A lazily-resolved reference wrapper. Its own should-update predicate
/// decides equivalence; `true` means the referenced value changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceValue {
    pub key: String,
}

impl ReferenceValue {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn should_update(&self, other: &ReferenceValue) -> bool {
        self.key != other.key
    }
}

/// A value the comparison rules know nothing about; compared through its own
/// equality hook.
pub trait OpaqueValue: fmt::Debug + Send + Sync {
    fn opaque_eq(&self, other: &dyn OpaqueValue) -> bool;
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to an opaque value.
#[derive(Debug, Clone)]
pub struct OpaqueHandle(Arc<dyn OpaqueValue>);

impl OpaqueHandle {
    pub fn new<T: OpaqueValue + 'static>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn opaque_eq(&self, other: &OpaqueHandle) -> bool {
        self.0.opaque_eq(other.0.as_ref())
    }

    pub fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
}

/// Convenience opaque value comparing by token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueToken(pub String);

impl OpaqueToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl OpaqueValue for OpaqueToken {
    fn opaque_eq(&self, other: &dyn OpaqueValue) -> bool {
        other
            .as_any()
            .downcast_ref::<OpaqueToken>()
            .is_some_and(|token| token.0 == self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_is_not_equivalent() {
        assert!(!f32_equivalent(0.0, -0.0));
        assert!(!f64_equivalent(0.0, -0.0));
        assert!(f32_equivalent(0.0, 0.0));
    }

    #[test]
    fn nan_is_equivalent_to_nan() {
        assert!(f32_equivalent(f32::NAN, f32::NAN));
        assert!(f32_equivalent(f32::NAN, -f32::NAN));
        assert!(f64_equivalent(f64::NAN, f64::NAN));
        assert!(!f32_equivalent(f32::NAN, 1.0));
    }

    #[test]
    fn opaque_tokens_compare_by_content() {
        let a = OpaqueHandle::new(OpaqueToken::new("x"));
        let b = OpaqueHandle::new(OpaqueToken::new("x"));
        let c = OpaqueHandle::new(OpaqueToken::new("y"));
        assert!(a.opaque_eq(&b));
        assert!(!a.opaque_eq(&c));
    }

    #[test]
    fn reference_should_update_on_key_change() {
        let a = ReferenceValue::new("res:1");
        assert!(!a.should_update(&ReferenceValue::new("res:1")));
        assert!(a.should_update(&ReferenceValue::new("res:2")));
    }
}
