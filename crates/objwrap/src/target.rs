//! Target adapter abstraction.
//!
//! # Architecture
//!
//! The proxy is a mechanism, not policy. It only checks the binding,
//! resolves the name and hands the operation to a [`Target`]. Whatever the
//! target does with it (including failing) is the target's business.
//!
//! Implementations take `&self` everywhere. A target that mutates state on
//! `set_property` owns its synchronization.

use std::sync::Arc;

use crate::value::Value;

/// Failure raised by a target. Passed through the proxy untouched.
pub type TargetError = anyhow::Error;

pub type StaticRef = Arc<dyn StaticTarget>;

pub trait Target: Send + Sync {
    /// Runtime type name, used in `NoSuchMethod` messages.
    fn type_name(&self) -> &str;

    fn has_method(&self, name: &str) -> bool;

    /// Whether the target accepts calls for methods it does not declare.
    fn supports_fallback_invoke(&self) -> bool { false }

    fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, TargetError>;

    fn get_property(&self, key: &str) -> Result<Value, TargetError>;

    fn set_property(&self, key: &str, value: Value) -> Result<(), TargetError>;

    fn has_property(&self, key: &str) -> bool;

    /// Clears a property. Targets without real removal store `Null` instead.
    fn delete_property(&self, key: &str) -> Result<(), TargetError> {
        self.set_property(key, Value::Null)
    }
}

/// Type-level counterpart of [`Target`], bound separately from any instance.
pub trait StaticTarget: Send + Sync {
    fn type_name(&self) -> &str;

    fn has_static_method(&self, name: &str) -> bool;

    fn invoke_static(&self, name: &str, args: &[Value]) -> Result<Value, TargetError>;
}
