//! The single target reference owned by a proxy.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::{ObjectRef, Value};

/// `Unbound` until [`bind`](TargetBinding::bind) succeeds. Rebinding replaces
/// the reference and stays `Bound`.
#[derive(Clone, Default)]
pub enum TargetBinding {
    #[default]
    Unbound,
    Bound(ObjectRef),
}

impl TargetBinding {
    pub fn new() -> Self { Self::Unbound }

    /// Binds `target`, which must be an object.
    pub fn bind(&mut self, target: impl Into<Value>) -> Result<()> {
        match target.into() {
            Value::Object(object) => {
                debug!(
                    target_type = object.type_name(),
                    rebind = self.is_bound(),
                    "bound proxy target"
                );
                *self = TargetBinding::Bound(object);
                Ok(())
            }
            other => Err(Error::InvalidTarget {
                given: other.type_name(),
            }),
        }
    }

    pub fn get(&self) -> Result<&ObjectRef> {
        match self {
            TargetBinding::Bound(object) => Ok(object),
            TargetBinding::Unbound => Err(Error::UnboundTarget { what: "object" }),
        }
    }

    pub fn is_bound(&self) -> bool { matches!(self, TargetBinding::Bound(_)) }
}

impl fmt::Debug for TargetBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetBinding::Unbound => f.write_str("Unbound"),
            TargetBinding::Bound(object) => write!(f, "Bound({})", object.type_name()),
        }
    }
}
