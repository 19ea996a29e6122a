//! Delegating proxies for objects you do not own.
//!
//! # Architecture
//!
//! A proxy forwards method calls and property access to a bound target.
//! The target is reached only through the [`Target`] adapter trait, so the
//! proxy never needs to know the concrete type it wraps.
//!
//! - [`TargetBinding`] - the bound target and its `Unbound`/`Bound` state
//! - [`MethodResolver`] - maps requested method names to real ones
//! - [`Dispatcher`] - validates the binding and routes each operation
//!
//! Two capability shapes are built on the dispatcher:
//!
//! - [`ObjectWrapper`] - plain delegation, names are forwarded as given
//! - [`ObjectProxy`] - delegation with an [`AliasMap`] applied to method calls
//!
//! Property operations always use the literal key. Aliases only apply to
//! method calls.
//!
//! # Example
//!
//! ```
//! use std::sync::Mutex;
//!
//! use objwrap::{AliasMap, ObjectProxy, Target, TargetError, Value};
//!
//! struct Logger {
//!     lines: Mutex<Vec<String>>,
//! }
//!
//! impl Target for Logger {
//!     fn type_name(&self) -> &str { "Logger" }
//!
//!     fn has_method(&self, name: &str) -> bool { name == "logInfo" }
//!
//!     fn invoke(&self, _name: &str, args: &[Value]) -> Result<Value, TargetError> {
//!         let line = args.first().and_then(Value::as_str).unwrap_or_default();
//!         self.lines.lock().unwrap().push(line.to_string());
//!         Ok(Value::from(line))
//!     }
//!
//!     fn get_property(&self, _key: &str) -> Result<Value, TargetError> { Ok(Value::Null) }
//!
//!     fn set_property(&self, _key: &str, _value: Value) -> Result<(), TargetError> { Ok(()) }
//!
//!     fn has_property(&self, _key: &str) -> bool { false }
//! }
//!
//! let mut proxy = ObjectProxy::new();
//! proxy
//!     .bind(Value::object(Logger { lines: Mutex::new(Vec::new()) }))
//!     .unwrap()
//!     .set_aliases(AliasMap::new().alias("log", "logInfo"));
//!
//! let echoed = proxy.invoke_method("log", &[Value::from("x")]).unwrap();
//! assert_eq!(echoed, Value::from("x"));
//! ```

pub use self::alias::{AliasMap, Identity, MethodResolver};
pub use self::binding::TargetBinding;
pub use self::delegate::Delegating;
pub use self::dispatch::{Dispatcher, ObjectProxy, ObjectWrapper};
pub use self::error::{Error, Result};
pub use self::target::{StaticRef, StaticTarget, Target, TargetError};
pub use self::value::{ObjectRef, Value};

mod alias;
mod binding;
mod delegate;
mod dispatch;
mod error;
mod target;
mod value;
