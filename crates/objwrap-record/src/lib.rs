//! JSON-backed record target for objwrap proxies.
//!
//! A [`Record`] stands in for a document handed back by some external data
//! source. Wrap it in an [`objwrap::ObjectProxy`] and attach domain behavior
//! without re-implementing the document's interface.
//!
//! # Example
//!
//! ```
//! use objwrap::{AliasMap, ObjectProxy, Value};
//! use objwrap_record::Record;
//!
//! let doc = Record::from_json_str("User", r#"{"name": "ada", "logins": 3}"#)
//!     .unwrap()
//!     .with_method("greet", |record, _args| {
//!         let name = record.field("name").unwrap_or_default();
//!         Ok(Value::from(format!("hi {}", name.as_str().unwrap_or("?"))))
//!     });
//!
//! let mut proxy = ObjectProxy::with_target(doc.into_ref()).unwrap();
//! proxy.set_aliases(AliasMap::new().alias("hello", "greet"));
//!
//! assert_eq!(proxy.invoke_method("hello", &[]).unwrap(), Value::from("hi ada"));
//! assert_eq!(proxy.get_property("logins").unwrap(), Value::from(3));
//! ```

pub use self::error::{RecordError, Result};
pub use self::record::{Fallback, Method, Record};

mod error;
mod json;
mod record;
