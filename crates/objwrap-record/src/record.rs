use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use objwrap::{ObjectRef, Target, TargetError, Value};
use serde_json::{Map, Value as Json};
use tracing::trace;

use crate::error::{RecordError, Result};
use crate::json;

pub type Method =
    Arc<dyn Fn(&Record, &[Value]) -> std::result::Result<Value, TargetError> + Send + Sync>;

/// Catch-all handler. Receives the method name the record did not declare.
pub type Fallback =
    Arc<dyn Fn(&Record, &str, &[Value]) -> std::result::Result<Value, TargetError> + Send + Sync>;

#[derive(Clone)]
pub(crate) enum Field {
    Plain(Value),
    /// Object built from JSON, kept typed so it can be exported again.
    Nested(Arc<Record>),
    /// Array built from JSON. Objects inside it stay nested records.
    List(Vec<Field>),
}

impl Field {
    fn to_value(&self) -> Value {
        match self {
            Field::Plain(value) => value.clone(),
            Field::Nested(record) => Value::Object(record.clone()),
            Field::List(items) => Value::List(items.iter().map(Field::to_value).collect()),
        }
    }

    fn is_null(&self) -> bool { matches!(self, Field::Plain(Value::Null)) }
}

/// A document-like target: named fields plus optional registered methods.
pub struct Record {
    type_name: String,
    fields:    RwLock<BTreeMap<String, Field>>,
    methods:   HashMap<String, Method>,
    fallback:  Option<Fallback>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields:    RwLock::new(BTreeMap::new()),
            methods:   HashMap::new(),
            fallback:  None,
        }
    }

    /// Builds a record from a JSON object. Nested objects become nested records.
    pub fn from_json(type_name: impl Into<String>, json: Json) -> Result<Self> {
        match json {
            Json::Object(map) => Ok(Self::from_map(type_name, map)),
            other => Err(RecordError::NotAnObject(json::json_type_name(&other))),
        }
    }

    pub fn from_json_str(type_name: impl Into<String>, source: &str) -> Result<Self> {
        let json: Json = serde_json::from_str(source)?;
        Self::from_json(type_name, json)
    }

    pub(crate) fn from_map(type_name: impl Into<String>, map: Map<String, Json>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| (key, json::field_from_json(value)))
            .collect();
        Self {
            fields: RwLock::new(fields),
            ..Self::new(type_name)
        }
    }

    pub fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.write().insert(key.into(), Field::Plain(value.into()));
        self
    }

    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Record, &[Value]) -> std::result::Result<Value, TargetError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&Record, &str, &[Value]) -> std::result::Result<Value, TargetError>
            + Send
            + Sync
            + 'static,
    {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    pub fn into_ref(self) -> ObjectRef { Arc::new(self) }

    /// Current value of `key`, `None` if the field is absent.
    pub fn field(&self, key: &str) -> Option<Value> { self.read().get(key).map(Field::to_value) }

    pub fn keys(&self) -> Vec<String> { self.read().keys().cloned().collect() }

    pub fn len(&self) -> usize { self.read().len() }

    pub fn is_empty(&self) -> bool { self.read().is_empty() }

    /// Exports the fields as a JSON object. Objects that did not come from
    /// JSON have no JSON form and export as `null`.
    ///
    /// Values stored through `set_property` are plain values: a list holding
    /// record objects set that way exports those objects as `null` too.
    pub fn to_json(&self) -> Json { Json::Object(json::map_from_fields(self.read().iter())) }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Field>> {
        self.fields.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Field>> {
        self.fields.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Target for Record {
    fn type_name(&self) -> &str { &self.type_name }

    fn has_method(&self, name: &str) -> bool { self.methods.contains_key(name) }

    fn supports_fallback_invoke(&self) -> bool { self.fallback.is_some() }

    fn invoke(&self, name: &str, args: &[Value]) -> std::result::Result<Value, TargetError> {
        if let Some(method) = self.methods.get(name) {
            return method(self, args);
        }
        match &self.fallback {
            Some(fallback) => {
                trace!(record = %self.type_name, method = name, "record fallback invoked");
                fallback(self, name, args)
            }
            None => Err(anyhow::anyhow!(
                "call to undefined method {}::{}",
                self.type_name,
                name
            )),
        }
    }

    /// Absent fields read as `null`.
    fn get_property(&self, key: &str) -> std::result::Result<Value, TargetError> {
        Ok(self.field(key).unwrap_or_default())
    }

    fn set_property(&self, key: &str, value: Value) -> std::result::Result<(), TargetError> {
        self.write().insert(key.to_string(), Field::Plain(value));
        Ok(())
    }

    fn has_property(&self, key: &str) -> bool { self.read().get(key).is_some_and(|f| !f.is_null()) }

    fn delete_property(&self, key: &str) -> std::result::Result<(), TargetError> {
        self.write().remove(key);
        Ok(())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<_> = self.methods.keys().collect();
        methods.sort();
        f.debug_struct("Record")
            .field("type_name", &self.type_name)
            .field("fields", &self.keys())
            .field("methods", &methods)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
