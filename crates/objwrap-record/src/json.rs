//! Conversions between JSON documents and record fields.

use std::sync::Arc;

use objwrap::Value;
use serde_json::{Map, Number, Value as Json};
use tracing::debug;

use crate::record::{Field, Record};

/// Type name given to records built from nested JSON objects.
pub(crate) const NESTED_TYPE: &str = "Record";

pub(crate) fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

pub(crate) fn field_from_json(json: Json) -> Field {
    match json {
        Json::Null => Field::Plain(Value::Null),
        Json::Bool(b) => Field::Plain(Value::Bool(b)),
        Json::Number(n) => Field::Plain(number_from_json(&n)),
        Json::String(s) => Field::Plain(Value::Str(s)),
        Json::Array(items) => Field::List(items.into_iter().map(field_from_json).collect()),
        Json::Object(map) => Field::Nested(Arc::new(Record::from_map(NESTED_TYPE, map))),
    }
}

/// Integers outside `i64` (large `u64`) widen to `f64` and may lose precision.
fn number_from_json(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Int(i);
    }
    if n.is_u64() {
        debug!(number = %n, "unsigned integer exceeds i64, stored as float");
    }
    n.as_f64().map_or(Value::Null, Value::Float)
}

/// Objects other than nested records have no JSON form and export as `null`.
pub(crate) fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Object(object) => {
            debug!(object = object.type_name(), "object has no JSON form, exported as null");
            Json::Null
        }
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::Number((*i).into()),
        Value::Float(x) => Number::from_f64(*x).map_or(Json::Null, Json::Number),
        Value::Str(s) => Json::String(s.clone()),
        Value::List(items) => Json::Array(items.iter().map(value_to_json).collect()),
    }
}

pub(crate) fn field_to_json(field: &Field) -> Json {
    match field {
        Field::Plain(value) => value_to_json(value),
        Field::Nested(record) => record.to_json(),
        Field::List(items) => Json::Array(items.iter().map(field_to_json).collect()),
    }
}

pub(crate) fn map_from_fields<'a>(
    fields: impl Iterator<Item = (&'a String, &'a Field)>,
) -> Map<String, Json> {
    fields
        .map(|(key, field)| (key.clone(), field_to_json(field)))
        .collect()
}
