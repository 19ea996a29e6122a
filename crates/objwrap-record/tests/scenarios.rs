use std::sync::Arc;

use objwrap::{AliasMap, Delegating, Dispatcher, Error, ObjectProxy, ObjectWrapper, Value};
use objwrap_record::Record;
use serde_json::json;

fn greeter() -> Record {
    Record::new("Greeter")
        .with_method("greet", |_, _| Ok(Value::from("hi")))
        .with_method("logInfo", |_, args| Ok(args.first().cloned().unwrap_or_default()))
}

#[test]
fn test_greet_is_forwarded() {
    let proxy = ObjectWrapper::with_target(greeter().into_ref()).unwrap();
    assert_eq!(proxy.invoke_method("greet", &[]).unwrap(), Value::from("hi"));
}

#[test]
fn test_alias_routes_to_real_method() {
    let mut proxy = ObjectProxy::with_target(greeter().into_ref()).unwrap();
    proxy.set_aliases(AliasMap::new().alias("log", "logInfo"));

    let result = proxy.invoke_method("log", &[Value::from("x")]).unwrap();
    assert_eq!(result, Value::from("x"));
}

#[test]
fn test_alias_table_from_toml() {
    let mut proxy = ObjectProxy::with_target(greeter().into_ref()).unwrap();
    let aliases = AliasMap::from_toml("[aliases]\nlog = \"logInfo\"\nhello = \"greet\"\n").unwrap();
    proxy.set_aliases(aliases);

    assert_eq!(proxy.invoke_method("hello", &[]).unwrap(), Value::from("hi"));
    assert_eq!(
        proxy.invoke_method("log", &[Value::from(1)]).unwrap(),
        Value::from(1)
    );
}

#[test]
fn test_unbound_proxy_fails() {
    let proxy = ObjectProxy::new();
    assert!(matches!(
        proxy.invoke_method("anything", &[]),
        Err(Error::UnboundTarget { .. })
    ));
}

#[test]
fn test_count_property_round_trip() {
    let record = Record::from_json("Counter", json!({"count": 5})).unwrap();
    let proxy = ObjectProxy::with_target(record.into_ref()).unwrap();

    assert_eq!(proxy.get_property("count").unwrap(), Value::from(5));
    proxy.set_property("count", 6).unwrap();
    assert_eq!(proxy.get_property("count").unwrap(), Value::from(6));
}

#[test]
fn test_binding_a_number_fails() {
    let mut proxy = ObjectProxy::new();
    let err = proxy.bind(42).unwrap_err();

    assert!(matches!(err, Error::InvalidTarget { given: "integer" }));
    assert!(err.to_string().contains("integer"));
}

#[test]
fn test_missing_method_without_fallback() {
    let proxy = ObjectProxy::with_target(Record::new("Document").into_ref()).unwrap();

    let err = proxy.invoke_method("foo", &[]).unwrap_err();
    assert_eq!(err.to_string(), "attempted to call Document::foo");
}

#[test]
fn test_fallback_receives_resolved_name() {
    let record = Record::new("Dynamic").with_fallback(|record, name, args| {
        Ok(Value::from(format!("{}.{}({})", record.keys().len(), name, args.len())))
    });
    let mut proxy = ObjectProxy::with_target(record.into_ref()).unwrap();
    proxy.set_aliases(AliasMap::new().alias("find", "findOne"));

    assert_eq!(
        proxy.invoke_method("find", &[Value::Null]).unwrap(),
        Value::from("0.findOne(1)")
    );
}

#[test]
fn test_property_names_never_resolve_aliases() {
    let record = Record::new("Doc").with_field("log", "field").with_field("logInfo", "other");
    let mut proxy = ObjectProxy::with_target(record.into_ref()).unwrap();
    proxy.set_aliases(AliasMap::new().alias("log", "logInfo"));

    assert_eq!(proxy.get_property("log").unwrap(), Value::from("field"));
    assert!(proxy.has_property("log").unwrap());

    proxy.delete_property("log").unwrap();
    assert!(!proxy.has_property("log").unwrap());
    assert!(proxy.has_property("logInfo").unwrap());
}

#[test]
fn test_target_errors_keep_their_message() {
    let record = Record::new("Doc").with_method("fail", |_, _| Err(anyhow::anyhow!("boom")));
    let proxy = ObjectWrapper::with_target(record.into_ref()).unwrap();

    let err = proxy.invoke_method("fail", &[]).unwrap_err();
    assert!(matches!(err, Error::Target(_)));
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_proxy_edits_are_visible_to_the_owner() {
    let record = Arc::new(Record::from_json("User", json!({"name": "ada"})).unwrap());
    let proxy = ObjectProxy::with_target(Value::Object(record.clone())).unwrap();

    proxy.set_property("name", "grace").unwrap();
    proxy.set_property("active", true).unwrap();

    assert_eq!(record.to_json(), json!({"name": "grace", "active": true}));
}

/// Domain wrapper over a document returned by a data source.
struct User {
    inner: Dispatcher<AliasMap>,
}

impl User {
    fn from_document(doc: serde_json::Value) -> Self {
        let record = Record::from_json("UserDocument", doc)
            .unwrap()
            .with_method("getName", |record, _| Ok(record.field("name").unwrap_or_default()));
        let mut inner = ObjectProxy::with_target(record.into_ref()).unwrap();
        inner.set_aliases(AliasMap::new().alias("name", "getName"));
        Self { inner }
    }

    fn display_name(&self) -> String {
        let name = self.call("name", &[]).unwrap();
        name.as_str().unwrap_or("anonymous").to_uppercase()
    }
}

impl Delegating for User {
    type Resolver = AliasMap;

    fn dispatcher(&self) -> &Dispatcher<AliasMap> { &self.inner }

    fn dispatcher_mut(&mut self) -> &mut Dispatcher<AliasMap> { &mut self.inner }
}

#[test]
fn test_host_type_adds_domain_behavior() {
    let user = User::from_document(json!({"name": "ada", "age": 36}));

    assert_eq!(user.display_name(), "ADA");
    assert_eq!(user.get("age").unwrap(), Value::from(36));

    user.unset("name").unwrap();
    assert!(!user.isset("name").unwrap());
    assert_eq!(user.display_name(), "ANONYMOUS");
}

#[test]
fn test_host_rebinds_to_another_document() {
    let mut user = User::from_document(json!({"name": "ada"}));
    let replacement = Record::new("UserDocument")
        .with_field("name", "grace")
        .with_method("getName", |record, _| Ok(record.field("name").unwrap_or_default()));

    user.bind_target(replacement.into_ref()).unwrap();
    assert_eq!(user.display_name(), "GRACE");

    user.set_aliases(AliasMap::new());
    assert!(matches!(
        user.call("name", &[]),
        Err(Error::NoSuchMethod { .. })
    ));
}
