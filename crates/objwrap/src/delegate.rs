//! Embedding a dispatcher in a host type.
//!
//! A host that wraps a foreign object implements [`Delegating`] by handing
//! out its dispatcher, and gets the forwarding surface for free. Its own
//! domain methods sit next to the forwarded ones.

use crate::alias::{AliasMap, MethodResolver};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::value::Value;

pub trait Delegating {
    type Resolver: MethodResolver;

    fn dispatcher(&self) -> &Dispatcher<Self::Resolver>;

    fn dispatcher_mut(&mut self) -> &mut Dispatcher<Self::Resolver>;

    /// Binds the wrapped object. Fails with `InvalidTarget` for non-objects.
    fn bind_target(&mut self, target: impl Into<Value>) -> Result<()> {
        self.dispatcher_mut().bind(target)?;
        Ok(())
    }

    /// Replaces the host's alias table. Only for alias-aware hosts.
    fn set_aliases(&mut self, aliases: AliasMap)
    where
        Self::Resolver: From<AliasMap>,
    {
        self.dispatcher_mut().set_resolver(aliases.into());
    }

    fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.dispatcher().invoke_method(name, args)
    }

    fn call_static(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.dispatcher().invoke_static_method(name, args)
    }

    fn get(&self, key: &str) -> Result<Value> { self.dispatcher().get_property(key) }

    fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.dispatcher().set_property(key, value)
    }

    fn isset(&self, key: &str) -> Result<bool> { self.dispatcher().has_property(key) }

    fn unset(&self, key: &str) -> Result<()> { self.dispatcher().delete_property(key) }
}
