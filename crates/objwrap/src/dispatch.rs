//! Forwarding of calls and property operations to the bound target.
//!
//! Every operation checks the binding first. An unbound dispatcher never
//! silently does nothing: it fails with [`Error::UnboundTarget`].
//!
//! Only method calls go through the [`MethodResolver`]. Property access
//! always uses the literal key, even if it collides with an alias.

use std::fmt;

use tracing::{debug, trace};

use crate::alias::{AliasMap, Identity, MethodResolver};
use crate::binding::TargetBinding;
use crate::error::{Error, Result};
use crate::target::StaticRef;
use crate::value::{ObjectRef, Value};

/// Plain delegation: method names are forwarded as given.
pub type ObjectWrapper = Dispatcher<Identity>;

/// Alias-aware delegation.
pub type ObjectProxy = Dispatcher<AliasMap>;

#[derive(Clone, Default)]
pub struct Dispatcher<R> {
    binding:       TargetBinding,
    static_target: Option<StaticRef>,
    resolver:      R,
}

impl<R: MethodResolver + Default> Dispatcher<R> {
    pub fn new() -> Self { Self::default() }

    /// Creates a dispatcher already bound to `target`.
    pub fn with_target(target: impl Into<Value>) -> Result<Self> {
        let mut dispatcher = Self::new();
        dispatcher.bind(target)?;
        Ok(dispatcher)
    }
}

impl<R: MethodResolver> Dispatcher<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            binding: TargetBinding::Unbound,
            static_target: None,
            resolver,
        }
    }

    /// Binds the instance target. Fails with [`Error::InvalidTarget`] for
    /// anything that is not an object.
    pub fn bind(&mut self, target: impl Into<Value>) -> Result<&mut Self> {
        self.binding.bind(target)?;
        Ok(self)
    }

    /// Binds the type-level target used by [`invoke_static_method`].
    ///
    /// This is independent of the instance binding.
    ///
    /// [`invoke_static_method`]: Dispatcher::invoke_static_method
    pub fn bind_static(&mut self, target: StaticRef) -> &mut Self {
        debug!(target_type = target.type_name(), "bound static target");
        self.static_target = Some(target);
        self
    }

    pub fn is_bound(&self) -> bool { self.binding.is_bound() }

    pub fn target(&self) -> Result<&ObjectRef> { self.require_target() }

    pub fn resolver(&self) -> &R { &self.resolver }

    pub fn set_resolver(&mut self, resolver: R) -> &mut Self {
        self.resolver = resolver;
        self
    }

    pub fn invoke_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        let target = self.require_target()?;
        let method = self.resolver.resolve(name);

        if target.has_method(method) || target.supports_fallback_invoke() {
            trace!(
                target_type = target.type_name(),
                method,
                args = args.len(),
                "forwarding call"
            );
            return target.invoke(method, args).map_err(Error::Target);
        }

        debug!(target_type = target.type_name(), method, "no such method on target");
        Err(Error::NoSuchMethod {
            type_name: target.type_name().to_string(),
            method:    method.to_string(),
        })
    }

    pub fn get_property(&self, key: &str) -> Result<Value> {
        let target = self.require_target()?;
        trace!(target_type = target.type_name(), key, "forwarding property get");
        target.get_property(key).map_err(Error::Target)
    }

    pub fn set_property(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        let target = self.require_target()?;
        trace!(target_type = target.type_name(), key, "forwarding property set");
        target.set_property(key, value.into()).map_err(Error::Target)
    }

    pub fn has_property(&self, key: &str) -> Result<bool> {
        let target = self.require_target()?;
        Ok(target.has_property(key))
    }

    pub fn delete_property(&self, key: &str) -> Result<()> {
        let target = self.require_target()?;
        trace!(target_type = target.type_name(), key, "forwarding property delete");
        target.delete_property(key).map_err(Error::Target)
    }

    /// Forwards a type-level call to the separately bound static target.
    pub fn invoke_static_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        let Some(target) = self.static_target.as_ref() else {
            debug!(method = name, "static call on proxy without static target");
            return Err(Error::UnboundTarget { what: "static" });
        };
        let method = self.resolver.resolve(name);

        if target.has_static_method(method) {
            trace!(target_type = target.type_name(), method, "forwarding static call");
            return target.invoke_static(method, args).map_err(Error::Target);
        }

        debug!(target_type = target.type_name(), method, "no such static method");
        Err(Error::NoSuchMethod {
            type_name: target.type_name().to_string(),
            method:    method.to_string(),
        })
    }

    fn require_target(&self) -> Result<&ObjectRef> {
        self.binding.get().inspect_err(|_| {
            debug!("forwarding attempted on unbound proxy");
        })
    }
}

impl Dispatcher<AliasMap> {
    /// Replaces the whole alias table. Entries are not merged.
    pub fn set_aliases(&mut self, aliases: AliasMap) -> &mut Self {
        debug!(count = aliases.len(), "replaced alias table");
        self.set_resolver(aliases)
    }

    pub fn aliases(&self) -> &AliasMap { &self.resolver }
}

impl<R: fmt::Debug> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("binding", &self.binding)
            .field(
                "static_target",
                &self.static_target.as_ref().map(|t| t.type_name()),
            )
            .field("resolver", &self.resolver)
            .finish()
    }
}
