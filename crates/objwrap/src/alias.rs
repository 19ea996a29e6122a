//! Method name resolution.
//!
//! A [`MethodResolver`] maps the name a caller asked for to the name the
//! target actually exposes. Resolution is lazy: nothing checks that the
//! target has the resolved method until the call is dispatched.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;

pub trait MethodResolver {
    fn resolve<'a>(&'a self, name: &'a str) -> &'a str;
}

/// Forwards every name unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl MethodResolver for Identity {
    fn resolve<'a>(&'a self, name: &'a str) -> &'a str { name }
}

/// Requested method name to real method name, e.g. `log -> logInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(HashMap<String, String>);

/// `[aliases]` must be the only key, otherwise top-level entries would be lost.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AliasSection {
    aliases: AliasMap,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AliasFile {
    Sectioned(AliasSection),
    Flat(AliasMap),
}

impl AliasMap {
    pub fn new() -> Self { Self::default() }

    pub fn alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.0.insert(from.into(), to.into());
        self
    }

    /// Parses a TOML alias table, either flat or under an `[aliases]` section.
    /// Mixing top-level aliases with an `[aliases]` section is an error.
    ///
    /// ```
    /// use objwrap::{AliasMap, MethodResolver};
    ///
    /// let aliases = AliasMap::from_toml("[aliases]\nlog = \"logInfo\"\n").unwrap();
    /// assert_eq!(aliases.resolve("log"), "logInfo");
    /// ```
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: AliasFile = toml::from_str(source)?;
        Ok(match file {
            AliasFile::Sectioned(section) => section.aliases,
            AliasFile::Flat(aliases) => aliases,
        })
    }

    pub fn get(&self, from: &str) -> Option<&str> { self.0.get(from).map(String::as_str) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> { self.0.iter() }
}

impl MethodResolver for AliasMap {
    fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        match self.get(name) {
            Some(real) => {
                trace!(requested = name, resolved = real, "resolved method alias");
                real
            }
            None => name,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AliasMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a AliasMap {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
