//! Read-only cookie access for the auth interceptor.
//!
//! # Design
//! The client never writes cookies; token issuance belongs to the login flow.
//! `SharedCookieJar` lets that flow update the jar while requests in flight
//! read consistent snapshots under a read lock.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use ::cookie::Cookie;

/// Source of cookie values, consulted on every request.
pub trait CookieStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// A set of cookies parsed from a `Cookie:` header style string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    values: HashMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name=value; other=value` pairs. Values are percent-decoded;
    /// malformed pairs are skipped and a repeated name keeps the last value.
    pub fn parse(header: &str) -> Self {
        let values = Cookie::split_parse_encoded(header)
            .filter_map(Result::ok)
            .map(|c| (c.name().to_string(), c.value().trim_matches('"').to_string()))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

impl CookieStore for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<T: CookieStore + ?Sized> CookieStore for Arc<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// A cookie jar shared between the client and whoever issues tokens.
#[derive(Debug, Clone, Default)]
pub struct SharedCookieJar {
    inner: Arc<RwLock<CookieJar>>,
}

impl SharedCookieJar {
    pub fn new(jar: CookieJar) -> Self {
        Self {
            inner: Arc::new(RwLock::new(jar)),
        }
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut jar = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        jar.set(name, value);
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        let mut jar = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        jar.remove(name)
    }
}

impl CookieStore for SharedCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let jar = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        jar.get(name)
    }
}
