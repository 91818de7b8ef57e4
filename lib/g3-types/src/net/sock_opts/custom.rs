/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

pub type CustomOptionValue = Arc<dyn Any + Send + Sync>;

/// Implementation specific options that have no typed field.
///
/// Cloning creates a new map holding the same value references.
#[derive(Clone, Default)]
pub struct CustomOptions {
    inner: AHashMap<String, CustomOptionValue>,
}

impl CustomOptions {
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T) -> Option<CustomOptionValue>
    where
        T: Any + Send + Sync,
    {
        self.inner.insert(key.into(), Arc::new(value))
    }

    pub fn insert_shared(
        &mut self,
        key: impl Into<String>,
        value: CustomOptionValue,
    ) -> Option<CustomOptionValue> {
        self.inner.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&CustomOptionValue> {
        self.inner.get(key)
    }

    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.inner.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    pub fn remove(&mut self, key: &str) -> Option<CustomOptionValue> {
        self.inner.remove(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(|k| k.as_str())
    }
}

impl PartialEq for CustomOptions {
    fn eq(&self, other: &Self) -> bool {
        self.inner.len() == other.inner.len()
            && self
                .inner
                .iter()
                .all(|(k, v)| other.inner.get(k).is_some_and(|o| Arc::ptr_eq(v, o)))
    }
}

impl Eq for CustomOptions {}

impl fmt::Debug for CustomOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_set().entries(keys).finish()
    }
}
