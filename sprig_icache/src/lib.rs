// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig `ICache`: per-instance ephemeral state for headless widgets.
//!
//! Widgets frequently need a little state that outlives a single render pass
//! but is not part of their public properties: a cached measurement, the last
//! applied initial value, a one-shot request flag. [`ICache`] is an owned
//! key/value store scoped to exactly one widget instance. It is never shared
//! between instances and never process-global; each widget owns its cache and
//! drops it with the widget.
//!
//! Writes come in two flavors:
//!
//! - [`ICache::set`] stores a value and marks the instance invalid, meaning the
//!   host should schedule a re-render.
//! - [`ICache::set_quiet`] stores a value without requesting a re-render. This
//!   is used for bookkeeping that must not cause a render loop (for example,
//!   clearing a one-shot flag during a render).
//!
//! Hosts poll [`ICache::take_invalidation`] after dispatching an event to
//! learn whether anything visible changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use sprig_icache::ICache;
//!
//! let mut cache: ICache<&str, u32> = ICache::new();
//!
//! // Lazy initialization does not count as a change.
//! assert_eq!(*cache.get_or_set("clicks", 0), 0);
//! assert!(!cache.take_invalidation());
//!
//! cache.set("clicks", 1);
//! assert!(cache.take_invalidation());
//! // The flag is cleared once taken.
//! assert!(!cache.take_invalidation());
//!
//! cache.set_quiet("clicks", 2);
//! assert_eq!(cache.get(&"clicks"), Some(&2));
//! assert!(!cache.take_invalidation());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(test)]
extern crate alloc;

use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::HashMap;

/// Owned, per-instance key/value cache with invalidation tracking.
///
/// See the [crate docs](crate) for the intended usage pattern.
#[derive(Clone, Debug)]
pub struct ICache<K, V> {
    entries: HashMap<K, V>,
    invalidated: bool,
}

impl<K, V> Default for ICache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            invalidated: false,
        }
    }
}

impl<K: Eq + Hash, V> ICache<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key` and requests a re-render.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
        self.invalidated = true;
    }

    /// Stores `value` under `key` without requesting a re-render.
    pub fn set_quiet(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Returns the value under `key`, storing `value` first if the key is vacant.
    ///
    /// Lazy initialization is silent: it never requests a re-render.
    pub fn get_or_set(&mut self, key: K, value: V) -> &V {
        self.entries.entry(key).or_insert(value)
    }

    /// Like [`ICache::get_or_set`], but only computes the value when the key is vacant.
    ///
    /// Use this when producing the initial value is expensive (for example, an
    /// off-screen measurement).
    pub fn get_or_insert_with<F>(&mut self, key: K, init: F) -> &V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(init)
    }

    /// Removes and returns the value under `key`, requesting a re-render if one was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.invalidated = true;
        }
        removed
    }

    /// Keeps only the entries for which `keep` returns `true`.
    ///
    /// Pruning is bookkeeping for entries nothing renders anymore, so it never
    /// requests a re-render.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|k, v| keep(k, v));
    }

    /// Removes every entry, requesting a re-render if the cache was not empty.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.invalidated = true;
        }
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a re-render has been requested since the last
    /// [`ICache::take_invalidation`].
    #[must_use]
    pub const fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Returns and clears the pending re-render request.
    pub fn take_invalidation(&mut self) -> bool {
        core::mem::take(&mut self.invalidated)
    }
}
