// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pluggable session store contract.

/// A synchronous string key-value store scoped to one operator
/// profile.
///
/// Implementations must apply every mutation before returning, so that
/// a `get` issued immediately after a `set` in the same task observes
/// the new value. Durability is backend-specific: the memory backend
/// forgets everything on drop, the file backend survives restarts.
///
/// Values are opaque strings. Readers are expected to parse
/// defensively and treat missing or malformed values as unset.
pub trait SessionStore: Send + Sync {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str);

    /// Removes a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}
