// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Session state and the cross-surface broadcast channel.
//!
//! Independent surfaces (the connection selector, the catalog grid,
//! the audit viewer, the expiry guard) never call each other. They
//! share one [`SessionChannel`]: a synchronous key-value store plus a
//! typed change notification. Every write updates the store first and
//! then announces exactly one event, so any surface can either react
//! to the event payload or re-read the store and arrive at the same
//! state.
//!
//! The store itself is pluggable: an in-memory backend for tests and a
//! JSON-file backend that survives process restarts.

pub mod backend;
mod channel;
mod event;
pub mod keys;
mod store;

#[cfg(test)]
mod tests;

pub use backend::{JsonFileStore, MemoryStore};
pub use channel::SessionChannel;
pub use event::SessionEvent;
pub use store::SessionStore;
