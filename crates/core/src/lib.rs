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

//! Controllers for the kiosk catalog client.
//!
//! This crate holds the behavior with real invariants:
//!
//! - [`DirectoryController`] — the connection directory: listing,
//!   selecting and probing data sources, and the stale-response-immune
//!   local-code lookup that toggles the form between create and edit.
//! - [`CollectionController`] — the catalog grid: a state machine over
//!   the active connection (`unset` → `pending` → `ok`), client-side
//!   search and pagination over an immutable snapshot, and the
//!   confirm-mutate-reload cycle for visibility toggles.
//! - [`AuditLogViewer`] — filtered reads of the append-only audit log.
//! - [`AuthExpiryGuard`] — token expiry polling and idempotent session
//!   teardown, propagated to every surface via the session channel.
//!
//! Network access goes through the traits in [`api`], so tests drive
//! the controllers against in-memory fakes. Failure policy is uniform:
//! controllers convert remote failures into a user-facing message and
//! a defined fallback state; only `Unauthorized` crosses the
//! controller boundary, because it means the session must die.

pub mod api;
mod audit_view;
mod collection;
mod directory;
mod guard;

#[cfg(test)]
mod tests;

pub use api::{AuditApi, CatalogApi, DirectoryApi, TestOutcome, ToggleRequest};
pub use audit_view::AuditLogViewer;
pub use collection::{COLLECTION_PAGE_SIZE, CollectionController, ConfirmPrompt};
pub use directory::{DirectoryController, FormMode, LookupTicket};
pub use guard::{
    AuthExpiryGuard, DEFAULT_GUARD_INTERVAL, SessionVerdict, TokenError, decode_expiry,
};
