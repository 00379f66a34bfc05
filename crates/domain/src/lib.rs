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

//! Domain types for the kiosk catalog client.
//!
//! This crate defines the vocabulary shared by every other layer:
//! connection descriptors and the active-connection state machine,
//! catalog records, audit entries, user accounts, operator roles, and
//! the error taxonomy used by the fetch layer and the controllers.
//!
//! Nothing in this crate performs I/O. Wire-format details are limited
//! to `serde` attributes matching the backend's field names.

mod audit;
mod catalog;
mod error;
mod ordering;
mod types;
mod users;
mod wire;

#[cfg(test)]
mod tests;

pub use audit::{AuditEntry, AuditLogFilter};
pub use catalog::{Record, matches_search};
pub use error::{DomainError, RemoteError};
pub use ordering::sort_descriptors;
pub use types::{
    ActiveConnection, ConnectionDescriptor, ConnectionDraft, ConnectionStatus, CurrentUser, Role,
};
pub use users::{UserAccount, UserDraft};
