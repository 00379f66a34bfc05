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
#![allow(clippy::multiple_crate_versions)]

//! Resilient fetch layer for the kiosk catalog client.
//!
//! [`ApiClient`] wraps every outbound request with bearer-token
//! injection and structured error classification:
//!
//! - 401 becomes [`RemoteError::Unauthorized`] and is never retried —
//!   callers must destroy the session.
//! - Other non-2xx statuses become [`RemoteError::Remote`] with the
//!   raw body kept for diagnostics.
//! - Transport failures become [`RemoteError::Network`].
//!
//! Automatic retry exists in exactly one place: the audit-log read,
//! which backs off exponentially for up to three attempts. Mutations
//! and single reads fail immediately instead, because retrying a
//! non-idempotent call is unsafe.
//!
//! [`RemoteError::Unauthorized`]: kiosk_domain::RemoteError::Unauthorized
//! [`RemoteError::Remote`]: kiosk_domain::RemoteError::Remote
//! [`RemoteError::Network`]: kiosk_domain::RemoteError::Network

mod auth;
mod catalog;
mod client;
mod connections;
mod envelope;
mod logs;
mod reports;
mod retry;
mod users;

pub use auth::LoginResponse;
pub use catalog::ToggleRequest;
pub use client::ApiClient;
pub use connections::TestOutcome;
pub use envelope::ApiEnvelope;
pub use reports::{DailyReport, IncidenceDay, RecentActivity, UserActionCount};
pub use retry::retry_with_backoff;
