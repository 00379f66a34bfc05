// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Network seams for the controllers.
//!
//! Each trait covers one backend concern. The production implementor
//! is the HTTP client crate; tests implement these with in-memory
//! fakes. Methods return `Send` futures so implementors can be driven
//! from spawned tasks.

use kiosk_domain::{
    AuditEntry, AuditLogFilter, ConnectionDescriptor, ConnectionDraft, Record, RemoteError,
};
use serde::{Deserialize, Serialize};

/// Result of a connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Whether the backend could reach the data source.
    pub success: bool,
    /// Human-readable probe message.
    pub message: String,
}

/// Payload of a visibility toggle mutation.
///
/// Carries the acting user's display name and the owning connection's
/// store-local code so the backend can write its audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    /// The active connection identifier.
    pub connection_id: i64,
    /// Code of the record to flip.
    #[serde(rename = "codigo")]
    pub code: String,
    /// Display name of the acting user.
    pub username: String,
    /// Store-local code of the owning connection.
    pub cod_local: Option<String>,
}

/// Directory operations over the set of known data sources.
pub trait DirectoryApi: Send + Sync {
    /// Lists every known descriptor.
    fn list_connections(
        &self,
    ) -> impl Future<Output = Result<Vec<ConnectionDescriptor>, RemoteError>> + Send;

    /// Probes connectivity to one descriptor.
    fn test_connection(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<TestOutcome, RemoteError>> + Send;

    /// Looks up a descriptor by its store-local code. `None` when no
    /// descriptor carries that code.
    fn find_by_local_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<ConnectionDescriptor>, RemoteError>> + Send;

    /// Creates a descriptor, returning the backend's message.
    fn create_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> impl Future<Output = Result<String, RemoteError>> + Send;

    /// Updates a descriptor, returning the backend's message.
    fn update_connection(
        &self,
        id: i64,
        draft: &ConnectionDraft,
    ) -> impl Future<Output = Result<String, RemoteError>> + Send;

    /// Deletes a descriptor, returning the backend's message.
    fn delete_connection(&self, id: i64)
    -> impl Future<Output = Result<String, RemoteError>> + Send;
}

/// Catalog operations against the active data source.
pub trait CatalogApi: Send + Sync {
    /// Fetches the full record collection of one connection.
    fn fetch_records(
        &self,
        connection_id: i64,
    ) -> impl Future<Output = Result<Vec<Record>, RemoteError>> + Send;

    /// Flips one record's visibility flag server-side, returning the
    /// backend's message.
    fn toggle_visibility(
        &self,
        request: &ToggleRequest,
    ) -> impl Future<Output = Result<String, RemoteError>> + Send;
}

/// Audit log reads.
///
/// Implementors are expected to apply the bounded retry policy; the
/// viewer treats whatever error arrives as terminal.
pub trait AuditApi: Send + Sync {
    /// Fetches audit entries matching the filter.
    fn fetch_audit_log(
        &self,
        filter: &AuditLogFilter,
    ) -> impl Future<Output = Result<Vec<AuditEntry>, RemoteError>> + Send;
}
