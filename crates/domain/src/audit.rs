// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit log entries.
//!
//! Entries are created by the backend as a side effect of mutations.
//! They are append-only and read-only to this client.

use crate::wire;
use serde::{Deserialize, Serialize};

/// One immutable audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry identifier.
    pub id: i64,
    /// Creation timestamp as reported by the backend (ISO 8601).
    pub created_at: String,
    /// Display name of the acting user.
    pub username: String,
    /// The field that was changed.
    #[serde(rename = "campo", default)]
    pub field: String,
    /// The new value of the changed field.
    #[serde(rename = "valorNuevo", default)]
    pub new_value: String,
    /// Code of the record the change applies to.
    #[serde(
        rename = "articuloCodigo",
        default,
        deserialize_with = "wire::opt_string_or_number"
    )]
    pub record_code: Option<String>,
    /// Store-local code of the owning connection.
    #[serde(
        rename = "codLocal",
        default,
        deserialize_with = "wire::opt_string_or_number"
    )]
    pub local_code: Option<String>,
    /// Whether the entry is flagged as needing correction.
    #[serde(rename = "requiereCorreccion", default)]
    pub needs_correction: bool,
}

/// Filters accepted by the audit log endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLogFilter {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub date_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub date_to: Option<String>,
    /// Substring filter on the acting user.
    pub user: Option<String>,
}

impl AuditLogFilter {
    /// Renders the filter as a query string, empty when no filter is
    /// set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(from) = self.date_from.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("date_from={from}"));
        }
        if let Some(to) = self.date_to.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("date_to={to}"));
        }
        if let Some(user) = self.user.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("user={user}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}
