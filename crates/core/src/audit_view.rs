// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::api::AuditApi;
use kiosk_domain::{AuditEntry, AuditLogFilter, RemoteError};
use tracing::warn;

/// Filtered reader over the append-only audit log.
#[derive(Debug, Default)]
pub struct AuditLogViewer {
    filter: AuditLogFilter,
    entries: Vec<AuditEntry>,
    message: Option<String>,
}

impl AuditLogViewer {
    /// Creates an empty viewer with no filter applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter applied on the next refresh.
    pub const fn filter_mut(&mut self) -> &mut AuditLogFilter {
        &mut self.filter
    }

    /// The entries from the last successful refresh.
    #[must_use]
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The last user-facing message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetches entries matching the current filter.
    ///
    /// The implementor has already applied the bounded retry policy, so
    /// any error arriving here is terminal: the entry list is cleared
    /// rather than left showing results of an older filter.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn refresh(&mut self, api: &impl AuditApi) -> Result<(), RemoteError> {
        match api.fetch_audit_log(&self.filter).await {
            Ok(entries) => {
                self.entries = entries;
                self.message = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not load the audit log");
                self.entries.clear();
                if e == RemoteError::Unauthorized {
                    return Err(e);
                }
                self.message = Some(e.user_message());
                Ok(())
            }
        }
    }

    /// Renders one entry as a human-readable description.
    #[must_use]
    pub fn detail_line(entry: &AuditEntry) -> String {
        let store = entry.local_code.as_deref().unwrap_or("-");
        let record = entry.record_code.as_deref().unwrap_or("-");
        let mut line = format!(
            "{} changed {} to {} on record {} for store {}",
            entry.username, entry.field, entry.new_value, record, store
        );
        if entry.needs_correction {
            line.push_str(" [needs correction]");
        }
        line
    }
}
