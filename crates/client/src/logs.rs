// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::ApiClient;
use crate::envelope::ApiEnvelope;
use crate::retry::retry_with_backoff;
use kiosk::AuditApi;
use kiosk_domain::{AuditEntry, AuditLogFilter, RemoteError};
use std::time::Duration;

const AUDIT_RETRY_ATTEMPTS: u32 = 3;
const AUDIT_RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

impl AuditApi for ApiClient {
    /// Fetches audit entries, retrying transient failures.
    ///
    /// This is the only retried call in the client: the read is
    /// idempotent and the audit viewer is the screen operators refresh
    /// while the backend restarts.
    async fn fetch_audit_log(
        &self,
        filter: &AuditLogFilter,
    ) -> Result<Vec<AuditEntry>, RemoteError> {
        let path = format!("/logs{}", filter.to_query_string());
        retry_with_backoff(AUDIT_RETRY_ATTEMPTS, AUDIT_RETRY_BASE_DELAY, || async {
            let envelope: ApiEnvelope<Vec<AuditEntry>> = self.get_json(&path).await?;
            envelope.into_data()
        })
        .await
    }
}
