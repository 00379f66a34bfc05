// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::ApiClient;
use crate::envelope::ApiEnvelope;
use kiosk::DirectoryApi;
use kiosk_domain::{ConnectionDescriptor, ConnectionDraft, RemoteError};
use reqwest::Method;

pub use kiosk::TestOutcome;

impl DirectoryApi for ApiClient {
    async fn list_connections(&self) -> Result<Vec<ConnectionDescriptor>, RemoteError> {
        let envelope: ApiEnvelope<Vec<ConnectionDescriptor>> =
            self.get_json("/connections").await?;
        envelope.into_data()
    }

    async fn test_connection(&self, id: i64) -> Result<TestOutcome, RemoteError> {
        // The probe endpoint answers `{ success, message }` directly,
        // with `success` reporting reachability rather than request
        // acceptance.
        self.get_json(&format!("/connections/test/{id}")).await
    }

    async fn find_by_local_code(
        &self,
        code: &str,
    ) -> Result<Option<ConnectionDescriptor>, RemoteError> {
        let path = format!("/connections/by-codlocal/{code}");
        match self
            .get_json::<ApiEnvelope<ConnectionDescriptor>>(&path)
            .await
        {
            Ok(envelope) => Ok(envelope.into_data().ok()),
            Err(RemoteError::Remote { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_connection(&self, draft: &ConnectionDraft) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .send_json(Method::POST, "/connections", Some(draft))
            .await?;
        envelope.into_message("Connection created")
    }

    async fn update_connection(
        &self,
        id: i64,
        draft: &ConnectionDraft,
    ) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .send_json(Method::PUT, &format!("/connections/{id}"), Some(draft))
            .await?;
        envelope.into_message("Connection updated")
    }

    async fn delete_connection(&self, id: i64) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .send_json::<(), _>(Method::DELETE, &format!("/connections/{id}"), None)
            .await?;
        envelope.into_message("Connection deleted")
    }
}
