// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::ApiClient;
use crate::envelope::ApiEnvelope;
use kiosk::CatalogApi;
use kiosk_domain::{Record, RemoteError};
use reqwest::Method;

pub use kiosk::ToggleRequest;

impl CatalogApi for ApiClient {
    async fn fetch_records(&self, connection_id: i64) -> Result<Vec<Record>, RemoteError> {
        let envelope: ApiEnvelope<Vec<Record>> = self
            .get_json(&format!("/query/articulos/{connection_id}"))
            .await?;
        envelope.into_data()
    }

    async fn toggle_visibility(&self, request: &ToggleRequest) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .send_json(Method::POST, "/query/toggle-web", Some(request))
            .await?;
        envelope.into_message("Visibility updated")
    }
}
