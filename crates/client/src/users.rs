// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::ApiClient;
use crate::envelope::ApiEnvelope;
use kiosk_domain::{RemoteError, UserAccount, UserDraft};
use reqwest::Method;

impl ApiClient {
    /// Lists every user account.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for a rejected token, `Rejected` when the backend
    /// refuses, `Remote`/`Network` otherwise.
    pub async fn list_users(&self) -> Result<Vec<UserAccount>, RemoteError> {
        let envelope: ApiEnvelope<Vec<UserAccount>> = self.get_json("/users").await?;
        envelope.into_data()
    }

    /// Creates a user account, returning the backend's message.
    ///
    /// # Errors
    ///
    /// See [`Self::list_users`].
    pub async fn create_user(&self, draft: &UserDraft) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.send_json(Method::POST, "/users", Some(draft)).await?;
        envelope.into_message("User created")
    }

    /// Updates a user account, returning the backend's message.
    ///
    /// An absent password in the draft leaves the stored password
    /// unchanged.
    ///
    /// # Errors
    ///
    /// See [`Self::list_users`].
    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .send_json(Method::PUT, &format!("/users/{id}"), Some(draft))
            .await?;
        envelope.into_message("User updated")
    }

    /// Deletes a user account, returning the backend's message.
    ///
    /// # Errors
    ///
    /// See [`Self::list_users`].
    pub async fn delete_user(&self, id: i64) -> Result<String, RemoteError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .send_json::<(), _>(Method::DELETE, &format!("/users/{id}"), None)
            .await?;
        envelope.into_message("User deleted")
    }
}
