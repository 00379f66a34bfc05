// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::ApiClient;
use kiosk_domain::{CurrentUser, RemoteError};
use reqwest::Method;
use serde::Deserialize;
use tracing::info;

/// Credentials issued by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated operator.
    pub user: CurrentUser,
}

impl ApiClient {
    /// Authenticates and stores the issued credentials on the session
    /// channel.
    ///
    /// The login call itself is unauthenticated; any token still in
    /// the store is sent along and ignored by the backend.
    ///
    /// # Errors
    ///
    /// `Remote` with the backend's status for bad credentials,
    /// `Network` for transport failures.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, RemoteError> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response: LoginResponse = self
            .send_json(Method::POST, "/auth/login", Some(&body))
            .await?;
        info!(username, "Login accepted");
        self.channel()
            .store_credentials(&response.token, &response.user);
        Ok(response)
    }

    /// Destroys the session locally. There is no server-side session to
    /// revoke; the token simply stops being sent.
    pub fn logout(&self) {
        info!("Logging out");
        self.channel().clear_session();
    }
}
