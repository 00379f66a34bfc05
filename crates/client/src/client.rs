// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kiosk_domain::RemoteError;
use kiosk_session::SessionChannel;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP client for the kiosk backend.
///
/// The bearer token is read from the session channel on every call,
/// never cached, so a logout or token refresh in another surface takes
/// effect on the next request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    channel: Arc<SessionChannel>,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, channel: Arc<SessionChannel>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            channel,
        }
    }

    /// The session channel this client reads its token from.
    #[must_use]
    pub fn channel(&self) -> &Arc<SessionChannel> {
        &self.channel
    }

    /// Sends a request and classifies the outcome.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for a 401, `Remote` for any other non-2xx
    /// status (body preserved), `Network` for transport failures.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, RemoteError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "Sending request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.channel.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "Transport failure");
            RemoteError::Network {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%url, "Backend rejected the bearer token");
            return Err(RemoteError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "Backend error response");
            return Err(RemoteError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Sends a request and parses the JSON response body.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        response.json().await.map_err(|e| RemoteError::Network {
            message: format!("Invalid response body: {e}"),
        })
    }

    /// Sends a body-less GET and parses the JSON response.
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        self.send_json::<(), T>(Method::GET, path, None).await
    }
}
