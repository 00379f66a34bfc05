// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kiosk_domain::RemoteError;
use serde::Deserialize;

/// The backend's uniform response envelope.
///
/// Every endpoint answers `{ success, data | message }`; some older
/// paths report failures under `error` instead of `message`, so both
/// are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Payload, present on success for data-bearing endpoints.
    #[serde(default = "none_default")]
    pub data: Option<T>,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Alternate failure message field.
    #[serde(default)]
    pub error: Option<String>,
}

const fn none_default<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    fn rejection_message(message: Option<String>, error: Option<String>) -> String {
        message
            .or(error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| String::from("The backend rejected the request"))
    }

    /// Extracts the payload.
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend reported `success: false` or
    /// omitted the payload.
    pub fn into_data(self) -> Result<T, RemoteError> {
        if self.success
            && let Some(data) = self.data
        {
            return Ok(data);
        }
        Err(RemoteError::Rejected {
            message: Self::rejection_message(self.message, self.error),
        })
    }

    /// Extracts the outcome message of a mutation.
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend reported `success: false`.
    pub fn into_message(self, fallback: &str) -> Result<String, RemoteError> {
        if self.success {
            return Ok(self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string()));
        }
        Err(RemoteError::Rejected {
            message: Self::rejection_message(self.message, self.error),
        })
    }
}
