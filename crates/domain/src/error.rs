// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error taxonomy shared across the client layers.

/// Domain-rule violations raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is empty.
    EmptyField(String),
    /// A role string was not recognized.
    UnknownRole(String),
    /// A password is required when creating a user.
    PasswordRequired,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Required field '{field}' is empty"),
            Self::UnknownRole(value) => write!(f, "Unknown role: {value}"),
            Self::PasswordRequired => write!(f, "A password is required when creating a user"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Failures surfaced by the fetch layer.
///
/// Only `Unauthorized` ever propagates past a controller: it means the
/// session must be destroyed immediately. Every other variant is
/// converted into a user-facing message and a defined fallback state at
/// the controller boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The backend rejected the bearer token. Destroy the session.
    Unauthorized,
    /// The backend answered with a non-2xx status other than 401.
    Remote {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostic display.
        body: String,
    },
    /// The backend answered 2xx but reported `success: false`.
    Rejected {
        /// The backend's message, when it supplied one.
        message: String,
    },
    /// The transport failed before a response was received.
    Network {
        /// A description of the transport failure.
        message: String,
    },
}

impl RemoteError {
    /// Returns whether a retrying caller may safely try again.
    ///
    /// Transport failures and backend error statuses are retryable for
    /// idempotent reads. A 401 must destroy the session instead, and a
    /// 2xx `success: false` answer is an authoritative refusal.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::Network { .. })
    }

    /// Returns the message a controller should surface for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => String::from("Session is no longer valid"),
            Self::Remote { status, body } => {
                if body.trim().is_empty() {
                    format!("HTTP error {status}")
                } else {
                    body.clone()
                }
            }
            Self::Rejected { message } => message.clone(),
            Self::Network { .. } => String::from("Could not reach the backend"),
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Remote { status, body } => write!(f, "HTTP error {status}: {body}"),
            Self::Rejected { message } => write!(f, "Request rejected: {message}"),
            Self::Network { message } => write!(f, "Network error: {message}"),
        }
    }
}

impl std::error::Error for RemoteError {}
