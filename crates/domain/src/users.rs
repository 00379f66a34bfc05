// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User administration payloads.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user account as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Account identifier.
    pub id: i64,
    /// Login identity.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Role as stored by the backend.
    #[serde(default)]
    pub role: String,
    /// Creation timestamp as reported by the backend (ISO 8601).
    #[serde(default)]
    pub created_at: String,
}

/// Form data for creating or updating a user account.
///
/// On update, an empty password means "leave the password unchanged"
/// and is omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Login identity.
    pub username: String,
    /// Password; required on create, optional on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Role to assign.
    pub role: String,
}

impl UserDraft {
    /// Validates the draft before any request is issued.
    ///
    /// # Arguments
    ///
    /// * `is_create` - Whether the draft will create a new account
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty, or if a password is
    /// missing on create.
    pub fn validate(&self, is_create: bool) -> Result<(), DomainError> {
        if self.username.trim().is_empty() {
            return Err(DomainError::EmptyField(String::from("username")));
        }
        if is_create
            && self
                .password
                .as_deref()
                .is_none_or(|p| p.trim().is_empty())
        {
            return Err(DomainError::PasswordRequired);
        }
        Ok(())
    }
}
