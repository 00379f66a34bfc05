// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::wire;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operator roles.
///
/// Roles gate client-side actions only. The backend remains the
/// authority on every mutation regardless of what the client permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Full administrative access: user management, connection
    /// creation and deletion, reports.
    Admin,
    /// First-level operator.
    N1,
    /// Second-level operator. Least privileged; the default when a
    /// stored role cannot be recognized.
    #[default]
    N2,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "N1" => Ok(Self::N1),
            "N2" => Ok(Self::N2),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::N1 => "N1",
            Self::N2 => "N2",
        }
    }

    /// Returns whether this role may perform structural changes
    /// (creating or deleting connections, managing users).
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The user descriptor stored alongside the bearer token.
///
/// This is a client-side snapshot of the identity returned by the
/// login endpoint. It is read back from the session store, so parsing
/// is defensive throughout: a malformed blob yields `None` rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Login identity.
    pub username: String,
    /// Display name, used to attribute mutations in the audit log.
    #[serde(default)]
    pub full_name: String,
    /// The operator's role. Unrecognized values degrade to `N2`.
    #[serde(default, deserialize_with = "wire::role_lenient")]
    pub role: Role,
}

impl CurrentUser {
    /// Parses a stored user blob.
    ///
    /// Returns `None` for missing, empty, or malformed input. Readers
    /// of the session store must treat those all as "not logged in".
    #[must_use]
    pub fn from_json_blob(blob: &str) -> Option<Self> {
        if blob.trim().is_empty() {
            return None;
        }
        serde_json::from_str(blob).ok()
    }

    /// Serializes this user for the session store.
    #[must_use]
    pub fn to_json_blob(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A known remote data source.
///
/// Descriptors are owned by the backend directory; the client holds a
/// transient, refreshable cache of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Unique identifier assigned by the directory.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Host address of the remote data source.
    pub host: String,
    /// Secondary lookup key (store-local code). Optional; when present
    /// it resolves to at most one descriptor.
    #[serde(
        rename = "codLocal",
        default,
        deserialize_with = "wire::opt_string_or_number"
    )]
    pub local_code: Option<String>,
}

impl ConnectionDescriptor {
    /// Returns the secondary lookup key, treating the empty string as
    /// absent.
    #[must_use]
    pub fn local_code_key(&self) -> Option<&str> {
        self.local_code.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Form data for creating or updating a connection descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDraft {
    /// Display name.
    pub name: String,
    /// Host address.
    pub host: String,
    /// Secondary lookup key.
    #[serde(rename = "codLocal")]
    pub local_code: String,
}

impl ConnectionDraft {
    /// Validates the draft before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty required field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField(String::from("name")));
        }
        if self.host.trim().is_empty() {
            return Err(DomainError::EmptyField(String::from("host")));
        }
        if self.local_code.trim().is_empty() {
            return Err(DomainError::EmptyField(String::from("local code")));
        }
        Ok(())
    }
}

/// Validation status of the active connection.
///
/// Status only ever advances along `Unset` → `Pending` → `Ok`; any
/// selector change or logout drops it back to `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionStatus {
    /// No connection selected, or the last probe failed.
    #[default]
    Unset,
    /// A connection was selected and is awaiting revalidation.
    Pending,
    /// The connectivity probe succeeded.
    Ok,
}

impl ConnectionStatus {
    /// Parses a stored status value.
    ///
    /// Parsing is deliberately lenient: anything other than the two
    /// recognized markers (including a missing key) is `Unset`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "PENDING" => Self::Pending,
            _ => Self::Unset,
        }
    }

    /// Converts this status to its stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Pending => "PENDING",
            Self::Ok => "OK",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are `Unset` → `Pending`, `Pending` → `Ok`,
    /// and any status back to `Unset`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Unset, Self::Pending) | (Self::Pending, Self::Ok) | (_, Self::Unset)
        )
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Pending => write!(f, "pending"),
            Self::Ok => write!(f, "ok"),
        }
    }
}

/// The session-scoped selection of which descriptor is validated and
/// in use.
///
/// Exactly one of these exists per session. The identifying fields are
/// populated only by a successful connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveConnection {
    /// Validation status.
    pub status: ConnectionStatus,
    /// Selected descriptor identifier, when identified.
    pub id: Option<i64>,
    /// Display name of the selected descriptor.
    pub name: Option<String>,
    /// Secondary lookup key of the selected descriptor.
    pub local_code: Option<String>,
}

impl ActiveConnection {
    /// Creates the unset state: no selection, no identifying fields.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            status: ConnectionStatus::Unset,
            id: None,
            name: None,
            local_code: None,
        }
    }

    /// Creates a confirmed state from a successfully probed descriptor.
    #[must_use]
    pub fn confirmed(descriptor: &ConnectionDescriptor) -> Self {
        Self {
            status: ConnectionStatus::Ok,
            id: Some(descriptor.id),
            name: Some(descriptor.name.clone()),
            local_code: descriptor.local_code.clone(),
        }
    }

    /// Returns whether the connection is validated and usable.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, ConnectionStatus::Ok) && self.id.is_some()
    }
}
