// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::api::DirectoryApi;
use kiosk_domain::{
    ActiveConnection, ConnectionDescriptor, ConnectionDraft, ConnectionStatus, RemoteError,
    sort_descriptors,
};
use kiosk_session::SessionChannel;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Whether the descriptor form would create a new entry or edit an
/// existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// The typed local code matched nothing; saving creates.
    #[default]
    Create,
    /// The typed local code matched an existing descriptor; saving
    /// updates it.
    Edit {
        /// Identifier of the matched descriptor.
        id: i64,
    },
}

/// Identity of one in-flight local-code lookup.
///
/// Lookups fire on every keystroke and responses may return out of
/// order. Each ticket carries the sequence number current when the
/// lookup began; [`DirectoryController::apply_lookup`] discards any
/// result whose ticket is no longer the latest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    value: String,
}

impl LookupTicket {
    /// The local code this lookup was issued for.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Controller for the connection directory.
///
/// Owns the descriptor cache, the create/edit form, and the only code
/// path that ever publishes a confirmed active connection.
pub struct DirectoryController {
    channel: Arc<SessionChannel>,
    connections: Vec<ConnectionDescriptor>,
    form: ConnectionDraft,
    mode: FormMode,
    message: Option<String>,
    lookup_seq: u64,
}

impl DirectoryController {
    /// Creates a controller publishing on the given channel.
    #[must_use]
    pub fn new(channel: Arc<SessionChannel>) -> Self {
        Self {
            channel,
            connections: Vec::new(),
            form: ConnectionDraft::default(),
            mode: FormMode::Create,
            message: None,
            lookup_seq: 0,
        }
    }

    /// The cached descriptor list, in selector display order.
    #[must_use]
    pub fn connections(&self) -> &[ConnectionDescriptor] {
        &self.connections
    }

    /// The current form contents.
    #[must_use]
    pub const fn form(&self) -> &ConnectionDraft {
        &self.form
    }

    /// Mutable access to the form, for editing the name and host
    /// fields. The local code field should go through
    /// [`Self::begin_lookup`] so the create/edit mode tracks it.
    pub const fn form_mut(&mut self) -> &mut ConnectionDraft {
        &mut self.form
    }

    /// Whether the form would create or edit.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// The last user-facing message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Converts a remote failure into a surfaced message, letting only
    /// `Unauthorized` escape.
    fn absorb(&mut self, err: RemoteError) -> Result<(), RemoteError> {
        if err == RemoteError::Unauthorized {
            return Err(err);
        }
        self.message = Some(err.user_message());
        Ok(())
    }

    /// Reloads the descriptor list.
    ///
    /// On failure the previous list is kept so the selector never
    /// flashes empty; the failure becomes a message instead.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn refresh(&mut self, api: &impl DirectoryApi) -> Result<(), RemoteError> {
        match api.list_connections().await {
            Ok(mut list) => {
                sort_descriptors(&mut list);
                self.connections = list;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not load the connection list");
                self.absorb(e)
            }
        }
    }

    /// Handles a selector change: publish `Pending` first, so every
    /// surface discards stale data even if the probe never resolves,
    /// then run the probe.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn select(&mut self, api: &impl DirectoryApi, id: i64) -> Result<(), RemoteError> {
        self.channel.reset_connection(ConnectionStatus::Pending);
        self.test_connection(api, id).await
    }

    /// Probes a descriptor and publishes the outcome.
    ///
    /// This is the only path that ever publishes a confirmed (`ok`)
    /// active connection. Probe failure and transport failure both
    /// publish the unset state.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn test_connection(
        &mut self,
        api: &impl DirectoryApi,
        id: i64,
    ) -> Result<(), RemoteError> {
        match api.test_connection(id).await {
            Ok(outcome) if outcome.success => {
                self.message = Some(outcome.message);
                if let Some(descriptor) = self.connections.iter().find(|c| c.id == id) {
                    let state = ActiveConnection::confirmed(descriptor);
                    info!(id, name = ?state.name, "Connection validated");
                    self.channel.publish_connection(&state);
                } else {
                    // Probe succeeded for a descriptor we no longer
                    // know; without its identity nothing can be
                    // published as active.
                    warn!(id, "Probe succeeded for an unknown descriptor");
                    self.channel.reset_connection(ConnectionStatus::Unset);
                }
                Ok(())
            }
            Ok(outcome) => {
                self.message = Some(outcome.message);
                self.channel.reset_connection(ConnectionStatus::Unset);
                Ok(())
            }
            Err(e) => {
                self.channel.reset_connection(ConnectionStatus::Unset);
                self.absorb(e)
            }
        }
    }

    /// Records a local-code keystroke and stamps a lookup ticket.
    ///
    /// Empty input resets the form to create mode immediately and
    /// returns `None`: no lookup should be issued.
    pub fn begin_lookup(&mut self, value: &str) -> Option<LookupTicket> {
        self.lookup_seq += 1;
        if value.is_empty() {
            self.mode = FormMode::Create;
            self.form = ConnectionDraft::default();
            return None;
        }
        self.form.local_code = value.to_string();
        Some(LookupTicket {
            seq: self.lookup_seq,
            value: value.to_string(),
        })
    }

    /// Applies a lookup response.
    ///
    /// Responses for any ticket other than the latest are discarded
    /// silently: a slower response for an earlier keystroke must never
    /// overwrite the state of a later one. Lookup failures keep the
    /// form as typed.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub fn apply_lookup(
        &mut self,
        ticket: &LookupTicket,
        result: Result<Option<ConnectionDescriptor>, RemoteError>,
    ) -> Result<(), RemoteError> {
        if ticket.seq != self.lookup_seq {
            debug!(value = %ticket.value, "Discarding stale lookup response");
            return Ok(());
        }
        match result {
            Ok(Some(descriptor)) => {
                self.mode = FormMode::Edit { id: descriptor.id };
                self.form = ConnectionDraft {
                    name: descriptor.name,
                    host: descriptor.host,
                    local_code: descriptor
                        .local_code
                        .unwrap_or_else(|| ticket.value.clone()),
                };
            }
            Ok(None) => {
                self.mode = FormMode::Create;
                self.form = ConnectionDraft {
                    local_code: ticket.value.clone(),
                    ..ConnectionDraft::default()
                };
            }
            Err(RemoteError::Unauthorized) => return Err(RemoteError::Unauthorized),
            Err(e) => {
                debug!(value = %ticket.value, error = %e, "Local-code lookup failed");
            }
        }
        Ok(())
    }

    /// Runs a full lookup cycle for sequential callers.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn lookup_local_code(
        &mut self,
        api: &impl DirectoryApi,
        value: &str,
    ) -> Result<(), RemoteError> {
        let Some(ticket) = self.begin_lookup(value) else {
            return Ok(());
        };
        let result = api.find_by_local_code(ticket.value()).await;
        self.apply_lookup(&ticket, result)
    }

    fn acting_role_is_elevated(&self) -> bool {
        self.channel
            .current_user()
            .is_some_and(|u| u.role.is_elevated())
    }

    /// Saves the form: creates in create mode, updates in edit mode.
    ///
    /// The draft is validated client-side first, and creation requires
    /// an elevated role (a UX gate only; the backend stays
    /// authoritative). Success refreshes the list and resets the form.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn save(&mut self, api: &impl DirectoryApi) -> Result<(), RemoteError> {
        if let Err(e) = self.form.validate() {
            self.message = Some(e.to_string());
            return Ok(());
        }
        let result = match self.mode {
            FormMode::Create => {
                if !self.acting_role_is_elevated() {
                    self.message = Some(String::from("Creating connections requires Admin"));
                    return Ok(());
                }
                api.create_connection(&self.form).await
            }
            FormMode::Edit { id } => api.update_connection(id, &self.form).await,
        };
        match result {
            Ok(message) => {
                self.message = Some(message);
                self.form = ConnectionDraft::default();
                self.mode = FormMode::Create;
                self.refresh(api).await
            }
            Err(e) => self.absorb(e),
        }
    }

    /// Deletes the descriptor currently loaded in the form.
    ///
    /// Requires edit mode and an elevated role. Success refreshes the
    /// list and resets the form.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn remove(&mut self, api: &impl DirectoryApi) -> Result<(), RemoteError> {
        let FormMode::Edit { id } = self.mode else {
            self.message = Some(String::from("No existing connection is loaded"));
            return Ok(());
        };
        if !self.acting_role_is_elevated() {
            self.message = Some(String::from("Deleting connections requires Admin"));
            return Ok(());
        }
        match api.delete_connection(id).await {
            Ok(message) => {
                self.message = Some(message);
                self.form = ConnectionDraft::default();
                self.mode = FormMode::Create;
                self.refresh(api).await
            }
            Err(e) => self.absorb(e),
        }
    }
}
