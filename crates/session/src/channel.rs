// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::event::SessionEvent;
use crate::keys;
use crate::store::SessionStore;
use kiosk_domain::{ActiveConnection, ConnectionStatus, CurrentUser};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events buffered per subscriber. Subscribers that
/// fall further behind see a lag error and must re-read the store.
const EVENT_BUFFER_SIZE: usize = 100;

/// The shared session channel: persisted state plus change
/// notification.
///
/// All writes go through typed operations. Each one synchronously
/// updates the backing store and then announces exactly one
/// [`SessionEvent`]. A `get` issued after a write in the same task sees
/// the new value; other subscribers observe the change only once their
/// task runs, so cross-surface propagation must never be assumed to be
/// synchronous.
pub struct SessionChannel {
    store: Box<dyn SessionStore>,
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionChannel {
    /// Creates a channel over the given store backend.
    #[must_use]
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { store, tx }
    }

    /// Subscribes to change notifications.
    ///
    /// Events announced before subscription are not delivered; new
    /// subscribers must perform an initial read of the store
    /// themselves.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Reads a raw value from the store.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    fn announce(&self, event: SessionEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => debug!(?event, receivers = count, "Announced session event"),
            Err(_) => debug!(?event, "No subscribers for session event"),
        }
    }

    /// Reads the active connection state, parsing defensively.
    ///
    /// Missing or malformed values yield the unset state, never an
    /// error.
    #[must_use]
    pub fn active_connection(&self) -> ActiveConnection {
        let status = self
            .store
            .get(keys::CONNECTION_STATUS)
            .map_or(ConnectionStatus::Unset, |s| ConnectionStatus::parse(&s));
        let id = self
            .store
            .get(keys::CONNECTED_CONNECTION_ID)
            .and_then(|s| s.parse::<i64>().ok());
        let name = self
            .store
            .get(keys::CONNECTED_CONNECTION_NAME)
            .filter(|s| !s.is_empty());
        let local_code = self.store.get(keys::COD_LOCAL).filter(|s| !s.is_empty());
        ActiveConnection {
            status,
            id,
            name,
            local_code,
        }
    }

    /// Publishes a fully identified active connection state.
    ///
    /// This is how a successful connectivity probe becomes visible to
    /// every surface.
    pub fn publish_connection(&self, state: &ActiveConnection) {
        match state.id {
            Some(id) => self
                .store
                .set(keys::CONNECTED_CONNECTION_ID, &id.to_string()),
            None => self.store.remove(keys::CONNECTED_CONNECTION_ID),
        }
        match state.name.as_deref() {
            Some(name) => self.store.set(keys::CONNECTED_CONNECTION_NAME, name),
            None => self.store.remove(keys::CONNECTED_CONNECTION_NAME),
        }
        match state.local_code.as_deref() {
            Some(code) => self.store.set(keys::COD_LOCAL, code),
            None => self.store.remove(keys::COD_LOCAL),
        }
        self.store
            .set(keys::CONNECTION_STATUS, state.status.as_str());
        self.announce(SessionEvent::ConnectionChanged {
            state: state.clone(),
        });
    }

    /// Resets the connection to an unidentified status.
    ///
    /// `Pending` is published when the selector changes (before the
    /// probe resolves); `Unset` when a probe fails or the selection is
    /// abandoned. Identifying fields are cleared in both cases so no
    /// stale descriptor survives the reset.
    pub fn reset_connection(&self, status: ConnectionStatus) {
        self.store.remove(keys::CONNECTED_CONNECTION_ID);
        self.store.remove(keys::CONNECTED_CONNECTION_NAME);
        self.store.remove(keys::COD_LOCAL);
        if status == ConnectionStatus::Unset {
            self.store.remove(keys::CONNECTION_STATUS);
        } else {
            self.store.set(keys::CONNECTION_STATUS, status.as_str());
        }
        self.announce(SessionEvent::ConnectionChanged {
            state: ActiveConnection {
                status,
                ..ActiveConnection::unset()
            },
        });
    }

    /// Reads the bearer token, if a non-empty one is stored.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store
            .get(keys::AUTH_TOKEN)
            .filter(|t| !t.trim().is_empty())
    }

    /// Reads the logged-in user descriptor, if a parsable one is
    /// stored.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.store
            .get(keys::AUTH_USER)
            .and_then(|blob| CurrentUser::from_json_blob(&blob))
    }

    /// Stores the credentials issued by a successful login.
    pub fn store_credentials(&self, token: &str, user: &CurrentUser) {
        self.store.set(keys::AUTH_TOKEN, token);
        self.store.set(keys::AUTH_USER, &user.to_json_blob());
        self.announce(SessionEvent::CredentialsStored);
    }

    /// Destroys the session: credentials and connection state are
    /// cleared and `SessionCleared` is announced.
    ///
    /// Destruction is idempotent. Calling this on an already-empty
    /// session clears nothing and still announces, which subscribers
    /// must tolerate.
    pub fn clear_session(&self) {
        self.store.remove(keys::AUTH_TOKEN);
        self.store.remove(keys::AUTH_USER);
        self.store.remove(keys::CONNECTED_CONNECTION_ID);
        self.store.remove(keys::CONNECTED_CONNECTION_NAME);
        self.store.remove(keys::COD_LOCAL);
        self.store.remove(keys::CONNECTION_STATUS);
        self.announce(SessionEvent::SessionCleared);
    }
}
