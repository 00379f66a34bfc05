// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::api::{CatalogApi, ToggleRequest};
use kiosk_domain::{ActiveConnection, Record, RemoteError, matches_search};
use kiosk_session::{SessionChannel, SessionEvent};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fixed number of records per page.
pub const COLLECTION_PAGE_SIZE: usize = 20;

/// Asks the operator to confirm a destructive action.
///
/// The console implements this over stdin; tests answer from a canned
/// script.
pub trait ConfirmPrompt {
    /// Returns `true` when the operator confirmed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Controller for the record collection of the active connection.
///
/// Holds an immutable snapshot of the remote collection plus a
/// client-side search and pagination view over it. The snapshot's
/// lifecycle is bound to the shared active-connection state: whenever
/// that state leaves `ok`, the snapshot and view are discarded, and
/// nothing is loaded again until the operator asks.
pub struct CollectionController {
    channel: Arc<SessionChannel>,
    connection: ActiveConnection,
    records: Vec<Record>,
    search: String,
    page: usize,
    message: Option<String>,
}

impl CollectionController {
    /// Creates a controller and performs the initial state read.
    #[must_use]
    pub fn new(channel: Arc<SessionChannel>) -> Self {
        let mut controller = Self {
            channel,
            connection: ActiveConnection::unset(),
            records: Vec::new(),
            search: String::new(),
            page: 1,
            message: None,
        };
        controller.sync();
        controller
    }

    /// The active-connection state last read from the channel.
    #[must_use]
    pub const fn connection(&self) -> &ActiveConnection {
        &self.connection
    }

    /// The current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The last user-facing message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Re-reads the shared connection state and reconciles the local
    /// view with it.
    ///
    /// Idempotent: applying the same state twice leaves the view
    /// unchanged. Any state other than a confirmed connection discards
    /// the snapshot and resets the view; a freshly confirmed connection
    /// resets the view but leaves loading to the operator.
    pub fn sync(&mut self) {
        let state = self.channel.active_connection();
        if state == self.connection {
            return;
        }
        debug!(status = state.status.as_str(), "Connection state changed");
        self.connection = state;
        self.records.clear();
        self.search.clear();
        self.page = 1;
        if !self.connection.is_ok() {
            self.message = Some(String::from("Waiting for a validated connection"));
        } else {
            self.message = None;
        }
    }

    /// Reacts to a broadcast session event.
    pub fn on_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::ConnectionChanged { .. } | SessionEvent::SessionCleared => self.sync(),
            SessionEvent::CredentialsStored => {}
        }
    }

    /// Loads the record collection of the confirmed connection.
    ///
    /// Does nothing unless the connection is confirmed. Success
    /// replaces the snapshot and resets search and page; failure clears
    /// the snapshot and surfaces the failure as a message.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn load(&mut self, api: &impl CatalogApi) -> Result<(), RemoteError> {
        let Some(id) = self.connection.id.filter(|_| self.connection.is_ok()) else {
            self.message = Some(String::from("Waiting for a validated connection"));
            return Ok(());
        };
        match api.fetch_records(id).await {
            Ok(records) => {
                info!(count = records.len(), "Collection loaded");
                self.records = records;
                self.search.clear();
                self.page = 1;
                self.message = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not load the collection");
                self.records.clear();
                if e == RemoteError::Unauthorized {
                    return Err(e);
                }
                self.message = Some(e.user_message());
                Ok(())
            }
        }
    }

    /// Replaces the search term and resets to the first page.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.page = 1;
    }

    /// Records matching the current search term, in snapshot order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| matches_search(r, &self.search))
            .collect()
    }

    /// Number of pages the filtered view spans. An empty view still has
    /// one page.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(COLLECTION_PAGE_SIZE).max(1)
    }

    /// The 1-based page currently shown.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The filtered records on the current page.
    #[must_use]
    pub fn current_page(&self) -> Vec<&Record> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * COLLECTION_PAGE_SIZE)
            .take(COLLECTION_PAGE_SIZE)
            .collect()
    }

    /// Moves to page `n`. Out-of-range pages are rejected, not clamped.
    pub fn set_page(&mut self, n: usize) -> bool {
        if n >= 1 && n <= self.page_count() {
            self.page = n;
            true
        } else {
            false
        }
    }

    /// Flips one record's visibility after confirmation.
    ///
    /// Declined prompts are a no-op. A confirmed mutation carries the
    /// acting user's display name and the connection's store-local code
    /// for the backend's audit trail. After a successful mutation the
    /// collection is reloaded unconditionally, so the grid always shows
    /// the server's state rather than an optimistic local flip. Failure
    /// leaves the snapshot untouched.
    ///
    /// # Errors
    ///
    /// Only `Unauthorized` propagates.
    pub async fn toggle_visibility(
        &mut self,
        api: &impl CatalogApi,
        prompt: &mut impl ConfirmPrompt,
        code: &str,
    ) -> Result<(), RemoteError> {
        let Some(id) = self.connection.id.filter(|_| self.connection.is_ok()) else {
            self.message = Some(String::from("Waiting for a validated connection"));
            return Ok(());
        };
        if !prompt.confirm(&format!("Change visibility of record {code}?")) {
            debug!(code, "Visibility change declined");
            return Ok(());
        }
        let username = self
            .channel
            .current_user()
            .map(|u| u.full_name)
            .unwrap_or_default();
        let request = ToggleRequest {
            connection_id: id,
            code: code.to_string(),
            username,
            cod_local: self.connection.local_code.clone(),
        };
        match api.toggle_visibility(&request).await {
            Ok(message) => {
                info!(code, "Visibility changed");
                self.message = Some(message);
                self.load(api).await
            }
            Err(e) => {
                if e == RemoteError::Unauthorized {
                    return Err(e);
                }
                self.message = Some(e.user_message());
                Ok(())
            }
        }
    }
}
