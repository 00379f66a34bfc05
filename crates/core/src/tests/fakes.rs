// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory implementations of the network seams.

use crate::api::{AuditApi, CatalogApi, DirectoryApi, TestOutcome, ToggleRequest};
use crate::collection::ConfirmPrompt;
use kiosk_domain::{
    AuditEntry, AuditLogFilter, ConnectionDescriptor, ConnectionDraft, CurrentUser, Record, Role,
    RemoteError,
};
use kiosk_session::{MemoryStore, SessionChannel};
use std::sync::Arc;
use std::sync::Mutex;

pub fn channel() -> Arc<SessionChannel> {
    Arc::new(SessionChannel::new(Box::new(MemoryStore::new())))
}

pub fn admin_user() -> CurrentUser {
    CurrentUser {
        username: String::from("amartin"),
        full_name: String::from("Ana Martin"),
        role: Role::Admin,
    }
}

pub fn operator_user() -> CurrentUser {
    CurrentUser {
        username: String::from("jlopez"),
        full_name: String::from("Jorge Lopez"),
        role: Role::N2,
    }
}

pub fn descriptor(id: i64, name: &str, local_code: Option<&str>) -> ConnectionDescriptor {
    ConnectionDescriptor {
        id,
        name: name.to_string(),
        host: format!("10.0.0.{id}"),
        local_code: local_code.map(str::to_string),
    }
}

pub fn record(code: &str, annotation: &str, visible: bool) -> Record {
    Record {
        code: code.to_string(),
        description: format!("Item {code}"),
        annotation: annotation.to_string(),
        visible,
    }
}

/// A scripted confirmation prompt.
pub struct ScriptedPrompt {
    answer: bool,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub const fn answering(answer: bool) -> Self {
        Self { answer, asked: 0 }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.asked += 1;
        self.answer
    }
}

/// Directory backend whose every response is preset per call site.
pub struct FakeDirectory {
    pub list: Mutex<Result<Vec<ConnectionDescriptor>, RemoteError>>,
    pub probe: Mutex<Result<TestOutcome, RemoteError>>,
    pub lookup: Mutex<Result<Option<ConnectionDescriptor>, RemoteError>>,
    pub mutation: Mutex<Result<String, RemoteError>>,
    pub created: Mutex<Vec<ConnectionDraft>>,
    pub updated: Mutex<Vec<(i64, ConnectionDraft)>>,
    pub deleted: Mutex<Vec<i64>>,
}

impl Default for FakeDirectory {
    fn default() -> Self {
        Self {
            list: Mutex::new(Ok(Vec::new())),
            probe: Mutex::new(Ok(TestOutcome {
                success: true,
                message: String::from("Connection OK"),
            })),
            lookup: Mutex::new(Ok(None)),
            mutation: Mutex::new(Ok(String::from("Saved"))),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

impl FakeDirectory {
    pub fn listing(descriptors: Vec<ConnectionDescriptor>) -> Self {
        let fake = Self::default();
        *fake.list.lock().unwrap() = Ok(descriptors);
        fake
    }
}

impl DirectoryApi for FakeDirectory {
    async fn list_connections(&self) -> Result<Vec<ConnectionDescriptor>, RemoteError> {
        self.list.lock().unwrap().clone()
    }

    async fn test_connection(&self, _id: i64) -> Result<TestOutcome, RemoteError> {
        self.probe.lock().unwrap().clone()
    }

    async fn find_by_local_code(
        &self,
        _code: &str,
    ) -> Result<Option<ConnectionDescriptor>, RemoteError> {
        self.lookup.lock().unwrap().clone()
    }

    async fn create_connection(&self, draft: &ConnectionDraft) -> Result<String, RemoteError> {
        self.created.lock().unwrap().push(draft.clone());
        self.mutation.lock().unwrap().clone()
    }

    async fn update_connection(
        &self,
        id: i64,
        draft: &ConnectionDraft,
    ) -> Result<String, RemoteError> {
        self.updated.lock().unwrap().push((id, draft.clone()));
        self.mutation.lock().unwrap().clone()
    }

    async fn delete_connection(&self, id: i64) -> Result<String, RemoteError> {
        self.deleted.lock().unwrap().push(id);
        self.mutation.lock().unwrap().clone()
    }
}

/// Catalog backend serving a fixed record set.
pub struct FakeCatalog {
    pub records: Mutex<Result<Vec<Record>, RemoteError>>,
    pub toggle: Mutex<Result<String, RemoteError>>,
    pub fetches: Mutex<Vec<i64>>,
    pub toggles: Mutex<Vec<ToggleRequest>>,
}

impl FakeCatalog {
    pub fn serving(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(Ok(records)),
            toggle: Mutex::new(Ok(String::from("Visibility updated"))),
            fetches: Mutex::new(Vec::new()),
            toggles: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: RemoteError) -> Self {
        let fake = Self::serving(Vec::new());
        *fake.records.lock().unwrap() = Err(error);
        fake
    }
}

impl CatalogApi for FakeCatalog {
    async fn fetch_records(&self, connection_id: i64) -> Result<Vec<Record>, RemoteError> {
        self.fetches.lock().unwrap().push(connection_id);
        self.records.lock().unwrap().clone()
    }

    async fn toggle_visibility(&self, request: &ToggleRequest) -> Result<String, RemoteError> {
        self.toggles.lock().unwrap().push(request.clone());
        self.toggle.lock().unwrap().clone()
    }
}

/// Audit backend serving a fixed entry set.
pub struct FakeAudit {
    pub entries: Mutex<Result<Vec<AuditEntry>, RemoteError>>,
    pub filters: Mutex<Vec<AuditLogFilter>>,
}

impl FakeAudit {
    pub fn serving(entries: Vec<AuditEntry>) -> Self {
        Self {
            entries: Mutex::new(Ok(entries)),
            filters: Mutex::new(Vec::new()),
        }
    }
}

impl AuditApi for FakeAudit {
    async fn fetch_audit_log(&self, filter: &AuditLogFilter) -> Result<Vec<AuditEntry>, RemoteError> {
        self.filters.lock().unwrap().push(filter.clone());
        self.entries.lock().unwrap().clone()
    }
}
