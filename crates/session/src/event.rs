// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kiosk_domain::ActiveConnection;
use serde::{Deserialize, Serialize};

/// Session change notifications.
///
/// Events are announcements of facts already committed to the store,
/// never directives. Subscribers must be idempotent to redundant
/// notifications: re-announcing the same logical state must be
/// harmless, and a subscriber that missed earlier events can always
/// recover by re-reading the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The active connection state changed (selection, probe result,
    /// or reset).
    ConnectionChanged {
        /// The state as committed to the store.
        state: ActiveConnection,
    },
    /// A login completed and credentials were stored.
    CredentialsStored,
    /// The session was destroyed: credentials and connection state are
    /// gone. Every surface must go idle.
    SessionCleared,
}
