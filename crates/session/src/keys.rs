// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Well-known session store keys.
//!
//! These are the only keys the client persists. No schema versioning
//! exists; readers parse defensively.

/// Identifier of the validated active connection.
pub const CONNECTED_CONNECTION_ID: &str = "connectedConnectionId";

/// Display name of the validated active connection.
pub const CONNECTED_CONNECTION_NAME: &str = "connectedConnectionName";

/// Validation status marker: `OK`, `PENDING`, or absent.
pub const CONNECTION_STATUS: &str = "connectionStatus";

/// Store-local code of the validated active connection.
pub const COD_LOCAL: &str = "codLocal";

/// The bearer token issued at login.
pub const AUTH_TOKEN: &str = "authToken";

/// JSON blob describing the logged-in user.
pub const AUTH_USER: &str = "authUser";
