// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session store backends.
//!
//! Two backends implement [`SessionStore`](crate::SessionStore):
//!
//! - `memory` — volatile, the default for tests
//! - `file` — a JSON file rewritten on every mutation, surviving
//!   process restarts
//!
//! Backends are deliberately dumb: no caching beyond the in-memory
//! map, no schema, no migration. The typed accessors live on
//! [`SessionChannel`](crate::SessionChannel), not here.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
