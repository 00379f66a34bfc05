// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog records served by the active connection.

use crate::wire;
use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Records are fetched as an immutable batch. A record's visibility
/// flag is flipped server-side and the whole batch is then reloaded;
/// no record is ever patched in place on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Primary key within a loaded snapshot.
    #[serde(rename = "Codigo", deserialize_with = "wire::string_or_number")]
    pub code: String,
    /// Item description.
    #[serde(rename = "Descrip", default)]
    pub description: String,
    /// Secondary annotation text.
    #[serde(rename = "Observac", default)]
    pub annotation: String,
    /// Whether the record is visible on the kiosk.
    #[serde(rename = "Web", default)]
    pub visible: bool,
}

/// Case-insensitive substring match against a record's code and
/// annotation fields.
///
/// An empty term matches every record.
#[must_use]
pub fn matches_search(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.code.to_lowercase().contains(&needle)
        || record.annotation.to_lowercase().contains(&needle)
}
