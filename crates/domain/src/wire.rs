// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lenient deserializers for fields the backend serves inconsistently.
//!
//! Record codes and store-local codes arrive as JSON strings from some
//! data sources and as numbers from others. Readers must accept both.

use crate::types::Role;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
        }
    }
}

/// Deserializes a string or a number into a `String`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

/// Deserializes an optional string-or-number field. `null` and absent
/// both map to `None`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)
        .map(|v| v.map(StringOrNumber::into_string))
}

/// Deserializes a role, degrading unrecognized values to the least
/// privileged role instead of failing the whole blob.
pub fn role_lenient<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Role::from_str(&raw).unwrap_or_default())
}
