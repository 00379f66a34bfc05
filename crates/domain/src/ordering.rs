// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Descriptor ordering for the connection selector.

use crate::types::ConnectionDescriptor;

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum CodeKey {
    Numeric(i64),
    Text(String),
}

// Variant order puts coded descriptors ahead of uncoded ones.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Coded(CodeKey),
    Uncoded(i64),
}

fn sort_key(descriptor: &ConnectionDescriptor, numeric: bool) -> SortKey {
    descriptor.local_code_key().map_or(
        SortKey::Uncoded(descriptor.id),
        |code| {
            let key = if numeric {
                code.parse::<i64>()
                    .map_or_else(|_| CodeKey::Text(code.to_string()), CodeKey::Numeric)
            } else {
                CodeKey::Text(code.to_string())
            };
            SortKey::Coded(key)
        },
    )
}

/// Sorts a descriptor list in selector display order.
///
/// The primary key is the store-local code. When every present code
/// parses as a number the coded group sorts numerically; one
/// non-numeric code switches the whole group to lexicographic order.
/// Descriptors missing their code (or carrying an empty one) trail the
/// coded group and sort by identifier among themselves.
///
/// Each descriptor maps to one derived key, so the order is total no
/// matter how coded and uncoded entries are mixed.
pub fn sort_descriptors(descriptors: &mut [ConnectionDescriptor]) {
    let numeric = descriptors
        .iter()
        .filter_map(ConnectionDescriptor::local_code_key)
        .all(|code| code.parse::<i64>().is_ok());
    descriptors.sort_by_cached_key(|d| sort_key(d, numeric));
}
