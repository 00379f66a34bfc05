// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConnectionDescriptor, sort_descriptors};

fn descriptor(id: i64, local_code: Option<&str>) -> ConnectionDescriptor {
    ConnectionDescriptor {
        id,
        name: format!("store-{id}"),
        host: String::from("10.0.0.1"),
        local_code: local_code.map(String::from),
    }
}

#[test]
fn test_numeric_codes_sort_numerically() {
    let mut list = vec![
        descriptor(1, Some("12")),
        descriptor(2, Some("5")),
        descriptor(3, Some("100")),
        descriptor(4, Some("7")),
    ];

    sort_descriptors(&mut list);

    let codes: Vec<_> = list.iter().map(|d| d.local_code.as_deref()).collect();
    assert_eq!(codes, [Some("5"), Some("7"), Some("12"), Some("100")]);
}

#[test]
fn test_mixed_codes_fall_back_to_lexicographic() {
    let mut list = vec![descriptor(1, Some("B2")), descriptor(2, Some("A10"))];

    sort_descriptors(&mut list);

    assert_eq!(list[0].local_code.as_deref(), Some("A10"));
    assert_eq!(list[1].local_code.as_deref(), Some("B2"));
}

#[test]
fn test_missing_codes_trail_in_identifier_order() {
    let mut list = vec![
        descriptor(9, None),
        descriptor(3, Some("50")),
        descriptor(1, None),
    ];

    sort_descriptors(&mut list);

    // Uncoded descriptors come after the coded ones, ordered by id.
    let ids: Vec<_> = list.iter().map(|d| d.id).collect();
    assert_eq!(ids, [3, 1, 9]);
}

#[test]
fn test_one_non_numeric_code_switches_the_list_to_lexicographic() {
    let mut list = vec![
        descriptor(1, Some("10")),
        descriptor(2, Some("9")),
        descriptor(3, Some("A")),
    ];

    sort_descriptors(&mut list);

    let codes: Vec<_> = list.iter().map(|d| d.local_code.as_deref()).collect();
    assert_eq!(codes, [Some("10"), Some("9"), Some("A")]);
}

#[test]
fn test_empty_code_counts_as_missing() {
    let mut list = vec![descriptor(8, Some("")), descriptor(2, Some("4"))];

    sort_descriptors(&mut list);

    assert_eq!(list[0].id, 2);
    assert_eq!(list[1].id, 8);
}

#[test]
fn test_all_numeric_codes_are_non_decreasing() {
    let mut list: Vec<ConnectionDescriptor> = [30, 4, 18, 2, 99, 7]
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let id = i64::try_from(i).expect("small index");
            let code = code.to_string();
            descriptor(id, Some(code.as_str()))
        })
        .collect();

    sort_descriptors(&mut list);

    let parsed: Vec<f64> = list
        .iter()
        .map(|d| d.local_code.as_deref().unwrap().parse().unwrap())
        .collect();
    assert!(parsed.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_large_mixed_list_sorts_without_panicking() {
    // Deterministic xorshift stream; large enough that the sort leaves
    // its insertion-sort fast path and exercises merging.
    let mut state = 0x9e37_79b9_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut list: Vec<ConnectionDescriptor> = (0..200)
        .map(|i| {
            let roll = next() % 3;
            let code = match roll {
                0 => None,
                1 => Some((next() % 500).to_string()),
                _ => Some(format!("S{}", next() % 500)),
            };
            descriptor(i, code.as_deref())
        })
        .collect();

    sort_descriptors(&mut list);

    let first_uncoded = list
        .iter()
        .position(|d| d.local_code.is_none())
        .unwrap_or(list.len());
    // Every uncoded descriptor trails every coded one.
    assert!(list[first_uncoded..].iter().all(|d| d.local_code.is_none()));
    // Coded entries are lexicographic (the list mixes numeric and
    // non-numeric codes), uncoded entries are in id order.
    let codes: Vec<_> = list[..first_uncoded]
        .iter()
        .map(|d| d.local_code.clone().unwrap())
        .collect();
    assert!(codes.windows(2).all(|w| w[0] <= w[1]));
    let ids: Vec<_> = list[first_uncoded..].iter().map(|d| d.id).collect();
    assert!(ids.windows(2).all(|w| w[0] <= w[1]));
}
