// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActiveConnection, ConnectionDescriptor, ConnectionStatus, CurrentUser, Record, Role,
    matches_search,
};
use std::str::FromStr;

#[test]
fn test_role_round_trip() {
    for role in [Role::Admin, Role::N1, Role::N2] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_unknown_role_is_an_error() {
    assert!(Role::from_str("Superuser").is_err());
}

#[test]
fn test_only_admin_is_elevated() {
    assert!(Role::Admin.is_elevated());
    assert!(!Role::N1.is_elevated());
    assert!(!Role::N2.is_elevated());
}

#[test]
fn test_status_parse_is_lenient() {
    assert_eq!(ConnectionStatus::parse("OK"), ConnectionStatus::Ok);
    assert_eq!(ConnectionStatus::parse("PENDING"), ConnectionStatus::Pending);
    assert_eq!(ConnectionStatus::parse(""), ConnectionStatus::Unset);
    assert_eq!(ConnectionStatus::parse("garbage"), ConnectionStatus::Unset);
}

#[test]
fn test_status_transitions() {
    assert!(ConnectionStatus::Unset.can_transition_to(ConnectionStatus::Pending));
    assert!(ConnectionStatus::Pending.can_transition_to(ConnectionStatus::Ok));
    assert!(ConnectionStatus::Ok.can_transition_to(ConnectionStatus::Unset));
    assert!(!ConnectionStatus::Unset.can_transition_to(ConnectionStatus::Ok));
    assert!(!ConnectionStatus::Ok.can_transition_to(ConnectionStatus::Pending));
}

#[test]
fn test_confirmed_connection_carries_descriptor_fields() {
    let descriptor = ConnectionDescriptor {
        id: 5,
        name: String::from("North"),
        host: String::from("10.1.1.5"),
        local_code: Some(String::from("5")),
    };

    let state = ActiveConnection::confirmed(&descriptor);

    assert!(state.is_ok());
    assert_eq!(state.id, Some(5));
    assert_eq!(state.name.as_deref(), Some("North"));
    assert_eq!(state.local_code.as_deref(), Some("5"));
}

#[test]
fn test_unset_connection_is_not_ok() {
    assert!(!ActiveConnection::unset().is_ok());
}

#[test]
fn test_current_user_blob_round_trip() {
    let user = CurrentUser {
        username: String::from("mperez"),
        full_name: String::from("Maria Perez"),
        role: Role::Admin,
    };

    let parsed = CurrentUser::from_json_blob(&user.to_json_blob()).unwrap();
    assert_eq!(parsed, user);
}

#[test]
fn test_malformed_user_blob_is_none() {
    assert!(CurrentUser::from_json_blob("").is_none());
    assert!(CurrentUser::from_json_blob("   ").is_none());
    assert!(CurrentUser::from_json_blob("{not json").is_none());
}

#[test]
fn test_unknown_stored_role_degrades_to_n2() {
    let blob = r#"{"username":"x","full_name":"X","role":"Wizard"}"#;
    let user = CurrentUser::from_json_blob(blob).unwrap();
    assert_eq!(user.role, Role::N2);
}

#[test]
fn test_record_accepts_numeric_and_string_codes() {
    let from_number: Record =
        serde_json::from_str(r#"{"Codigo":7,"Descrip":"Soda","Observac":"","Web":true}"#).unwrap();
    let from_string: Record =
        serde_json::from_str(r#"{"Codigo":"7","Descrip":"Soda","Observac":"","Web":true}"#)
            .unwrap();

    assert_eq!(from_number.code, "7");
    assert_eq!(from_number, from_string);
}

#[test]
fn test_search_matches_code_and_annotation_case_insensitively() {
    let record = Record {
        code: String::from("SPR-12"),
        description: String::from("Bottle"),
        annotation: String::from("Sprite 500ml"),
        visible: true,
    };

    assert!(matches_search(&record, "sprite"));
    assert!(matches_search(&record, "spr-1"));
    assert!(matches_search(&record, ""));
    assert!(!matches_search(&record, "cola"));
    // The description field is not part of the match.
    assert!(!matches_search(&record, "bottle"));
}
