use crate::{CoreError, RoleName};

use std::str::FromStr;

#[test]
fn test_role_name_as_str() {
    assert_eq!(RoleName::Staff.as_str(), "staff");
    assert_eq!(RoleName::Manager.as_str(), "manager");
    assert_eq!(RoleName::Hr.as_str(), "hr");
    assert_eq!(RoleName::Admin.as_str(), "admin");
    assert_eq!(RoleName::GodAdmin.as_str(), "god-admin");
}

#[test]
fn test_role_name_from_str_round_trips_every_role() {
    for role in RoleName::ALL {
        assert_eq!(RoleName::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_name_from_str_is_case_sensitive() {
    let result = RoleName::from_str("Admin");

    assert!(matches!(result, Err(CoreError::InvalidRoleName { .. })));
}

#[test]
fn test_role_name_serde_uses_wire_spelling() {
    let json = serde_json::to_string(&RoleName::GodAdmin).unwrap();
    assert_eq!(json, "\"god-admin\"");

    let parsed: RoleName = serde_json::from_str("\"hr\"").unwrap();
    assert_eq!(parsed, RoleName::Hr);
}

#[test]
fn test_role_name_descriptions_are_non_empty() {
    for role in RoleName::ALL {
        assert!(!role.description().is_empty());
    }
}
