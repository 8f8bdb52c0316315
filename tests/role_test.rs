use parley::{ChatRole, ParleyError};

#[test]
fn test_role_wire_strings() {
    let strings: Vec<&str> = ChatRole::ALL.iter().map(ChatRole::as_str).collect();
    assert_eq!(strings, ["system", "user", "assistant", "function"]);
}

#[test]
fn test_role_parse_round_trip() {
    for role in ChatRole::ALL {
        assert_eq!(role.as_str().parse::<ChatRole>().unwrap(), role);
        assert_eq!(role.to_string(), role.as_str());
    }
}

#[test]
fn test_role_parse_is_case_sensitive() {
    assert!(matches!(
        "User".parse::<ChatRole>(),
        Err(ParleyError::InvalidEnumValue(v)) if v == "User"
    ));
    assert!(ChatRole::try_from("tool").is_err());
}

#[test]
fn test_role_serde() {
    assert_eq!(
        serde_json::to_string(&ChatRole::Function).unwrap(),
        "\"function\""
    );
    let role: ChatRole = serde_json::from_str("\"assistant\"").unwrap();
    assert_eq!(role, ChatRole::Assistant);
}
