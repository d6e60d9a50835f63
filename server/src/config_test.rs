use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("   ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 443 ")).unwrap(), 443);
}

#[test]
fn parse_port_rejects_garbage_and_zero() {
    for raw in ["http", "0", "70000", "-1"] {
        let err = parse_port(Some(raw)).unwrap_err().to_string();
        assert!(err.contains("invalid PORT"), "expected error for {raw:?}: {err}");
    }
}
