use super::*;
use time::macros::{datetime, offset};

#[test]
fn format_last_sign_in_uses_brazilian_layout() {
    let at = datetime!(2024-01-05 13:04:09 UTC);
    assert_eq!(format_last_sign_in(Some(at), UtcOffset::UTC), "05/01/2024, 13:04:09");
}

#[test]
fn format_last_sign_in_converts_to_viewer_offset() {
    let at = datetime!(2024-01-05 01:30:00 UTC);
    assert_eq!(format_last_sign_in(Some(at), offset!(-3)), "04/01/2024, 22:30:00");
}

#[test]
fn format_last_sign_in_without_timestamp_is_first_access() {
    assert_eq!(format_last_sign_in(None, UtcOffset::UTC), "Primeiro acesso");
}

#[test]
fn offset_from_js_minutes_inverts_sign() {
    assert_eq!(offset_from_js_minutes(180), offset!(-3));
    assert_eq!(offset_from_js_minutes(-60), offset!(+1));
    assert_eq!(offset_from_js_minutes(0), UtcOffset::UTC);
}

#[test]
fn offset_from_js_minutes_out_of_range_falls_back_to_utc() {
    assert_eq!(offset_from_js_minutes(100_000), UtcOffset::UTC);
}

#[test]
fn format_last_sign_in_at_range_edge_keeps_original_offset() {
    let at = datetime!(-9999-01-01 00:00:00 UTC);
    assert_eq!(format_last_sign_in(Some(at), offset!(-3)), format_last_sign_in(Some(at), UtcOffset::UTC));
}

#[test]
fn offset_from_js_minutes_overflow_falls_back_to_utc() {
    assert_eq!(offset_from_js_minutes(i32::MIN), UtcOffset::UTC);
}
