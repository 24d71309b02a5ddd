//! Tests for decoding the calendar payload served by the data source.

use booking_engine::{BookingError, CalendarPayload};

#[test]
fn decodes_payload_and_ignores_extra_fields() {
    let json = r#"{
        "availabilities": [{"start_date": "2024-06-01", "end_date": "2024-09-01", "price_per_night": "80.00"}],
        "blocked_dates": ["2024-06-15"],
        "reserved_dates": [{"check_in": "2024-06-01", "check_out": "2024-06-05"}]
    }"#;

    let payload = CalendarPayload::from_json(json).unwrap();
    assert_eq!(payload.blocked_dates.len(), 1);
    assert_eq!(payload.reserved_dates.len(), 1);

    let build = payload.build_index();
    assert_eq!(build.index.len(), 5);
    assert!(build.skipped.is_empty());
}

#[test]
fn missing_lists_default_to_empty() {
    let payload = CalendarPayload::from_json("{}").unwrap();
    assert_eq!(payload, CalendarPayload::default());
    assert!(payload.build_index().index.is_empty());
}

#[test]
fn bad_day_string_is_an_error() {
    let err = CalendarPayload::from_json(r#"{"blocked_dates": ["2024-06-31"]}"#).unwrap_err();
    assert!(matches!(err, BookingError::Json(_)));
    assert!(err.to_string().contains("2024-06-31"));
}

#[test]
fn inverted_reservation_parses_and_is_skipped_on_build() {
    let json = r#"{"reserved_dates": [
        {"check_in": "2024-06-10", "check_out": "2024-06-08"},
        {"check_in": "2024-06-20", "check_out": "2024-06-21"}
    ]}"#;

    let build = CalendarPayload::from_json(json).unwrap().build_index();
    assert_eq!(build.index.len(), 1);
    assert_eq!(build.skipped.len(), 1);
}
