//! Tests for CalendarDay parsing/ordering and half-open DayRange arithmetic.

use booking_engine::{BookingError, CalendarDay, DayRange};
use chrono::{NaiveDate, Weekday};

fn day(s: &str) -> CalendarDay {
    s.parse().unwrap()
}

#[test]
fn parses_and_displays_normalized_key() {
    let d = day("2024-06-05");
    assert_eq!(d.to_string(), "2024-06-05");
    assert_eq!((d.year(), d.month(), d.day()), (2024, 6, 5));
    assert_eq!(d.weekday(), Weekday::Wed);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(day(" 2024-06-05\n"), day("2024-06-05"));
}

#[test]
fn rejects_non_normalized_input() {
    for bad in ["2024-6-5", "2024-02-30", "2024-06-05T10:00:00", "05/06/2024", ""] {
        assert!(
            matches!(CalendarDay::parse(bad), Err(BookingError::InvalidDay(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn ordering_is_chronological() {
    assert!(day("2023-12-31") < day("2024-01-01"));
    assert!(day("2024-06-09") < day("2024-06-10"));
    assert_eq!(day("2024-06-10"), CalendarDay::from_ymd(2024, 6, 10).unwrap());
}

#[test]
fn succ_pred_and_distance() {
    assert_eq!(day("2024-02-28").succ(), day("2024-02-29"));
    assert_eq!(day("2024-03-01").pred(), day("2024-02-29"));
    assert_eq!(day("2024-06-10").days_until(day("2024-06-13")), 3);
    assert_eq!(day("2024-06-13").days_until(day("2024-06-10")), -3);
}

#[test]
fn serde_uses_key_string() {
    let json = serde_json::to_string(&day("2024-06-05")).unwrap();
    assert_eq!(json, r#""2024-06-05""#);
    assert!(serde_json::from_str::<CalendarDay>(r#""2024-13-01""#).is_err());
}

#[test]
fn five_digit_years_round_trip() {
    let far = CalendarDay::from(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap());
    assert_eq!(far.to_string(), "+10000-01-01");

    let json = serde_json::to_string(&far).unwrap();
    assert_eq!(serde_json::from_str::<CalendarDay>(&json).unwrap(), far);
    assert_eq!(day("+10000-01-01"), far);
}

#[test]
fn year_with_extra_padding_is_rejected() {
    assert!(CalendarDay::parse("02024-06-05").is_err());
}

// ── DayRange ────────────────────────────────────────────────────────────────

#[test]
fn range_requires_start_before_end() {
    assert!(DayRange::new(day("2024-06-10"), day("2024-06-10")).is_err());
    assert!(DayRange::new(day("2024-06-11"), day("2024-06-10")).is_err());
    assert_eq!(DayRange::new(day("2024-06-10"), day("2024-06-13")).unwrap().nights(), 3);
}

#[test]
fn range_days_exclude_end() {
    let range = DayRange::new(day("2024-06-10"), day("2024-06-13")).unwrap();
    let days: Vec<String> = range.days().map(|d| d.to_string()).collect();

    assert_eq!(days, vec!["2024-06-10", "2024-06-11", "2024-06-12"]);
    assert!(range.contains(day("2024-06-12")));
    assert!(!range.contains(day("2024-06-13")));
}

#[test]
fn back_to_back_ranges_do_not_overlap() {
    let first = DayRange::new(day("2024-06-10"), day("2024-06-13")).unwrap();
    let second = DayRange::new(day("2024-06-13"), day("2024-06-15")).unwrap();
    let straddling = DayRange::new(day("2024-06-12"), day("2024-06-14")).unwrap();

    assert!(!first.overlaps(&second));
    assert!(first.overlaps(&straddling));
    assert!(second.overlaps(&straddling));
}
