//! Tests for free-run computation over an availability index.

use booking_engine::{find_first_free_range, free_ranges, AvailabilityIndex, CalendarDay, DayRange, ReservationInterval};

fn day(s: &str) -> CalendarDay {
    s.parse().unwrap()
}

fn window(start: &str, end: &str) -> DayRange {
    DayRange::new(day(start), day(end)).unwrap()
}

#[test]
fn empty_index_is_one_free_run() {
    let free = free_ranges(&AvailabilityIndex::default(), &window("2024-06-01", "2024-07-01"));

    assert_eq!(free.len(), 1);
    assert_eq!(free[0].nights, 30);
}

#[test]
fn runs_are_cut_at_unavailable_days() {
    let index = AvailabilityIndex::build(
        &[day("2024-06-15")],
        &[ReservationInterval::new(day("2024-06-05"), day("2024-06-08"))],
    )
    .index;

    let free = free_ranges(&index, &window("2024-06-01", "2024-06-20"));
    let runs: Vec<(String, i64)> = free.iter().map(|f| (f.range.to_string(), f.nights)).collect();

    assert_eq!(
        runs,
        vec![
            ("2024-06-01..2024-06-05".to_string(), 4),
            ("2024-06-08..2024-06-15".to_string(), 7),
            ("2024-06-16..2024-06-20".to_string(), 4),
        ]
    );
}

#[test]
fn unavailable_days_outside_window_are_ignored() {
    let index: AvailabilityIndex = [day("2024-05-31"), day("2024-06-10")].into_iter().collect();
    let free = free_ranges(&index, &window("2024-06-01", "2024-06-10"));

    assert_eq!(free.len(), 1);
    assert_eq!(free[0].range, window("2024-06-01", "2024-06-10"));
}

#[test]
fn fully_booked_window_has_no_free_runs() {
    let index: AvailabilityIndex = window("2024-06-01", "2024-06-05").days().collect();
    assert!(free_ranges(&index, &window("2024-06-01", "2024-06-05")).is_empty());
}

#[test]
fn first_free_range_honours_minimum_nights() {
    let index: AvailabilityIndex = [day("2024-06-03"), day("2024-06-06")].into_iter().collect();
    let w = window("2024-06-01", "2024-06-15");

    let first = find_first_free_range(&index, &w, 1).unwrap();
    assert_eq!(first.range, window("2024-06-01", "2024-06-03"));

    let longer = find_first_free_range(&index, &w, 3).unwrap();
    assert_eq!(longer.range, window("2024-06-07", "2024-06-15"));

    assert!(find_first_free_range(&index, &w, 9).is_none());
}
