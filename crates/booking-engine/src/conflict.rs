//! Validate a requested stay against existing reservations and blocked days.
//!
//! This is the check a reservation request goes through before it is accepted,
//! independent of the selector: it works on raw records rather than on a built
//! [`AvailabilityIndex`](crate::index::AvailabilityIndex).
//! Back-to-back stays (one checks out the day the other checks in) do NOT conflict.

use crate::day::{CalendarDay, DayRange};
use crate::error::{BookingError, Result};
use crate::index::ReservationInterval;

/// An existing reservation that overlaps the requested stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub reservation: ReservationInterval,
    pub overlap_nights: i64,
}

/// Find every reservation overlapping `stay`.
///
/// The overlap is `min(a.end, b.end) - max(a.start, b.start)` nights. Malformed
/// reservations (`check_in >= check_out`) occupy nothing and are ignored.
pub fn find_conflicts(stay: &DayRange, reservations: &[ReservationInterval]) -> Vec<Conflict> {
    reservations
        .iter()
        .filter_map(|reservation| {
            let booked = reservation.range()?;
            if !stay.overlaps(&booked) {
                return None;
            }
            let overlap_start = stay.start.max(booked.start);
            let overlap_end = stay.end.min(booked.end);
            Some(Conflict {
                reservation: *reservation,
                overlap_nights: overlap_start.days_until(overlap_end),
            })
        })
        .collect()
}

/// Blocked days falling inside `stay`, sorted and deduplicated.
pub fn blocked_within(stay: &DayRange, blocked: &[CalendarDay]) -> Vec<CalendarDay> {
    let mut days: Vec<CalendarDay> = blocked
        .iter()
        .copied()
        .filter(|day| stay.contains(*day))
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Accept or reject a requested stay `[check_in, check_out)`.
///
/// # Errors
/// Checked in this order:
/// - `BookingError::InvalidInterval` if `check_in >= check_out` (zero-night stays included).
/// - `BookingError::Overlap` naming the first overlapping reservation.
/// - `BookingError::Blocked` naming the earliest blocked day inside the stay.
pub fn check_stay(
    check_in: CalendarDay,
    check_out: CalendarDay,
    blocked: &[CalendarDay],
    reservations: &[ReservationInterval],
) -> Result<DayRange> {
    let stay = DayRange::new(check_in, check_out)?;

    if let Some(conflict) = find_conflicts(&stay, reservations).into_iter().next() {
        return Err(BookingError::Overlap {
            check_in: conflict.reservation.check_in,
            check_out: conflict.reservation.check_out,
        });
    }

    if let Some(day) = blocked_within(&stay, blocked).into_iter().next() {
        return Err(BookingError::Blocked(day));
    }

    Ok(stay)
}
