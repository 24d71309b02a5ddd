//! Availability index: the set of days a unit cannot be booked for.
//!
//! Built from two raw inputs, owner-blocked days and existing reservations.
//! Reservations are half-open, so a check-out day stays bookable as the next
//! guest's check-in.
//!
//! The index is never patched in place. When either input changes, build a new
//! one; the cost is linear in blocked days plus reserved nights.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::day::{CalendarDay, DayRange};
use crate::error::BookingError;

/// An existing reservation occupying `[check_in, check_out)`.
///
/// Fields are public because records arrive as-is from the data source. A
/// record with `check_in >= check_out` is malformed and is skipped by
/// [`AvailabilityIndex::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationInterval {
    pub check_in: CalendarDay,
    pub check_out: CalendarDay,
}

impl ReservationInterval {
    pub fn new(check_in: CalendarDay, check_out: CalendarDay) -> Self {
        ReservationInterval {
            check_in,
            check_out,
        }
    }

    /// The occupied range, or `None` if the record is malformed.
    pub fn range(&self) -> Option<DayRange> {
        DayRange::new(self.check_in, self.check_out).ok()
    }
}

/// Read-only set of unavailable days for one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    unavailable: BTreeSet<CalendarDay>,
}

/// Result of [`AvailabilityIndex::build`].
#[derive(Debug)]
pub struct IndexBuild {
    pub index: AvailabilityIndex,
    /// One `InvalidInterval` per reservation that was left out of the index.
    pub skipped: Vec<BookingError>,
}

impl AvailabilityIndex {
    /// Union of every blocked day and every day occupied by a reservation.
    ///
    /// Overlapping reservations are tolerated. A reservation with
    /// `check_in >= check_out` is skipped, reported in [`IndexBuild::skipped`]
    /// and logged as a warning; the remaining records are still indexed.
    pub fn build(blocked_days: &[CalendarDay], reservations: &[ReservationInterval]) -> IndexBuild {
        let mut unavailable: BTreeSet<CalendarDay> = blocked_days.iter().copied().collect();
        let mut skipped = Vec::new();

        for reservation in reservations {
            match reservation.range() {
                Some(range) => unavailable.extend(range.days()),
                None => {
                    tracing::warn!(
                        check_in = %reservation.check_in,
                        check_out = %reservation.check_out,
                        "skipping reservation with check-out not after check-in"
                    );
                    skipped.push(BookingError::InvalidInterval {
                        check_in: reservation.check_in,
                        check_out: reservation.check_out,
                    });
                }
            }
        }

        tracing::debug!(
            unavailable = unavailable.len(),
            skipped = skipped.len(),
            "availability index built"
        );

        IndexBuild {
            index: AvailabilityIndex { unavailable },
            skipped,
        }
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.unavailable.contains(&day)
    }

    /// A day is available iff it is not in the index and not before `today`.
    pub fn is_available(&self, day: CalendarDay, today: CalendarDay) -> bool {
        day >= today && !self.contains(day)
    }

    /// True iff any day in the closed interval `[start, end_inclusive]` is
    /// unavailable. An inverted interval contains no days.
    pub fn has_unavailable_within(&self, start: CalendarDay, end_inclusive: CalendarDay) -> bool {
        if start > end_inclusive {
            return false;
        }
        self.unavailable.range(start..=end_inclusive).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unavailable.is_empty()
    }

    /// Unavailable days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        self.unavailable.iter().copied()
    }
}

impl FromIterator<CalendarDay> for AvailabilityIndex {
    fn from_iter<I: IntoIterator<Item = CalendarDay>>(iter: I) -> Self {
        AvailabilityIndex {
            unavailable: iter.into_iter().collect(),
        }
    }
}
