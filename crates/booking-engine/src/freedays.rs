//! Compute bookable runs of days from an availability index.
//!
//! Walks the window once, cutting it at every unavailable day, and returns the
//! gaps between them.

use serde::{Deserialize, Serialize};

use crate::day::DayRange;
use crate::index::AvailabilityIndex;

/// A maximal run of consecutive available days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeRange {
    pub range: DayRange,
    pub nights: i64,
}

/// Find free runs within `window`, in chronological order.
///
/// Past-ness is not considered here; clip `window` to start at today if needed.
pub fn free_ranges(index: &AvailabilityIndex, window: &DayRange) -> Vec<FreeRange> {
    let mut free = Vec::new();
    let mut cursor = window.start;

    for busy in index.iter().filter(|day| window.contains(*day)) {
        if cursor < busy {
            free.push(FreeRange {
                range: DayRange {
                    start: cursor,
                    end: busy,
                },
                nights: cursor.days_until(busy),
            });
        }
        cursor = busy.succ();
    }

    // Trailing run after the last unavailable day.
    if cursor < window.end {
        free.push(FreeRange {
            range: DayRange {
                start: cursor,
                end: window.end,
            },
            nights: cursor.days_until(window.end),
        });
    }

    free
}

/// The first free run of at least `min_nights` within `window`.
pub fn find_first_free_range(
    index: &AvailabilityIndex,
    window: &DayRange,
    min_nights: i64,
) -> Option<FreeRange> {
    free_ranges(index, window)
        .into_iter()
        .find(|free| free.nights >= min_nights)
}
