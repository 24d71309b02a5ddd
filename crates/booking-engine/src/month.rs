//! Per-day status for one displayed month.
//!
//! The rendering side draws the grid; this module decides what each cell means.
//! Weeks start on Monday.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::day::CalendarDay;
use crate::error::{BookingError, Result};
use crate::index::AvailabilityIndex;
use crate::selector::SelectionState;

/// How a single day should be presented.
///
/// When several apply, the first in declaration order wins: a past day is
/// `Past` even if it is also reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Past,
    Unavailable,
    CheckIn,
    CheckOut,
    InRange,
    Available,
}

impl DayStatus {
    /// Whether a pick on this day can change the selection.
    pub fn is_selectable(self) -> bool {
        !matches!(self, DayStatus::Past | DayStatus::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: CalendarDay,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (Monday = 0 … Sunday = 6).
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

/// Classify a single day.
pub fn day_status(
    day: CalendarDay,
    today: CalendarDay,
    index: &AvailabilityIndex,
    selection: &SelectionState,
) -> DayStatus {
    if day < today {
        DayStatus::Past
    } else if index.contains(day) {
        DayStatus::Unavailable
    } else if selection.check_in() == Some(day) {
        DayStatus::CheckIn
    } else if selection.check_out() == Some(day) {
        DayStatus::CheckOut
    } else if selection.in_range(day) {
        DayStatus::InRange
    } else {
        DayStatus::Available
    }
}

/// Build the view for `year`-`month`.
///
/// # Errors
/// Returns `BookingError::InvalidMonth` if `month` is not 1–12 or the month is
/// outside chrono's supported range.
pub fn month_view(
    year: i32,
    month: u32,
    today: CalendarDay,
    index: &AvailabilityIndex,
    selection: &SelectionState,
) -> Result<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(BookingError::InvalidMonth { year, month })?;
    let next_first = first
        .checked_add_months(Months::new(1))
        .ok_or(BookingError::InvalidMonth { year, month })?;

    let cells = first
        .iter_days()
        .take_while(|date| *date < next_first)
        .map(CalendarDay::from)
        .map(|day| DayCell {
            day,
            status: day_status(day, today, index, selection),
        })
        .collect();

    Ok(MonthView {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_monday(),
        cells,
    })
}

/// Move `delta` months from `year`-`month` (previous/next navigation).
/// `month` is expected to be 1–12.
///
/// Returns `None` if the resulting year does not fit in an `i32`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let zero_based = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let new_year = i32::try_from(zero_based.div_euclid(12)).ok()?;
    let new_month = u32::try_from(zero_based.rem_euclid(12)).ok()? + 1;
    Some((new_year, new_month))
}
