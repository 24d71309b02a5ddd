//! Check-in/check-out range selection.
//!
//! The selection is an immutable [`SelectionState`] value. Each day pick is fed
//! through [`handle_day_pick`], which returns the next state; whoever renders
//! the calendar owns the only mutable slot and replaces it on every pick.
//!
//! Picks that cannot be honoured are never errors. A past or unavailable day is
//! ignored, and a check-out that would span an unavailable day restarts the
//! range from the clicked day instead.

use serde::{Deserialize, Deserializer, Serialize};

use crate::day::{CalendarDay, DayRange};
use crate::error::BookingError;
use crate::index::AvailabilityIndex;

/// The in-progress selection.
///
/// Deserializing rejects a `Complete` whose check-out precedes its check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Empty,
    CheckInOnly {
        check_in: CalendarDay,
    },
    /// `check_in <= check_out`. Equality is possible: picking the check-in day
    /// again completes a zero-night selection, and minimum-stay policy belongs
    /// to whoever submits the reservation.
    Complete {
        check_in: CalendarDay,
        check_out: CalendarDay,
    },
}

/// Wire form of [`SelectionState`], before the ordering check.
#[derive(Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum RawSelectionState {
    Empty,
    CheckInOnly {
        check_in: CalendarDay,
    },
    Complete {
        check_in: CalendarDay,
        check_out: CalendarDay,
    },
}

impl TryFrom<RawSelectionState> for SelectionState {
    type Error = BookingError;

    fn try_from(raw: RawSelectionState) -> Result<Self, BookingError> {
        match raw {
            RawSelectionState::Empty => Ok(SelectionState::Empty),
            RawSelectionState::CheckInOnly { check_in } => {
                Ok(SelectionState::CheckInOnly { check_in })
            }
            RawSelectionState::Complete {
                check_in,
                check_out,
            } if check_out < check_in => Err(BookingError::InvalidInterval {
                check_in,
                check_out,
            }),
            RawSelectionState::Complete {
                check_in,
                check_out,
            } => Ok(SelectionState::Complete {
                check_in,
                check_out,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for SelectionState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSelectionState::deserialize(deserializer)?;
        SelectionState::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl SelectionState {
    pub fn check_in(&self) -> Option<CalendarDay> {
        match *self {
            SelectionState::Empty => None,
            SelectionState::CheckInOnly { check_in } | SelectionState::Complete { check_in, .. } => {
                Some(check_in)
            }
        }
    }

    pub fn check_out(&self) -> Option<CalendarDay> {
        match *self {
            SelectionState::Complete { check_out, .. } => Some(check_out),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionState::Complete { .. })
    }

    /// The selected stay as a half-open range. `None` unless complete with at
    /// least one night.
    pub fn stay(&self) -> Option<DayRange> {
        match *self {
            SelectionState::Complete {
                check_in,
                check_out,
            } => DayRange::new(check_in, check_out).ok(),
            _ => None,
        }
    }

    /// Nights between check-in and check-out; `Some(0)` for a same-day selection.
    pub fn nights(&self) -> Option<i64> {
        match *self {
            SelectionState::Complete {
                check_in,
                check_out,
            } => Some(check_in.days_until(check_out)),
            _ => None,
        }
    }

    /// True for days strictly between check-in and check-out.
    pub fn in_range(&self, day: CalendarDay) -> bool {
        match *self {
            SelectionState::Complete {
                check_in,
                check_out,
            } => check_in < day && day < check_out,
            _ => false,
        }
    }
}

/// What a single pick did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickOutcome {
    /// Past or unavailable day; the state is unchanged.
    Rejected,
    /// A new range was started from `Empty` or from a completed range.
    CheckInSet,
    /// The pick preceded the pending check-in and replaced it.
    CheckInMovedEarlier,
    /// The candidate range touched an unavailable day; the pick became the new check-in.
    RangeRestarted,
    Completed,
}

/// The state after a pick, together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub state: SelectionState,
    pub outcome: PickOutcome,
}

/// Apply one day pick and report the outcome.
pub fn apply_pick(
    state: SelectionState,
    day: CalendarDay,
    today: CalendarDay,
    index: &AvailabilityIndex,
) -> Transition {
    let transition = if !index.is_available(day, today) {
        Transition {
            state,
            outcome: PickOutcome::Rejected,
        }
    } else {
        match state {
            SelectionState::Empty | SelectionState::Complete { .. } => Transition {
                state: SelectionState::CheckInOnly { check_in: day },
                outcome: PickOutcome::CheckInSet,
            },
            SelectionState::CheckInOnly { check_in } if day < check_in => Transition {
                state: SelectionState::CheckInOnly { check_in: day },
                outcome: PickOutcome::CheckInMovedEarlier,
            },
            // The candidate check-out day is checked too: a blocked day can't be a check-out.
            SelectionState::CheckInOnly { check_in } if index.has_unavailable_within(check_in, day) => {
                Transition {
                    state: SelectionState::CheckInOnly { check_in: day },
                    outcome: PickOutcome::RangeRestarted,
                }
            }
            SelectionState::CheckInOnly { check_in } => Transition {
                state: SelectionState::Complete {
                    check_in,
                    check_out: day,
                },
                outcome: PickOutcome::Completed,
            },
        }
    };

    tracing::debug!(%day, %today, outcome = ?transition.outcome, "day pick");
    transition
}

/// Apply one day pick and return the next selection state.
pub fn handle_day_pick(
    state: SelectionState,
    day: CalendarDay,
    today: CalendarDay,
    index: &AvailabilityIndex,
) -> SelectionState {
    apply_pick(state, day, today, index).state
}
