//! # booking-engine
//!
//! Day-granularity availability for rentable units, and the two-click
//! check-in/check-out selection that runs before a reservation is requested.
//!
//! Everything here is a pure function of in-memory inputs: no clock access, no
//! I/O. "Today" is always supplied by the caller.
//!
//! ## Modules
//!
//! - [`day`] — `CalendarDay` and the half-open `DayRange`
//! - [`index`] — Blocked days + reservations → set of unavailable days
//! - [`selector`] — Pick-by-pick range selection state machine
//! - [`conflict`] — Validate a submitted stay against existing records
//! - [`freedays`] — Maximal runs of bookable days within a window
//! - [`month`] — Per-day status for a displayed month grid
//! - [`calendar`] — The JSON calendar payload handed over by the data source
//! - [`error`] — Error types

pub mod calendar;
pub mod conflict;
pub mod day;
pub mod error;
pub mod freedays;
pub mod index;
pub mod month;
pub mod selector;

pub use calendar::CalendarPayload;
pub use conflict::{blocked_within, check_stay, find_conflicts, Conflict};
pub use day::{CalendarDay, DayRange};
pub use error::BookingError;
pub use freedays::{find_first_free_range, free_ranges, FreeRange};
pub use index::{AvailabilityIndex, IndexBuild, ReservationInterval};
pub use month::{month_view, shift_month, DayCell, DayStatus, MonthView};
pub use selector::{apply_pick, handle_day_pick, PickOutcome, SelectionState, Transition};
