//! The calendar payload supplied by the data source.
//!
//! Shape, as served for one unit:
//!
//! ```json
//! {
//!   "blocked_dates": ["2024-06-15"],
//!   "reserved_dates": [{"check_in": "2024-06-01", "check_out": "2024-06-05"}]
//! }
//! ```
//!
//! Other fields (pricing windows and the like) are ignored.

use serde::{Deserialize, Serialize};

use crate::day::CalendarDay;
use crate::error::Result;
use crate::index::{AvailabilityIndex, IndexBuild, ReservationInterval};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarPayload {
    #[serde(default)]
    pub blocked_dates: Vec<CalendarDay>,
    #[serde(default)]
    pub reserved_dates: Vec<ReservationInterval>,
}

impl CalendarPayload {
    /// Parse a payload.
    ///
    /// # Errors
    /// Returns `BookingError::Json` for malformed JSON or a day string that is
    /// not `YYYY-MM-DD`. Inverted reservations parse fine and are dropped later
    /// by [`build_index`](Self::build_index).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_index(&self) -> IndexBuild {
        AvailabilityIndex::build(&self.blocked_dates, &self.reserved_dates)
    }
}
