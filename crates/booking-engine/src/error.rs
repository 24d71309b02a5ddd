//! Error types for booking-engine operations.

use thiserror::Error;

use crate::day::CalendarDay;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid calendar day: {0}")]
    InvalidDay(String),

    /// A reservation or stay whose check-out is not after its check-in.
    #[error("Invalid interval: check-out {check_out} must be after check-in {check_in}")]
    InvalidInterval {
        check_in: CalendarDay,
        check_out: CalendarDay,
    },

    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// The requested stay overlaps an existing reservation.
    #[error("Dates not available: overlaps reservation {check_in}..{check_out}")]
    Overlap {
        check_in: CalendarDay,
        check_out: CalendarDay,
    },

    #[error("Dates not available: {0} is blocked by the owner")]
    Blocked(CalendarDay),

    #[error("Calendar payload error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
