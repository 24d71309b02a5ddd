//! Calendar days and half-open day ranges.
//!
//! A [`CalendarDay`] has no time-of-day and no timezone. Its normalized key is
//! `YYYY-MM-DD`; equality and ordering follow the key, i.e. chronology.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BookingError, Result};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A timezone-naive date at day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Parse a normalized `YYYY-MM-DD` key. Surrounding whitespace is ignored.
    ///
    /// Years outside 0000–9999 carry a sign (`+10000-01-01`), exactly as
    /// [`Display`](fmt::Display) writes them, so every day round-trips.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidDay` for anything else, including
    /// unpadded fields, datetimes and out-of-range dates such as `2026-02-30`.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(trimmed, KEY_FORMAT)
            .map_err(|_| BookingError::InvalidDay(s.to_string()))?;
        // chrono accepts unpadded fields; the key form does not.
        if date.format(KEY_FORMAT).to_string() != trimmed {
            return Err(BookingError::InvalidDay(s.to_string()));
        }
        Ok(CalendarDay(date))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDay)
            .ok_or_else(|| BookingError::InvalidDay(format!("{year:04}-{month:02}-{day:02}")))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The following day. Saturates at chrono's maximum date.
    pub fn succ(self) -> Self {
        self.0.checked_add_days(Days::new(1)).map_or(self, CalendarDay)
    }

    /// The preceding day. Saturates at chrono's minimum date.
    pub fn pred(self) -> Self {
        self.0.checked_sub_days(Days::new(1)).map_or(self, CalendarDay)
    }

    /// Signed number of days from `self` to `other` (positive when `other` is later).
    pub fn days_until(self, other: CalendarDay) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The normalized key, e.g. `2024-06-15`.
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay(date)
    }
}

impl FromStr for CalendarDay {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        CalendarDay::parse(s)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A half-open range of days `[start, end)`.
///
/// `end` is not part of the range: a stay from the 10th to the 13th occupies
/// the 10th, 11th and 12th, and the 13th is free for the next check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRange {
    pub start: CalendarDay,
    pub end: CalendarDay,
}

impl DayRange {
    /// # Errors
    /// Returns `BookingError::InvalidInterval` unless `start < end`.
    pub fn new(start: CalendarDay, end: CalendarDay) -> Result<Self> {
        if start >= end {
            return Err(BookingError::InvalidInterval {
                check_in: start,
                check_out: end,
            });
        }
        Ok(DayRange { start, end })
    }

    pub fn nights(&self) -> i64 {
        self.start.days_until(self.end)
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day < self.end
    }

    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`.
    /// Back-to-back ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &DayRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The occupied days, in order. `end` is not yielded.
    pub fn days(&self) -> DayIter {
        DayIter {
            next: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Iterator over the days of a half-open range.
#[derive(Debug, Clone)]
pub struct DayIter {
    next: CalendarDay,
    end: CalendarDay,
}

impl Iterator for DayIter {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<CalendarDay> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        let following = current.succ();
        // succ saturates at the maximum date; stop rather than loop forever.
        self.next = if following == current { self.end } else { following };
        Some(current)
    }
}
