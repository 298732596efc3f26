//! Date/time normalization to the precision pain.001 accepts.
//!
//! The schema's `ISODateTime` fields are filled without fractional seconds
//! and without a timezone offset, and `ISODate` fields carry the calendar
//! date only. The normalized types below have no field for the stripped
//! components, so they can never be serialized by accident.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// A timestamp reduced to second precision, without timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedDateTime {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
}

impl NormalizedDateTime {
    /// The current local time, normalized.
    pub fn now() -> Self {
        create_date_time(&Local::now())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Convert back to a chrono value with zero sub-second part.
    pub fn to_naive(&self) -> NaiveDateTime {
        // hour/minute/second were read from a valid NaiveTime
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
            .unwrap_or(NaiveTime::MIN);
        self.date.and_time(time)
    }
}

impl From<NaiveDateTime> for NormalizedDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            date: value.date(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }
}

impl fmt::Display for NormalizedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date.format("%Y-%m-%d"),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl Serialize for NormalizedDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A calendar date without time of day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedDate {
    date: NaiveDate,
}

impl NormalizedDate {
    /// Today's local date.
    pub fn today() -> Self {
        create_date(&Local::now())
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month, starting at 1.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn to_naive(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for NormalizedDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl Serialize for NormalizedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalize a timestamp for an `ISODateTime` field.
///
/// Date and time of day are taken from the timestamp's local representation
/// in its own timezone. Fractional seconds and the offset are dropped.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Timelike};
/// use sepa_pain001::create_date_time;
///
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let ts = cet
///     .with_ymd_and_hms(2024, 3, 15, 14, 30, 5)
///     .unwrap()
///     .with_nanosecond(123_000_000)
///     .unwrap();
///
/// assert_eq!(create_date_time(&ts).to_string(), "2024-03-15T14:30:05");
/// ```
pub fn create_date_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NormalizedDateTime {
    NormalizedDateTime::from(timestamp.naive_local())
}

/// Normalize a timestamp for an `ISODate` field, such as the requested
/// execution date.
pub fn create_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NormalizedDate {
    NormalizedDate::from(timestamp.naive_local().date())
}
