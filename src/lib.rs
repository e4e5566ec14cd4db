mod allowed;
mod bounds;
mod composer;
mod consts;
mod inclusion;
mod label;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use allowed::{
    allowed_days, allowed_hours, allowed_minutes, allowed_months, allowed_years, allowed_years_from,
    current_year,
};
pub use bounds::{BoundsError, DateBounds};
pub use composer::{Constraints, DateComposer, EditState};
pub use consts::*;
pub use inclusion::FieldInclusion;
pub use label::{summary, two_digit};
pub use types::{MonthIndex, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::str::FromStr;

/// A calendar timestamp decomposed into year, month, day, hour, minute and
/// second fields. Always a valid proleptic Gregorian date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", "_0.format(DATE_TIME_FORMAT)")]
pub struct CompositeDate(NaiveDateTime);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", JANUARY, DECEMBER)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid month index: {} (must be {}-{})", "_0", FIRST_MONTH_INDEX, LAST_MONTH_INDEX)]
    InvalidMonthIndex(u32),
    #[display(fmt = "Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CompositeDate {
    /// Sentinel lower bound meaning "no real bound"
    pub const DISTANT_PAST: Self = Self(NaiveDateTime::MIN);
    /// Sentinel upper bound meaning "no real bound"
    pub const DISTANT_FUTURE: Self = Self(NaiveDateTime::MAX);

    /// Creates a date/time from calendar fields (month is 1-based)
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` or `DateError::InvalidTime` if the
    /// fields do not describe a real calendar moment.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(DateError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Current local wall-clock time
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Builds a value from raw fields, `None` when the calendar rejects them
    /// (February 30th, hour 24, ...).
    pub(crate) fn compose(fields: DateFields) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)?;
        let time = NaiveTime::from_hms_nano_opt(fields.hour, fields.minute, fields.second, fields.nanosecond)?;
        Some(Self(NaiveDateTime::new(date, time)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month, 1-based
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month as a 0-based index
    pub fn month_index(&self) -> MonthIndex {
        MonthIndex::saturating(self.0.month0())
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Returns the underlying chrono value
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Whether this is one of the "no real bound" sentinels
    pub fn is_sentinel(&self) -> bool {
        *self == Self::DISTANT_PAST || *self == Self::DISTANT_FUTURE
    }
}

/// Raw calendar fields gathered before composing a `CompositeDate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateFields {
    pub year:       i32,
    pub month:      u32,
    pub day:        u32,
    pub hour:       u32,
    pub minute:     u32,
    pub second:     u32,
    pub nanosecond: u32,
}

impl FromStr for CompositeDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT) {
            return Ok(Self(value));
        }
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_MINUTES_FORMAT) {
            return Ok(Self(value));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| DateError::InvalidFormat(trimmed.to_owned()))
    }
}

impl serde::Serialize for CompositeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CompositeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
