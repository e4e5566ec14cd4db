use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LAST_MONTH_INDEX, LEAP_YEAR_CYCLE, MONTH_NAMES,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A 0-based month index guaranteed to be in the range `0..=11`.
///
/// Pickers and edit state address months by index; the calendar addresses
/// them as `1..=12`. Every conversion between the two goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthIndex(u32);

impl MonthIndex {
    pub const JANUARY: Self = Self(0);
    pub const DECEMBER: Self = Self(LAST_MONTH_INDEX);

    /// Creates a new month index, validating that it's <= 11
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonthIndex` if the value is > 11.
    pub fn new(index: u32) -> Result<Self, DateError> {
        if index > LAST_MONTH_INDEX {
            return Err(DateError::InvalidMonthIndex(index));
        }
        Ok(Self(index))
    }

    /// Creates a month index, pinning anything past December to December
    pub const fn saturating(index: u32) -> Self {
        if index > LAST_MONTH_INDEX { Self::DECEMBER } else { Self(index) }
    }

    /// Converts a 1-based calendar month into an index
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is outside `1..=12`.
    pub fn from_calendar_month(month: u32) -> Result<Self, DateError> {
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(Self(month - 1))
    }

    /// Returns the 1-based calendar month
    #[inline]
    pub const fn to_calendar_month(self) -> u32 {
        self.0 + 1
    }

    /// Returns the index value
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }
}

impl TryFrom<u32> for MonthIndex {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthIndex> for u32 {
    fn from(index: MonthIndex) -> Self {
        index.0
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Number of days in a 1-based calendar month
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
