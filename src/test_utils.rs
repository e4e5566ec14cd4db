//! Shared constructors for unit tests.

use crate::{CompositeDate, DateBounds, MonthIndex};

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> CompositeDate {
    CompositeDate::new(year, month, day, hour, minute, 0).expect("valid test date")
}

pub fn date(year: i32, month: u32, day: u32) -> CompositeDate {
    at(year, month, day, 0, 0)
}

pub fn bounds(start: CompositeDate, end: CompositeDate) -> DateBounds {
    DateBounds::new(start, end)
}

/// Month index from a 1-based calendar month
pub fn month(calendar_month: u32) -> MonthIndex {
    MonthIndex::from_calendar_month(calendar_month).expect("valid test month")
}
