//! Legal selection ranges for each sub-field of a bounded date.
//!
//! Ranges are resolved coarse to fine: year, month, day, hour, minute. Each
//! one depends only on the coarser selections passed in, never on finer ones.
//! When the bounds leave no legal value for a field the range collapses to a
//! single conventional value (day 1, hour 0, minute 0) so that a picker built
//! from it is never empty.

use std::ops::RangeInclusive;

use chrono::{Datelike, Local};

use crate::consts::{
    FIRST_MONTH_INDEX, LAST_MONTH_INDEX, MAX_DAY, MAX_HOUR, MAX_MINUTE, MIN_DAY, MIN_HOUR, MIN_MINUTE,
    UNBOUNDED_YEAR_SPAN,
};
use crate::{DateBounds, MonthIndex, days_in_month};

/// The current local calendar year
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Years on offer, anchored on the current year when unbounded.
pub fn allowed_years(bounds: &DateBounds) -> RangeInclusive<i32> {
    allowed_years_from(bounds, current_year())
}

/// Years on offer. With the unbounded sentinel this is a window of
/// `UNBOUNDED_YEAR_SPAN` years either side of `reference_year`.
pub fn allowed_years_from(bounds: &DateBounds, reference_year: i32) -> RangeInclusive<i32> {
    if bounds.is_unbounded() {
        return reference_year.saturating_sub(UNBOUNDED_YEAR_SPAN)..=reference_year.saturating_add(UNBOUNDED_YEAR_SPAN);
    }
    let start_year = bounds.start().year();
    let end_year = bounds.end().year();
    start_year.min(end_year)..=start_year.max(end_year)
}

/// 0-based month indices on offer for `year`.
pub fn allowed_months(year: i32, bounds: &DateBounds, include_date: bool) -> RangeInclusive<u32> {
    let full = FIRST_MONTH_INDEX..=LAST_MONTH_INDEX;
    if !include_date {
        return full;
    }

    let (start, end) = (bounds.start(), bounds.end());
    let start_index = start.month_index().get();
    let end_index = end.month_index().get();

    match (year == start.year(), year == end.year()) {
        (true, true) => start_index.min(end_index)..=start_index.max(end_index),
        (true, false) => start_index..=LAST_MONTH_INDEX,
        (false, true) => FIRST_MONTH_INDEX..=end_index,
        (false, false) => full,
    }
}

/// 1-based days on offer for `year` and `month`.
pub fn allowed_days(year: i32, month: MonthIndex, bounds: &DateBounds, include_date: bool) -> RangeInclusive<u32> {
    if !include_date {
        return MIN_DAY..=MAX_DAY;
    }

    let (start, end) = (bounds.start(), bounds.end());
    let days = days_in_month(year, month.to_calendar_month());
    let mut lower = MIN_DAY;
    let mut upper = days;

    if (year, month) == (start.year(), start.month_index()) {
        lower = lower.max(start.day());
    }
    if (year, month) == (end.year(), end.month_index()) {
        upper = upper.min(end.day());
    }

    if lower > upper {
        tracing::debug!(year, month = month.to_calendar_month(), lower, upper, %bounds, "no legal day; falling back to day 1");
        return MIN_DAY..=MIN_DAY;
    }
    lower..=upper
}

/// Hours on offer for the selected day.
pub fn allowed_hours(
    year: i32,
    month: MonthIndex,
    day: u32,
    bounds: &DateBounds,
    include_time: bool,
) -> RangeInclusive<u32> {
    if !include_time {
        return MIN_HOUR..=MAX_HOUR;
    }

    let (start, end) = (bounds.start(), bounds.end());
    let selected = (year, month, day);
    let mut lower = MIN_HOUR;
    let mut upper = MAX_HOUR;

    if selected == (start.year(), start.month_index(), start.day()) {
        lower = lower.max(start.hour());
    }
    if selected == (end.year(), end.month_index(), end.day()) {
        upper = upper.min(end.hour());
    }

    if lower > upper {
        tracing::debug!(year, day, lower, upper, %bounds, "no legal hour; falling back to hour 0");
        return MIN_HOUR..=MIN_HOUR;
    }
    lower..=upper
}

/// Minutes on offer for the selected hour.
pub fn allowed_minutes(
    year: i32,
    month: MonthIndex,
    day: u32,
    hour: u32,
    bounds: &DateBounds,
    include_time: bool,
) -> RangeInclusive<u32> {
    if !include_time {
        return MIN_MINUTE..=MAX_MINUTE;
    }

    let (start, end) = (bounds.start(), bounds.end());
    let selected = (year, month, day, hour);
    let mut lower = MIN_MINUTE;
    let mut upper = MAX_MINUTE;

    if selected == (start.year(), start.month_index(), start.day(), start.hour()) {
        lower = lower.max(start.minute());
    }
    if selected == (end.year(), end.month_index(), end.day(), end.hour()) {
        upper = upper.min(end.minute());
    }

    if lower > upper {
        tracing::debug!(year, day, hour, lower, upper, %bounds, "no legal minute; falling back to minute 0");
        return MIN_MINUTE..=MIN_MINUTE;
    }
    lower..=upper
}
