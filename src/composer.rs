//! Field-by-field editing of a bounded date.
//!
//! The host owns the live [`CompositeDate`]; a [`DateComposer`] owns the
//! [`EditState`] draft for one editing session. Values flow host to composer
//! when the session opens and composer to host after every completed edit.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{
    CompositeDate, DateBounds, DateFields, FieldInclusion, MonthIndex, allowed_days, allowed_hours,
    allowed_minutes, allowed_months, allowed_years_from, current_year,
};

/// What a picker may select: the bounds, the editable field groups, and the
/// year that anchors the window offered when the bounds are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub bounds:         DateBounds,
    pub inclusion:      FieldInclusion,
    pub reference_year: i32,
}

impl Constraints {
    /// Constraints anchored on the current calendar year
    pub fn new(bounds: DateBounds, inclusion: FieldInclusion) -> Self {
        Self {
            bounds,
            inclusion,
            reference_year: current_year(),
        }
    }

    #[must_use]
    pub const fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(DateBounds::unbounded(), FieldInclusion::all())
    }
}

/// Draft sub-field selections for one editing session.
///
/// Fields are public so a host can bind pickers to them directly; nothing
/// here is validated until [`EditState::clamp_to_bounds`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditState {
    pub year:     i32,
    pub month:    MonthIndex,
    /// 1-based
    pub day:      u32,
    pub hour:     u32,
    pub minute:   u32,
    initializing: bool,
}

impl EditState {
    /// Seeds every sub-field from `current`. The state stays in its
    /// initializing phase until [`EditState::finish_initialization`].
    pub fn initialize(current: &CompositeDate) -> Self {
        Self {
            year:         current.year(),
            month:        current.month_index(),
            day:          current.day(),
            hour:         current.hour(),
            minute:       current.minute(),
            initializing: true,
        }
    }

    pub const fn is_initializing(&self) -> bool {
        self.initializing
    }

    pub const fn finish_initialization(&mut self) {
        self.initializing = false;
    }

    /// Pulls every included field into its legal range, coarse to fine, and
    /// overwrites every excluded field from `live`.
    pub fn clamp_to_bounds(&mut self, live: &CompositeDate, constraints: &Constraints) {
        let Constraints {
            bounds,
            inclusion,
            reference_year,
        } = constraints;

        if inclusion.include_year {
            self.year = clamp_field("year", self.year, &allowed_years_from(bounds, *reference_year));
        } else {
            self.year = live.year();
        }

        if inclusion.include_date {
            let months = allowed_months(self.year, bounds, true);
            self.month = MonthIndex::saturating(clamp_field("month", self.month.get(), &months));
            let days = allowed_days(self.year, self.month, bounds, true);
            self.day = clamp_field("day", self.day, &days);
        } else {
            self.month = live.month_index();
            self.day = live.day();
        }

        if inclusion.include_time {
            let hours = allowed_hours(self.year, self.month, self.day, bounds, true);
            self.hour = clamp_field("hour", self.hour, &hours);
            let minutes = allowed_minutes(self.year, self.month, self.day, self.hour, bounds, true);
            self.minute = clamp_field("minute", self.minute, &minutes);
        } else {
            self.hour = live.hour();
            self.minute = live.minute();
        }
    }

    /// Builds the composite value for this draft.
    ///
    /// Included groups come from the draft, excluded ones and the seconds
    /// from `live`. A draft the calendar rejects yields `live`. The result is
    /// always clamped into the bounds.
    pub fn reassemble(&self, live: &CompositeDate, constraints: &Constraints) -> CompositeDate {
        let Constraints { bounds, inclusion, .. } = constraints;

        let (month, day) = if inclusion.include_date {
            (self.month.to_calendar_month(), self.day)
        } else {
            (live.month(), live.day())
        };
        let (hour, minute) = if inclusion.include_time {
            (self.hour, self.minute)
        } else {
            (live.hour(), live.minute())
        };
        let fields = DateFields {
            year: if inclusion.include_year { self.year } else { live.year() },
            month,
            day,
            hour,
            minute,
            second: live.second(),
            nanosecond: live.nanosecond(),
        };

        let candidate = CompositeDate::compose(fields).unwrap_or_else(|| {
            tracing::debug!(?fields, %live, "draft is not a calendar date; keeping live value");
            *live
        });
        let clamped = bounds.clamp(candidate);
        if clamped != candidate {
            tracing::debug!(%candidate, %clamped, "composed date clamped into bounds");
        }
        clamped
    }
}

fn clamp_field<T>(name: &'static str, value: T, range: &RangeInclusive<T>) -> T
where
    T: Copy + PartialOrd + std::fmt::Display,
{
    let clamped = if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    };
    if clamped != value {
        tracing::trace!(field = name, %value, %clamped, "clamped selection");
    }
    clamped
}

/// Drives one editing session over a host-owned [`CompositeDate`].
///
/// Every `set_*` call applies the edit, re-clamps the whole draft and writes
/// the reassembled value back to the host in one step, so the host never
/// observes a partially clamped state.
#[derive(Debug, Clone)]
pub struct DateComposer {
    constraints: Constraints,
    state:       EditState,
}

impl DateComposer {
    /// Seeds a draft from `input` and clamps it once. `input` is not written.
    pub fn open(input: &CompositeDate, constraints: Constraints) -> Self {
        let mut state = EditState::initialize(input);
        state.clamp_to_bounds(input, &constraints);
        state.finish_initialization();
        tracing::debug!(%input, bounds = %constraints.bounds, "date composer opened");
        Self { constraints, state }
    }

    pub const fn state(&self) -> &EditState {
        &self.state
    }

    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn set_year(&mut self, input: &mut CompositeDate, year: i32) {
        self.apply(input, |state| state.year = year);
    }

    pub fn set_month(&mut self, input: &mut CompositeDate, month: MonthIndex) {
        self.apply(input, |state| state.month = month);
    }

    pub fn set_day(&mut self, input: &mut CompositeDate, day: u32) {
        self.apply(input, |state| state.day = day);
    }

    pub fn set_hour(&mut self, input: &mut CompositeDate, hour: u32) {
        self.apply(input, |state| state.hour = hour);
    }

    pub fn set_minute(&mut self, input: &mut CompositeDate, minute: u32) {
        self.apply(input, |state| state.minute = minute);
    }

    fn apply(&mut self, input: &mut CompositeDate, edit: impl FnOnce(&mut EditState)) {
        edit(&mut self.state);
        if self.state.is_initializing() {
            return;
        }
        self.state.clamp_to_bounds(input, &self.constraints);
        *input = self.state.reassemble(input, &self.constraints);
    }

    pub fn allowed_years(&self) -> RangeInclusive<i32> {
        allowed_years_from(&self.constraints.bounds, self.constraints.reference_year)
    }

    pub fn allowed_months(&self) -> RangeInclusive<u32> {
        allowed_months(
            self.state.year,
            &self.constraints.bounds,
            self.constraints.inclusion.include_date,
        )
    }

    pub fn allowed_days(&self) -> RangeInclusive<u32> {
        allowed_days(
            self.state.year,
            self.state.month,
            &self.constraints.bounds,
            self.constraints.inclusion.include_date,
        )
    }

    pub fn allowed_hours(&self) -> RangeInclusive<u32> {
        allowed_hours(
            self.state.year,
            self.state.month,
            self.state.day,
            &self.constraints.bounds,
            self.constraints.inclusion.include_time,
        )
    }

    pub fn allowed_minutes(&self) -> RangeInclusive<u32> {
        allowed_minutes(
            self.state.year,
            self.state.month,
            self.state.day,
            self.state.hour,
            &self.constraints.bounds,
            self.constraints.inclusion.include_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, bounds, date, month};

    fn constraints(b: DateBounds, inclusion: FieldInclusion) -> Constraints {
        Constraints::new(b, inclusion).with_reference_year(2026)
    }

    fn draft(year: i32, month_index: u32, day: u32, hour: u32, minute: u32) -> EditState {
        let mut state = EditState::initialize(&date(2000, 1, 1));
        state.year = year;
        state.month = MonthIndex::saturating(month_index);
        state.day = day;
        state.hour = hour;
        state.minute = minute;
        state.finish_initialization();
        state
    }

    #[test]
    fn test_initialize_seeds_fields() {
        let state = EditState::initialize(&at(2024, 3, 9, 14, 5));
        assert_eq!(state.year, 2024);
        assert_eq!(state.month, month(3));
        assert_eq!(state.month.get(), 2);
        assert_eq!(state.day, 9);
        assert_eq!(state.hour, 14);
        assert_eq!(state.minute, 5);
        assert!(state.is_initializing());
    }

    #[test]
    fn test_clamp_pulls_fields_into_bounds() {
        let c = constraints(
            bounds(at(2024, 1, 15, 9, 30), at(2024, 1, 15, 9, 45)),
            FieldInclusion::all(),
        );
        let live = at(2024, 1, 15, 9, 40);
        let mut state = draft(2025, 7, 31, 22, 5);
        state.clamp_to_bounds(&live, &c);

        assert_eq!(state.year, 2024);
        assert_eq!(state.month, MonthIndex::JANUARY);
        assert_eq!(state.day, 15);
        assert_eq!(state.hour, 9);
        assert_eq!(state.minute, 30);
    }

    #[test]
    fn test_clamp_day_follows_month_change() {
        let c = constraints(bounds(date(2024, 1, 1), date(2024, 12, 31)), FieldInclusion::all());
        let live = date(2024, 1, 31);
        let mut state = draft(2024, 5, 31, 0, 0);
        state.clamp_to_bounds(&live, &c);
        assert_eq!(state.month, month(6));
        assert_eq!(state.day, 30);
    }

    #[test]
    fn test_clamp_excluded_fields_mirror_live() {
        let c = constraints(
            bounds(date(2020, 1, 1), date(2030, 12, 31)),
            FieldInclusion::time_only(),
        );
        let live = at(2023, 8, 17, 6, 45);
        let mut state = draft(2029, 1, 3, 12, 10);
        state.clamp_to_bounds(&live, &c);

        assert_eq!(state.year, 2023);
        assert_eq!(state.month, month(8));
        assert_eq!(state.day, 17);
        assert_eq!(state.hour, 12);
        assert_eq!(state.minute, 10);
    }

    #[test]
    fn test_clamp_excluded_time_mirrors_live() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::date_only());
        let live = at(2024, 5, 1, 18, 20);
        let mut state = draft(2024, 4, 2, 3, 4);
        state.clamp_to_bounds(&live, &c);
        assert_eq!((state.hour, state.minute), (18, 20));
        assert_eq!((state.month, state.day), (month(5), 2));
    }

    #[test]
    fn test_clamp_unbounded_year_window() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::all());
        let live = date(1990, 1, 1);
        let mut state = EditState::initialize(&live);
        state.clamp_to_bounds(&live, &c);
        assert_eq!(state.year, 2006);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let samples = [
            (
                bounds(at(2024, 1, 15, 9, 30), at(2024, 1, 15, 9, 45)),
                draft(2023, 11, 31, 23, 59),
            ),
            (
                bounds(date(2024, 1, 15), date(2024, 3, 10)),
                draft(2024, 2, 31, 12, 0),
            ),
            (
                bounds(date(2024, 6, 10), date(2024, 6, 5)),
                draft(2024, 5, 20, 7, 7),
            ),
            (
                bounds(at(2022, 4, 10, 8, 15), at(2024, 9, 20, 17, 45)),
                draft(2022, 3, 10, 3, 0),
            ),
        ];

        for inclusion in [
            FieldInclusion::all(),
            FieldInclusion::date_only(),
            FieldInclusion::time_only(),
        ] {
            for (b, start) in &samples {
                let c = constraints(*b, inclusion);
                let live = b.start();
                let mut once = *start;
                once.clamp_to_bounds(&live, &c);
                let mut twice = once;
                twice.clamp_to_bounds(&live, &c);
                assert_eq!(once, twice, "clamp not idempotent for {b} with {inclusion:?}");
            }
        }
    }

    #[test]
    fn test_clamp_establishes_range_invariants() {
        let b = bounds(at(2022, 4, 10, 8, 15), at(2024, 9, 20, 17, 45));
        let c = constraints(b, FieldInclusion::all());
        let live = at(2023, 1, 1, 0, 0);

        for (year, month_index, day, hour, minute) in [
            (2021, 0, 1, 0, 0),
            (2022, 0, 31, 5, 59),
            (2022, 3, 10, 8, 0),
            (2024, 11, 25, 23, 59),
            (2024, 8, 20, 17, 50),
        ] {
            let mut state = draft(year, month_index, day, hour, minute);
            state.clamp_to_bounds(&live, &c);
            assert!(c.bounds.start().year() <= state.year && state.year <= c.bounds.end().year());
            assert!(allowed_months(state.year, &b, true).contains(&state.month.get()));
            assert!(allowed_days(state.year, state.month, &b, true).contains(&state.day));
            assert!(allowed_hours(state.year, state.month, state.day, &b, true).contains(&state.hour));
            assert!(allowed_minutes(state.year, state.month, state.day, state.hour, &b, true).contains(&state.minute));
        }
    }

    #[test]
    fn test_reassemble_round_trip() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::all());
        for value in [
            at(2024, 1, 15, 9, 30),
            at(2024, 2, 29, 23, 59),
            CompositeDate::new(1999, 12, 31, 12, 0, 42).unwrap(),
            date(1, 1, 1),
        ] {
            let state = EditState::initialize(&value);
            assert_eq!(state.reassemble(&value, &c), value);
        }
    }

    #[test]
    fn test_reassemble_preserves_seconds() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::all());
        let live = CompositeDate::new(2024, 1, 15, 9, 30, 42).unwrap();
        let state = draft(2024, 0, 16, 10, 5);
        assert_eq!(
            state.reassemble(&live, &c),
            CompositeDate::new(2024, 1, 16, 10, 5, 42).unwrap()
        );
    }

    #[test]
    fn test_reassemble_converts_month_index() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::all());
        let state = draft(2024, 11, 25, 0, 0);
        assert_eq!(state.reassemble(&date(2024, 1, 1), &c), date(2024, 12, 25));
    }

    #[test]
    fn test_reassemble_invalid_calendar_date_falls_back_to_live() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::all());
        let live = at(2024, 1, 31, 8, 0);
        let state = draft(2023, 1, 30, 8, 0);
        assert_eq!(state.reassemble(&live, &c), live);
    }

    #[test]
    fn test_reassemble_takes_excluded_groups_from_live() {
        let c = constraints(DateBounds::unbounded(), FieldInclusion::time_only());
        let live = at(2024, 7, 4, 8, 0);
        let state = draft(1999, 0, 1, 21, 15);
        assert_eq!(state.reassemble(&live, &c), at(2024, 7, 4, 21, 15));
    }

    #[test]
    fn test_reassemble_stays_within_bounds() {
        let b = bounds(at(2024, 1, 15, 9, 30), at(2024, 1, 15, 9, 45));
        let c = constraints(b, FieldInclusion::all());
        let live = at(2024, 1, 15, 9, 40);

        for state in [
            draft(2024, 0, 15, 9, 0),
            draft(2024, 0, 15, 23, 59),
            draft(1900, 0, 1, 0, 0),
            draft(2100, 11, 31, 23, 59),
            draft(2024, 0, 40, 99, 99),
        ] {
            let result = state.reassemble(&live, &c);
            assert!(b.contains(&result), "{result} escaped {b}");
        }
    }

    #[test]
    fn test_composer_open_does_not_write_and_clamps() {
        let b = bounds(date(2024, 1, 1), date(2024, 12, 31));
        let input = date(2023, 6, 1);
        let composer = DateComposer::open(&input, constraints(b, FieldInclusion::all()));
        assert!(!composer.state().is_initializing());
        assert_eq!(composer.state().year, 2024);
        assert_eq!(input, date(2023, 6, 1));
    }

    #[test]
    fn test_composer_edits_write_back() {
        let b = bounds(date(2024, 1, 1), at(2024, 12, 31, 23, 59));
        let mut input = at(2024, 3, 31, 10, 0);
        let mut composer = DateComposer::open(&input, constraints(b, FieldInclusion::all()));

        composer.set_month(&mut input, month(4));
        assert_eq!(input, at(2024, 4, 30, 10, 0), "day clamps to April's length");

        composer.set_hour(&mut input, 17);
        composer.set_minute(&mut input, 45);
        assert_eq!(input, at(2024, 4, 30, 17, 45));

        composer.set_year(&mut input, 2030);
        assert_eq!(input.year(), 2024);
        assert_eq!(composer.state().year, 2024);

        composer.set_day(&mut input, 2);
        assert_eq!(input, at(2024, 4, 2, 17, 45));
    }

    #[test]
    fn test_composer_ranges_track_draft() {
        let b = bounds(at(2024, 1, 15, 9, 30), at(2024, 1, 15, 9, 45));
        let mut input = at(2024, 1, 15, 9, 40);
        let mut composer = DateComposer::open(&input, constraints(b, FieldInclusion::all()));

        assert_eq!(composer.allowed_years(), 2024..=2024);
        assert_eq!(composer.allowed_months(), 0..=0);
        assert_eq!(composer.allowed_days(), 15..=15);
        assert_eq!(composer.allowed_hours(), 9..=9);
        assert_eq!(composer.allowed_minutes(), 30..=45);

        composer.set_minute(&mut input, 10);
        assert_eq!(input, at(2024, 1, 15, 9, 30));
    }

    #[test]
    fn test_composer_inverted_bounds_never_panics() {
        let b = bounds(date(2024, 6, 10), date(2024, 6, 5));
        let mut input = date(2024, 6, 7);
        let mut composer = DateComposer::open(&input, constraints(b, FieldInclusion::all()));
        assert_eq!(composer.allowed_days(), 1..=1);

        composer.set_day(&mut input, 8);
        assert_eq!(composer.state().day, 1);
        assert_eq!(input, date(2024, 6, 10));
    }

    #[test]
    fn test_composer_ignores_edits_while_initializing() {
        let mut input = date(2024, 1, 1);
        let mut composer = DateComposer {
            constraints: constraints(DateBounds::unbounded(), FieldInclusion::all()),
            state:       EditState::initialize(&input),
        };
        composer.set_day(&mut input, 20);
        assert_eq!(composer.state().day, 20);
        assert_eq!(input, date(2024, 1, 1));
    }

    #[test]
    fn test_constraints_deserialize_defaults() {
        let c: Constraints = serde_json::from_str(
            r#"{"bounds": "2024-01-01/2024-12-31", "inclusion": {"include_time": false}, "reference_year": 2026}"#,
        )
        .unwrap();
        assert_eq!(c.bounds, bounds(date(2024, 1, 1), date(2024, 12, 31)));
        assert_eq!(c.inclusion, FieldInclusion::date_only());
        assert_eq!(c.reference_year, 2026);

        let c: Constraints = serde_json::from_str("{}").unwrap();
        assert!(c.bounds.is_unbounded());
        assert_eq!(c.inclusion, FieldInclusion::all());
        assert_eq!(c.reference_year, current_year());
    }
}
