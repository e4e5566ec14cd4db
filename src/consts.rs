/// First 0-based month index (January)
pub const FIRST_MONTH_INDEX: u32 = 0;
/// Last 0-based month index (December)
pub const LAST_MONTH_INDEX: u32 = 11;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;
/// Upper day offered when the date is not editable
pub const MAX_DAY: u32 = 31;

pub const MIN_HOUR: u32 = 0;
pub const MAX_HOUR: u32 = 23;
pub const MIN_MINUTE: u32 = 0;
pub const MAX_MINUTE: u32 = 59;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names, indexed by 0-based month index
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Years offered on either side of the reference year when no real bound is set
pub const UNBOUNDED_YEAR_SPAN: i32 = 20;

/// Canonical text form of a `CompositeDate`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Accepted text form without seconds
pub const DATE_TIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Accepted date-only text form (midnight)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
