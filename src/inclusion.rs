use serde::{Deserialize, Serialize};

/// Which sub-field groups of a date the user may edit.
///
/// Excluded groups are never written by the composer; they always mirror
/// the live value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldInclusion {
    /// Month and day
    pub include_date: bool,
    pub include_year: bool,
    /// Hour and minute
    pub include_time: bool,
}

impl FieldInclusion {
    pub const fn all() -> Self {
        Self {
            include_date: true,
            include_year: true,
            include_time: true,
        }
    }

    /// Calendar date with year, no time of day
    pub const fn date_only() -> Self {
        Self {
            include_time: false,
            ..Self::all()
        }
    }

    /// Time of day only
    pub const fn time_only() -> Self {
        Self {
            include_date: false,
            include_year: false,
            include_time: true,
        }
    }
}

impl Default for FieldInclusion {
    fn default() -> Self {
        Self::all()
    }
}
