use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CompositeDate, DateError, RANGE_SEPARATOR, prelude::*};

/// An inclusive `[start, end]` range constraining legal selections.
///
/// `start <= end` is the caller's responsibility. An inverted pair is kept
/// as given so that range computations behave the same way they always
/// have; use [`DateBounds::try_new`] to reject it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateBounds {
    start: CompositeDate,
    end:   CompositeDate,
}

/// Error type for date bounds operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Start date is after end date.
    #[error("Invalid date bounds: start ({start}) is after end ({end})")]
    Inverted { start: CompositeDate, end: CompositeDate },

    /// Error parsing one of the endpoints.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid bounds format.
    #[error("Invalid bounds format: {0}")]
    InvalidFormat(String),
}

impl DateBounds {
    /// Creates bounds without checking their order.
    pub fn new(start: CompositeDate, end: CompositeDate) -> Self {
        if start > end {
            tracing::warn!(%start, %end, "date bounds are inverted; start is after end");
        }
        Self { start, end }
    }

    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::Inverted` if start > end.
    pub fn try_new(start: CompositeDate, end: CompositeDate) -> Result<Self, BoundsError> {
        if start > end {
            return Err(BoundsError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The "no real bound" pair: distant past to distant future
    pub const fn unbounded() -> Self {
        Self {
            start: CompositeDate::DISTANT_PAST,
            end:   CompositeDate::DISTANT_FUTURE,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start == CompositeDate::DISTANT_PAST && self.end == CompositeDate::DISTANT_FUTURE
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Returns the start of the bounds
    pub const fn start(&self) -> CompositeDate {
        self.start
    }

    /// Returns the end of the bounds
    pub const fn end(&self) -> CompositeDate {
        self.end
    }

    pub fn contains(&self, date: &CompositeDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Pulls `date` back into the bounds.
    /// Checks the start first, so an inverted pair resolves to `start` for
    /// anything earlier than it.
    pub fn clamp(&self, date: CompositeDate) -> CompositeDate {
        if date < self.start {
            self.start
        } else if date > self.end {
            self.end
        } else {
            date
        }
    }
}

impl Default for DateBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl FromStr for DateBounds {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(BoundsError::InvalidFormat(format!(
                "No bounds separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    BoundsError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<CompositeDate>()?;
                let end = end_str.trim().parse::<CompositeDate>()?;

                Ok(Self::new(start, end))
            },
            _ => Err(BoundsError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateBounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
