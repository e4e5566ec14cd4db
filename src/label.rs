//! Plain-text renderings of a date for a collapsed picker.

use crate::{CompositeDate, FieldInclusion};

/// Zero-padded two digit field, as shown for hours and minutes
pub fn two_digit(value: u32) -> String {
    format!("{value:02}")
}

/// One-line summary of `date` showing only the included field groups,
/// e.g. `"January 15, 2024 09:30"`.
pub fn summary(date: &CompositeDate, inclusion: FieldInclusion) -> String {
    let mut parts = Vec::with_capacity(4);

    if inclusion.include_date {
        parts.push(date.month_index().name().to_owned());
        let separator = if inclusion.include_year { "," } else { "" };
        parts.push(format!("{}{separator}", date.day()));
    }
    if inclusion.include_year {
        parts.push(date.year().to_string());
    }
    if inclusion.include_time {
        parts.push(format!("{}:{}", two_digit(date.hour()), two_digit(date.minute())));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::at;

    #[test]
    fn test_two_digit() {
        assert_eq!(two_digit(0), "00");
        assert_eq!(two_digit(7), "07");
        assert_eq!(two_digit(45), "45");
    }

    #[test]
    fn test_summary_cases() {
        struct TestCase {
            inclusion: FieldInclusion,
            expected:  &'static str,
        }

        let value = at(2024, 1, 15, 9, 5);
        let cases = [
            TestCase {
                inclusion: FieldInclusion::all(),
                expected:  "January 15, 2024 09:05",
            },
            TestCase {
                inclusion: FieldInclusion::date_only(),
                expected:  "January 15, 2024",
            },
            TestCase {
                inclusion: FieldInclusion::time_only(),
                expected:  "09:05",
            },
            TestCase {
                inclusion: FieldInclusion {
                    include_date: true,
                    include_year: false,
                    include_time: false,
                },
                expected:  "January 15",
            },
            TestCase {
                inclusion: FieldInclusion {
                    include_date: false,
                    include_year: false,
                    include_time: false,
                },
                expected:  "",
            },
        ];

        for case in &cases {
            assert_eq!(summary(&value, case.inclusion), case.expected, "{:?}", case.inclusion);
        }
    }
}
