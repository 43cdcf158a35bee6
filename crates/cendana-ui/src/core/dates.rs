//! Calendar-date helpers.

use chrono::NaiveDateTime;

/// Whole days from `a` to `b`, ignoring time of day.
///
/// Positive when `b` is later, negative when earlier; callers wanting the
/// magnitude take `abs()`.
#[must_use]
pub fn day_span(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b.date() - a.date()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn span_is_signed() {
        assert_eq!(day_span(at(2023, 6, 5, 0), at(2023, 6, 10, 0)), 5);
        assert_eq!(day_span(at(2023, 6, 10, 0), at(2023, 6, 5, 0)), -5);
    }

    #[test]
    fn time_of_day_is_discarded() {
        assert_eq!(day_span(at(2023, 6, 5, 23), at(2023, 6, 6, 0)), 1);
        assert_eq!(day_span(at(2023, 6, 5, 0), at(2023, 6, 5, 23)), 0);
    }

    #[test]
    fn spans_cross_month_and_year_boundaries() {
        assert_eq!(day_span(at(2023, 12, 31, 12), at(2024, 1, 1, 1)), 1);
        assert_eq!(day_span(at(2023, 1, 31, 0), at(2023, 3, 1, 0)), 29);
    }
}
