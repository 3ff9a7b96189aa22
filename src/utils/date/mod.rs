// Date utility functions
// Gregorian month arithmetic shared by the selection state and calendar math

use chrono::{Datelike, NaiveDate};

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` when the month is not 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month.
///
/// Returns `None` if the result falls outside chrono's representable range.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let total_months = date.year() as i64 * 12 + (date.month() as i64 - 1) + delta as i64;
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month)?;
    NaiveDate::from_ymd_opt(new_year, new_month, date.day().min(max_day))
}

/// Shift a date by whole years. Feb 29 lands on Feb 28 in common years.
pub fn shift_year(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    shift_month(date, delta.checked_mul(12)?)
}
