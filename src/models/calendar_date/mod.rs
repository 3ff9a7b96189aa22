// Calendar date model
// Immutable year/month/day value shown on a day card

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{PickerError, PickerResult};

/// A validated proleptic Gregorian date.
///
/// The day never exceeds the length of its month. Values are replaced
/// wholesale when the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from an explicit year/month/day triple.
    ///
    /// # Examples
    /// ```
    /// use horizontal_date_picker::models::calendar_date::CalendarDate;
    ///
    /// let leap_day = CalendarDate::new(2024, 2, 29).unwrap();
    /// assert_eq!(leap_day.day(), 29);
    /// assert!(CalendarDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> PickerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PickerError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(PickerError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
