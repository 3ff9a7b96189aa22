// Test fixtures - reusable test data
// Provides consistent dates and states across all test files

#![allow(dead_code)]

use horizontal_date_picker::models::calendar_date::CalendarDate;
use horizontal_date_picker::services::selection::SelectionState;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Dec 15, 2023, the eve of a year rollover
    pub fn mid_december_2023() -> CalendarDate {
        CalendarDate::new(2023, 12, 15).unwrap()
    }

    /// Returns Jan 31, 2024, which has no counterpart in February
    pub fn end_of_january_2024() -> CalendarDate {
        CalendarDate::new(2024, 1, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> CalendarDate {
        CalendarDate::new(2024, 2, 29).unwrap()
    }
}

/// Sample selection states for testing
pub mod states {
    use super::*;

    /// A state whose initial scroll has already been honored
    pub fn settled(date: CalendarDate) -> SelectionState {
        SelectionState::with_pending_scroll(date, false)
    }
}
