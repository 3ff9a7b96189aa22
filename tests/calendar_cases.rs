// Parameterized tests for month lengths, rollover and clamping

use horizontal_date_picker::error::PickerError;
use horizontal_date_picker::models::calendar_date::CalendarDate;
use horizontal_date_picker::services::calendar::{days_of_month, weekday_label};
use horizontal_date_picker::services::selection::SelectionState;
use test_case::test_case;

#[test_case(2000, 2, 29 ; "century divisible by 400 is leap")]
#[test_case(1900, 2, 28 ; "century not divisible by 400 is common")]
#[test_case(2024, 2, 29 ; "year divisible by 4 is leap")]
#[test_case(2023, 2, 28 ; "common february")]
#[test_case(2023, 4, 30 ; "april")]
#[test_case(2023, 12, 31 ; "december")]
fn test_month_length(year: i32, month: u32, expected: usize) {
    assert_eq!(days_of_month(year, month).unwrap().len(), expected);
}

#[test_case(0 ; "zero")]
#[test_case(13 ; "thirteen")]
fn test_invalid_month(month: u32) {
    assert_eq!(days_of_month(2024, month), Err(PickerError::InvalidMonth(month)));
}

#[test_case((2023, 12, 15), (2024, 1, 15) ; "december rolls into next year")]
#[test_case((2024, 1, 31), (2024, 2, 29) ; "january 31 clamps to leap day")]
#[test_case((2023, 1, 31), (2023, 2, 28) ; "january 31 clamps to february 28")]
#[test_case((2024, 3, 31), (2024, 4, 30) ; "march 31 clamps to april 30")]
fn test_increment_month(start: (i32, u32, u32), expected: (i32, u32, u32)) {
    let mut state = SelectionState::new(CalendarDate::new(start.0, start.1, start.2).unwrap());
    state.increment_month();
    assert_eq!((state.year(), state.month(), state.day()), expected);
}

#[test_case((2024, 1, 15), (2023, 12, 15) ; "january rolls back to previous year")]
#[test_case((2024, 3, 31), (2024, 2, 29) ; "march 31 clamps to leap day")]
fn test_decrement_month(start: (i32, u32, u32), expected: (i32, u32, u32)) {
    let mut state = SelectionState::new(CalendarDate::new(start.0, start.1, start.2).unwrap());
    state.decrement_month();
    assert_eq!((state.year(), state.month(), state.day()), expected);
}

#[test_case("en_US", "Mon")]
#[test_case("en", "Mon")]
#[test_case("de_DE", "Mo")]
#[test_case("de", "Mo")]
#[test_case("unknown", "Mon")]
fn test_weekday_label_for_monday(locale: &str, expected: &str) {
    let monday = CalendarDate::new(2024, 1, 1).unwrap();
    assert_eq!(weekday_label(monday, locale), expected);
}
