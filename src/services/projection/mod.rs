//! Day-list projection.
//!
//! Turns the selection state into the ordered day descriptors the renderer
//! draws. Only one month is shown at a time, so a card is selected when its
//! day of month matches the selected day.

use chrono::Locale;

use crate::models::day_descriptor::DayDescriptor;
use crate::services::calendar::{day_index, days_of_month, resolve_locale, weekday_label_in};
use crate::services::selection::SelectionState;

pub fn project(state: &SelectionState, locale_tag: &str) -> Vec<DayDescriptor> {
    project_in(state, resolve_locale(locale_tag))
}

/// Like [`project`], for a locale that has already been resolved.
pub fn project_in(state: &SelectionState, locale: Locale) -> Vec<DayDescriptor> {
    // The selected date is always valid, so its month is always in range
    let days = days_of_month(state.year(), state.month()).unwrap_or_default();
    days.into_iter()
        .map(|date| DayDescriptor {
            date,
            is_selected: date.day() == state.day(),
            weekday_label: weekday_label_in(date, locale),
        })
        .collect()
}

/// Index of the selected day in the projected list, used to position the
/// row on first render. Falls back to 0 when the day is past the month end.
pub fn initial_scroll_index(state: &SelectionState) -> usize {
    let index = day_index(state.selected_date());
    match days_of_month(state.year(), state.month()) {
        Ok(days) if index < days.len() => index,
        _ => 0,
    }
}
