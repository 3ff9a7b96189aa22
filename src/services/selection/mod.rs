//! Selection state for the horizontal date picker.
//!
//! Holds the selected date, the edge-triggered auto-scroll flag and the
//! visible range reported by the renderer. Month and year navigation clamp
//! the day to the length of the target month.

use chrono::{Local, NaiveDate};

use crate::models::calendar_date::CalendarDate;
use crate::utils::date::{days_in_month, shift_month, shift_year};

/// Equality compares the visible range too. The range is renderer
/// feedback and is not part of a saved tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: CalendarDate,
    pending_auto_scroll: bool,
    first_visible: Option<CalendarDate>,
    last_visible: Option<CalendarDate>,
}

impl SelectionState {
    /// New state selecting `date`. A fresh picker scrolls to its selection.
    pub fn new(date: CalendarDate) -> Self {
        Self::with_pending_scroll(date, true)
    }

    pub fn with_pending_scroll(date: CalendarDate, pending_auto_scroll: bool) -> Self {
        Self {
            selected: date,
            pending_auto_scroll,
            first_visible: None,
            last_visible: None,
        }
    }

    /// Selects today's date in the local time zone.
    pub fn from_today() -> Self {
        Self::new(CalendarDate::from(Local::now().date_naive()))
    }

    pub fn selected_date(&self) -> CalendarDate {
        self.selected
    }

    pub fn year(&self) -> i32 {
        self.selected.year()
    }

    pub fn month(&self) -> u32 {
        self.selected.month()
    }

    pub fn day(&self) -> u32 {
        self.selected.day()
    }

    pub fn pending_auto_scroll(&self) -> bool {
        self.pending_auto_scroll
    }

    /// The date the renderer should scroll to, while a request is pending.
    pub fn pending_scroll_target(&self) -> Option<CalendarDate> {
        self.pending_auto_scroll.then_some(self.selected)
    }

    pub fn first_visible_date(&self) -> Option<CalendarDate> {
        self.first_visible
    }

    pub fn last_visible_date(&self) -> Option<CalendarDate> {
        self.last_visible
    }

    pub fn increment_month(&mut self) {
        self.shift(|date| shift_month(date, 1), "next month");
    }

    pub fn decrement_month(&mut self) {
        self.shift(|date| shift_month(date, -1), "previous month");
    }

    pub fn increment_year(&mut self) {
        self.shift(|date| shift_year(date, 1), "next year");
    }

    pub fn decrement_year(&mut self) {
        self.shift(|date| shift_year(date, -1), "previous year");
    }

    /// Select a day of the current month. Out-of-range days are clamped
    /// to the first or last day of the month.
    pub fn set_selected_day(&mut self, day: u32) {
        let last = days_in_month(self.year(), self.month()).unwrap_or(28);
        let clamped = day.clamp(1, last);
        if clamped != day {
            log::debug!("Clamped selected day {} to {}", day, clamped);
        }
        if let Ok(date) = CalendarDate::new(self.year(), self.month(), clamped) {
            self.selected = date;
        }
    }

    /// Replace the selection and ask the renderer to scroll to it.
    pub fn smooth_scroll_to_date(&mut self, date: CalendarDate) {
        log::debug!("Scroll requested to {}", date);
        self.selected = date;
        self.pending_auto_scroll = true;
    }

    /// Acknowledge a completed scroll. Returns `false` when no scroll was pending.
    pub fn on_scroll_completed(&mut self) -> bool {
        if !self.pending_auto_scroll {
            log::debug!("Scroll acknowledgement without a pending request ignored");
            return false;
        }
        self.pending_auto_scroll = false;
        true
    }

    pub fn set_visible_dates(&mut self, first: Option<CalendarDate>, last: Option<CalendarDate>) {
        self.first_visible = first;
        self.last_visible = last;
    }

    fn shift(&mut self, step: impl FnOnce(NaiveDate) -> Option<NaiveDate>, label: &str) {
        match step(self.selected.as_naive()) {
            Some(date) => {
                self.selected = CalendarDate::from(date);
                log::debug!("Moved to {}: {}", label, self.selected);
            }
            None => log::warn!(
                "Cannot move to {} from {}: outside the supported date range",
                label,
                self.selected
            ),
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::from_today()
    }
}
