//! Input dispatch for the date picker.
//!
//! The renderer forwards discrete inputs (day taps, navigation buttons,
//! scroll acknowledgements) to the controller. After each input the
//! renderer re-derives its view from [`DatePickerController::days`];
//! subscribed observers are told explicitly when the selected date changed.

use chrono::Locale;

use crate::models::calendar_date::CalendarDate;
use crate::models::day_descriptor::DayDescriptor;
use crate::services::calendar::{month_label_in, resolve_locale};
use crate::services::projection::{initial_scroll_index, project_in};
use crate::services::selection::SelectionState;

/// Receives the new selected date after every change.
pub trait SelectionObserver {
    fn selection_changed(&mut self, date: CalendarDate);
}

impl<F: FnMut(CalendarDate)> SelectionObserver for F {
    fn selection_changed(&mut self, date: CalendarDate) {
        self(date)
    }
}

/// Inputs the rendering layer sends to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerInput {
    /// A day card was tapped
    Tap(u32),
    NextMonth,
    PreviousMonth,
    NextYear,
    PreviousYear,
    /// Programmatic jump that should scroll the row
    JumpTo(CalendarDate),
    /// The renderer finished honoring a pending scroll
    ScrollCompleted,
    VisibleRange(Option<CalendarDate>, Option<CalendarDate>),
}

pub struct DatePickerController {
    state: SelectionState,
    /// Resolved once so per-frame labels skip tag parsing
    locale: Locale,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl DatePickerController {
    pub fn new(state: SelectionState, locale_tag: &str) -> Self {
        Self {
            state,
            locale: resolve_locale(locale_tag),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply one input. Returns `true` if the selected date changed.
    pub fn handle(&mut self, input: PickerInput) -> bool {
        let before = self.state.selected_date();

        match input {
            PickerInput::Tap(day) => self.state.set_selected_day(day),
            PickerInput::NextMonth => self.state.increment_month(),
            PickerInput::PreviousMonth => self.state.decrement_month(),
            PickerInput::NextYear => self.state.increment_year(),
            PickerInput::PreviousYear => self.state.decrement_year(),
            PickerInput::JumpTo(date) => self.state.smooth_scroll_to_date(date),
            PickerInput::ScrollCompleted => {
                self.state.on_scroll_completed();
            }
            PickerInput::VisibleRange(first, last) => self.state.set_visible_dates(first, last),
        }

        let after = self.state.selected_date();
        if after == before {
            return false;
        }

        for observer in &mut self.observers {
            observer.selection_changed(after);
        }
        true
    }

    /// Day cards for the current month.
    pub fn days(&self) -> Vec<DayDescriptor> {
        project_in(&self.state, self.locale)
    }

    pub fn initial_scroll_index(&self) -> usize {
        initial_scroll_index(&self.state)
    }

    /// Month and year shown between the navigation buttons, e.g. "February 2024".
    pub fn header_label(&self) -> String {
        let month = month_label_in(self.state.month(), self.locale)
            .unwrap_or_else(|_| self.state.month().to_string());
        format!("{} {}", month, self.state.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(y: i32, m: u32, d: u32) -> DatePickerController {
        let state = SelectionState::new(CalendarDate::new(y, m, d).unwrap());
        DatePickerController::new(state, "en_US")
    }

    #[test]
    fn test_navigation_inputs() {
        let mut c = controller(2023, 12, 15);
        assert!(c.handle(PickerInput::NextMonth));
        assert_eq!(c.header_label(), "January 2024");
        assert!(c.handle(PickerInput::PreviousYear));
        assert_eq!(c.header_label(), "January 2023");
        assert!(c.handle(PickerInput::Tap(3)));
        assert_eq!(c.state().day(), 3);
    }

    #[test]
    fn test_closure_observer_sees_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut c = controller(2024, 1, 31);
        c.subscribe(Box::new(move |date: CalendarDate| sink.borrow_mut().push(date)));

        c.handle(PickerInput::NextMonth);
        c.handle(PickerInput::ScrollCompleted);
        c.handle(PickerInput::Tap(29));

        assert_eq!(*seen.borrow(), vec![CalendarDate::new(2024, 2, 29).unwrap()]);
    }

    #[test]
    fn test_jump_sets_pending_scroll() {
        let mut c = controller(2024, 1, 1);
        c.handle(PickerInput::ScrollCompleted);
        assert!(!c.state().pending_auto_scroll());

        let target = CalendarDate::new(2024, 8, 12).unwrap();
        assert!(c.handle(PickerInput::JumpTo(target)));
        assert_eq!(c.state().pending_scroll_target(), Some(target));
        assert_eq!(c.initial_scroll_index(), 11);
    }

    #[test]
    fn test_unknown_locale_renders_in_english() {
        let state = SelectionState::new(CalendarDate::new(2024, 1, 15).unwrap());
        let c = DatePickerController::new(state, "xx_YY");

        assert_eq!(c.header_label(), "January 2024");
        let days = c.days();
        assert_eq!(days.len(), 31);
        // Jan 1, 2024 was a Monday
        assert_eq!(days[0].weekday_label, "Mon");
    }
}
