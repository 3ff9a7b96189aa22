// Day descriptor model
// Render-ready record for one day card

use super::calendar_date::CalendarDate;

/// A date paired with its selection flag and weekday label.
///
/// Derived from the selection state on every render pass and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDescriptor {
    pub date: CalendarDate,
    pub is_selected: bool,
    pub weekday_label: String,
}

impl DayDescriptor {
    /// Text shown under the weekday label.
    pub fn day_label(&self) -> String {
        self.date.day().to_string()
    }
}
