// Error types
// Validation failures raised by the calendar core

use thiserror::Error;

/// Errors reported by calendar math and state restoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("month {0} is outside 1-12")]
    InvalidMonth(u32),

    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("cannot restore selection: {0}")]
    InvalidDateTuple(String),
}

pub type PickerResult<T> = Result<T, PickerError>;
