mod app;
pub mod date_picker;
pub mod theme;

pub use app::DatePickerApp;
