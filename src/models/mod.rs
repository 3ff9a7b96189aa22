// Module exports for models

pub mod calendar_date;
pub mod day_descriptor;
pub mod settings;
