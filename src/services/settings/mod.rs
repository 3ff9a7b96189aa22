// Settings service
// Loads and stores picker settings as TOML

mod service;

pub use service::{default_settings_path, SettingsService};
