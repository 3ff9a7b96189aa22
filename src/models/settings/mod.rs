// Settings module
// User-configurable appearance and locale of the picker

use serde::{Deserialize, Serialize};

/// Picker configuration, stored as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Locale tag used for weekday and month labels (e.g. "en_US", "de-DE").
    pub locale: String,
    pub card_width: f32,
    pub card_spacing: f32,
    pub card_color: String,
    pub card_text_color: String,
    pub selected_card_color: String,
    pub selected_text_color: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            card_width: 52.0,
            card_spacing: 4.0,
            card_color: "#FFFFFF".to_string(),
            card_text_color: "#000000".to_string(),
            selected_card_color: "#000000".to_string(),
            selected_text_color: "#FFFFFF".to_string(),
        }
    }
}

impl PickerSettings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), String> {
        if self.locale.trim().is_empty() {
            return Err("Locale cannot be empty".to_string());
        }

        if !(16.0..=400.0).contains(&self.card_width) {
            return Err("Card width must be between 16 and 400".to_string());
        }

        if !(0.0..=64.0).contains(&self.card_spacing) {
            return Err("Card spacing must be between 0 and 64".to_string());
        }

        for color in [
            &self.card_color,
            &self.card_text_color,
            &self.selected_card_color,
            &self.selected_text_color,
        ] {
            if !color.starts_with('#') || color.len() != 7 {
                return Err(format!("Color '{}' must be in hex format (#RRGGBB)", color));
            }
        }

        Ok(())
    }
}
