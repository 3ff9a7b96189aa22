//! Card colours and sizes for the egui picker.
//!
//! Built from the persisted [`PickerSettings`]; invalid colours fall back to
//! white cards with a black selection.

use egui::Color32;

use crate::models::settings::PickerSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    pub card_background: Color32,
    pub card_text: Color32,
    pub selected_background: Color32,
    pub selected_text: Color32,
    /// Thin outline around every day card and navigation button
    pub card_border: Color32,
    pub card_width: f32,
    pub card_spacing: f32,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            card_background: Color32::WHITE,
            card_text: Color32::BLACK,
            selected_background: Color32::BLACK,
            selected_text: Color32::WHITE,
            card_border: Color32::from_black_alpha(26),
            card_width: 52.0,
            card_spacing: 4.0,
        }
    }
}

impl PickerStyle {
    pub fn from_settings(settings: &PickerSettings) -> Self {
        let defaults = Self::default();
        let color = |hex: &str, fallback: Color32| match Self::hex_to_color(hex) {
            Ok(color) => color,
            Err(err) => {
                log::warn!("Ignoring color '{}': {}", hex, err);
                fallback
            }
        };

        Self {
            card_background: color(&settings.card_color, defaults.card_background),
            card_text: color(&settings.card_text_color, defaults.card_text),
            selected_background: color(&settings.selected_card_color, defaults.selected_background),
            selected_text: color(&settings.selected_text_color, defaults.selected_text),
            card_border: defaults.card_border,
            card_width: settings.card_width,
            card_spacing: settings.card_spacing,
        }
    }

    /// Background and text colour for a card.
    pub fn card_colors(&self, is_selected: bool) -> (Color32, Color32) {
        if is_selected {
            (self.selected_background, self.selected_text)
        } else {
            (self.card_background, self.card_text)
        }
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        let result = PickerStyle::hex_to_color("#FF8040").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 128, 64));

        let result2 = PickerStyle::hex_to_color("FF8040").unwrap();
        assert_eq!(result2, Color32::from_rgb(255, 128, 64));

        assert!(PickerStyle::hex_to_color("#FFF").is_err());
        assert!(PickerStyle::hex_to_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_from_default_settings_matches_default_style() {
        let style = PickerStyle::from_settings(&PickerSettings::default());
        assert_eq!(style, PickerStyle::default());
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let settings = PickerSettings {
            selected_card_color: "navy".to_string(),
            card_width: 60.0,
            ..Default::default()
        };
        let style = PickerStyle::from_settings(&settings);
        assert_eq!(style.selected_background, Color32::BLACK);
        assert_eq!(style.card_width, 60.0);
    }

    #[test]
    fn test_card_colors() {
        let style = PickerStyle::default();
        assert_eq!(style.card_colors(true), (Color32::BLACK, Color32::WHITE));
        assert_eq!(style.card_colors(false), (Color32::WHITE, Color32::BLACK));
    }
}
