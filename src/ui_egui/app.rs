//! Demo application hosting the horizontal date picker.
//!
//! Owns the controller, restores the selection saved by the previous run
//! and writes it back whenever it changes.

use std::path::PathBuf;

use chrono::Local;

use super::date_picker::show_date_picker;
use super::theme::PickerStyle;
use crate::models::calendar_date::CalendarDate;
use crate::models::settings::PickerSettings;
use crate::services::controller::{DatePickerController, PickerInput};
use crate::services::persistence::{
    default_snapshot_path, load_snapshot, save_snapshot, SavedSelection,
};
use crate::services::selection::SelectionState;
use crate::services::settings::{default_settings_path, SettingsService};

pub struct DatePickerApp {
    controller: DatePickerController,
    style: PickerStyle,
    snapshot_path: Option<PathBuf>,
    /// Last tuple written to disk, to skip redundant writes
    last_saved: Option<SavedSelection>,
}

impl eframe::App for DatePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pick a date");
            ui.add_space(8.0);

            let mut inputs = show_date_picker(ui, &self.controller, &self.style);

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(format!("Selected: {}", self.controller.state().selected_date()));
                if ui.button("Today").clicked() {
                    let today = CalendarDate::from(Local::now().date_naive());
                    inputs.push(PickerInput::JumpTo(today));
                }
            });

            for input in inputs {
                self.controller.handle(input);
            }
        });

        self.persist_if_changed();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_if_changed();
    }
}

impl DatePickerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings();
        log::info!("Loaded settings: locale={}", settings.locale);

        let snapshot_path = default_snapshot_path();
        let state = snapshot_path
            .as_deref()
            .and_then(|path| match load_snapshot(path) {
                Ok(state) => state,
                Err(err) => {
                    log::warn!("Discarding saved selection: {:#}", err);
                    None
                }
            })
            .unwrap_or_else(SelectionState::from_today);
        log::info!("Starting with {} selected", state.selected_date());

        Self::with_state(state, &settings, snapshot_path)
    }

    pub fn with_state(
        state: SelectionState,
        settings: &PickerSettings,
        snapshot_path: Option<PathBuf>,
    ) -> Self {
        let last_saved = Some(state.save());
        let mut controller = DatePickerController::new(state, &settings.locale);
        controller.subscribe(Box::new(|date: CalendarDate| {
            log::info!("Selected {}", date);
        }));

        Self {
            controller,
            style: PickerStyle::from_settings(settings),
            snapshot_path,
            last_saved,
        }
    }

    fn persist_if_changed(&mut self) {
        let Some(path) = self.snapshot_path.as_deref() else {
            return;
        };

        let saved = self.controller.state().save();
        if self.last_saved.as_ref() == Some(&saved) {
            return;
        }

        match save_snapshot(path, self.controller.state()) {
            Ok(()) => self.last_saved = Some(saved),
            Err(err) => log::error!("Failed to save selection: {:#}", err),
        }
    }
}

fn load_settings() -> PickerSettings {
    match default_settings_path() {
        Some(path) => SettingsService::new(path).get_or_default(),
        None => {
            log::warn!("No config directory available, using default settings");
            PickerSettings::default()
        }
    }
}
