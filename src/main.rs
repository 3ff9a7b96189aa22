// Horizontal Date Picker
// Demo entry point

use horizontal_date_picker::ui_egui::DatePickerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Horizontal Date Picker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 220.0])
            .with_min_inner_size([320.0, 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Horizontal Date Picker",
        options,
        Box::new(|cc| Ok(Box::new(DatePickerApp::new(cc)))),
    )
}
