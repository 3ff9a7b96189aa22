//! Horizontal date picker widget.
//!
//! Draws the month/year navigator and the scrollable row of day cards.
//! Rendering is read-only: user interaction is returned as
//! [`PickerInput`]s for the caller to feed back into the controller.

use crate::models::calendar_date::CalendarDate;
use crate::models::day_descriptor::DayDescriptor;
use crate::services::controller::{DatePickerController, PickerInput};

use super::theme::PickerStyle;

const CARD_PADDING: f32 = 12.0;
const CARD_ROUNDING: f32 = 8.0;
const DAY_ROW_ID: &str = "horizontal_date_picker_days";

/// Render the picker and collect the inputs produced this frame.
pub fn show_date_picker(
    ui: &mut egui::Ui,
    controller: &DatePickerController,
    style: &PickerStyle,
) -> Vec<PickerInput> {
    let mut inputs = Vec::new();
    ui.vertical(|ui| {
        render_header(ui, controller, &mut inputs);
        ui.add_space(8.0);
        render_day_row(ui, controller, style, &mut inputs);
    });
    inputs
}

/// Month/Year header with year and month navigation arrows.
fn render_header(
    ui: &mut egui::Ui,
    controller: &DatePickerController,
    inputs: &mut Vec<PickerInput>,
) {
    ui.horizontal(|ui| {
        if ui
            .small_button("◀◀")
            .on_hover_text("Previous year")
            .clicked()
        {
            inputs.push(PickerInput::PreviousYear);
        }
        if ui
            .small_button("◀")
            .on_hover_text("Previous month")
            .clicked()
        {
            inputs.push(PickerInput::PreviousMonth);
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new(controller.header_label()).strong());
        ui.add_space(12.0);

        if ui
            .small_button("▶")
            .on_hover_text("Next month")
            .clicked()
        {
            inputs.push(PickerInput::NextMonth);
        }
        if ui
            .small_button("▶▶")
            .on_hover_text("Next year")
            .clicked()
        {
            inputs.push(PickerInput::NextYear);
        }
    });
}

fn render_day_row(
    ui: &mut egui::Ui,
    controller: &DatePickerController,
    style: &PickerStyle,
    inputs: &mut Vec<PickerInput>,
) {
    let days = controller.days();
    let state = controller.state();
    let scroll_target = state.pending_scroll_target();
    let mut first_visible: Option<CalendarDate> = None;
    let mut last_visible: Option<CalendarDate> = None;

    // Month the row was last positioned for; a new month opens at the selected day
    let positioned_id = egui::Id::new(DAY_ROW_ID).with("positioned_month");
    let shown_month = (state.year(), state.month());
    let positioned = ui.data(|d| d.get_temp::<(i32, u32)>(positioned_id)) == Some(shown_month);
    ui.data_mut(|d| d.insert_temp(positioned_id, shown_month));

    let mut scroll_area = egui::ScrollArea::horizontal()
        .id_source(DAY_ROW_ID)
        .auto_shrink([false, true]);
    if !positioned && scroll_target.is_none() {
        let offset = initial_offset(controller.initial_scroll_index(), ui.available_width(), style);
        scroll_area = scroll_area.horizontal_scroll_offset(offset);
    }

    scroll_area.show(ui, |ui| {
        let viewport = ui.clip_rect();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = style.card_spacing;

            for day in &days {
                let response = render_day_card(ui, day, style);

                if response.clicked() {
                    inputs.push(PickerInput::Tap(day.date.day()));
                }

                if scroll_target == Some(day.date) {
                    response.scroll_to_me(Some(egui::Align::Center));
                    inputs.push(PickerInput::ScrollCompleted);
                }

                if viewport.intersects(response.rect) {
                    if first_visible.is_none() {
                        first_visible = Some(day.date);
                    }
                    last_visible = Some(day.date);
                }
            }
        });
    });

    if (first_visible, last_visible) != (state.first_visible_date(), state.last_visible_date()) {
        inputs.push(PickerInput::VisibleRange(first_visible, last_visible));
    }
}

/// Horizontal offset that centres card `index` in a viewport of the given width.
fn initial_offset(index: usize, viewport_width: f32, style: &PickerStyle) -> f32 {
    let card_start = index as f32 * (style.card_width + style.card_spacing);
    (card_start - (viewport_width - style.card_width) / 2.0).max(0.0)
}

fn render_day_card(ui: &mut egui::Ui, day: &DayDescriptor, style: &PickerStyle) -> egui::Response {
    let (background, text) = style.card_colors(day.is_selected);
    let inner_width = (style.card_width - 2.0 * CARD_PADDING).max(0.0);

    let frame = egui::Frame::none()
        .fill(background)
        .stroke(egui::Stroke::new(1.0, style.card_border))
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_PADDING));

    frame
        .show(ui, |ui| {
            ui.set_width(inner_width);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&day.weekday_label).color(text));
                ui.add_space(7.0);
                let number = egui::RichText::new(day.day_label()).color(text);
                ui.label(if day.is_selected { number.strong() } else { number });
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
