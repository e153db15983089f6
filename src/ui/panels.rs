use eframe::egui::{self, Align, Layout, Rect, RichText, Ui};

use crate::color;
use crate::state::{AppState, SegmentType};

// ---------------------------------------------------------------------------
// Header and footer
// ---------------------------------------------------------------------------

/// Render the report header bar.
pub fn header(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("Aircraft Interiors Market").size(20.0).strong());
            ui.label(
                RichText::new("Market Intelligence Dashboard · 2024–2034 Outlook")
                    .size(12.0)
                    .color(color::TEXT_MUTED),
            );
        });
    });
    ui.add_space(6.0);
}

/// Render the footer note.
pub fn footer(ui: &mut Ui) {
    ui.add_space(16.0);
    ui.separator();
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Aircraft Interiors Market Research Report")
                    .size(11.5)
                    .color(color::TEXT_MUTED),
            );
            ui.label(
                RichText::new("All values in US$ Millions unless otherwise specified")
                    .size(10.5)
                    .color(color::TEXT_MUTED.gamma_multiply(0.7)),
            );
        });
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Controls row – breakdown tabs and year selector
// ---------------------------------------------------------------------------

/// Render the segment-type tabs and the year selector.
pub fn controls_row(ui: &mut Ui, state: &mut AppState) {
    // Clone the year list so we can mutate state inside the combo closure.
    let years = state.dataset.years.clone();

    ui.horizontal(|ui| {
        for segment_type in SegmentType::ALL {
            if ui
                .selectable_label(state.segment_type == segment_type, segment_type.label())
                .clicked()
            {
                state.set_segment_type(segment_type);
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            egui::ComboBox::from_id_salt("year_select")
                .selected_text(state.selected_year.to_string())
                .width(90.0)
                .show_ui(ui, |ui| {
                    for &year in &years {
                        if ui
                            .selectable_label(state.selected_year == year, year.to_string())
                            .clicked()
                        {
                            state.set_year(year);
                        }
                    }
                });
            ui.label(RichText::new("Select Year").size(12.0).color(color::TEXT_MUTED));
        });
    });
}

// ---------------------------------------------------------------------------
// Chart card – shared titled frame with a PNG export button
// ---------------------------------------------------------------------------

/// Where a card landed on screen and whether its export button was clicked
/// this frame. The rect is what the export flow crops the screenshot to.
pub struct CardResponse {
    pub rect: Rect,
    pub export_clicked: bool,
}

/// Render a titled card and its body, returning the card's response.
pub fn chart_card(
    ui: &mut Ui,
    title: &str,
    subtitle: &str,
    add_contents: impl FnOnce(&mut Ui),
) -> CardResponse {
    let mut export_clicked = false;

    let response = egui::Frame::group(ui.style())
        .fill(color::CARD_FILL)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    if !subtitle.is_empty() {
                        ui.label(RichText::new(subtitle).size(11.5).color(color::TEXT_MUTED));
                    }
                });
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    export_clicked = ui
                        .small_button("PNG")
                        .on_hover_text("Export this card as a PNG image")
                        .clicked();
                });
            });
            ui.add_space(8.0);
            add_contents(ui);
        });

    CardResponse {
        rect: response.response.rect,
        export_clicked,
    }
}
