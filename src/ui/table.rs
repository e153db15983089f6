use eframe::egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::format;
use crate::project::ComparisonRow;

// ---------------------------------------------------------------------------
// Growth-comparison table
// ---------------------------------------------------------------------------

/// Render the dual-year comparison rows. Row order is the projection's
/// (i.e. the collection's); no sorting is applied here.
pub fn comparison_table(ui: &mut Ui, rows: &[ComparisonRow], start_year: i32, end_year: i32) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0))
        .columns(Column::auto().at_least(96.0), 4)
        .header(26.0, |mut header| {
            header.col(|ui| {
                ui.label(header_text("Segment"));
            });
            header.col(|ui| {
                right_aligned(ui, header_text(&start_year.to_string()));
            });
            header.col(|ui| {
                right_aligned(ui, header_text(&end_year.to_string()));
            });
            header.col(|ui| {
                right_aligned(ui, header_text("CAGR"));
            });
            header.col(|ui| {
                right_aligned(ui, header_text("Total Growth"));
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(24.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(RichText::new(&row.name).strong());
                    });
                    table_row.col(|ui| {
                        right_aligned(
                            ui,
                            RichText::new(format::format_millions(row.start_value))
                                .color(color::TEXT_MUTED),
                        );
                    });
                    table_row.col(|ui| {
                        right_aligned(ui, RichText::new(format::format_millions(row.end_value)));
                    });
                    table_row.col(|ui| {
                        right_aligned(ui, growth_text(row.cagr, 1));
                    });
                    table_row.col(|ui| {
                        right_aligned(ui, growth_text(row.growth, 0));
                    });
                });
            }
        });
}

fn header_text(text: &str) -> RichText {
    RichText::new(text.to_uppercase())
        .size(10.5)
        .color(color::TEXT_MUTED)
}

fn growth_text(value: f64, decimals: usize) -> RichText {
    let text_color = if value >= 0.0 {
        color::POSITIVE
    } else {
        color::NEGATIVE
    };
    RichText::new(format::format_signed_percent(value, decimals))
        .strong()
        .color(text_color)
}

fn right_aligned(ui: &mut Ui, text: RichText) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.label(text);
    });
}
