use eframe::egui::{self, RichText, Ui};

use crate::color;
use crate::format;
use crate::state::KpiSummary;

// ---------------------------------------------------------------------------
// KPI cards row
// ---------------------------------------------------------------------------

/// Render the four headline cards.
pub fn kpi_row(ui: &mut Ui, kpis: &KpiSummary, selected_year: i32) {
    ui.columns(4, |cols| {
        kpi_card(
            &mut cols[0],
            "Market Size",
            &format::format_billions(kpis.market_value, 1),
            &format!("{selected_year} total market"),
            Some((kpis.yoy_change, "YoY")),
        );
        kpi_card(
            &mut cols[1],
            "2034 Forecast",
            &format::format_billions(kpis.forecast_value, 1),
            "End of report horizon",
            None,
        );
        kpi_card(
            &mut cols[2],
            "10-Year CAGR",
            &format::format_percent(kpis.long_cagr, 1),
            "2024 – 2034",
            None,
        );
        kpi_card(
            &mut cols[3],
            "Regions Covered",
            &kpis.regions_covered.to_string(),
            "Breakdown dimensions",
            None,
        );
    });
}

fn kpi_card(ui: &mut Ui, label: &str, value: &str, meta: &str, delta: Option<(f64, &str)>) {
    egui::Frame::group(ui.style())
        .fill(color::CARD_FILL)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.label(RichText::new(label).size(11.0).color(color::TEXT_MUTED));
            ui.label(RichText::new(value).size(24.0).strong());
            if let Some((change, tag)) = delta {
                let delta_color = if change >= 0.0 {
                    color::POSITIVE
                } else {
                    color::NEGATIVE
                };
                ui.label(
                    RichText::new(format!(
                        "{} {tag}",
                        format::format_signed_percent(change, 1)
                    ))
                    .size(11.0)
                    .color(delta_color),
                );
            } else {
                ui.label(RichText::new(meta).size(11.0).color(color::TEXT_MUTED));
            }
        });
}
