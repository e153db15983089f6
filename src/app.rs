use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::color;
use crate::data::market::{BASE_YEAR, FORECAST_YEAR};
use crate::export::{self, ExportRequest};
use crate::project;
use crate::state::AppState;
use crate::ui::{charts, kpi, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AerodashApp {
    pub state: AppState,
}

impl AerodashApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx);
        Self {
            state: AppState::default(),
        }
    }

    /// Pick up screenshot events and finish any pending card export.
    /// Failures are logged and dropped; the user sees no error surface.
    fn handle_screenshots(&mut self, ctx: &egui::Context) {
        let captured = ctx.input(|input| {
            input.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });

        if let Some(frame) = captured {
            if let Some(request) = self.state.pending_export.take() {
                match export::save_region(&frame, ctx.pixels_per_point(), &request) {
                    Ok(()) => log::info!("exported chart to {}", request.path.display()),
                    Err(err) => log::error!("chart export failed: {err:#}"),
                }
            }
        }
    }

    /// Ask for a destination and schedule a frame capture of `rect`.
    fn request_export(&mut self, ctx: &egui::Context, rect: egui::Rect, slug: &str) {
        if self.state.pending_export.is_some() {
            return;
        }
        let Some(path) = export::prompt_for_path(slug) else {
            return;
        };
        self.state.pending_export = Some(ExportRequest { region: rect, path });
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }
}

impl eframe::App for AerodashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshots(ctx);

        // Export requests raised by cards this frame, resolved after layout.
        let mut export_requests: Vec<(egui::Rect, &'static str)> = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui);
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(color::BACKGROUND)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        panels::controls_row(ui, &mut self.state);
                        ui.add_space(12.0);

                        kpi::kpi_row(ui, &self.state.kpis(), self.state.selected_year);
                        ui.add_space(12.0);

                        let state = &self.state;
                        let collection = state.active_collection();
                        let selected_year = state.selected_year;

                        // Projections for this frame, re-derived from the
                        // immutable dataset.
                        let trend = project::trend_rows(&state.dataset.total_market, collection);
                        let active_slice = project::year_slice(collection, selected_year);
                        let region_slice =
                            project::year_slice(&state.dataset.region, selected_year);
                        let aircraft_slice =
                            project::year_slice(&state.dataset.aircraft_type, selected_year);
                        let comparison =
                            project::comparison_rows(collection, BASE_YEAR, FORECAST_YEAR);

                        let names = collection.names();

                        // Main row: trend chart (wide) + donut.
                        StripBuilder::new(ui)
                            .size(Size::relative(0.62))
                            .size(Size::remainder())
                            .horizontal(|mut strip| {
                                strip.cell(|ui| {
                                    let card = panels::chart_card(
                                        ui,
                                        "Market Size Trend",
                                        "Historical and forecast data (US$ Millions)",
                                        |ui| charts::trend_chart(ui, &trend, &names, &state.colors),
                                    );
                                    if card.export_clicked {
                                        export_requests.push((card.rect, "market-size-trend"));
                                    }
                                });
                                strip.cell(|ui| {
                                    let card = panels::chart_card(
                                        ui,
                                        &collection.title,
                                        &format!("{selected_year} Distribution"),
                                        |ui| {
                                            charts::segment_pie_chart(
                                                ui,
                                                &active_slice,
                                                &state.colors,
                                            )
                                        },
                                    );
                                    if card.export_clicked {
                                        export_requests.push((card.rect, "segment-distribution"));
                                    }
                                });
                            });
                        ui.add_space(12.0);

                        // Secondary row: fixed regional and aircraft breakdowns.
                        ui.columns(2, |cols| {
                            let card = panels::chart_card(
                                &mut cols[0],
                                "Regional Distribution",
                                &format!("Market size by region in {selected_year}"),
                                |ui| charts::segment_bar_chart(ui, "regional_bars", &region_slice),
                            );
                            if card.export_clicked {
                                export_requests.push((card.rect, "regional-distribution"));
                            }

                            let card = panels::chart_card(
                                &mut cols[1],
                                "Aircraft Type Breakdown",
                                &format!("Market size by aircraft type in {selected_year}"),
                                |ui| charts::segment_bar_chart(ui, "aircraft_bars", &aircraft_slice),
                            );
                            if card.export_clicked {
                                export_requests.push((card.rect, "aircraft-type-breakdown"));
                            }
                        });
                        ui.add_space(12.0);

                        // Growth-analysis table for the active breakdown.
                        let card = panels::chart_card(
                            ui,
                            &format!("{} - Growth Analysis", collection.title),
                            &format!("{BASE_YEAR} vs {FORECAST_YEAR} Comparison"),
                            |ui| table::comparison_table(ui, &comparison, BASE_YEAR, FORECAST_YEAR),
                        );
                        if card.export_clicked {
                            export_requests.push((card.rect, "growth-analysis"));
                        }

                        panels::footer(ui);
                    });
            });

        for (rect, slug) in export_requests {
            self.request_export(ctx, rect, slug);
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = color::BACKGROUND;
    visuals.window_fill = color::CARD_FILL;
    visuals.extreme_bg_color = color::BACKGROUND;
    visuals.widgets.noninteractive.bg_stroke.color = color::GRID;
    visuals.selection.bg_fill = color::ACCENT.gamma_multiply(0.35);
    ctx.set_visuals(visuals);
}
