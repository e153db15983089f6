use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::{self, SegmentColors};
use crate::format;
use crate::metrics;
use crate::project::{SliceRow, TrendRow};

// ---------------------------------------------------------------------------
// Trend chart (central card)
// ---------------------------------------------------------------------------

/// Render the multi-series trend chart over the projected wide rows.
/// `names` is the active collection's segment order, matching each row's
/// `values`.
pub fn trend_chart(ui: &mut Ui, rows: &[TrendRow], names: &[&str], colors: &SegmentColors) {
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No trend data available.");
        });
        return;
    }

    Plot::new("market_trend")
        .height(320.0)
        .legend(Legend::default())
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(|mark, _range| {
            let year = mark.value.round();
            if (mark.value - year).abs() < 1e-3 {
                format!("{year:.0}")
            } else {
                String::new()
            }
        })
        .y_axis_formatter(|mark, _range| format::format_billions(mark.value, 0))
        .label_formatter(|name, point| {
            if name.is_empty() {
                String::new()
            } else {
                format!(
                    "{name}\n{}: {}",
                    point.x.round() as i64,
                    format::format_millions(point.y)
                )
            }
        })
        .show(ui, |plot_ui| {
            for (idx, name) in names.iter().enumerate() {
                let points: PlotPoints = rows
                    .iter()
                    .map(|row| [f64::from(row.year), row.values[idx]])
                    .collect();

                plot_ui.line(
                    Line::new(points)
                        .name(name)
                        .color(colors.color_for(name))
                        .width(2.0)
                        .fill(0.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Horizontal bar chart (single-year slice)
// ---------------------------------------------------------------------------

/// Render a single-year slice as horizontal bars, top-to-bottom in input
/// order.
pub fn segment_bar_chart(ui: &mut Ui, id: &str, slices: &[SliceRow]) {
    let n = slices.len();
    let bars: Vec<Bar> = slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            Bar::new((n - 1 - idx) as f64, slice.value)
                .name(&slice.name)
                .fill(color::series_color(idx, n))
        })
        .collect();

    // Row labels for the category axis, top-to-bottom.
    let labels: Vec<String> = slices.iter().map(|s| s.name.clone()).collect();

    Plot::new(id)
        .height(260.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(|mark, _range| format::format_billions(mark.value, 1))
        .y_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 1e-3 || slot < 0.0 {
                return String::new();
            }
            let slot = slot as usize;
            if slot < labels.len() {
                labels[labels.len() - 1 - slot].clone()
            } else {
                String::new()
            }
        })
        .label_formatter(|_, _| String::new())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().element_formatter(Box::new(
                |bar, _chart| format!("{}\n{}", bar.name, format::format_millions(bar.value)),
            )));
        });
}

// ---------------------------------------------------------------------------
// Donut pie chart (single-year slice of the active collection)
// ---------------------------------------------------------------------------

/// Render a single-year slice as a donut. The total and each slice's share
/// are derived here at render time, never pre-stored on the rows.
pub fn segment_pie_chart(ui: &mut Ui, slices: &[SliceRow], colors: &SegmentColors) {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No segment data for this year.");
        });
        return;
    }

    let desired = egui::vec2(ui.available_width(), 250.0);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let outer = rect.height().min(rect.width()) * 0.46;
    let inner = outer * 0.55;

    // Wedges start at 12 o'clock and sweep clockwise (screen-space y grows
    // downward, so increasing angle is clockwise).
    let mut start = -FRAC_PI_2;
    let mut boundaries = Vec::with_capacity(slices.len());
    for (idx, slice) in slices.iter().enumerate() {
        let sweep = slice.value / total * TAU;
        if sweep > 0.0 {
            fill_wedge(
                &painter,
                center,
                outer,
                start,
                sweep,
                colors.color_for(&slice.name),
            );
            boundaries.push((idx, start, sweep));
            start += sweep;
        }
    }

    // Radial separators between slices, then the donut hole.
    for &(_, angle, _) in &boundaries {
        let dir = egui::vec2(angle.cos() as f32, angle.sin() as f32);
        painter.line_segment(
            [center, center + dir * outer],
            Stroke::new(2.0, color::CARD_FILL),
        );
    }
    painter.circle_filled(center, inner, color::CARD_FILL);

    if let Some(pos) = response.hover_pos() {
        if let Some(idx) = hovered_slice(pos, center, inner, outer, &boundaries) {
            let slice = &slices[idx];
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                egui::Id::new("pie_tooltip"),
                |ui| {
                    ui.label(egui::RichText::new(&slice.name).strong());
                    ui.label(format!("Value: {}", format::format_millions(slice.value)));
                    ui.label(format!(
                        "Share: {}",
                        format::format_percent(metrics::share_of_total(slice.value, total), 1)
                    ));
                },
            );
        }
    }

    pie_legend(ui, colors);
}

/// Fill one wedge from the centre, split into sub-fans of at most a quarter
/// turn so every emitted polygon stays convex.
fn fill_wedge(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    from: f64,
    sweep: f64,
    fill: Color32,
) {
    let end = from + sweep;
    let mut a0 = from;
    while a0 < end - 1e-9 {
        let a1 = (a0 + FRAC_PI_2).min(end);
        let steps = 24;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = a0 + (a1 - a0) * i as f64 / steps as f64;
            points.push(center + egui::vec2(angle.cos() as f32, angle.sin() as f32) * radius);
        }
        painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
        a0 = a1;
    }
}

/// Which slice the pointer is over, if it is inside the donut ring.
fn hovered_slice(
    pos: Pos2,
    center: Pos2,
    inner: f32,
    outer: f32,
    boundaries: &[(usize, f64, f64)],
) -> Option<usize> {
    let offset = pos - center;
    let radius = offset.length();
    if radius < inner || radius > outer {
        return None;
    }

    let mut angle = f64::from(offset.y).atan2(f64::from(offset.x));
    // Normalize into the wedge convention: zero at 12 o'clock, clockwise.
    angle += FRAC_PI_2;
    while angle < 0.0 {
        angle += TAU;
    }

    boundaries
        .iter()
        .find(|&&(_, start, sweep)| {
            let from = start + FRAC_PI_2;
            angle >= from && angle < from + sweep
        })
        .map(|&(idx, _, _)| idx)
}

/// Swatch legend beneath the donut, in collection order.
fn pie_legend(ui: &mut Ui, colors: &SegmentColors) {
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        for (name, swatch) in colors.legend_entries() {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
            ui.painter().circle_filled(rect.center(), 4.0, *swatch);
            ui.label(egui::RichText::new(name).size(11.0).color(color::TEXT_MUTED));
            ui.add_space(8.0);
        }
    });
}
