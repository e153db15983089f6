use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::SegmentCollection;

// ---------------------------------------------------------------------------
// Dashboard theme colours (the report's dark palette)
// ---------------------------------------------------------------------------

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0a, 0x0f, 0x1a);
pub const CARD_FILL: Color32 = Color32::from_rgb(0x10, 0x17, 0x26);
pub const GRID: Color32 = Color32::from_rgb(0x1f, 0x2a, 0x3d);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x7e, 0x8b, 0xa3);
pub const POSITIVE: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const NEGATIVE: Color32 = Color32::from_rgb(0xe7, 0x3a, 0x5f);
pub const ACCENT: Color32 = Color32::from_rgb(0x1f, 0xce, 0xf9);

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Fixed chart hues (H, S, L) shared by every chart, in series order.
const CHART_HUES: [(f32, f32, f32); 6] = [
    (192.0, 0.95, 0.55),
    (38.0, 0.92, 0.55),
    (262.0, 0.83, 0.58),
    (142.0, 0.71, 0.45),
    (346.0, 0.77, 0.50),
    (199.0, 0.89, 0.48),
];

fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colour for series `idx` of `n`: the fixed hue table first, then evenly
/// spaced hues for collections larger than the table.
pub fn series_color(idx: usize, n: usize) -> Color32 {
    if let Some(&(h, s, l)) = CHART_HUES.get(idx) {
        return hsl(h, s, l);
    }
    let hue = (idx as f32 / n.max(1) as f32) * 360.0;
    hsl(hue, 0.75, 0.55)
}

// ---------------------------------------------------------------------------
// Segment name → colour mapping for the active collection
// ---------------------------------------------------------------------------

/// Stable colour assignment for one collection's segments, in collection
/// order. Rebuilt when the active breakdown changes so legends, wedges,
/// and trend lines all agree.
#[derive(Debug, Clone)]
pub struct SegmentColors {
    mapping: Vec<(String, Color32)>,
    default_color: Color32,
}

impl SegmentColors {
    /// Assign a colour to every segment of the collection.
    pub fn new(collection: &SegmentCollection) -> Self {
        let n = collection.len();
        SegmentColors {
            mapping: collection
                .segments
                .iter()
                .enumerate()
                .map(|(idx, seg)| (seg.name.clone(), series_color(idx, n)))
                .collect(),
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a segment name.
    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }

    /// Legend entries (segment name, colour) in collection order.
    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{MarketDataset, Segment};

    #[test]
    fn colors_follow_collection_order() {
        let ds = MarketDataset::bundled();
        let colors = SegmentColors::new(&ds.region);
        let entries = colors.legend_entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].0, "North America");
        assert_eq!(entries[0].1, series_color(0, 4));
    }

    #[test]
    fn unknown_names_fall_back_to_the_default() {
        let ds = MarketDataset::bundled();
        let colors = SegmentColors::new(&ds.end_user);
        assert_eq!(colors.color_for("Not A Segment"), Color32::GRAY);
    }

    #[test]
    fn overflow_series_still_get_distinct_hues() {
        let coll = SegmentCollection {
            title: "Wide".to_string(),
            segments: (0..9)
                .map(|i| Segment {
                    name: format!("segment-{i}"),
                    data: Vec::new(),
                })
                .collect(),
        };
        let colors = SegmentColors::new(&coll);
        let c7 = colors.color_for("segment-7");
        let c8 = colors.color_for("segment-8");
        assert_ne!(c7, c8);
        assert_ne!(c7, Color32::GRAY);
    }
}
