use crate::color::SegmentColors;
use crate::data::market::{BASE_YEAR, FORECAST_YEAR};
use crate::data::model::{MarketDataset, SegmentCollection};
use crate::export::ExportRequest;
use crate::metrics;

// ---------------------------------------------------------------------------
// Breakdown selection
// ---------------------------------------------------------------------------

/// Which breakdown dimension the segment views are showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentType {
    #[default]
    EndUser,
    AircraftType,
    Region,
    Application,
    Equipment,
}

impl SegmentType {
    pub const ALL: [SegmentType; 5] = [
        SegmentType::EndUser,
        SegmentType::AircraftType,
        SegmentType::Region,
        SegmentType::Application,
        SegmentType::Equipment,
    ];

    /// Short label for the selector tabs.
    pub fn label(self) -> &'static str {
        match self {
            SegmentType::EndUser => "End User",
            SegmentType::AircraftType => "Aircraft Type",
            SegmentType::Region => "Region",
            SegmentType::Application => "Application",
            SegmentType::Equipment => "Equipment",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state. The dataset is immutable after construction; every
/// frame re-derives projections and KPI values from it plus the selection
/// fields below.
pub struct AppState {
    /// Bundled report dataset, never mutated after startup.
    pub dataset: MarketDataset,

    /// Year the slice views (pie, bars, KPI row) are showing.
    pub selected_year: i32,

    /// Active breakdown dimension.
    pub segment_type: SegmentType,

    /// Colour assignment for the active collection's segments.
    pub colors: SegmentColors,

    /// Card capture waiting for the next frame's screenshot event.
    pub pending_export: Option<ExportRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        let dataset = MarketDataset::bundled();
        let colors = SegmentColors::new(&dataset.end_user);
        Self {
            dataset,
            selected_year: BASE_YEAR,
            segment_type: SegmentType::default(),
            colors,
            pending_export: None,
        }
    }
}

impl AppState {
    /// The collection the segment views are currently projecting.
    pub fn active_collection(&self) -> &SegmentCollection {
        match self.segment_type {
            SegmentType::EndUser => &self.dataset.end_user,
            SegmentType::AircraftType => &self.dataset.aircraft_type,
            SegmentType::Region => &self.dataset.region,
            SegmentType::Application => &self.dataset.application,
            SegmentType::Equipment => &self.dataset.furnished_equipment,
        }
    }

    /// Switch the breakdown dimension and rebuild the colour assignment.
    pub fn set_segment_type(&mut self, segment_type: SegmentType) {
        if segment_type != self.segment_type {
            self.segment_type = segment_type;
            self.colors = SegmentColors::new(self.active_collection());
        }
    }

    /// Change the year the slice views show.
    pub fn set_year(&mut self, year: i32) {
        self.selected_year = year;
    }

    /// Headline figures for the KPI cards, re-derived from the base series.
    pub fn kpis(&self) -> KpiSummary {
        let total = &self.dataset.total_market;
        let current = metrics::lookup_value(total, self.selected_year);
        let previous = metrics::lookup_value(total, self.selected_year - 1);
        let base = metrics::lookup_value(total, BASE_YEAR);
        let forecast = metrics::lookup_value(total, FORECAST_YEAR);

        KpiSummary {
            market_value: current,
            yoy_change: metrics::yoy_change(current, previous),
            forecast_value: forecast,
            long_cagr: metrics::cagr(base, forecast, FORECAST_YEAR - BASE_YEAR),
            regions_covered: self.dataset.region.len(),
        }
    }
}

/// Headline figures for the KPI cards row.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    /// Total market value at the selected year, US$ millions.
    pub market_value: f64,
    /// Change vs the prior year, percent. Zero when no prior point exists.
    pub yoy_change: f64,
    /// Total market value at the final forecast year, US$ millions.
    pub forecast_value: f64,
    /// CAGR over the full report horizon, percent.
    pub long_cagr: f64,
    pub regions_covered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_changes_never_mutate_the_dataset() {
        let mut state = AppState::default();
        let snapshot = state.dataset.clone();

        state.set_year(2030);
        state.set_segment_type(SegmentType::Region);
        let _ = state.kpis();
        state.set_segment_type(SegmentType::Application);
        state.set_year(2026);

        assert_eq!(state.dataset, snapshot);
    }

    #[test]
    fn active_collection_follows_the_segment_type() {
        let mut state = AppState::default();
        assert_eq!(state.active_collection().title, "By End User Type");
        state.set_segment_type(SegmentType::AircraftType);
        assert_eq!(state.active_collection().title, "By Aircraft Type");
        state.set_segment_type(SegmentType::Equipment);
        assert_eq!(state.active_collection().title, "By Equipment Type");
    }

    #[test]
    fn kpis_at_the_base_year_have_no_yoy_change() {
        let state = AppState::default();
        let kpis = state.kpis();
        // No 2023 point in the series → zero by policy, not an error.
        assert_eq!(kpis.yoy_change, 0.0);
        assert_eq!(kpis.regions_covered, 4);
        assert!(kpis.market_value > 0.0);
        assert!(kpis.forecast_value > kpis.market_value);
    }

    #[test]
    fn long_horizon_cagr_is_independent_of_the_selected_year() {
        let mut state = AppState::default();
        let before = state.kpis().long_cagr;
        state.set_year(2031);
        assert_eq!(state.kpis().long_cagr, before);
        assert!((before - 7.02).abs() < 0.05);
    }

    #[test]
    fn yoy_change_is_positive_across_the_bundled_horizon() {
        let mut state = AppState::default();
        state.set_year(2028);
        assert!(state.kpis().yoy_change > 0.0);
    }
}
