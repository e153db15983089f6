//! View projectors: reshape segment collections into the exact row shapes
//! the charts and tables consume.
//!
//! Projections preserve the input collection's segment order and apply no
//! filtering; any sort is a presentation concern. Missing data points are
//! zero-filled through the metrics layer, so every projector is total.

use crate::data::model::{SegmentCollection, Series};
use crate::metrics;

// ---------------------------------------------------------------------------
// Trend projection (wide format, one row per base-series year)
// ---------------------------------------------------------------------------

/// One year of the wide-format trend projection. `values` is parallel to
/// the collection's segment order, zero-filled where a segment has no point
/// for that year.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub year: i32,
    /// Total market value for the year, copied from the base series, not
    /// the sum of `values` (breakdowns are independent dimensions).
    pub total: f64,
    pub values: Vec<f64>,
}

/// Project a collection across every year of the base series.
pub fn trend_rows(base: &Series, collection: &SegmentCollection) -> Vec<TrendRow> {
    base.iter()
        .map(|point| TrendRow {
            year: point.year,
            total: point.value,
            values: collection
                .segments
                .iter()
                .map(|seg| metrics::lookup_value(&seg.data, point.year))
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Single-year slice (bar and pie views)
// ---------------------------------------------------------------------------

/// One segment's value at a single year.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceRow {
    pub name: String,
    pub value: f64,
}

/// Slice a collection at one year, one row per segment in input order.
/// Pie share percentages are derived at render time from these rows via
/// [`metrics::share_of_total`], never pre-stored.
pub fn year_slice(collection: &SegmentCollection, year: i32) -> Vec<SliceRow> {
    collection
        .segments
        .iter()
        .map(|seg| SliceRow {
            name: seg.name.clone(),
            value: metrics::lookup_value(&seg.data, year),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dual-year comparison (growth-analysis table)
// ---------------------------------------------------------------------------

/// One segment's growth figures between two years.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub start_value: f64,
    pub end_value: f64,
    /// CAGR over `end_year - start_year`, percent.
    pub cagr: f64,
    /// Total growth over the span, percent.
    pub growth: f64,
}

/// Compare every segment of a collection between `start_year` and
/// `end_year`, one row per segment in input order.
pub fn comparison_rows(
    collection: &SegmentCollection,
    start_year: i32,
    end_year: i32,
) -> Vec<ComparisonRow> {
    collection
        .segments
        .iter()
        .map(|seg| {
            let start_value = metrics::lookup_value(&seg.data, start_year);
            let end_value = metrics::lookup_value(&seg.data, end_year);
            ComparisonRow {
                name: seg.name.clone(),
                start_value,
                end_value,
                cagr: metrics::cagr(start_value, end_value, end_year - start_year),
                growth: metrics::growth_percent(start_value, end_value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Segment, YearlyPoint};

    fn series(points: &[(i32, f64)]) -> Series {
        points
            .iter()
            .map(|&(year, value)| YearlyPoint { year, value })
            .collect()
    }

    fn fixture() -> SegmentCollection {
        SegmentCollection {
            title: "By Example".to_string(),
            segments: vec![
                Segment {
                    name: "Zulu".to_string(),
                    data: series(&[(2024, 200.0), (2025, 240.0), (2026, 300.0)]),
                },
                Segment {
                    name: "Alpha".to_string(),
                    // No 2025 point: trend projection must zero-fill it.
                    data: series(&[(2024, 100.0), (2026, 150.0)]),
                },
            ],
        }
    }

    fn base() -> Series {
        series(&[(2024, 500.0), (2025, 550.0), (2026, 620.0)])
    }

    #[test]
    fn trend_rows_cover_every_base_year() {
        let rows = trend_rows(&base(), &fixture());
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.year).collect::<Vec<_>>(),
            vec![2024, 2025, 2026]
        );
    }

    #[test]
    fn trend_rows_zero_fill_missing_segment_years() {
        let rows = trend_rows(&base(), &fixture());
        // Alpha has no 2025 point.
        assert_eq!(rows[1].values, vec![240.0, 0.0]);
    }

    #[test]
    fn trend_total_comes_from_the_base_series_not_the_segment_sum() {
        let rows = trend_rows(&base(), &fixture());
        assert_eq!(rows[0].total, 500.0);
        let segment_sum: f64 = rows[0].values.iter().sum();
        assert_ne!(rows[0].total, segment_sum);
    }

    #[test]
    fn year_slice_preserves_order_and_length() {
        let slices = year_slice(&fixture(), 2024);
        assert_eq!(slices.len(), 2);
        // Input order, not alphabetical.
        assert_eq!(slices[0].name, "Zulu");
        assert_eq!(slices[1].name, "Alpha");
        assert_eq!(slices[0].value, 200.0);
    }

    #[test]
    fn year_slice_zero_fills_absent_years() {
        let slices = year_slice(&fixture(), 2031);
        assert_eq!(slices[0].value, 0.0);
        assert_eq!(slices[1].value, 0.0);
    }

    #[test]
    fn comparison_of_a_flat_segment_is_all_zero() {
        let coll = SegmentCollection {
            title: "Flat".to_string(),
            segments: vec![Segment {
                name: "Static".to_string(),
                data: series(&[(2024, 200.0), (2034, 200.0)]),
            }],
        };
        let rows = comparison_rows(&coll, 2024, 2034);
        assert_eq!(rows[0].growth, 0.0);
        assert_eq!(rows[0].cagr, 0.0);
    }

    #[test]
    fn comparison_matches_the_metric_functions() {
        let coll = SegmentCollection {
            title: "Growing".to_string(),
            segments: vec![Segment {
                name: "Quad".to_string(),
                data: series(&[(2024, 100.0), (2034, 400.0)]),
            }],
        };
        let rows = comparison_rows(&coll, 2024, 2034);
        assert_eq!(rows[0].start_value, 100.0);
        assert_eq!(rows[0].end_value, 400.0);
        assert!((rows[0].cagr - 14.87).abs() < 0.01);
        assert_eq!(rows[0].growth, 300.0);
    }
}
