//! Derived-metric functions shared by every view.
//!
//! All functions here are pure and total: missing years, zero spans, and
//! degenerate denominators resolve to the documented zero defaults instead
//! of errors, so nothing in this layer can fail or propagate a NaN.

use crate::data::model::Series;

/// Value for `year`, or `default` when the series has no such point.
pub fn lookup_value_or(series: &Series, year: i32, default: f64) -> f64 {
    series
        .iter()
        .find(|p| p.year == year)
        .map(|p| p.value)
        .unwrap_or(default)
}

/// Zero-default lookup used by the projectors and KPI derivation.
pub fn lookup_value(series: &Series, year: i32) -> f64 {
    lookup_value_or(series, year, 0.0)
}

/// Compound annual growth rate from `start` to `end` over `year_span`
/// years, as a percentage.
///
/// Returns `0.0` when `start <= 0`, when `year_span == 0`, or when the
/// value ratio is non-positive (`end <= 0`): the rate is undefined there
/// and the dashboard's policy is a flat zero, never a NaN.
pub fn cagr(start: f64, end: f64, year_span: i32) -> f64 {
    if start <= 0.0 || end <= 0.0 || year_span == 0 {
        return 0.0;
    }
    ((end / start).powf(1.0 / f64::from(year_span)) - 1.0) * 100.0
}

/// Total growth from `start` to `end` as a percentage of the start value.
/// Returns `0.0` when `start <= 0`.
pub fn growth_percent(start: f64, end: f64) -> f64 {
    if start <= 0.0 {
        return 0.0;
    }
    (end - start) / start * 100.0
}

/// Share of `value` in `total` as a percentage. Returns `0.0` when
/// `total == 0` so an empty slice never divides by zero.
pub fn share_of_total(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    value / total * 100.0
}

/// Year-over-year change: same formula and edge policy as
/// [`growth_percent`], with the prior year as the start value.
pub fn yoy_change(current: f64, previous: f64) -> f64 {
    growth_percent(previous, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::YearlyPoint;

    fn series(points: &[(i32, f64)]) -> Series {
        points
            .iter()
            .map(|&(year, value)| YearlyPoint { year, value })
            .collect()
    }

    #[test]
    fn lookup_missing_year_defaults_to_zero() {
        let s = series(&[(2024, 100.0), (2025, 110.0)]);
        assert_eq!(lookup_value(&s, 2030), 0.0);
        assert_eq!(lookup_value(&s, 1999), 0.0);
    }

    #[test]
    fn lookup_honours_the_explicit_default() {
        let s = series(&[(2024, 100.0)]);
        assert_eq!(lookup_value_or(&s, 2025, -1.0), -1.0);
        assert_eq!(lookup_value_or(&s, 2024, -1.0), 100.0);
    }

    #[test]
    fn cagr_matches_the_reference_value() {
        // (400/100)^(1/10) - 1 = 14.87%
        assert!((cagr(100.0, 400.0, 10) - 14.87).abs() < 0.01);
    }

    #[test]
    fn cagr_is_zero_for_nonpositive_start() {
        assert_eq!(cagr(0.0, 500.0, 10), 0.0);
        assert_eq!(cagr(-20.0, 500.0, 10), 0.0);
    }

    #[test]
    fn cagr_is_zero_for_zero_span() {
        assert_eq!(cagr(100.0, 400.0, 0), 0.0);
    }

    #[test]
    fn cagr_is_zero_for_negative_ratio() {
        // Value crossed through zero: rate undefined, policy is zero.
        assert_eq!(cagr(100.0, -50.0, 5), 0.0);
    }

    #[test]
    fn growth_percent_basic() {
        assert_eq!(growth_percent(100.0, 250.0), 150.0);
    }

    #[test]
    fn growth_percent_is_zero_for_nonpositive_start() {
        assert_eq!(growth_percent(0.0, 250.0), 0.0);
        assert_eq!(growth_percent(-10.0, 250.0), 0.0);
    }

    #[test]
    fn flat_values_yield_zero_growth_and_cagr() {
        assert_eq!(growth_percent(200.0, 200.0), 0.0);
        assert_eq!(cagr(200.0, 200.0, 10), 0.0);
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(share_of_total(42.0, 0.0), 0.0);
        assert!((share_of_total(25.0, 100.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn yoy_change_mirrors_growth_percent() {
        assert_eq!(yoy_change(110.0, 100.0), growth_percent(100.0, 110.0));
        // No prior-year data point → zero, not an error.
        assert_eq!(yoy_change(110.0, 0.0), 0.0);
    }
}
