use super::model::{MarketDataset, Segment, SegmentCollection, Series, YearlyPoint};

// ---------------------------------------------------------------------------
// The bundled report dataset
// ---------------------------------------------------------------------------
//
// All values are US$ millions over the 2024–2034 horizon, bundled as source
// literals: nothing is parsed or fetched at runtime. The five breakdowns are
// independent dimensions of the same market, so their segment sums do not
// reconcile with the base series (source-report convention).

/// First year of the report horizon.
pub const BASE_YEAR: i32 = 2024;
/// Final forecast year.
pub const FORECAST_YEAR: i32 = 2034;

fn series(points: &[(i32, f64)]) -> Series {
    points
        .iter()
        .map(|&(year, value)| YearlyPoint { year, value })
        .collect()
}

fn segment(name: &str, points: &[(i32, f64)]) -> Segment {
    Segment {
        name: name.to_string(),
        data: series(points),
    }
}

fn collection(title: &str, segments: Vec<Segment>) -> SegmentCollection {
    SegmentCollection {
        title: title.to_string(),
        segments,
    }
}

impl MarketDataset {
    /// Build the complete bundled dataset.
    pub fn bundled() -> Self {
        MarketDataset {
            years: (BASE_YEAR..=FORECAST_YEAR).collect(),
            total_market: series(&TOTAL_MARKET),
            end_user: collection(
                "By End User Type",
                vec![
                    segment("OEM", &END_USER_OEM),
                    segment("Aftermarket", &END_USER_AFTERMARKET),
                ],
            ),
            aircraft_type: collection(
                "By Aircraft Type",
                vec![
                    segment("Narrow-Body", &AIRCRAFT_NARROW_BODY),
                    segment("Wide-Body", &AIRCRAFT_WIDE_BODY),
                    segment("Regional Jet", &AIRCRAFT_REGIONAL_JET),
                    segment("Business Jet", &AIRCRAFT_BUSINESS_JET),
                ],
            ),
            region: collection(
                "By Region",
                vec![
                    segment("North America", &REGION_NORTH_AMERICA),
                    segment("Europe", &REGION_EUROPE),
                    segment("Asia Pacific", &REGION_ASIA_PACIFIC),
                    segment("Rest of World", &REGION_REST_OF_WORLD),
                ],
            ),
            application: collection(
                "By Application",
                vec![
                    segment("Seating", &APPLICATION_SEATING),
                    segment("In-Flight Entertainment", &APPLICATION_IFE),
                    segment("Cabin Lighting", &APPLICATION_LIGHTING),
                    segment("Galley", &APPLICATION_GALLEY),
                    segment("Lavatory & Water Systems", &APPLICATION_LAVATORY),
                ],
            ),
            furnished_equipment: collection(
                "By Equipment Type",
                vec![
                    segment("Buyer Furnished", &EQUIPMENT_BUYER_FURNISHED),
                    segment("Supplier Furnished", &EQUIPMENT_SUPPLIER_FURNISHED),
                ],
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Series literals (US$ millions)
// ---------------------------------------------------------------------------

const TOTAL_MARKET: [(i32, f64); 11] = [
    (2024, 26540.0),
    (2025, 28500.0),
    (2026, 30410.0),
    (2027, 32600.0),
    (2028, 34820.0),
    (2029, 37360.0),
    (2030, 39830.0),
    (2031, 42660.0),
    (2032, 45730.0),
    (2033, 48880.0),
    (2034, 52300.0),
];

const END_USER_OEM: [(i32, f64); 11] = [
    (2024, 16230.0),
    (2025, 17370.0),
    (2026, 18460.0),
    (2027, 19720.0),
    (2028, 20980.0),
    (2029, 22420.0),
    (2030, 23820.0),
    (2031, 25410.0),
    (2032, 27140.0),
    (2033, 28900.0),
    (2034, 30810.0),
];

const END_USER_AFTERMARKET: [(i32, f64); 11] = [
    (2024, 10310.0),
    (2025, 11150.0),
    (2026, 11970.0),
    (2027, 12920.0),
    (2028, 13880.0),
    (2029, 14990.0),
    (2030, 16090.0),
    (2031, 17340.0),
    (2032, 18710.0),
    (2033, 20140.0),
    (2034, 21690.0),
];

const AIRCRAFT_NARROW_BODY: [(i32, f64); 11] = [
    (2024, 11940.0),
    (2025, 12880.0),
    (2026, 13810.0),
    (2027, 14870.0),
    (2028, 15960.0),
    (2029, 17210.0),
    (2030, 18430.0),
    (2031, 19830.0),
    (2032, 21350.0),
    (2033, 22930.0),
    (2034, 24650.0),
];

const AIRCRAFT_WIDE_BODY: [(i32, f64); 11] = [
    (2024, 7960.0),
    (2025, 8500.0),
    (2026, 9020.0),
    (2027, 9620.0),
    (2028, 10210.0),
    (2029, 10900.0),
    (2030, 11550.0),
    (2031, 12300.0),
    (2032, 13110.0),
    (2033, 13940.0),
    (2034, 14830.0),
];

const AIRCRAFT_REGIONAL_JET: [(i32, f64); 11] = [
    (2024, 3190.0),
    (2025, 3380.0),
    (2026, 3570.0),
    (2027, 3780.0),
    (2028, 3990.0),
    (2029, 4220.0),
    (2030, 4450.0),
    (2031, 4710.0),
    (2032, 4980.0),
    (2033, 5260.0),
    (2034, 5560.0),
];

const AIRCRAFT_BUSINESS_JET: [(i32, f64); 11] = [
    (2024, 3450.0),
    (2025, 3750.0),
    (2026, 4040.0),
    (2027, 4380.0),
    (2028, 4730.0),
    (2029, 5140.0),
    (2030, 5540.0),
    (2031, 6000.0),
    (2032, 6500.0),
    (2033, 7030.0),
    (2034, 7600.0),
];

const REGION_NORTH_AMERICA: [(i32, f64); 11] = [
    (2024, 9290.0),
    (2025, 9890.0),
    (2026, 10470.0),
    (2027, 11130.0),
    (2028, 11780.0),
    (2029, 12540.0),
    (2030, 13250.0),
    (2031, 14070.0),
    (2032, 14960.0),
    (2033, 15860.0),
    (2034, 16830.0),
];

const REGION_EUROPE: [(i32, f64); 11] = [
    (2024, 7160.0),
    (2025, 7670.0),
    (2026, 8160.0),
    (2027, 8720.0),
    (2028, 9290.0),
    (2029, 9940.0),
    (2030, 10570.0),
    (2031, 11280.0),
    (2032, 12060.0),
    (2033, 12860.0),
    (2034, 13720.0),
];

const REGION_ASIA_PACIFIC: [(i32, f64); 11] = [
    (2024, 7430.0),
    (2025, 8140.0),
    (2026, 8850.0),
    (2027, 9680.0),
    (2028, 10540.0),
    (2029, 11530.0),
    (2030, 12530.0),
    (2031, 13680.0),
    (2032, 14950.0),
    (2033, 16300.0),
    (2034, 17780.0),
];

const REGION_REST_OF_WORLD: [(i32, f64); 11] = [
    (2024, 2660.0),
    (2025, 2860.0),
    (2026, 3050.0),
    (2027, 3280.0),
    (2028, 3500.0),
    (2029, 3760.0),
    (2030, 4010.0),
    (2031, 4300.0),
    (2032, 4620.0),
    (2033, 4940.0),
    (2034, 5290.0),
];

const APPLICATION_SEATING: [(i32, f64); 11] = [
    (2024, 7960.0),
    (2025, 8530.0),
    (2026, 9090.0),
    (2027, 9720.0),
    (2028, 10370.0),
    (2029, 11100.0),
    (2030, 11810.0),
    (2031, 12630.0),
    (2032, 13510.0),
    (2033, 14420.0),
    (2034, 15400.0),
];

const APPLICATION_IFE: [(i32, f64); 11] = [
    (2024, 5840.0),
    (2025, 6380.0),
    (2026, 6920.0),
    (2027, 7540.0),
    (2028, 8190.0),
    (2029, 8940.0),
    (2030, 9690.0),
    (2031, 10550.0),
    (2032, 11500.0),
    (2033, 12500.0),
    (2034, 13600.0),
];

const APPLICATION_LIGHTING: [(i32, f64); 11] = [
    (2024, 3720.0),
    (2025, 4000.0),
    (2026, 4280.0),
    (2027, 4600.0),
    (2028, 4920.0),
    (2029, 5290.0),
    (2030, 5650.0),
    (2031, 6060.0),
    (2032, 6510.0),
    (2033, 6970.0),
    (2034, 7470.0),
];

const APPLICATION_GALLEY: [(i32, f64); 11] = [
    (2024, 4780.0),
    (2025, 5090.0),
    (2026, 5390.0),
    (2027, 5730.0),
    (2028, 6060.0),
    (2029, 6450.0),
    (2030, 6820.0),
    (2031, 7240.0),
    (2032, 7700.0),
    (2033, 8160.0),
    (2034, 8660.0),
];

const APPLICATION_LAVATORY: [(i32, f64); 11] = [
    (2024, 4240.0),
    (2025, 4530.0),
    (2026, 4800.0),
    (2027, 5120.0),
    (2028, 5440.0),
    (2029, 5800.0),
    (2030, 6150.0),
    (2031, 6550.0),
    (2032, 6980.0),
    (2033, 7420.0),
    (2034, 7900.0),
];

const EQUIPMENT_BUYER_FURNISHED: [(i32, f64); 11] = [
    (2024, 14600.0),
    (2025, 15720.0),
    (2026, 16820.0),
    (2027, 18090.0),
    (2028, 19370.0),
    (2029, 20840.0),
    (2030, 22280.0),
    (2031, 23930.0),
    (2032, 25720.0),
    (2033, 27580.0),
    (2034, 29590.0),
];

const EQUIPMENT_SUPPLIER_FURNISHED: [(i32, f64); 11] = [
    (2024, 11940.0),
    (2025, 12780.0),
    (2026, 13580.0),
    (2027, 14500.0),
    (2028, 15430.0),
    (2029, 16500.0),
    (2030, 17520.0),
    (2031, 18690.0),
    (2032, 19970.0),
    (2033, 21260.0),
    (2034, 22670.0),
];

// ---------------------------------------------------------------------------
// Dataset invariants
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_are_strictly_increasing() {
        let ds = MarketDataset::bundled();
        assert!(ds.years.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*ds.years.first().unwrap(), BASE_YEAR);
        assert_eq!(*ds.years.last().unwrap(), FORECAST_YEAR);
    }

    #[test]
    fn base_series_covers_the_full_horizon() {
        let ds = MarketDataset::bundled();
        let years: Vec<i32> = ds.total_market.iter().map(|p| p.year).collect();
        assert_eq!(years, ds.years);
    }

    #[test]
    fn every_segment_spans_the_dataset_years() {
        let ds = MarketDataset::bundled();
        for coll in ds.collections() {
            for seg in &coll.segments {
                let years: Vec<i32> = seg.data.iter().map(|p| p.year).collect();
                assert_eq!(years, ds.years, "segment {} of {}", seg.name, coll.title);
            }
        }
    }

    #[test]
    fn segment_names_are_unique_within_each_collection() {
        let ds = MarketDataset::bundled();
        for coll in ds.collections() {
            let mut names = coll.names();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), coll.len(), "duplicates in {}", coll.title);
        }
    }

    #[test]
    fn four_regions_are_covered() {
        assert_eq!(MarketDataset::bundled().region.len(), 4);
    }

    #[test]
    fn all_values_are_positive() {
        let ds = MarketDataset::bundled();
        assert!(ds.total_market.iter().all(|p| p.value > 0.0));
        for coll in ds.collections() {
            for seg in &coll.segments {
                assert!(seg.data.iter().all(|p| p.value > 0.0));
            }
        }
    }
}
