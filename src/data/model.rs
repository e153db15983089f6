// ---------------------------------------------------------------------------
// YearlyPoint – one observation of a market series
// ---------------------------------------------------------------------------

/// A single yearly observation. Values are US$ millions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyPoint {
    pub year: i32,
    pub value: f64,
}

/// A year-ordered series of observations: strictly increasing in year, one
/// point per year. Lookups for years outside the series resolve to a default
/// in the metrics layer, never an error.
pub type Series = Vec<YearlyPoint>;

// ---------------------------------------------------------------------------
// Segment – one named subdivision of the market
// ---------------------------------------------------------------------------

/// A named subdivision of the total market (a region, an aircraft type, …)
/// with its own yearly series. Names are unique within a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub data: Series,
}

// ---------------------------------------------------------------------------
// SegmentCollection – one breakdown dimension
// ---------------------------------------------------------------------------

/// The set of segments forming one breakdown dimension, all sharing the
/// dataset's year range. Collections are mutually independent: their segment
/// sums are not required to reconcile with each other or with the base
/// series.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCollection {
    /// Display title for this breakdown ("By Region", …).
    pub title: String,
    pub segments: Vec<Segment>,
}

impl SegmentCollection {
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the collection has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment names in collection order.
    pub fn names(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.name.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// MarketDataset – the complete bundled dataset
// ---------------------------------------------------------------------------

/// The full report dataset: the ordered year horizon, the total-market base
/// series, and the five breakdown collections. Immutable after construction;
/// every render pass re-derives views from it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketDataset {
    /// Valid years, ascending.
    pub years: Vec<i32>,
    /// Total market value by year.
    pub total_market: Series,
    pub end_user: SegmentCollection,
    pub aircraft_type: SegmentCollection,
    pub region: SegmentCollection,
    pub application: SegmentCollection,
    pub furnished_equipment: SegmentCollection,
}

impl MarketDataset {
    /// All breakdown collections, for iteration in validation and tests.
    pub fn collections(&self) -> [&SegmentCollection; 5] {
        [
            &self.end_user,
            &self.aircraft_type,
            &self.region,
            &self.application,
            &self.furnished_equipment,
        ]
    }
}
