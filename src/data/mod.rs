/// Data layer: core types and the bundled report dataset.
///
/// Architecture:
/// ```text
///   source literals (market.rs)
///        │
///        ▼
///   ┌───────────────┐
///   │ MarketDataset │  base series + five breakdown collections
///   └───────────────┘
///        │
///        ▼
///   ┌─────────┐   ┌─────────┐
///   │ metrics │   │ project │  pure derivation on every render pass
///   └─────────┘   └─────────┘
/// ```
pub mod market;
pub mod model;
