/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable  │  Vec<LaunchRecord>, sites, payload bounds
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload-range predicates → row indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
