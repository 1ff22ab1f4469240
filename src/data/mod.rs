/// Data layer: core types, loading, region catalog, and querying.
///
/// Architecture:
/// ```text
///   combined_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record> in load order, shared read-only
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterState → QueryResult (filtered + optionally sorted)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod regions;
