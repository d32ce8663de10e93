/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  prime_probe_results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TimingDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ TimingDataset  │  Vec<TimingRow>, ordered set names
///   └───────────────┘
///        │
///        ├────────────► stats (max / threshold hits)
///        └────────────► chart / viewer (line series)
/// ```
pub mod loader;
pub mod model;
