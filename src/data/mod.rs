/// Data layer: store types, seeds, file loading, classification, export.
///
/// Architecture:
/// ```text
///  .csv / .xlsx / .xls
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → UploadTable (row objects)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  ingest   │  sniff first-row keys → Classified payload
///   └──────────┘
///        │
///        ▼
///   AppState (trend replaced / metrics merged / general stored)
/// ```
pub mod export;
pub mod ingest;
pub mod loader;
pub mod model;
pub mod seed;
pub mod template;
