/// Data layer: the in-memory table and the loader that builds it.
///
/// Architecture:
/// ```text
///   output.csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  first column = n, the rest are plotted
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
