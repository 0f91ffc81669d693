/// Data layer: core types, loading, resampling and comparison.
///
/// Architecture:
/// ```text
///  inner.txt / outer.txt   (x,y,z tokens)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → BoundaryPath
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resample  │  Method × BoundaryPath → ResampledPath
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ compare   │  every method over both boundaries → TrackComparison
///   └──────────┘
/// ```

pub mod compare;
pub mod loader;
pub mod model;
pub mod resample;
