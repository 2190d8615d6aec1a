pub mod config;
pub mod detail;
pub mod error;
pub mod explorer;
pub mod offsets;
pub mod pointer;
pub mod ports;
pub mod steering;

pub use config::{ExplorerConfig, Steering};
pub use detail::{ColorVariety, DetailMeter, DetailMetric, EdgeDensity, Entropy};
pub use error::ExploreError;
pub use explorer::{Explorer, Phase, TickOutcome};
pub use offsets::{OffsetSource, SeededOffsets};
pub use pointer::PointerClick;
pub use ports::{Discard, FrameSink, FrameSource};
pub use steering::{BusiestTile, TileGrid};

/// Convenience result type for the explore crate.
pub type Result<T> = std::result::Result<T, ExploreError>;
