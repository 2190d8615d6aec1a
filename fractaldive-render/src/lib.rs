pub mod buffer;
pub mod color_table;
pub mod error;
pub mod export;
pub mod generator;
pub mod grey_buffer;
pub mod palette;

pub use buffer::{RenderBuffer, BLACK};
pub use error::RenderError;
pub use export::{export_png, SnapshotMetadata};
pub use generator::{FrameGenerator, FrameStats, RenderMode};
pub use grey_buffer::GreyBuffer;
pub use palette::{parse_hex, Palette, PALETTE_SIZE};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
