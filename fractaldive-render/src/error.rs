use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("colour table is empty")]
    EmptyColorTable,

    #[error("invalid hex colour {0:?} (expected #RRGGBB)")]
    InvalidHexColor(String),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),
}
