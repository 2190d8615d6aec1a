use std::path::PathBuf;

use fractaldive_core::CoreError;
use fractaldive_explore::ExploreError;
use fractaldive_render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create snapshot directory {}: {source}", path.display())]
    SnapshotDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Explore(#[from] ExploreError),
}

pub type Result<T> = std::result::Result<T, AppError>;
