use fractaldive_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error("invalid explorer configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
