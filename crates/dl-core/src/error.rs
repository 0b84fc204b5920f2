use crate::entity::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested location ID does not exist in the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The requested item does not exist (in the world or at a location).
    #[error("item not found: \"{0}\"")]
    ItemNotFound(String),

    /// The world data breaks one of the model's invariants.
    #[error("validation error: {0}")]
    Validation(String),

    /// The world file is not valid JSON for the expected layout.
    #[error("invalid world data: {0}")]
    Json(#[from] serde_json::Error),

    /// The world file could not be read.
    #[error("cannot read world file: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether this is a lookup failure for a location or an item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_) | Self::ItemNotFound(_))
    }
}
