//! Record directory error types

use super::ValidationError;

/// Errors returned by a [`RecordSource`](crate::directory::RecordSource).
#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryError {
    /// The requested entity set does not exist.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// No record of `entity` has this id, or the caller cannot see it.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A record failed form validation and was not stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
