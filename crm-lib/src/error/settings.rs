//! Settings error types

/// Settings error type.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
}
