//! Settings system for typed key-value storage.
//!
//! Values are serialized with bincode into a [`SettingsBackend`]. The only
//! backend keeps them in memory; nothing survives the process.

mod backend;
mod memory;
mod types;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use types::*;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SettingsError;

/// Key of the stored [`SystemSettings`].
pub const SYSTEM_SETTINGS_KEY: &str = "system";
/// Key of the stored [`CrmConfig`].
pub const CONFIG_KEY: &str = "config";

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with typed serialization via bincode.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Create a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Provider over a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Get a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key).await {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub async fn get_or<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, bytes).await;
        Ok(())
    }

    /// Delete a key.
    pub async fn delete(&self, key: &str) {
        self.backend.delete(key).await
    }

    /// Get all keys matching a prefix.
    pub async fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.backend.keys_with_prefix(prefix).await
    }

    // -------------------------------------------------------------------------
    // Typed shortcuts
    // -------------------------------------------------------------------------

    /// Stored system settings, or the defaults.
    pub async fn system_settings(&self) -> Result<SystemSettings, SettingsError> {
        self.get_or(SYSTEM_SETTINGS_KEY, SystemSettings::default()).await
    }

    /// Save the system settings page.
    pub async fn save_system_settings(&self, settings: &SystemSettings) -> Result<(), SettingsError> {
        log::info!("system settings saved");
        self.set(SYSTEM_SETTINGS_KEY, settings).await
    }

    /// Stored runtime config, or the defaults.
    pub async fn config(&self) -> Result<CrmConfig, SettingsError> {
        self.get_or(CONFIG_KEY, CrmConfig::default()).await
    }
}

impl std::fmt::Debug for SettingsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsProvider").finish_non_exhaustive()
    }
}
