//! Settings backend trait.

use async_trait::async_trait;

/// Raw byte storage for settings.
///
/// The [`SettingsProvider`](super::SettingsProvider) wraps a backend with
/// typed serialization. Backends here cannot fail; encoding errors are
/// raised by the provider.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Get raw bytes for a key.
    async fn get_bytes(&self, key: &str) -> Option<Vec<u8>>;

    /// Set raw bytes for a key.
    async fn set_bytes(&self, key: &str, value: Vec<u8>);

    /// Delete a key.
    async fn delete(&self, key: &str);

    /// Get all keys matching a prefix, sorted.
    async fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}
