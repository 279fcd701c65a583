//! Record directory
//!
//! Where table rows come from. The only implementation is an in-memory mock
//! with simulated latency; a real query API would implement
//! [`RecordSource`] instead.

mod duplicates;
mod entities;
mod mock;
mod seed;

use async_trait::async_trait;

use crate::error::DirectoryError;
use crate::model::Record;

pub use duplicates::*;
pub use entities::*;
pub use mock::ClientFilter;
pub use mock::MockDirectory;
pub use mock::DEFAULT_FETCH_DELAY;
pub use seed::AGENT_NAMES;

/// A source of records for an entity set.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record of `entity` (`client`, `agent`, `visit_note`,
    /// `duplicate`).
    async fn fetch(&self, entity: &str) -> Result<Vec<Record>, DirectoryError>;
}
