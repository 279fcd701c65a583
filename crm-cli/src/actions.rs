//! Row actions and their effect on the directory
//!
//! Table action handlers are synchronous, so they only queue a request.
//! [`apply`] then performs it against the directory once the table call
//! has returned.

use std::mem;
use std::sync::Arc;
use std::sync::Mutex;

use log::info;

use crm_lib::directory::AGENT_ENTITY;
use crm_lib::directory::AgentStatus;
use crm_lib::directory::CLIENT_ENTITY;
use crm_lib::directory::DUPLICATE_ENTITY;
use crm_lib::directory::MockDirectory;
use crm_lib::directory::VISIT_NOTE_ENTITY;
use crm_lib::error::DirectoryError;
use crm_lib::model::Record;
use crm_lib::model::Value;

use crate::error::CliError;
use crate::listing::describe;
use crate::render;

/// A row action picked from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub action: &'static str,
    pub row: Record,
}

/// Requests raised by row action handlers, shared with the handlers.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue(Arc<Mutex<Vec<ActionRequest>>>);

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, request: ActionRequest) {
        if let Ok(mut pending) = self.0.lock() {
            pending.push(request);
        }
    }

    /// Take every queued request, oldest first.
    pub fn drain(&self) -> Vec<ActionRequest> {
        self.0
            .lock()
            .ok()
            .map(|mut pending| mem::take(&mut *pending))
            .unwrap_or_default()
    }
}

/// Result of applying one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    /// The listing's rows are stale and must be reloaded.
    pub changed: bool,
}

impl Outcome {
    fn unchanged(message: String) -> Self {
        Self {
            message,
            changed: false,
        }
    }

    fn changed(message: String) -> Self {
        Self {
            message,
            changed: true,
        }
    }
}

pub async fn apply(
    directory: &MockDirectory,
    request: &ActionRequest,
) -> Result<Outcome, CliError> {
    let row = &request.row;
    info!("applying {} to {}", request.action, describe(row));

    match (row.entity_name(), request.action) {
        (_, "view") => Ok(Outcome::unchanged(render::render_record(row))),
        (CLIENT_ENTITY, "delete") => delete_client(directory, id_of(row)?).await,
        (VISIT_NOTE_ENTITY, "delete") => {
            let id = id_of(row)?;
            if !directory.delete_visit_note(id).await {
                return Err(not_found(VISIT_NOTE_ENTITY, id));
            }
            Ok(Outcome::changed(format!("Deleted visit note {}", id)))
        }
        (AGENT_ENTITY, "activate") => set_agent(directory, row, AgentStatus::Active).await,
        (AGENT_ENTITY, "deactivate") => set_agent(directory, row, AgentStatus::Inactive).await,
        // The newer client of a pair is the one removed.
        (DUPLICATE_ENTITY, "delete") => {
            let newer = row
                .get_list("clients")?
                .and_then(|clients| clients.last())
                .and_then(|client| match client {
                    Value::Record(client) => Some(&**client),
                    _ => None,
                })
                .ok_or_else(|| CliError::MissingId(describe(row)))?;
            delete_client(directory, id_of(newer)?).await
        }
        (entity, action) => Err(CliError::UnsupportedAction {
            action: action.to_string(),
            entity: entity.to_string(),
        }),
    }
}

async fn delete_client(directory: &MockDirectory, id: i32) -> Result<Outcome, CliError> {
    if !directory.delete_client(id).await {
        return Err(not_found(CLIENT_ENTITY, id));
    }
    Ok(Outcome::changed(format!("Deleted client {}", id)))
}

async fn set_agent(
    directory: &MockDirectory,
    row: &Record,
    status: AgentStatus,
) -> Result<Outcome, CliError> {
    let agent = directory.set_agent_status(id_of(row)?, status).await?;
    let verb = match agent.status {
        AgentStatus::Active => "activated",
        AgentStatus::Inactive => "deactivated",
    };
    Ok(Outcome::changed(format!("Agent {} {}", agent.name, verb)))
}

fn id_of(row: &Record) -> Result<i32, CliError> {
    row.get_int("id")?
        .ok_or_else(|| CliError::MissingId(describe(row)))
}

fn not_found(entity: &'static str, id: i32) -> CliError {
    DirectoryError::NotFound { entity, id }.into()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crm_lib::auth::Role;
    use crm_lib::directory::DuplicateThreshold;
    use crm_lib::directory::RecordSource;

    use super::*;
    use crate::listing::Listing;

    fn directory() -> MockDirectory {
        MockDirectory::with_delay(Duration::ZERO)
    }

    /// Trigger `action` on row `index` of the first page and apply it.
    async fn run_action(
        directory: &MockDirectory,
        listing: Listing,
        rows: &[Record],
        index: usize,
        action: &str,
    ) -> Outcome {
        let queue = ActionQueue::new();
        let table = listing.table(10, Role::Admin, &queue);
        assert!(table.trigger_action(rows, "", index, action));

        let requests = queue.drain();
        assert_eq!(requests.len(), 1);
        assert!(queue.drain().is_empty());
        apply(directory, &requests[0]).await.unwrap()
    }

    #[tokio::test]
    async fn test_delete_removes_client() {
        let dir = directory();
        let rows = dir.fetch(CLIENT_ENTITY).await.unwrap();

        let outcome = run_action(&dir, Listing::Clients, &rows, 0, "delete").await;
        assert!(outcome.changed);
        assert_eq!(outcome.message, "Deleted client 1");
        assert!(dir.client(1).await.is_none());
        assert_eq!(dir.fetch(CLIENT_ENTITY).await.unwrap().len(), rows.len() - 1);
    }

    #[tokio::test]
    async fn test_activate_and_deactivate_agent() {
        let dir = directory();
        let rows = dir.fetch(AGENT_ENTITY).await.unwrap();
        let status = |rows: &[Record], id: &str| {
            rows.iter()
                .find(|r| r.key().as_deref() == Some(id))
                .and_then(|r| r.get_string("status").ok().flatten().map(str::to_string))
        };
        assert_eq!(status(&rows, "3").as_deref(), Some("inactive"));

        let outcome = run_action(&dir, Listing::Agents, &rows, 2, "activate").await;
        assert_eq!(outcome.message, "Agent Bob Agent activated");
        let rows = dir.fetch(AGENT_ENTITY).await.unwrap();
        assert_eq!(status(&rows, "3").as_deref(), Some("active"));

        run_action(&dir, Listing::Agents, &rows, 0, "deactivate").await;
        let rows = dir.fetch(AGENT_ENTITY).await.unwrap();
        assert_eq!(status(&rows, "1").as_deref(), Some("inactive"));
    }

    #[tokio::test]
    async fn test_delete_note() {
        let dir = directory();
        let rows = dir.fetch(VISIT_NOTE_ENTITY).await.unwrap();

        let outcome = run_action(&dir, Listing::Notes, &rows, 1, "delete").await;
        assert_eq!(outcome.message, "Deleted visit note 2");
        assert_eq!(dir.fetch(VISIT_NOTE_ENTITY).await.unwrap().len(), rows.len() - 1);
    }

    #[tokio::test]
    async fn test_delete_duplicate_removes_newer_client() {
        let dir = directory();
        let rows = dir.duplicates(DuplicateThreshold::High).await;

        let outcome = run_action(&dir, Listing::Duplicates, &rows, 0, "delete").await;
        assert_eq!(outcome.message, "Deleted client 13");
        assert!(dir.client(13).await.is_none());
        assert!(dir.client(1).await.is_some());
        assert!(dir.duplicates(DuplicateThreshold::High).await.is_empty());
    }

    #[tokio::test]
    async fn test_view_changes_nothing() {
        let dir = directory();
        let rows = dir.fetch(CLIENT_ENTITY).await.unwrap();

        let outcome = run_action(&dir, Listing::Clients, &rows, 0, "view").await;
        assert!(!outcome.changed);
        assert!(outcome.message.contains("John"));
        assert_eq!(dir.fetch(CLIENT_ENTITY).await.unwrap().len(), rows.len());
    }

    #[tokio::test]
    async fn test_missing_row_and_unknown_action() {
        let dir = directory();
        let row = Record::new(CLIENT_ENTITY).set("id", 99);
        let request = ActionRequest {
            action: "delete",
            row,
        };
        let err = apply(&dir, &request).await.unwrap_err();
        assert_eq!(err.to_string(), "client 99 not found");

        let request = ActionRequest {
            action: "archive",
            row: Record::new(AGENT_ENTITY).set("id", 1),
        };
        assert!(matches!(
            apply(&dir, &request).await,
            Err(CliError::UnsupportedAction { .. })
        ));
    }
}
