//! In-memory directory with simulated network latency

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use log::info;
use tokio::sync::RwLock;

use super::duplicates::*;
use super::entities::*;
use super::seed;
use super::RecordSource;
use crate::auth::Role;
use crate::auth::Session;
use crate::error::DirectoryError;
use crate::forms::ClientForm;
use crate::forms::VisitNoteForm;
use crate::model::Record;

/// Simulated round-trip latency of each directory call.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Page-level pre-filters applied before rows reach the table.
///
/// `None` means "any". Text filters compare exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub status: Option<ClientStatus>,
    pub agent: Option<String>,
    pub source: Option<String>,
    pub industry: Option<String>,
    pub priority: Option<Priority>,
}

impl ClientFilter {
    /// Filter for one agent's own clients.
    pub fn assigned_to(agent: impl Into<String>) -> Self {
        Self {
            agent: Some(agent.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, client: &Client) -> bool {
        self.status.is_none_or(|s| client.status == s)
            && self.priority.is_none_or(|p| client.priority == p)
            && text_matches(self.agent.as_deref(), &client.assigned_agent)
            && text_matches(self.source.as_deref(), &client.source)
            && text_matches(self.industry.as_deref(), &client.industry)
    }
}

fn text_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| w == actual)
}

#[derive(Debug, Default)]
struct Store {
    clients: Vec<Client>,
    agents: Vec<Agent>,
    visit_notes: Vec<VisitNote>,
}

/// Mock record directory seeded with demo data.
///
/// # Example
///
/// ```ignore
/// use crm_lib::directory::{MockDirectory, RecordSource};
///
/// let directory = MockDirectory::new();
/// let rows = directory.fetch("client").await?;
/// ```
#[derive(Debug)]
pub struct MockDirectory {
    store: RwLock<Store>,
    delay: Duration,
}

impl MockDirectory {
    /// Seeded directory with the default latency.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    /// Seeded directory with a custom latency (zero in tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            store: RwLock::new(Store {
                clients: seed::clients(),
                agents: seed::agents(),
                visit_notes: seed::visit_notes(),
            }),
            delay,
        }
    }

    /// Directory without any records.
    pub fn empty(delay: Duration) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            delay,
        }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Clients matching the page filters, as table rows.
    pub async fn clients(&self, filter: &ClientFilter) -> Vec<Record> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        store
            .clients
            .iter()
            .filter(|c| filter.matches(c))
            .map(Client::to_record)
            .collect()
    }

    /// Clients visible to a session: admins see everyone's, agents their own.
    pub async fn clients_for(&self, session: &Session) -> Vec<Record> {
        let filter = match session.role() {
            Role::Admin => ClientFilter::default(),
            Role::Agent => ClientFilter::assigned_to(session.user().name.as_str()),
        };
        self.clients(&filter).await
    }

    /// Visit notes visible to a session: admins see all, agents their own.
    pub async fn visit_notes_for(&self, session: &Session) -> Vec<Record> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        store
            .visit_notes
            .iter()
            .filter(|n| session.role() == Role::Admin || n.agent_name == session.user().name)
            .map(VisitNote::to_record)
            .collect()
    }

    /// Looks up a client by id.
    pub async fn client(&self, id: i32) -> Option<Client> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        store.clients.iter().find(|c| c.id == id).cloned()
    }

    /// Validate a form and store it as a new client with the next id.
    pub async fn add_client(&self, form: ClientForm) -> Result<Client, DirectoryError> {
        form.validate()?;
        self.simulate_latency().await;

        let mut store = self.store.write().await;
        let id = store.clients.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let client = Client {
            id,
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            company: form.company,
            industry: form.industry,
            status: form.status,
            priority: form.priority,
            assigned_agent: form.assigned_agent,
            last_contact: None,
            source: form.source,
            created_date: chrono::Utc::now().date_naive(),
        };
        info!("added client {} ({})", client.id, client.full_name());
        store.clients.push(client.clone());
        Ok(client)
    }

    /// Remove a client. Returns `false` if no client has that id.
    pub async fn delete_client(&self, id: i32) -> bool {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        let before = store.clients.len();
        store.clients.retain(|c| c.id != id);
        let removed = store.clients.len() != before;
        if removed {
            info!("deleted client {}", id);
        }
        removed
    }

    /// Record a visit note for one of the session's visible clients.
    ///
    /// The note is signed with the session user's name and dated today.
    /// Agents can only write notes for clients assigned to them; any other
    /// client id is reported as not found.
    pub async fn add_visit_note(
        &self,
        session: &Session,
        form: VisitNoteForm,
    ) -> Result<VisitNote, DirectoryError> {
        form.validate()?;
        let client_id = form.client_id.unwrap_or_default();
        self.simulate_latency().await;

        let mut store = self.store.write().await;
        let author = session.user().name.clone();
        let client = store
            .clients
            .iter()
            .find(|c| c.id == client_id)
            .filter(|c| session.role() == Role::Admin || c.assigned_agent == author)
            .ok_or(DirectoryError::NotFound {
                entity: CLIENT_ENTITY,
                id: client_id,
            })?;

        let note = VisitNote {
            id: store.visit_notes.iter().map(|n| n.id).max().unwrap_or(0) + 1,
            client_id,
            client_name: client.full_name(),
            agent_name: author,
            note_type: form.note_type,
            content: form.content.trim().to_string(),
            date: chrono::Utc::now().date_naive(),
            duration_minutes: form.duration_minutes,
        };
        if let Some(agent) = store.agents.iter_mut().find(|a| a.name == note.agent_name) {
            agent.notes_this_month += 1;
        }
        info!("added {} note {} for client {}", note.note_type, note.id, client_id);
        store.visit_notes.push(note.clone());
        Ok(note)
    }

    /// Remove a visit note. Returns `false` if no note has that id.
    pub async fn delete_visit_note(&self, id: i32) -> bool {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        let before = store.visit_notes.len();
        store.visit_notes.retain(|n| n.id != id);
        let removed = store.visit_notes.len() != before;
        if removed {
            info!("deleted visit note {}", id);
        }
        removed
    }

    /// Activate or deactivate an agent.
    pub async fn set_agent_status(
        &self,
        id: i32,
        status: AgentStatus,
    ) -> Result<Agent, DirectoryError> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        let agent = store
            .agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DirectoryError::NotFound {
                entity: AGENT_ENTITY,
                id,
            })?;
        if agent.status != status {
            info!("agent {} is now {}", agent.name, status);
        }
        agent.status = status;
        Ok(agent.clone())
    }

    /// Candidate duplicate pairs among all clients, as table rows.
    pub async fn duplicates(&self, threshold: DuplicateThreshold) -> Vec<Record> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        let pairs = find_duplicates(&store.clients);
        debug!("{} candidate duplicate pairs", pairs.len());
        pairs
            .iter()
            .filter(|p| threshold.admits(p.risk_level))
            .map(DuplicatePair::to_record)
            .collect()
    }

    /// Names of all agents, in roster order.
    pub async fn agent_names(&self) -> Vec<String> {
        let store = self.store.read().await;
        store.agents.iter().map(|a| a.name.clone()).collect()
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSource for MockDirectory {
    async fn fetch(&self, entity: &str) -> Result<Vec<Record>, DirectoryError> {
        debug!("fetching {}", entity);
        match entity {
            CLIENT_ENTITY => Ok(self.clients(&ClientFilter::default()).await),
            AGENT_ENTITY => {
                self.simulate_latency().await;
                let store = self.store.read().await;
                Ok(store.agents.iter().map(Agent::to_record).collect())
            }
            VISIT_NOTE_ENTITY => {
                self.simulate_latency().await;
                let store = self.store.read().await;
                Ok(store.visit_notes.iter().map(VisitNote::to_record).collect())
            }
            DUPLICATE_ENTITY => Ok(self.duplicates(DuplicateThreshold::All).await),
            other => Err(DirectoryError::UnknownEntity(other.to_string())),
        }
    }
}
