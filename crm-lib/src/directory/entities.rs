//! Typed CRM entities and their record projections

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

pub const CLIENT_ENTITY: &str = "client";
pub const AGENT_ENTITY: &str = "agent";
pub const VISIT_NOTE_ENTITY: &str = "visit_note";

// =============================================================================
// Enumerations
// =============================================================================

/// Pipeline stage of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Lead,
    Prospect,
    Client,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Lead => "lead",
            ClientStatus::Prospect => "prospect",
            ClientStatus::Client => "client",
            ClientStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lead" => Some(ClientStatus::Lead),
            "prospect" => Some(ClientStatus::Prospect),
            "client" => Some(ClientStatus::Client),
            "inactive" => Some(ClientStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
}

impl AgentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
        }
    }

    /// The other status, as flipped by the activate/deactivate action.
    pub fn toggled(self) -> Self {
        match self {
            AgentStatus::Active => AgentStatus::Inactive,
            AgentStatus::Inactive => AgentStatus::Active,
        }
    }
}

/// Channel of a visit note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    Phone,
    Meeting,
    Email,
    Visit,
    Other,
}

impl NoteType {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteType::Phone => "phone",
            NoteType::Meeting => "meeting",
            NoteType::Email => "email",
            NoteType::Visit => "visit",
            NoteType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "phone" => Some(NoteType::Phone),
            "meeting" => Some(NoteType::Meeting),
            "email" => Some(NoteType::Email),
            "visit" => Some(NoteType::Visit),
            "other" => Some(NoteType::Other),
            _ => None,
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ClientStatus, Priority, AgentStatus, NoteType);

// =============================================================================
// Entities
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub status: ClientStatus,
    pub priority: Priority,
    pub assigned_agent: String,
    pub last_contact: Option<NaiveDate>,
    pub source: String,
    pub created_date: NaiveDate,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Project into a table row. Field names follow the camelCase form keys.
    pub fn to_record(&self) -> Record {
        Record::new(CLIENT_ENTITY)
            .set("id", self.id)
            .set("firstName", self.first_name.as_str())
            .set("lastName", self.last_name.as_str())
            .set("email", self.email.as_str())
            .set("phone", self.phone.as_str())
            .set("company", self.company.as_str())
            .set("industry", self.industry.as_str())
            .set("status", self.status.as_str())
            .set("priority", self.priority.as_str())
            .set("assignedAgent", self.assigned_agent.as_str())
            .set("lastContact", self.last_contact)
            .set("source", self.source.as_str())
            .set("createdDate", self.created_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: AgentStatus,
    pub clients_assigned: i32,
    pub join_date: NaiveDate,
    pub notes_this_month: i32,
}

impl Agent {
    pub fn to_record(&self) -> Record {
        Record::new(AGENT_ENTITY)
            .set("id", self.id)
            .set("name", self.name.as_str())
            .set("email", self.email.as_str())
            .set("phone", self.phone.as_str())
            .set("status", self.status.as_str())
            .set("clientsAssigned", self.clients_assigned)
            .set("joinDate", self.join_date)
            .set("notesThisMonth", self.notes_this_month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitNote {
    pub id: i32,
    pub client_id: i32,
    pub client_name: String,
    pub agent_name: String,
    pub note_type: NoteType,
    pub content: String,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
}

impl VisitNote {
    pub fn to_record(&self) -> Record {
        Record::new(VISIT_NOTE_ENTITY)
            .set("id", self.id)
            .set("clientId", self.client_id)
            .set("clientName", self.client_name.as_str())
            .set("agentName", self.agent_name.as_str())
            .set("type", self.note_type.as_str())
            .set("content", self.content.as_str())
            .set("date", self.date)
            .set("duration", self.duration_minutes)
    }
}
