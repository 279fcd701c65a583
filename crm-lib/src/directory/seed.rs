//! Seed data for the mock directory

use chrono::NaiveDate;

use super::entities::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Agent names in roster order.
pub const AGENT_NAMES: [&str; 4] = ["Agent User", "Jane Agent", "Bob Agent", "Alice Agent"];

#[allow(clippy::too_many_arguments)]
fn client(
    id: i32,
    first_name: &str,
    last_name: &str,
    company: &str,
    industry: &str,
    status: ClientStatus,
    priority: Priority,
    agent: &str,
    source: &str,
    created: NaiveDate,
    last_contact: Option<NaiveDate>,
) -> Client {
    let email_local = format!(
        "{}.{}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    Client {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@email.com", email_local),
        phone: phone(id),
        company: company.to_string(),
        industry: industry.to_string(),
        status,
        priority,
        assigned_agent: agent.to_string(),
        last_contact,
        source: source.to_string(),
        created_date: created,
    }
}

fn phone(id: i32) -> String {
    format!("(555) {:03}-{:04}", 100 + id * 11, 4567 + id * 1111 % 5000)
}

pub fn clients() -> Vec<Client> {
    use ClientStatus as S;
    use Priority as P;

    vec![
        client(1, "John", "Smith", "Tech Corp", "Technology", S::Client, P::High, "Agent User", "Referral", date(2024, 1, 1), Some(date(2024, 1, 15))),
        client(2, "Sarah", "Johnson", "Design Studio", "Design", S::Prospect, P::Medium, "Jane Agent", "Website", date(2024, 1, 2), Some(date(2024, 1, 14))),
        client(3, "Mike", "Wilson", "Wilson & Sons", "Construction", S::Lead, P::Low, "Bob Agent", "Cold Call", date(2024, 1, 3), Some(date(2024, 1, 13))),
        client(4, "Emily", "Davis", "Bright Retail", "Retail", S::Client, P::Medium, "Alice Agent", "Trade Show", date(2024, 1, 4), Some(date(2024, 1, 12))),
        client(5, "David", "Brown", "Brown Logistics", "Logistics", S::Prospect, P::High, "Agent User", "Website", date(2024, 1, 5), None),
        client(6, "Lisa", "Garcia", "Garcia Foods", "Food", S::Lead, P::Medium, "Jane Agent", "Referral", date(2024, 1, 6), Some(date(2024, 1, 10))),
        client(7, "James", "Miller", "Miller Finance", "Finance", S::Inactive, P::Low, "Bob Agent", "Social Media", date(2024, 1, 7), Some(date(2023, 12, 20))),
        client(8, "Anna", "Martinez", "Tech Corp", "Technology", S::Client, P::High, "Alice Agent", "Referral", date(2024, 1, 8), Some(date(2024, 1, 16))),
        client(9, "Robert", "Taylor", "Taylor Builders", "Construction", S::Prospect, P::Medium, "Agent User", "Cold Call", date(2024, 1, 9), Some(date(2024, 1, 11))),
        client(10, "Maria", "Anderson", "Anderson Health", "Healthcare", S::Lead, P::High, "Jane Agent", "Website", date(2024, 1, 10), None),
        client(11, "William", "Thomas", "Thomas Legal", "Legal", S::Client, P::Low, "Agent User", "Trade Show", date(2024, 1, 11), Some(date(2024, 1, 17))),
        client(12, "Sophia", "Smith", "Smith Consulting", "Consulting", S::Prospect, P::Medium, "Alice Agent", "Referral", date(2024, 1, 12), Some(date(2024, 1, 18))),
        // Likely duplicates of clients 1 and 2.
        Client {
            email: "j.smith@techcorp.com".to_string(),
            phone: phone(1),
            ..client(13, "John", "Smith", "Tech Corp", "Technology", S::Lead, P::Medium, "Bob Agent", "Website", date(2024, 1, 13), None)
        },
        Client {
            email: "sarah.johnson@design.com".to_string(),
            phone: "(555) 234-5679".to_string(),
            ..client(14, "Sarah", "Johnson", "Design Studio Inc", "Design", S::Lead, P::Low, "Alice Agent", "Trade Show", date(2024, 1, 14), None)
        },
    ]
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: 1,
            name: AGENT_NAMES[0].to_string(),
            email: "agent@company.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            status: AgentStatus::Active,
            clients_assigned: 15,
            join_date: date(2023, 6, 15),
            notes_this_month: 24,
        },
        Agent {
            id: 2,
            name: AGENT_NAMES[1].to_string(),
            email: "jane@company.com".to_string(),
            phone: "(555) 234-5678".to_string(),
            status: AgentStatus::Active,
            clients_assigned: 12,
            join_date: date(2023, 8, 20),
            notes_this_month: 18,
        },
        Agent {
            id: 3,
            name: AGENT_NAMES[2].to_string(),
            email: "bob@company.com".to_string(),
            phone: "(555) 345-6789".to_string(),
            status: AgentStatus::Inactive,
            clients_assigned: 8,
            join_date: date(2023, 4, 10),
            notes_this_month: 5,
        },
        Agent {
            id: 4,
            name: AGENT_NAMES[3].to_string(),
            email: "alice@company.com".to_string(),
            phone: "(555) 456-7890".to_string(),
            status: AgentStatus::Active,
            clients_assigned: 10,
            join_date: date(2023, 9, 1),
            notes_this_month: 15,
        },
    ]
}

pub fn visit_notes() -> Vec<VisitNote> {
    let note = |id, client_id, client: &str, agent: &str, note_type, content: &str, on, minutes| {
        VisitNote {
            id,
            client_id,
            client_name: client.to_string(),
            agent_name: agent.to_string(),
            note_type,
            content: content.to_string(),
            date: on,
            duration_minutes: Some(minutes),
        }
    };

    vec![
        note(1, 1, "John Smith", "Agent User", NoteType::Phone, "Discussed new service requirements. Client interested in premium package.", date(2024, 1, 15), 30),
        note(2, 2, "Sarah Johnson", "Jane Agent", NoteType::Meeting, "Reviewed proposal details and pricing. Client needs time to discuss with team.", date(2024, 1, 14), 45),
        note(3, 3, "Mike Wilson", "Bob Agent", NoteType::Email, "Sent product information and scheduled next call.", date(2024, 1, 13), 15),
        note(4, 4, "Emily Davis", "Alice Agent", NoteType::Visit, "On-site visit, walked through onboarding checklist.", date(2024, 1, 12), 60),
        note(5, 1, "John Smith", "Agent User", NoteType::Meeting, "Demo of premium package, follow-up contract review next week.", date(2024, 1, 16), 50),
        note(6, 9, "Robert Taylor", "Agent User", NoteType::Phone, "Intro call, sent brochure.", date(2024, 1, 11), 20),
    ]
}
