//! Integration tests for the mock record directory.

use std::time::Duration;

use crm_lib::auth::*;
use crm_lib::directory::*;
use crm_lib::error::DirectoryError;
use crm_lib::forms::ClientForm;
use crm_lib::forms::VisitNoteForm;
use crm_lib::model::Value;
use crm_lib::table::{Column, DataTable};

fn directory() -> MockDirectory {
    MockDirectory::with_delay(Duration::ZERO)
}

async fn session(email: &str) -> Session {
    LoginFlow::with_delay(Duration::ZERO)
        .submit_credentials(email, "secret")
        .await
        .unwrap()
        .verify("123456")
        .await
        .unwrap()
}

#[tokio::test]
async fn test_fetch_each_entity() {
    let dir = directory();
    assert_eq!(dir.fetch(CLIENT_ENTITY).await.unwrap().len(), 14);
    assert_eq!(dir.fetch(AGENT_ENTITY).await.unwrap().len(), 4);
    assert_eq!(dir.fetch(VISIT_NOTE_ENTITY).await.unwrap().len(), 6);

    let rows = dir.fetch(CLIENT_ENTITY).await.unwrap();
    assert!(rows.iter().all(|r| r.entity_name() == CLIENT_ENTITY && r.key().is_some()));
}

#[tokio::test]
async fn test_unknown_entity() {
    let err = directory().fetch("invoice").await.unwrap_err();
    assert!(matches!(err, DirectoryError::UnknownEntity(ref e) if e == "invoice"));
}

#[tokio::test]
async fn test_agents_only_see_their_clients() {
    let dir = directory();

    let agent = session("agent@company.com").await;
    let mine = dir.clients_for(&agent).await;
    assert_eq!(mine.len(), 4);
    assert!(
        mine.iter()
            .all(|r| r.get_string("assignedAgent").unwrap() == Some("Agent User"))
    );

    let admin = session("admin@company.com").await;
    assert_eq!(dir.clients_for(&admin).await.len(), 14);

    let notes = dir.visit_notes_for(&agent).await;
    assert_eq!(notes.len(), 3);
}

#[tokio::test]
async fn test_client_filter() {
    let dir = directory();
    let leads = dir
        .clients(&ClientFilter {
            status: Some(ClientStatus::Lead),
            ..Default::default()
        })
        .await;
    assert!(!leads.is_empty());
    assert!(leads.iter().all(|r| r.get_string("status").unwrap() == Some("lead")));

    let none = dir
        .clients(&ClientFilter {
            status: Some(ClientStatus::Inactive),
            agent: Some("Jane Agent".to_string()),
            ..Default::default()
        })
        .await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_add_client_validates() {
    let dir = directory();
    let err = dir
        .add_client(ClientForm {
            first_name: "Ada".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    let DirectoryError::Validation(validation) = err else {
        panic!("expected validation error");
    };
    assert!(validation.has_field("email"));
    assert_eq!(dir.fetch(CLIENT_ENTITY).await.unwrap().len(), 14);
}

#[tokio::test]
async fn test_add_and_delete_client() {
    let dir = directory();
    let client = dir
        .add_client(ClientForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@email.com".into(),
            phone: "(555) 000-0000".into(),
            industry: "Mathematics".into(),
            assigned_agent: "Jane Agent".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(client.id, 15);
    assert_eq!(client.status, ClientStatus::Lead);
    assert_eq!(client.industry, "Mathematics");
    assert_eq!(dir.client(15).await.map(|c| c.full_name()).as_deref(), Some("Ada Lovelace"));

    assert!(dir.delete_client(15).await);
    assert!(!dir.delete_client(15).await);
    assert!(dir.client(15).await.is_none());
}

#[tokio::test]
async fn test_empty_directory_renders_placeholder() {
    let dir = MockDirectory::empty(Duration::ZERO);
    let rows = dir.fetch(CLIENT_ENTITY).await.unwrap();

    let mut table = DataTable::new(vec![Column::new("firstName", "First Name")]);
    let view = table.render(&rows, "");
    assert!(view.is_empty());
    assert!(view.pagination.is_none());
}

#[tokio::test]
async fn test_search_seeded_clients_for_smith() {
    let rows = directory().fetch(CLIENT_ENTITY).await.unwrap();
    let mut table = DataTable::new(vec![
        Column::new("firstName", "First Name").sortable(),
        Column::new("lastName", "Last Name"),
    ]);
    table.click_header("firstName");

    let view = table.render(&rows, "smith");
    let names: Vec<_> = view.body.rows().iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(names, vec!["John", "John", "Sophia"]);
}

#[tokio::test]
async fn test_agent_roster() {
    assert_eq!(directory().agent_names().await, AGENT_NAMES.to_vec());
}

#[tokio::test]
async fn test_search_page_filters() {
    let dir = directory();
    let referred_tech = dir
        .clients(&ClientFilter {
            source: Some("Referral".to_string()),
            industry: Some("Technology".to_string()),
            ..Default::default()
        })
        .await;
    let ids: Vec<_> = referred_tech.iter().filter_map(|r| r.key()).collect();
    assert_eq!(ids, vec!["1", "8"]);

    let high = dir
        .clients(&ClientFilter {
            priority: Some(Priority::High),
            agent: Some("Agent User".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(high.len(), 2);
    assert!(high.iter().all(|r| r.get_string("priority").unwrap() == Some("high")));

    let nobody = dir
        .clients(&ClientFilter {
            industry: Some("technology".to_string()),
            ..Default::default()
        })
        .await;
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_add_visit_note() {
    let dir = directory();
    let agent = session("agent@company.com").await;

    let note = dir
        .add_visit_note(
            &agent,
            VisitNoteForm {
                client_id: Some(5),
                note_type: NoteType::Other,
                content: "  Left a voicemail.  ".into(),
                duration_minutes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(note.id, 7);
    assert_eq!(note.client_name, "David Brown");
    assert_eq!(note.agent_name, "Agent User");
    assert_eq!(note.content, "Left a voicemail.");

    let rows = dir.visit_notes_for(&agent).await;
    assert_eq!(rows.len(), 4);
    let added = rows.iter().find(|r| r.key().as_deref() == Some("7")).unwrap();
    assert_eq!(added.get_string("type").unwrap(), Some("other"));
    assert_eq!(added.get("duration"), Some(&Value::Null));

    let agents = dir.fetch(AGENT_ENTITY).await.unwrap();
    assert_eq!(agents[0].get_int("notesThisMonth").unwrap(), Some(25));
}

#[tokio::test]
async fn test_visit_note_requires_client_and_content() {
    let dir = directory();
    let agent = session("agent@company.com").await;

    let err = dir
        .add_visit_note(
            &agent,
            VisitNoteForm {
                content: "   ".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let DirectoryError::Validation(validation) = err else {
        panic!("expected validation error");
    };
    assert!(validation.has_field("clientId"));
    assert!(validation.has_field("content"));
    assert_eq!(dir.fetch(VISIT_NOTE_ENTITY).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_agent_cannot_note_someone_elses_client() {
    let dir = directory();
    let form = VisitNoteForm {
        client_id: Some(2),
        content: "Checked in".into(),
        ..Default::default()
    };

    let agent = session("agent@company.com").await;
    let err = dir.add_visit_note(&agent, form.clone()).await.unwrap_err();
    assert!(matches!(
        err,
        DirectoryError::NotFound { entity: CLIENT_ENTITY, id: 2 }
    ));

    let admin = session("admin@company.com").await;
    let note = dir.add_visit_note(&admin, form).await.unwrap();
    assert_eq!(note.agent_name, "Admin User");

    let missing = VisitNoteForm {
        client_id: Some(99),
        content: "Nobody home".into(),
        ..Default::default()
    };
    assert!(dir.add_visit_note(&admin, missing).await.is_err());
}

#[tokio::test]
async fn test_delete_visit_note() {
    let dir = directory();
    assert!(dir.delete_visit_note(3).await);
    assert!(!dir.delete_visit_note(3).await);

    let rows = dir.fetch(VISIT_NOTE_ENTITY).await.unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.key().as_deref() != Some("3")));
}

#[tokio::test]
async fn test_toggle_agent_status() {
    let dir = directory();
    let bob = dir.set_agent_status(3, AgentStatus::Inactive.toggled()).await.unwrap();
    assert_eq!(bob.status, AgentStatus::Active);

    let rows = dir.fetch(AGENT_ENTITY).await.unwrap();
    let row = rows.iter().find(|r| r.key().as_deref() == Some("3")).unwrap();
    assert_eq!(row.get_string("status").unwrap(), Some("active"));

    let err = dir.set_agent_status(42, AgentStatus::Active).await.unwrap_err();
    assert_eq!(err.to_string(), "agent 42 not found");
}

#[tokio::test]
async fn test_duplicate_pairs() {
    let dir = directory();

    let all = dir.duplicates(DuplicateThreshold::All).await;
    assert_eq!(all.len(), 2);

    let john = &all[0];
    assert_eq!(john.entity_name(), DUPLICATE_ENTITY);
    assert_eq!(john.get_int("similarity").unwrap(), Some(95));
    assert_eq!(john.get_string("riskLevel").unwrap(), Some("high"));
    let fields: Vec<String> = john
        .get_list("matchingFields")
        .unwrap()
        .unwrap()
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(fields, vec!["name", "phone", "company"]);
    let ids: Vec<String> = john
        .get_list("clients")
        .unwrap()
        .unwrap()
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(ids, vec!["client#1", "client#13"]);

    let sarah = &all[1];
    assert_eq!(sarah.get_int("similarity").unwrap(), Some(85));
    assert_eq!(sarah.get_string("riskLevel").unwrap(), Some("medium"));
    assert_eq!(sarah.get("matchingFields").map(|v| v.to_string()).as_deref(), Some("name,company"));

    assert_eq!(dir.duplicates(DuplicateThreshold::High).await.len(), 1);
    assert_eq!(dir.duplicates(DuplicateThreshold::Medium).await.len(), 2);
    assert_eq!(dir.fetch(DUPLICATE_ENTITY).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_duplicates_sort_by_similarity() {
    let rows = directory().duplicates(DuplicateThreshold::All).await;
    let mut table = DataTable::new(vec![
        Column::new("similarity", "Match %").sortable(),
        Column::new("matchingFields", "Matching Fields"),
        Column::new("riskLevel", "Risk Level").sortable(),
    ]);

    table.click_header("similarity");
    let view = table.render(&rows, "");
    let first: Vec<_> = view.body.rows().iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(first, vec!["85", "95"]);
    assert_eq!(view.body.rows()[0].cells[1], "name,company");

    table.click_header("riskLevel");
    let view = table.render(&rows, "");
    let risk: Vec<_> = view.body.rows().iter().map(|r| r.cells[2].as_str()).collect();
    assert_eq!(risk, vec!["high", "medium"]);

    let view = table.render(&rows, "phone");
    assert_eq!(view.filtered_count, 1);
}

#[tokio::test]
async fn test_resolving_a_duplicate_removes_it() {
    let dir = directory();
    assert!(dir.delete_client(13).await);
    let rows = dir.duplicates(DuplicateThreshold::All).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_string("riskLevel").unwrap(), Some("medium"));
}
