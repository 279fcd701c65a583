//! The record listings and their table configuration

use log::info;

use crm_lib::auth::Role;
use crm_lib::model::Record;
use crm_lib::model::Value;
use crm_lib::nav::Route;
use crm_lib::nav::nav_items;
use crm_lib::table::Alignment;
use crm_lib::table::Column;
use crm_lib::table::DataTable;
use crm_lib::table::RowAction;

use crate::actions::ActionQueue;
use crate::actions::ActionRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Clients,
    Agents,
    Notes,
    Duplicates,
}

impl Listing {
    /// Page this listing stands for, given the viewer's role.
    pub fn route(self, role: Role) -> Route {
        match (self, role) {
            (Listing::Clients, Role::Admin) => Route::AllClients,
            (Listing::Clients, Role::Agent) => Route::MyClients,
            (Listing::Agents, _) => Route::ManageAgents,
            (Listing::Notes, Role::Admin) => Route::VisitNotesManager,
            (Listing::Notes, Role::Agent) => Route::VisitNotes,
            (Listing::Duplicates, _) => Route::DuplicateChecker,
        }
    }

    /// Sidebar label of the listing's page for `role`.
    pub fn title(self, role: Role) -> &'static str {
        let route = self.route(role);
        nav_items(role)
            .iter()
            .find(|item| item.route == route)
            .map(|item| item.label)
            .unwrap_or(route.label())
    }

    pub fn columns(self) -> Vec<Column> {
        match self {
            Listing::Clients => vec![
                Column::new("lastName", "Name").sortable().render(|_, row| {
                    format!("{} {}", text(row, "firstName"), text(row, "lastName"))
                }),
                Column::new("company", "Company").sortable(),
                Column::new("email", "Email"),
                Column::new("phone", "Phone"),
                Column::new("status", "Status").sortable().render(title_value),
                Column::new("priority", "Priority").sortable().render(title_value),
                Column::new("assignedAgent", "Agent").sortable(),
                Column::new("lastContact", "Last Contact")
                    .sortable()
                    .render(|value, _| match value {
                        Value::Null => "Never".to_string(),
                        other => other.to_string(),
                    }),
            ],
            Listing::Agents => vec![
                Column::new("name", "Name").sortable(),
                Column::new("email", "Email"),
                Column::new("phone", "Phone"),
                Column::new("status", "Status").sortable().render(title_value),
                Column::new("clientsAssigned", "Clients")
                    .sortable()
                    .align(Alignment::Right),
                Column::new("notesThisMonth", "Notes This Month")
                    .sortable()
                    .align(Alignment::Right),
                Column::new("joinDate", "Joined").sortable(),
            ],
            Listing::Notes => vec![
                Column::new("date", "Date").sortable(),
                Column::new("clientName", "Client").sortable(),
                Column::new("agentName", "Agent").sortable(),
                Column::new("type", "Type").sortable().render(title_value),
                Column::new("duration", "Duration")
                    .sortable()
                    .align(Alignment::Right)
                    .render(|value, _| match value {
                        Value::Null => String::new(),
                        minutes => format!("{} min", minutes),
                    }),
                Column::new("content", "Notes"),
            ],
            Listing::Duplicates => vec![
                Column::new("similarity", "Match %")
                    .sortable()
                    .align(Alignment::Right)
                    .render(|value, _| format!("{}%", value)),
                Column::new("clients", "Potential Duplicates").render(|value, _| match value {
                    Value::List(clients) => clients
                        .iter()
                        .map(|client| match client {
                            Value::Record(client) => {
                                format!("{} <{}>", text(client, "name"), text(client, "email"))
                            }
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(" / "),
                    other => other.to_string(),
                }),
                Column::new("matchingFields", "Matching Fields").render(|value, _| match value {
                    Value::List(fields) => fields
                        .iter()
                        .map(|f| f.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                    other => other.to_string(),
                }),
                Column::new("riskLevel", "Risk Level").sortable().render(title_value),
            ],
        }
    }

    /// Actions offered on one row. Deleting is for admins only.
    pub fn actions(self, role: Role, row: &Record, queue: &ActionQueue) -> Vec<RowAction> {
        let mut actions = vec![request(queue, "view", "View")];
        match self {
            Listing::Agents => {
                let active = row.get_string("status").ok().flatten() == Some("active");
                actions.push(if active {
                    request(queue, "deactivate", "Deactivate")
                } else {
                    request(queue, "activate", "Activate")
                });
            }
            Listing::Duplicates => actions.push(request(queue, "delete", "Remove Duplicate")),
            Listing::Clients | Listing::Notes => {
                if role == Role::Admin {
                    actions.push(request(queue, "delete", "Delete"));
                }
            }
        }
        actions
    }

    /// Table configured for this listing. Row actions land in `queue`.
    pub fn table(self, items_per_page: usize, role: Role, queue: &ActionQueue) -> DataTable {
        let queue = queue.clone();
        DataTable::new(self.columns())
            .items_per_page(items_per_page)
            .row_actions(move |row| self.actions(role, row, &queue))
            .on_row_select(|row| info!("row selected: {}", describe(row)))
    }

    /// Comma-separated keys of the sortable columns.
    pub fn sortable_keys(self) -> String {
        self.columns()
            .into_iter()
            .filter(|c| c.sortable)
            .map(|c| c.key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Action whose handler queues the row for [`crate::actions::apply`].
fn request(queue: &ActionQueue, id: &'static str, label: &'static str) -> RowAction {
    let queue = queue.clone();
    RowAction::new(id, label, move |row| {
        info!("{} requested for {}", id, describe(row));
        queue.push(ActionRequest {
            action: id,
            row: row.clone(),
        });
    })
}

/// `entity#id` for messages.
pub fn describe(row: &Record) -> String {
    format!(
        "{}#{}",
        row.entity_name(),
        row.key().unwrap_or_else(|| "?".to_string())
    )
}

fn text(row: &Record, field: &str) -> String {
    row.get(field).map(|v| v.to_string()).unwrap_or_default()
}

fn title_value(value: &Value, _: &Record) -> String {
    title_case(&value.to_string())
}

/// Upper-cases the first character.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_per_role() {
        assert_eq!(Listing::Clients.route(Role::Agent), Route::MyClients);
        assert_eq!(Listing::Clients.route(Role::Admin), Route::AllClients);
        assert_eq!(Listing::Notes.title(Role::Admin), "Visit Notes Manager");
        assert_eq!(Listing::Agents.title(Role::Agent), "Manage Agents");
    }

    #[test]
    fn test_agent_actions_follow_status() {
        let active = Record::new("agent").set("id", 1).set("status", "active");
        let inactive = Record::new("agent").set("id", 2).set("status", "inactive");

        let queue = ActionQueue::new();
        let ids = |row: &Record| -> Vec<String> {
            Listing::Agents
                .actions(Role::Admin, row, &queue)
                .into_iter()
                .map(|a| a.id)
                .collect()
        };
        assert_eq!(ids(&active), vec!["view", "deactivate"]);
        assert_eq!(ids(&inactive), vec!["view", "activate"]);
    }

    #[test]
    fn test_only_admins_delete() {
        let queue = ActionQueue::new();
        let row = Record::new("client").set("id", 1);
        let ids = |role| -> Vec<String> {
            Listing::Clients
                .actions(role, &row, &queue)
                .into_iter()
                .map(|a| a.id)
                .collect()
        };
        assert_eq!(ids(Role::Agent), vec!["view"]);
        assert_eq!(ids(Role::Admin), vec!["view", "delete"]);
    }

    #[test]
    fn test_triggered_action_is_queued() {
        let queue = ActionQueue::new();
        let rows = vec![Record::new("visit_note").set("id", 4)];
        let table = Listing::Notes.table(10, Role::Admin, &queue);

        assert!(table.trigger_action(&rows, "", 0, "delete"));
        let requests = queue.drain();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].action, "delete");
        assert_eq!(requests[0].row.key().as_deref(), Some("4"));
    }

    #[test]
    fn test_note_duration_renders() {
        let columns = Listing::Notes.columns();
        let duration = columns.iter().find(|c| c.key == "duration").unwrap();

        let timed = Record::new("visit_note").set("duration", 30);
        assert_eq!(duration.cell(&timed), "30 min");
        let untimed = Record::new("visit_note").set("duration", Value::Null);
        assert_eq!(duration.cell(&untimed), "");
    }

    #[test]
    fn test_duplicate_columns_render() {
        let pair = vec![
            Record::new("client")
                .set("id", 1)
                .set("name", "John Smith")
                .set("email", "john.smith@email.com"),
            Record::new("client")
                .set("id", 13)
                .set("name", "John Smith")
                .set("email", "j.smith@techcorp.com"),
        ];
        let row = Record::new("duplicate")
            .set("id", 1)
            .set("similarity", 95)
            .set("clients", pair)
            .set("matchingFields", vec!["name", "phone", "company"])
            .set("riskLevel", "high");
        let cells: Vec<String> = Listing::Duplicates
            .columns()
            .iter()
            .map(|c| c.cell(&row))
            .collect();
        assert_eq!(cells[0], "95%");
        assert_eq!(
            cells[1],
            "John Smith <john.smith@email.com> / John Smith <j.smith@techcorp.com>"
        );
        assert_eq!(cells[2], "name, phone, company");
        assert_eq!(cells[3], "High");
        assert_eq!(Listing::Duplicates.sortable_keys(), "similarity, riskLevel");
    }

    #[test]
    fn test_client_columns_render() {
        let row = Record::new("client")
            .set("id", 5)
            .set("firstName", "David")
            .set("lastName", "Brown")
            .set("status", "prospect")
            .set("lastContact", Value::Null);
        let cells: Vec<String> = Listing::Clients
            .columns()
            .iter()
            .map(|c| c.cell(&row))
            .collect();
        assert_eq!(cells[0], "David Brown");
        assert_eq!(cells[4], "Prospect");
        assert_eq!(cells[7], "Never");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("lead"), "Lead");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_describe() {
        let row = Record::new("client").set("id", 3);
        assert_eq!(describe(&row), "client#3");
        assert_eq!(describe(&Record::new("client")), "client#?");
    }
}
