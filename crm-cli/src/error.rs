//! CLI error type

use crm_lib::auth::Role;
use crm_lib::error::AuthError;
use crm_lib::error::DirectoryError;
use crm_lib::error::FieldError;
use crm_lib::error::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("{role} accounts cannot open {page}")]
    Forbidden { role: Role, page: &'static str },

    #[error("unknown {kind} '{value}' (expected {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("column '{key}' is not sortable (sortable: {available})")]
    NotSortable { key: String, available: String },

    #[error("no row {0} on the shown page")]
    NoSuchRow(usize),

    #[error("no action '{action}' on row {index}")]
    NoSuchAction { action: String, index: usize },

    #[error("{0} has no id")]
    MissingId(String),

    #[error("cannot {action} a {entity}")]
    UnsupportedAction { action: String, entity: String },
}
