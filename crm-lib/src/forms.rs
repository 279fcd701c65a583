//! Form models with presence checks
//!
//! Validation is limited to "required field is not blank". Formats (email,
//! phone, dates) are accepted as typed.

use serde::Deserialize;
use serde::Serialize;

use crate::directory::ClientStatus;
use crate::directory::NoteType;
use crate::directory::Priority;
use crate::error::FieldValidationError;
use crate::error::ValidationError;

/// The "Add Client" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientForm {
    // Personal information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,

    // Address
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,

    // Business
    pub company: String,
    pub job_title: String,
    pub industry: String,
    pub annual_income: String,

    // CRM
    pub source: String,
    pub referral_by: String,
    pub status: ClientStatus,
    pub assigned_agent: String,
    pub priority: Priority,
    pub notes: String,
}

impl ClientForm {
    /// Required fields as `(form field name, value)`.
    fn required(&self) -> [(&'static str, &str); 4] {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }

    /// Check that every required field is filled in.
    ///
    /// All blank fields are reported at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let errors: Vec<FieldValidationError> = self
            .required()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| FieldValidationError::required(field))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "United States".to_string(),
            company: String::new(),
            job_title: String::new(),
            industry: String::new(),
            annual_income: String::new(),
            source: String::new(),
            referral_by: String::new(),
            status: ClientStatus::Lead,
            assigned_agent: String::new(),
            priority: Priority::Medium,
            notes: String::new(),
        }
    }
}

/// The "Add Visit Note" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitNoteForm {
    pub client_id: Option<i32>,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub content: String,
    pub duration_minutes: Option<i32>,
}

impl VisitNoteForm {
    /// A client must be chosen and the note must have content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.client_id.is_none() {
            errors.push(FieldValidationError::new("clientId", "select a client"));
        }
        if self.content.trim().is_empty() {
            errors.push(FieldValidationError::new("content", "add note content"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}
