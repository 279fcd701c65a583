//! Dynamic entity record

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// Name of the identity field every listed record is expected to carry.
pub const ID_FIELD: &str = "id";

/// A dynamic entity record (one table row).
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. No schema is enforced across records; the table only
/// reads the fields its columns reference plus `id`.
///
/// # Example
///
/// ```
/// use crm_lib::model::Record;
///
/// let record = Record::new("client")
///     .set("id", 1)
///     .set("firstName", "John")
///     .set("lastName", "Smith");
///
/// assert_eq!(record.get_string("firstName").unwrap(), Some("John"));
/// assert_eq!(record.key().as_deref(), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The logical name of the entity.
    pub(crate) entity_name: String,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record for the given entity.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            fields: HashMap::new(),
        }
    }

    /// Builds a record from a JSON object. Non-object JSON yields an empty record.
    pub fn from_json(entity_name: impl Into<String>, json: serde_json::Value) -> Self {
        let mut record = Self::new(entity_name);
        if let serde_json::Value::Object(map) = json {
            for (field, value) in map {
                record.insert(field, Value::from(value));
            }
        }
        record
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Returns the entity logical name.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Returns the identity value, if the record has a non-null `id`.
    pub fn id(&self) -> Option<&Value> {
        self.fields.get(ID_FIELD).filter(|v| !v.is_null())
    }

    /// Returns the identity as a string, used as the stable render key.
    pub fn key(&self) -> Option<String> {
        self.id().map(|v| v.to_string())
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Iterates over the field values in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as i64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "long", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a Decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "decimal",
                other.type_name(),
            )),
        }
    }

    /// Gets a date field value.
    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(field, "date", other.type_name())),
        }
    }

    /// Gets a list field value.
    pub fn get_list(&self, field: &str) -> Result<Option<&[Value]>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::List(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(FieldError::type_mismatch(field, "list", other.type_name())),
        }
    }

    /// Gets a nested Record field value.
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r.as_ref())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "record",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new("client")
            .set("id", 7)
            .set("company", "Tech Corp")
            .set("lastContact", Value::Null);

        assert_eq!(record.get_int("id").unwrap(), Some(7));
        assert_eq!(record.get_long("id").unwrap(), Some(7));
        assert_eq!(record.get_string("company").unwrap(), Some("Tech Corp"));
        assert_eq!(record.get_string("lastContact").unwrap(), None);
        assert!(matches!(
            record.get_string("missing"),
            Err(FieldError::Missing { .. })
        ));
        assert!(matches!(
            record.get_bool("company"),
            Err(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_key_ignores_null_id() {
        let record = Record::new("client").set("id", Value::Null);
        assert_eq!(record.key(), None);
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "id": 3,
            "name": "Sarah Johnson",
            "tags": ["vip", "referral"],
            "score": 4.5
        });
        let record = Record::from_json("client", json);

        assert_eq!(record.get_int("id").unwrap(), Some(3));
        assert_eq!(record.get_float("score").unwrap(), Some(4.5));
        assert_eq!(record.get("tags").map(|v| v.to_string()).as_deref(), Some("vip,referral"));
    }
}
