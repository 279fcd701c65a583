//! Free-text row filtering.

use crate::model::Record;
use crate::model::Value;

/// Returns `true` if any field of `row` contains `term`, ignoring case.
///
/// Every field is considered, `id` included. An empty term matches every
/// row. Null values never match; nested records and list items match when
/// one of their own values does.
///
/// # Example
///
/// ```
/// use crm_lib::model::Record;
/// use crm_lib::table::matches_search;
///
/// let row = Record::new("client")
///     .set("firstName", "John")
///     .set("lastName", "Smith");
///
/// assert!(matches_search(&row, "smith"));
/// assert!(!matches_search(&row, "zzz"));
/// ```
pub fn matches_search(row: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    row.values().any(|value| value_matches(value, &needle))
}

/// `needle` must already be lower-cased.
fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::Null => false,
        Value::Record(nested) => nested.values().any(|v| value_matches(v, needle)),
        Value::List(items) => {
            value.to_string().to_lowercase().contains(needle)
                || items.iter().any(|v| value_matches(v, needle))
        }
        other => other.to_string().to_lowercase().contains(needle),
    }
}

/// Keep the rows matching `term`, preserving their order.
pub fn filter_rows<'a>(rows: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| matches_search(row, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i32, first: &str, last: &str) -> Record {
        Record::new("client")
            .set("id", id)
            .set("firstName", first)
            .set("lastName", last)
    }

    #[test]
    fn test_empty_term_keeps_all() {
        let rows = vec![client(1, "John", "Smith"), client(2, "Sarah", "Johnson")];
        assert_eq!(filter_rows(&rows, "").len(), 2);
    }

    #[test]
    fn test_id_field_is_searchable() {
        let rows = vec![client(12, "John", "Smith"), client(3, "Sarah", "Johnson")];
        let hits = filter_rows(&rows, "12");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key().as_deref(), Some("12"));
    }

    #[test]
    fn test_null_never_matches() {
        let row = Record::new("client").set("notes", Value::Null);
        assert!(!matches_search(&row, "null"));
    }

    #[test]
    fn test_nested_record_values() {
        let agent = Record::new("agent").set("name", "Jane Agent");
        let row = Record::new("client").set("id", 1).set("agent", agent);
        assert!(matches_search(&row, "jane"));
    }

    #[test]
    fn test_records_inside_lists() {
        let pair = vec![
            Record::new("client").set("id", 1).set("email", "john.smith@email.com"),
            Record::new("client").set("id", 13).set("email", "j.smith@techcorp.com"),
        ];
        let row = Record::new("duplicate")
            .set("id", 1)
            .set("clients", pair)
            .set("matchingFields", vec!["name", "phone"]);
        assert!(matches_search(&row, "techcorp"));
        assert!(matches_search(&row, "name,phone"));
        assert!(!matches_search(&row, "email.com,"));
    }
}
