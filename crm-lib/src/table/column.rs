//! Column descriptors and cell renderers.

use std::fmt;
use std::sync::Arc;

use crate::model::Record;
use crate::model::Value;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Renders one cell from the raw field value and the whole row.
///
/// The value is [`Value::Null`] when the row lacks the column's field.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Column configuration.
///
/// A column projects one field of every row. Its `key` names the field, the
/// `label` is the header text, and an optional renderer turns the raw value
/// into display text.
///
/// # Examples
///
/// ```
/// use crm_lib::table::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("name", "Name")
///         .sortable()
///         .render(|_, row| {
///             let first = row.get("firstName").map(|v| v.to_string()).unwrap_or_default();
///             let last = row.get("lastName").map(|v| v.to_string()).unwrap_or_default();
///             format!("{} {}", first, last)
///         }),
///     Column::new("email", "Contact"),
///     Column::new("visits", "Visits").sortable().align(Alignment::Right),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field name, unique within a column set.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether header clicks sort by this column.
    pub sortable: bool,
    /// Horizontal alignment
    pub align: Alignment,
    /// Custom cell renderer; the raw value is shown when absent.
    pub renderer: Option<CellRenderer>,
}

impl Column {
    /// Create a new, non-sortable column without a renderer.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            align: Alignment::Left,
            renderer: None,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and respond to
    /// header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a custom cell renderer.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Produce the display text of this column for a row.
    ///
    /// Missing fields render as an empty cell.
    pub fn cell(&self, row: &Record) -> String {
        match &self.renderer {
            Some(renderer) => {
                let value = row.get(&self.key).unwrap_or(&Value::Null);
                renderer(value, row)
            }
            None => row
                .get(&self.key)
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
