//! Render output of a [`DataTable`](super::DataTable).
//!
//! A `TableView` is plain data: header cells, a body and optional pagination
//! controls. Front-ends (the terminal printer in `crm-cli`, tests) draw it
//! without touching the table state.

use super::column::Alignment;
use super::page::Pagination;
use super::state::Direction;

/// Header of the trailing actions column.
pub const ACTIONS_LABEL: &str = "Actions";

/// Placeholder text of the empty body.
pub const EMPTY_MESSAGE: &str = "No data found";

/// Sort indicator drawn next to a sortable header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Sortable but not the active field.
    Unsorted,
    Asc,
    Desc,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Asc => "↑",
            SortIndicator::Desc => "↓",
        }
    }
}

impl From<Direction> for SortIndicator {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => SortIndicator::Asc,
            Direction::Desc => SortIndicator::Desc,
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub align: Alignment,
    /// `None` for non-sortable columns.
    pub indicator: Option<SortIndicator>,
}

/// A row action as presented in the actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub id: String,
    pub label: String,
}

/// One rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Record id, or the row's position in the filtered set when it has none.
    pub key: String,
    /// One display string per column, in column order.
    pub cells: Vec<String>,
    /// Trailing actions; empty when the table has no row actions.
    pub actions: Vec<ActionView>,
}

/// Table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Single placeholder row spanning `colspan` columns.
    Empty { colspan: usize },
    Rows(Vec<RenderedRow>),
}

impl TableBody {
    /// Number of visual rows, counting the placeholder as one.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Empty { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }

    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            TableBody::Empty { .. } => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

/// Complete render of one table frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    /// Whether a trailing actions column is present.
    pub has_actions: bool,
    pub body: TableBody,
    /// Present only when there is more than one page.
    pub pagination: Option<Pagination>,
    /// Page actually shown, after clamping.
    pub current_page: usize,
    pub total_pages: usize,
    /// Rows left after filtering.
    pub filtered_count: usize,
}

impl TableView {
    /// Number of columns including the actions column.
    pub fn column_count(&self) -> usize {
        self.headers.len() + usize::from(self.has_actions)
    }

    /// Returns `true` if the body shows the empty placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }
}
