//! DataTable - search, sort and paginate a record set.
//!
//! The table provides:
//! - Free-text search over every field of a row
//! - Stable single-key sorting toggled from sortable headers
//! - Pagination with Previous/Next and numbered page buttons
//! - Custom cell renderers per column
//! - Per-row actions and row selection callbacks
//!
//! Rows and columns belong to the caller and are passed in on every render;
//! the table never mutates them. The only state it owns is the current page
//! and the sort (see [`TableState`]).
//!
//! # Example
//!
//! ```
//! use crm_lib::model::Record;
//! use crm_lib::table::{Column, DataTable, RowAction};
//!
//! let rows = vec![
//!     Record::new("client").set("id", 1).set("name", "John Smith"),
//!     Record::new("client").set("id", 2).set("name", "Sarah Johnson"),
//! ];
//!
//! let mut table = DataTable::new(vec![Column::new("name", "Name").sortable()])
//!     .items_per_page(10)
//!     .row_actions(|_| vec![RowAction::new("view", "View", |_| {})]);
//!
//! table.click_header("name");
//! let view = table.render(&rows, "smith");
//! assert_eq!(view.body.rows().len(), 1);
//! assert_eq!(view.body.rows()[0].cells, vec!["John Smith".to_string()]);
//! ```

mod column;
mod filter;
mod page;
mod sort;
mod state;
mod view;

use std::fmt;
use std::sync::Arc;

use log::debug;
use log::warn;

use crate::model::Record;

pub use column::{Alignment, CellRenderer, Column};
pub use filter::{filter_rows, matches_search};
pub use page::{DEFAULT_ITEMS_PER_PAGE, Pagination, page_range, total_pages};
pub use sort::{compare_values, sort_rows};
pub use state::{Direction, SortState, TableState};
pub use view::{
    ACTIONS_LABEL, ActionView, EMPTY_MESSAGE, HeaderCell, RenderedRow, SortIndicator, TableBody,
    TableView,
};

/// Callback invoked with the activated row.
pub type RowCallback = Arc<dyn Fn(&Record) + Send + Sync>;

/// Produces the actions offered for one row.
pub type RowActionsFn = Arc<dyn Fn(&Record) -> Vec<RowAction> + Send + Sync>;

/// An interactive control rendered in a row's actions cell.
///
/// The behavior belongs to the host page; the table only invokes `handler`
/// with the row it was triggered on.
#[derive(Clone)]
pub struct RowAction {
    pub id: String,
    pub label: String,
    handler: RowCallback,
}

impl RowAction {
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Record) + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            handler: Arc::new(handler),
        }
    }

    /// Run the action against a row.
    pub fn invoke(&self, row: &Record) {
        (self.handler)(row)
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A generic record table.
pub struct DataTable {
    columns: Vec<Column>,
    items_per_page: usize,
    on_row_select: Option<RowCallback>,
    row_actions: Option<RowActionsFn>,
    state: TableState,
    /// Page count of the most recent render, bounds `next_page`.
    total_pages: usize,
}

impl DataTable {
    /// Create a table over the given columns with default paging.
    pub fn new(columns: Vec<Column>) -> Self {
        if columns.is_empty() {
            warn!("data table created without columns");
        }
        Self {
            columns,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            on_row_select: None,
            row_actions: None,
            state: TableState::new(),
            total_pages: 1,
        }
    }

    /// Set the page size. Zero is raised to one.
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        if items_per_page == 0 {
            warn!("items_per_page must be positive, using 1");
        }
        self.items_per_page = items_per_page.max(1);
        self
    }

    /// Set the row activation callback.
    pub fn on_row_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Record) + Send + Sync + 'static,
    {
        self.on_row_select = Some(Arc::new(callback));
        self
    }

    /// Set the per-row actions producer.
    pub fn row_actions<F>(mut self, actions: F) -> Self
    where
        F: Fn(&Record) -> Vec<RowAction> + Send + Sync + 'static,
    {
        self.row_actions = Some(Arc::new(actions));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn page_size(&self) -> usize {
        self.items_per_page
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.state.sort()
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Handle a click on a column header.
    ///
    /// Returns `false` when the column is unknown or not sortable.
    pub fn click_header(&mut self, key: &str) -> bool {
        self.state.toggle_sort(&self.columns, key).is_some()
    }

    /// Handle a click on a numbered page button.
    ///
    /// May be called before the first render; the next render pulls the
    /// page back into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.go_to_page(page);
    }

    /// Handle Next. Does nothing on the last page.
    pub fn next_page(&mut self) -> bool {
        self.state.next_page(self.total_pages)
    }

    /// Handle Previous. Does nothing on the first page.
    pub fn prev_page(&mut self) -> bool {
        self.state.prev_page()
    }

    /// Activate the row at `index` of the current page.
    ///
    /// Invokes the row select callback and returns the row, or `None` when
    /// the index is outside the page.
    pub fn select_row<'a>(
        &self,
        rows: &'a [Record],
        search_term: &str,
        index: usize,
    ) -> Option<&'a Record> {
        let row = self.page_rows(rows, search_term).into_iter().nth(index)?;
        if let Some(callback) = &self.on_row_select {
            debug!("row selected: {:?}", row.key());
            callback(row);
        }
        Some(row)
    }

    /// Trigger the action `action_id` on the row at `index` of the current page.
    ///
    /// Returns `false` when there is no such row or action.
    pub fn trigger_action(
        &self,
        rows: &[Record],
        search_term: &str,
        index: usize,
        action_id: &str,
    ) -> bool {
        let Some(actions) = &self.row_actions else {
            return false;
        };
        let Some(row) = self.page_rows(rows, search_term).into_iter().nth(index) else {
            return false;
        };
        match actions(row).into_iter().find(|a| a.id == action_id) {
            Some(action) => {
                debug!("row action '{}' on {:?}", action_id, row.key());
                action.invoke(row);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Filter then sort `rows` with the current state.
    pub fn visible_rows<'a>(&self, rows: &'a [Record], search_term: &str) -> Vec<&'a Record> {
        let mut visible = filter_rows(rows, search_term);
        if let Some(sort) = self.state.sort() {
            sort_rows(&mut visible, sort);
        }
        visible
    }

    /// Rows of the current page, with the page clamped into range.
    fn page_rows<'a>(&self, rows: &'a [Record], search_term: &str) -> Vec<&'a Record> {
        let visible = self.visible_rows(rows, search_term);
        let total = total_pages(visible.len(), self.items_per_page);
        let page = self.state.current_page().clamp(1, total);
        let range = page_range(page, self.items_per_page, visible.len());
        visible[range].to_vec()
    }

    /// Run filter, sort and pagination and produce a frame.
    ///
    /// The current page is pulled back into range when the filtered set
    /// shrank below it.
    pub fn render(&mut self, rows: &[Record], search_term: &str) -> TableView {
        let visible = self.visible_rows(rows, search_term);
        let filtered_count = visible.len();
        let total = total_pages(filtered_count, self.items_per_page);
        self.total_pages = total;
        self.state.clamp_page(total);

        let current_page = self.state.current_page();
        let range = page_range(current_page, self.items_per_page, filtered_count);
        let page = &visible[range.clone()];

        let body = if page.is_empty() {
            TableBody::Empty {
                colspan: self.columns.len() + usize::from(self.row_actions.is_some()),
            }
        } else {
            TableBody::Rows(
                page.iter()
                    .enumerate()
                    .map(|(offset, row)| self.render_row(row, range.start + offset))
                    .collect(),
            )
        };

        TableView {
            headers: self.headers(),
            has_actions: self.row_actions.is_some(),
            body,
            pagination: Pagination::new(current_page, self.items_per_page, filtered_count),
            current_page,
            total_pages: total,
            filtered_count,
        }
    }

    fn headers(&self) -> Vec<HeaderCell> {
        let sort = self.state.sort();
        self.columns
            .iter()
            .map(|column| {
                let indicator = column.sortable.then(|| match sort {
                    Some(s) if s.field == column.key => SortIndicator::from(s.direction),
                    _ => SortIndicator::Unsorted,
                });
                HeaderCell {
                    key: column.key.clone(),
                    label: column.label.clone(),
                    sortable: column.sortable,
                    align: column.align,
                    indicator,
                }
            })
            .collect()
    }

    fn render_row(&self, row: &Record, position: usize) -> RenderedRow {
        let actions = match &self.row_actions {
            Some(actions) => actions(row)
                .into_iter()
                .map(|a| ActionView {
                    id: a.id,
                    label: a.label,
                })
                .collect(),
            None => Vec::new(),
        };
        RenderedRow {
            key: row.key().unwrap_or_else(|| position.to_string()),
            cells: self.columns.iter().map(|c| c.cell(row)).collect(),
            actions,
        }
    }
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("items_per_page", &self.items_per_page)
            .field("state", &self.state)
            .field("total_pages", &self.total_pages)
            .finish_non_exhaustive()
    }
}
