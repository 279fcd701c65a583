//! Per-table interaction state: current page and sort.

use log::debug;

use super::column::Column;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort field and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: Direction,
}

impl SortState {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Interaction state owned by one table instance.
///
/// `current_page` is 1-based and never below 1. It may exceed the page count
/// of a later render until [`TableState::clamp_page`] runs; the table does
/// that before every slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    current_page: usize,
    sort: Option<SortState>,
}

impl TableState {
    /// Fresh state: first page, unsorted.
    pub fn new() -> Self {
        Self {
            current_page: 1,
            sort: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Returns the active sort field, if any.
    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.field.as_str())
    }

    /// Returns the active direction (`Asc` when unsorted).
    pub fn sort_direction(&self) -> Direction {
        self.sort.as_ref().map(|s| s.direction).unwrap_or_default()
    }

    /// Toggle sort on a header click.
    ///
    /// Clicking the active field flips its direction; clicking another
    /// sortable field makes it active in ascending order. Unknown or
    /// non-sortable keys leave the state untouched and return `None`.
    pub fn toggle_sort(&mut self, columns: &[Column], key: &str) -> Option<&SortState> {
        let sortable = columns.iter().any(|c| c.key == key && c.sortable);
        if !sortable {
            debug!("ignoring sort click on non-sortable column '{}'", key);
            return None;
        }

        let next = match self.sort.take() {
            Some(current) if current.field == key => SortState {
                field: current.field,
                direction: current.direction.flip(),
            },
            _ => SortState::asc(key),
        };
        debug!("sort set to {} {:?}", next.field, next.direction);
        self.sort = Some(next);
        self.sort.as_ref()
    }

    /// Clear sort state.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Jump to a page. Zero becomes 1; the upper bound is applied by
    /// [`TableState::clamp_page`] once the page count is known.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Advance one page unless already on the last one.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page unless already on the first one.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Pull the current page back into range after the result set shrank.
    ///
    /// Returns `true` when the page changed.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.current_page.clamp(1, total_pages.max(1));
        if clamped != self.current_page {
            debug!(
                "clamping page {} to {} of {}",
                self.current_page, clamped, total_pages
            );
            self.current_page = clamped;
            true
        } else {
            false
        }
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}
