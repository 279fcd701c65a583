//! Plain-text drawing of table frames.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crm_lib::model::Record;
use crm_lib::table::ACTIONS_LABEL;
use crm_lib::table::Alignment;
use crm_lib::table::EMPTY_MESSAGE;
use crm_lib::table::HeaderCell;
use crm_lib::table::Pagination;
use crm_lib::table::RenderedRow;
use crm_lib::table::TableView;

const GAP: &str = "  ";

/// Cells wider than this are cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 40;

fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

fn pad(s: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(s.width());
    match align {
        Alignment::Left => format!("{}{}", s, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), s),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
        }
    }
}

fn header_text(header: &HeaderCell) -> String {
    match header.indicator {
        Some(indicator) => format!("{} {}", header.label, indicator.symbol()),
        None => header.label.clone(),
    }
}

fn actions_text(row: &RenderedRow) -> String {
    row.actions
        .iter()
        .map(|a| format!("[{}]", a.label))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_line(cells: &[String], widths: &[usize], aligns: &[Alignment]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), &align)| pad(cell, width, align))
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

/// Draw a frame: header, separator, body and pagination footer.
pub fn render_table(view: &TableView) -> String {
    let mut header: Vec<String> = view.headers.iter().map(header_text).collect();
    let mut aligns: Vec<Alignment> = view.headers.iter().map(|h| h.align).collect();
    if view.has_actions {
        header.push(ACTIONS_LABEL.to_string());
        aligns.push(Alignment::Left);
    }

    let body: Vec<Vec<String>> = view
        .body
        .rows()
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row
                .cells
                .iter()
                .map(|c| truncate(c, MAX_CELL_WIDTH))
                .collect();
            if view.has_actions {
                cells.push(actions_text(row));
            }
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }
    let total_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

    let mut lines = vec![
        join_line(&header, &widths, &aligns),
        "-".repeat(total_width),
    ];
    if view.is_empty() {
        lines.push(
            pad(EMPTY_MESSAGE, total_width, Alignment::Center)
                .trim_end()
                .to_string(),
        );
    } else {
        lines.extend(body.iter().map(|cells| join_line(cells, &widths, &aligns)));
    }

    if let Some(pagination) = &view.pagination {
        lines.push(String::new());
        lines.push(format!(
            "{}    {}",
            pagination.summary(),
            pagination_controls(pagination)
        ));
    }
    lines.join("\n")
}

/// Previous, numbered pages and Next. Disabled buttons are parenthesized,
/// the current page is bracketed.
pub fn pagination_controls(pagination: &Pagination) -> String {
    let button = |label: &str, enabled: bool| {
        if enabled {
            label.to_string()
        } else {
            format!("({})", label)
        }
    };

    let mut parts = vec![button("Previous", pagination.prev_enabled())];
    parts.extend(pagination.page_numbers().into_iter().map(|n| {
        if n == pagination.current_page() {
            format!("[{}]", n)
        } else {
            n.to_string()
        }
    }));
    parts.push(button("Next", pagination.next_enabled()));
    parts.join(" ")
}

/// Every field of a record, one per line, sorted by name.
pub fn render_record(record: &Record) -> String {
    let mut fields: Vec<(&String, String)> = record
        .fields()
        .iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let width = fields.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
    fields
        .into_iter()
        .map(|(name, value)| format!("{}  {}", pad(name, width, Alignment::Left), value))
        .collect::<Vec<_>>()
        .join("\n")
}
