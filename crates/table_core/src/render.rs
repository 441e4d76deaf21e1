//! Projection of the derived view into table rows.
//!
//! Every render produces a complete [`RenderedTable`]; callers replace whatever
//! they showed before with it. The egui viewer, the text printer, and the HTML
//! row printer all consume the same value.

use std::fmt::Write as _;

use shared::domain::{BenchmarkRecord, SortColumn, SortDirection, SortState};

use crate::format::format_fixed2;

pub const COLUMN_COUNT: usize = 4;
pub const NO_RESULTS_MESSAGE: &str = "No results found";
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading benchmark data. Please ensure data.json exists.";
pub const LOADING_MESSAGE: &str = "Loading benchmark data...";

pub const GLYPH_ASC: char = '↑';
pub const GLYPH_DESC: char = '↓';
pub const GLYPH_NEUTRAL: char = '↕';
pub const INACTIVE_GLYPH_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Emphasized,
    Plain,
    Monospace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub text: String,
    pub style: CellStyle,
}

impl RenderedCell {
    fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub cells: [RenderedCell; COLUMN_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Loading,
    NoResults,
    LoadError,
}

/// A single full-width row shown instead of data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub message: String,
}

impl Placeholder {
    pub fn new(kind: PlaceholderKind) -> Self {
        let message = match kind {
            PlaceholderKind::Loading => LOADING_MESSAGE,
            PlaceholderKind::NoResults => NO_RESULTS_MESSAGE,
            PlaceholderKind::LoadError => LOAD_ERROR_MESSAGE,
        };
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == PlaceholderKind::LoadError
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    Placeholder(Placeholder),
}

impl TableBody {
    /// Number of body rows, counting a placeholder as one.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder(_) => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub column: SortColumn,
    pub label: &'static str,
    pub glyph: char,
    pub active: bool,
}

impl HeaderCell {
    pub fn glyph_opacity(&self) -> f32 {
        if self.active {
            1.0
        } else {
            INACTIVE_GLYPH_OPACITY
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
}

/// Header indicators for the active sort descriptor.
pub fn header_cells(state: SortState) -> Vec<HeaderCell> {
    SortColumn::ALL
        .into_iter()
        .map(|column| {
            let active = column == state.column;
            let glyph = match (active, state.direction) {
                (false, _) => GLYPH_NEUTRAL,
                (true, SortDirection::Asc) => GLYPH_ASC,
                (true, SortDirection::Desc) => GLYPH_DESC,
            };
            HeaderCell {
                column,
                label: column.label(),
                glyph,
                active,
            }
        })
        .collect()
}

pub fn render_row(record: &BenchmarkRecord) -> RenderedRow {
    RenderedRow {
        cells: [
            RenderedCell::new(record.model.clone(), CellStyle::Emphasized),
            RenderedCell::new(record.scenario.clone(), CellStyle::Plain),
            RenderedCell::new(
                format_fixed2(record.throughput_tokens_per_sec),
                CellStyle::Monospace,
            ),
            RenderedCell::new(format_fixed2(record.requests_per_sec), CellStyle::Monospace),
        ],
    }
}

/// One row per record, or the "no results" placeholder when `records` is empty.
pub fn render_rows(records: &[&BenchmarkRecord]) -> TableBody {
    if records.is_empty() {
        return TableBody::Placeholder(Placeholder::new(PlaceholderKind::NoResults));
    }
    TableBody::Rows(records.iter().map(|record| render_row(record)).collect())
}

/// `<tr>` markup for a table body, replacing the body's previous content wholesale.
pub fn to_html_rows(body: &TableBody) -> String {
    let mut out = String::new();
    match body {
        TableBody::Placeholder(placeholder) => {
            let style = if placeholder.is_error() {
                "text-align:center; color: red;"
            } else {
                "text-align:center;"
            };
            let _ = writeln!(
                out,
                "<tr><td colspan=\"{COLUMN_COUNT}\" style=\"{style}\">{}</td></tr>",
                escape_html(&placeholder.message)
            );
        }
        TableBody::Rows(rows) => {
            for row in rows {
                out.push_str("<tr>");
                for cell in &row.cells {
                    let style = match cell.style {
                        CellStyle::Emphasized => " style=\"font-weight: 500;\"",
                        CellStyle::Plain => "",
                        CellStyle::Monospace => " style=\"font-family: monospace;\"",
                    };
                    let _ = write!(out, "<td{style}>{}</td>", escape_html(&cell.text));
                }
                out.push_str("</tr>\n");
            }
        }
    }
    out
}

/// Column-aligned plain text, header line first.
pub fn to_text(table: &RenderedTable) -> String {
    let header_texts: Vec<String> = table
        .headers
        .iter()
        .map(|header| format!("{} {}", header.label, header.glyph))
        .collect();

    let mut widths: Vec<usize> = header_texts.iter().map(|h| h.chars().count()).collect();
    if let TableBody::Rows(rows) = &table.body {
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.text.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = header_texts
        .iter()
        .zip(&widths)
        .map(|(text, width)| pad(text, *width, false))
        .collect();
    let _ = writeln!(out, "{}", header_line.join("  ").trim_end());
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));

    match &table.body {
        TableBody::Placeholder(placeholder) => {
            let _ = writeln!(out, "{}", placeholder.message);
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let line: Vec<String> = row
                    .cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, width)| pad(&cell.text, *width, cell.style == CellStyle::Monospace))
                    .collect();
                let _ = writeln!(out, "{}", line.join("  ").trim_end());
            }
        }
    }
    out
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
