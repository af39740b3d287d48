use std::fmt::Write;

use comrak::{Options, markdown_to_html};

use crate::excerpt::Excerpt;
use crate::vault::NoteRef;
use crate::view::{CellState, ComparisonTable, TableLayout};

pub const LOADING_TEXT: &str = "loading...";
pub const FILE_NOT_FOUND_TEXT: &str = "(no file found)";
pub const READ_ERROR_TEXT: &str = "(read error)";

/// Render the comparison table as an HTML fragment.
///
/// `today` is the `MM-DD` row to highlight. Each excerpt is rendered from
/// markdown; placeholders stand in for cells that have no content.
pub fn render_html<F: NoteRef>(
    table: &ComparisonTable<F>,
    layout: &TableLayout,
    today: Option<&str>,
) -> String {
    let options = Options::default();
    let mut out = String::new();

    let _ = writeln!(out, r#"<div class="table-wrapper">"#);
    let _ = writeln!(
        out,
        r#"<table class="yearly-diary-table" style="min-width: {}px">"#,
        layout.min_table_width()
    );

    out.push_str("<thead><tr><th class=\"th-day\">day</th>");
    for year in table.years() {
        let _ = write!(out, r#"<th class="th-year">{}</th>"#, escape_html(year));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for (row, day) in table.days().iter().enumerate() {
        let day_cls = if today == Some(day.as_str()) {
            "td-day today-highlight"
        } else {
            "td-day"
        };
        let _ = write!(out, r#"<tr><td class="{day_cls}">{}</td>"#, escape_html(day));

        for cell in table.row(row).unwrap_or_default() {
            render_cell(&mut out, cell, &options);
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</div>\n");
    out
}

fn render_cell<F: NoteRef>(out: &mut String, cell: &CellState<F>, options: &Options) {
    let Some(note) = cell.note() else {
        out.push_str(r#"<td class="td-year" title="no note"></td>"#);
        return;
    };

    let _ = write!(
        out,
        r#"<td class="td-year clickable-diary-cell" title="open note" data-path="{}">"#,
        escape_html(note.full_path())
    );
    match cell {
        CellState::NoNote => {}
        CellState::Loading { .. } => out.push_str(LOADING_TEXT),
        CellState::FileNotFound { .. } => out.push_str(FILE_NOT_FOUND_TEXT),
        CellState::ReadError { .. } => out.push_str(READ_ERROR_TEXT),
        CellState::Loaded { excerpt, .. } => {
            out.push_str(r#"<span class="open-note-icon" title="open note">📄</span>"#);
            match excerpt {
                Excerpt::Text(text) => out.push_str(&markdown_to_html(text, options)),
                Excerpt::Empty => out.push_str("<span></span>"),
                Excerpt::NotFound => {}
            }
        }
    }
    out.push_str("</td>");
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
