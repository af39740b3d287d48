//! Side-by-side view of one calendar day across years.

use chrono::{Local, NaiveDate};
use color_eyre::eyre::{Result, bail};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tabled::builder::Builder;
use tabled::settings::{Style, Width, object::Columns};
use yearly_diary_core::diary::{calendar_days, day_key};
use yearly_diary_core::excerpt::Excerpt;
use yearly_diary_core::render::{
    FILE_NOT_FOUND_TEXT, LOADING_TEXT, READ_ERROR_TEXT, render_html,
};
use yearly_diary_core::vault::NoteFile;
use yearly_diary_core::view::{CellState, ComparisonTable, ComparisonView, VaultReader};

use crate::CompareArgs;

/// Rough pixel width of one terminal column, to map the configured width.
const PIXELS_PER_CHAR: f64 = 8.0;

#[derive(Serialize)]
struct CompareOutput<'a> {
    day: String,
    years: &'a [String],
    rows: Vec<RowOutput<'a>>,
}

#[derive(Serialize)]
struct RowOutput<'a> {
    day: &'a str,
    cells: &'a [CellState<NoteFile>],
}

pub async fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    args: CompareArgs,
) -> Result<()> {
    let cfg = super::load_config(config, profile);
    let day = resolve_day(args.date.as_deref())?;

    let mut settings = cfg.comparator.clone();
    if let Some(ref heading) = args.heading {
        settings = settings.with_heading_keyword(heading);
    }

    let (root, files) = super::daily_notes(&cfg);
    let mut view = ComparisonView::new(settings);
    view.render(&files, Arc::new(VaultReader::new(&root)));
    view.settle().await;

    let Some(table) = view.table() else {
        return Ok(());
    };

    if args.html {
        print!("{}", render_html(table, &view.layout(), Some(&day)));
        return Ok(());
    }

    if table.years().is_empty() {
        println!("No daily notes found.");
        return Ok(());
    }

    let rows = visible_rows(table, &day, args.days, args.all);

    if args.json {
        let output = CompareOutput {
            day: day.clone(),
            years: table.years(),
            rows: rows
                .iter()
                .filter_map(|&r| {
                    Some(RowOutput { day: &table.days()[r], cells: table.row(r)? })
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut builder = Builder::default();
    let mut header = vec!["Day".to_string()];
    header.extend(table.years().iter().cloned());
    builder.push_record(header);

    for r in rows {
        let label = &table.days()[r];
        let mut record = vec![if *label == day { format!("> {label}") } else { label.clone() }];
        record.extend(table.row(r).unwrap_or_default().iter().map(cell_text));
        builder.push_record(record);
    }

    let width = (view.settings().column_width / PIXELS_PER_CHAR).round().max(8.0) as usize;
    let mut out = builder.build();
    out.with(Style::rounded());
    out.modify(Columns::new(1..), Width::wrap(width));
    println!("{out}");

    Ok(())
}

/// `MM-DD` row to center on.
fn resolve_day(date: Option<&str>) -> Result<String> {
    let Some(date) = date else {
        return Ok(day_key(Local::now().date_naive()));
    };

    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(day_key(d));
    }
    if calendar_days().iter().any(|d| d == date) {
        return Ok(date.to_string());
    }
    bail!("invalid date '{date}', expected YYYY-MM-DD or MM-DD")
}

/// Row indices around `day`, or every row when `all` is set.
fn visible_rows<F>(table: &ComparisonTable<F>, day: &str, around: usize, all: bool) -> Vec<usize> {
    let total = table.days().len();
    if all {
        return (0..total).collect();
    }
    let center = table.row_of(day).unwrap_or(0);
    let start = center.saturating_sub(around);
    let end = center.saturating_add(around).min(total.saturating_sub(1));
    (start..=end).collect()
}

fn cell_text(cell: &CellState<NoteFile>) -> String {
    match cell {
        CellState::NoNote => String::new(),
        CellState::Loading { .. } => LOADING_TEXT.to_string(),
        CellState::FileNotFound { .. } => FILE_NOT_FOUND_TEXT.to_string(),
        CellState::ReadError { .. } => READ_ERROR_TEXT.to_string(),
        CellState::Loaded { excerpt, .. } => match excerpt {
            Excerpt::Text(t) => t.clone(),
            Excerpt::Empty => String::new(),
            Excerpt::NotFound => "(no summary)".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yearly_diary_core::diary::build_index;

    #[test]
    fn test_resolve_day_formats() {
        assert_eq!(resolve_day(Some("2021-03-05")).unwrap(), "03-05");
        assert_eq!(resolve_day(Some("02-29")).unwrap(), "02-29");
        assert!(resolve_day(Some("13-01")).is_err());
        assert!(resolve_day(Some("yesterday")).is_err());
    }

    #[test]
    fn test_visible_rows_window() {
        let files = vec![NoteFile::new("2023-01-01.md")];
        let table = ComparisonTable::from_index(&build_index(&files));

        assert_eq!(visible_rows(&table, "01-03", 2, false), vec![0, 1, 2, 3, 4]);
        // clamped at the start of the year
        assert_eq!(visible_rows(&table, "01-01", 2, false), vec![0, 1, 2]);
        // clamped at the end of the year
        assert_eq!(visible_rows(&table, "12-31", 1, false), vec![364, 365]);
        assert_eq!(visible_rows(&table, "01-01", 2, true).len(), 366);
        // a huge window covers the whole year
        assert_eq!(visible_rows(&table, "07-14", usize::MAX, false).len(), 366);
    }
}
