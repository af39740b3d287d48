use serde::Serialize;

use crate::excerpt::Excerpt;

/// Width of the `MM-DD` column, in pixels.
pub const DAY_COLUMN_WIDTH: f64 = 56.0;

/// State of one year/day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellState<F> {
    /// No note exists for this date.
    NoNote,
    /// A note exists and its content is being read.
    Loading { note: F },
    /// The note was read and its summary heading examined.
    Loaded { note: F, excerpt: Excerpt },
    /// The note was indexed but had vanished by the time it was read.
    FileNotFound { note: F },
    /// Reading the note failed.
    ReadError { note: F, message: String },
}

impl<F> CellState<F> {
    pub fn note(&self) -> Option<&F> {
        match self {
            CellState::NoNote => None,
            CellState::Loading { note }
            | CellState::Loaded { note, .. }
            | CellState::FileNotFound { note }
            | CellState::ReadError { note, .. } => Some(note),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CellState::Loading { .. })
    }
}

/// How loading a single cell ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellOutcome {
    Loaded(Excerpt),
    FileNotFound,
    ReadError(String),
}

/// Result of one asynchronous cell load, tagged with the pass that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub generation: u64,
    pub row: usize,
    pub column: usize,
    pub outcome: CellOutcome,
}

/// Column geometry of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub day_column_width: f64,
    pub year_column_width: f64,
    pub year_count: usize,
}

impl TableLayout {
    pub fn new(year_column_width: f64, year_count: usize) -> Self {
        Self { day_column_width: DAY_COLUMN_WIDTH, year_column_width, year_count }
    }

    /// Width below which the table starts scrolling horizontally.
    pub fn min_table_width(&self) -> f64 {
        self.day_column_width + self.year_column_width * self.year_count as f64
    }
}
