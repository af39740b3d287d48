//! The day x year grid shown to the user.

use serde::Serialize;

use crate::diary::{DiaryIndex, calendar_days};

use super::types::{CellOutcome, CellState};

/// Rows are the 366 `MM-DD` days, columns the indexed years in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable<F> {
    years: Vec<String>,
    days: Vec<String>,
    cells: Vec<Vec<CellState<F>>>,
}

impl<F: Clone> ComparisonTable<F> {
    /// Lay out the index; every existing note starts out `Loading`.
    ///
    /// Feb 29 of a non-leap year is not in the index and shows as `NoNote`.
    pub fn from_index(index: &DiaryIndex<F>) -> Self {
        let years: Vec<String> = index.years().map(str::to_string).collect();
        let days = calendar_days();

        let cells = days
            .iter()
            .map(|mmdd| {
                years
                    .iter()
                    .map(|year| match index.note(&format!("{year}-{mmdd}")) {
                        Some(note) => CellState::Loading { note: note.clone() },
                        None => CellState::NoNote,
                    })
                    .collect()
            })
            .collect();

        Self { years, days, cells }
    }
}

impl<F> ComparisonTable<F> {
    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn row(&self, row: usize) -> Option<&[CellState<F>]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellState<F>> {
        self.cells.get(row)?.get(column)
    }

    /// Row index of an `MM-DD` day.
    pub fn row_of(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    /// Positions of every cell still waiting for its content.
    pub fn loading_cells(&self) -> impl Iterator<Item = (usize, usize, &F)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| match cell {
                CellState::Loading { note } => Some((r, c, note)),
                _ => None,
            })
        })
    }

    pub fn pending(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_loading()).count()
    }

    /// Settle a loading cell. Returns false if the cell is missing or already settled.
    pub fn resolve(&mut self, row: usize, column: usize, outcome: CellOutcome) -> bool {
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(column)) else {
            return false;
        };
        let note = match std::mem::replace(cell, CellState::NoNote) {
            CellState::Loading { note } => note,
            settled => {
                *cell = settled;
                return false;
            }
        };
        *cell = match outcome {
            CellOutcome::Loaded(excerpt) => CellState::Loaded { note, excerpt },
            CellOutcome::FileNotFound => CellState::FileNotFound { note },
            CellOutcome::ReadError(message) => CellState::ReadError { note, message },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::build_index;
    use crate::excerpt::Excerpt;
    use crate::vault::NoteFile;

    fn table(paths: &[&str]) -> ComparisonTable<NoteFile> {
        let files: Vec<_> = paths.iter().copied().map(NoteFile::new).collect();
        ComparisonTable::from_index(&build_index(&files))
    }

    #[test]
    fn test_grid_shape() {
        let t = table(&["2023-03-01.md", "2024-03-01.md"]);
        assert_eq!(t.years(), ["2023", "2024"]);
        assert_eq!(t.days().len(), 366);
        assert_eq!(t.pending(), 2);

        let row = t.row_of("03-01").unwrap();
        assert!(t.cell(row, 0).unwrap().is_loading());
        assert!(t.cell(row, 1).unwrap().is_loading());
    }

    #[test]
    fn test_leap_day_of_common_year_is_no_note() {
        let t = table(&["2023-01-01.md", "2024-02-29.md"]);
        let row = t.row_of("02-29").unwrap();
        assert_eq!(t.cell(row, 0), Some(&CellState::NoNote));
        assert!(t.cell(row, 1).unwrap().is_loading());
    }

    #[test]
    fn test_resolve_only_once() {
        let mut t = table(&["2023-01-01.md"]);
        let outcome = CellOutcome::Loaded(Excerpt::Text("hi".into()));

        assert!(t.resolve(0, 0, outcome.clone()));
        assert!(!t.resolve(0, 0, CellOutcome::FileNotFound));
        assert_eq!(
            t.cell(0, 0),
            Some(&CellState::Loaded {
                note: NoteFile::new("2023-01-01.md"),
                excerpt: Excerpt::Text("hi".into()),
            })
        );
        assert_eq!(t.pending(), 0);
    }

    #[test]
    fn test_resolve_no_note_cell_rejected() {
        let mut t = table(&["2023-01-01.md"]);
        assert!(!t.resolve(1, 0, CellOutcome::FileNotFound));
        assert!(!t.resolve(999, 0, CellOutcome::FileNotFound));
    }
}
