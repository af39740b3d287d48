//! Year x date lookup table of daily notes.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use super::calendar::year_dates;
use crate::vault::NoteRef;

static BASENAME_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-\d{2}-\d{2}$").unwrap());

static PATH_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-\d{2}-\d{2}\.md$").unwrap());

/// Dense mapping `year -> YYYY-MM-DD -> Option<note>`.
///
/// Every year present has an entry for each day of that year, whether or
/// not a note exists for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryIndex<F> {
    years: BTreeMap<String, BTreeMap<String, Option<F>>>,
}

impl<F> Default for DiaryIndex<F> {
    fn default() -> Self {
        Self { years: BTreeMap::new() }
    }
}

impl<F> DiaryIndex<F> {
    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(String::as_str)
    }

    /// All dates of one year in calendar order.
    pub fn dates(&self, year: &str) -> Option<&BTreeMap<String, Option<F>>> {
        self.years.get(year)
    }

    /// The note for `date_key` (`YYYY-MM-DD`), if one exists.
    pub fn note(&self, date_key: &str) -> Option<&F> {
        let year = date_key.get(..4)?;
        self.years.get(year)?.get(date_key)?.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Number of dates that have a note.
    pub fn note_count(&self) -> usize {
        self.years.values().flat_map(|d| d.values()).filter(|f| f.is_some()).count()
    }
}

/// Which year a file belongs to, if any.
///
/// A date-shaped base name is authoritative; the path's trailing component
/// is only consulted when the base name does not match.
pub fn classify_year<F: NoteRef>(file: &F) -> Option<String> {
    BASENAME_DATE_RE
        .captures(file.base_name())
        .or_else(|| PATH_DATE_RE.captures(file.full_path()))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build the dense index from the candidate files.
///
/// When several files share a base name the first one in input order is
/// recorded.
pub fn build_index<F: NoteRef + Clone>(files: &[F]) -> DiaryIndex<F> {
    let years: BTreeSet<String> = files.iter().filter_map(classify_year).collect();

    let mut by_base_name: HashMap<&str, &F> = HashMap::with_capacity(files.len());
    for file in files {
        by_base_name.entry(file.base_name()).or_insert(file);
    }

    let mut index = DiaryIndex::default();
    for year in years {
        let Ok(year_num) = year.parse::<i32>() else {
            continue;
        };

        let dates = year_dates(year_num)
            .into_iter()
            .map(|d| {
                let key = format!("{year}-{:02}-{:02}", d.month(), d.day());
                let note = by_base_name.get(key.as_str()).map(|f| (*f).clone());
                (key, note)
            })
            .collect();

        index.years.insert(year, dates);
    }

    tracing::debug!(
        "indexed {} notes across {} years from {} candidates",
        index.note_count(),
        index.year_count(),
        files.len()
    );
    index
}
